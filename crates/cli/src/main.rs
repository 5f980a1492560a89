mod cli;
mod config;
mod error;
mod sink;
mod table;
mod vector;

use std::process;

use clap::Parser;
use cli::Cli;
use cli::Commands;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Table(args) => table::table(args),
        Commands::Vector(args) => vector::vector(args),
    };

    if let Err(error) = result {
        eprintln!("{error}");
        process::exit(1);
    }
}
