use std::env;
use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use plotsave_encode::AxisKind;
use plotsave_encode::DegenerateRangePolicy;
use plotsave_encode::TableOptions;

use crate::error::CliError;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Export the plotted datasets as a delimited text table.
    Table(TableArgs),
    /// Export the plotted datasets as an SVG document.
    Vector(VectorArgs),
}

#[derive(Args)]
pub(crate) struct TableArgs {
    /// Specify the dataset snapshot to export.
    /// The path must exist and it must point to a JSON file.
    #[arg(short, long, value_parser(parse_file))]
    pub(crate) input: PathBuf,

    /// Specify the kind of the x axis, which names the first column.
    /// One of `timestamp`, `index`, `custom` or `currentCustom`.
    #[arg(short, long, value_parser(parse_axis_kind))]
    pub(crate) axis_kind: AxisKind,

    /// Specify the directory where `plot_data.csv` will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,

    /// Quote fields that contain the delimiter, a quote or a line break.
    #[arg(short, long)]
    pub(crate) quote: bool,

    /// Specify the field delimiter.
    #[arg(short, long, default_value = ",", value_parser(parse_delimiter))]
    pub(crate) delimiter: u8,

    /// Specify how timestamps are printed.
    #[arg(short, long, value_enum, default_value_t = TimeFormatArg::Raw)]
    pub(crate) time_format: TimeFormatArg,
}

#[derive(Args)]
pub(crate) struct VectorArgs {
    /// Specify the dataset snapshot to export.
    /// The path must exist and it must point to a JSON file.
    #[arg(short, long, value_parser(parse_file))]
    pub(crate) input: PathBuf,

    /// Specify the directory where `plot_data.svg` will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,

    /// Specify a JSON file with the render configuration.
    /// Missing fields take their default values.
    #[arg(short, long, value_parser(parse_file))]
    pub(crate) config: Option<PathBuf>,

    /// Override the canvas width.
    #[arg(long)]
    pub(crate) width: Option<f64>,

    /// Override the canvas height.
    #[arg(long)]
    pub(crate) height: Option<f64>,

    /// Override the maximum number of points drawn per dataset.
    #[arg(short, long)]
    pub(crate) max_points: Option<usize>,

    /// Override what happens when all points share one coordinate along an axis.
    #[arg(long, value_enum)]
    pub(crate) degenerate: Option<DegenerateArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum TimeFormatArg {
    /// Seconds and nanoseconds since the Unix epoch, e.g. `12.000000500`.
    Raw,
    /// RFC 3339 in UTC, e.g. `1970-01-01T00:00:12.000000500Z`.
    Rfc3339,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum DegenerateArg {
    Reject,
    Expand,
}

impl From<DegenerateArg> for DegenerateRangePolicy {
    fn from(arg: DegenerateArg) -> Self {
        match arg {
            DegenerateArg::Reject => DegenerateRangePolicy::Reject,
            DegenerateArg::Expand => DegenerateRangePolicy::Expand,
        }
    }
}

fn parse_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

fn parse_file(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_file() {
        return Err(format!("The `{}` path must point to a file.", path.display()));
    }

    Ok(path)
}

fn parse_axis_kind(name: &str) -> Result<AxisKind, String> {
    name.parse().map_err(|error| format!("{error}"))
}

fn parse_delimiter(delimiter: &str) -> Result<u8, String> {
    let error = || {
        format!(
            "The `{delimiter}` delimiter must be a single ASCII character other than a quote or a line break."
        )
    };

    let &[byte] = delimiter.as_bytes() else {
        return Err(error());
    };

    let options = TableOptions {
        delimiter: byte,
        ..TableOptions::default()
    };
    options.validate().map_err(|_| error())?;

    Ok(byte)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}
