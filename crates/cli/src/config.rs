use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use plotsave_encode::RenderConfig;

use crate::cli::VectorArgs;
use crate::error::CliError;

/// Reads the render configuration file, if any, and applies the overrides
/// given on the command line.
pub(crate) fn render_config(args: &VectorArgs) -> Result<RenderConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => read(path)?,
        None => RenderConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(max_points) = args.max_points {
        config.max_points = max_points;
    }
    if let Some(degenerate) = args.degenerate {
        config.degenerate_range = degenerate.into();
    }

    Ok(config)
}

fn read(path: &Path) -> Result<RenderConfig, CliError> {
    debug!("reading the render configuration from `{}`", path.display());

    let reader = BufReader::new(File::open(path)?);
    serde_json::from_reader(reader).map_err(|error| CliError::Config {
        path: path.to_path_buf(),
        error,
    })
}
