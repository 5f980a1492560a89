use std::error::Error;
use std::fmt::Display;
use std::io;
use std::path::PathBuf;

use plotsave_dataset::error::DatasetError;
use plotsave_encode::ExportError;

#[derive(Debug)]
pub(crate) enum CliError {
    Dataset(DatasetError),
    Export(ExportError),
    Config {
        path: PathBuf,
        error: serde_json::Error,
    },
    Io(io::Error),
    Path(String),
}

impl From<DatasetError> for CliError {
    fn from(error: DatasetError) -> Self {
        CliError::Dataset(error)
    }
}

impl From<ExportError> for CliError {
    fn from(error: ExportError) -> Self {
        CliError::Export(error)
    }
}

impl From<io::Error> for CliError {
    fn from(error: io::Error) -> Self {
        CliError::Io(error)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Dataset(error) => write!(f, "{cli_error} {error}"),
            CliError::Export(error) => write!(f, "{cli_error} {error}"),
            CliError::Config { path, error } => write!(
                f,
                "{cli_error} invalid render configuration in `{}`: {error}",
                path.display()
            ),
            CliError::Io(error) => write!(f, "{cli_error} I/O error: {error}"),
            CliError::Path(error) => write!(f, "{cli_error} {error}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::Dataset(error) => Some(error),
            CliError::Export(error) => Some(error),
            CliError::Config { error, .. } => Some(error),
            CliError::Io(error) => Some(error),
            CliError::Path(_) => None,
        }
    }
}
