use crate::client::http::HttpError;
use crate::core::error::CliError;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// General/unspecified error
    GeneralError = 1,
    /// Schema could not be read or is missing required parts
    SchemaError = 2,
    /// Invalid command line usage
    ConfigError = 3,
    /// File not found or IO error
    FileError = 4,
    /// Collection or request not found
    NotFoundError = 5,
    /// Network or HTTP error
    NetworkError = 6,
    /// Interrupted by the user
    Cancelled = 130,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&tinytina_lib::Error> for ExitCode {
    fn from(error: &tinytina_lib::Error) -> Self {
        use tinytina_lib::Error;

        match error {
            Error::SchemaMalformed(_) | Error::Json(_) | Error::FormUnsupported(_) => {
                ExitCode::SchemaError
            }
            Error::CollectionNotFound { .. }
            | Error::CollectionEmpty { .. }
            | Error::RequestNotFound { .. }
            | Error::SearchFailed(_) => ExitCode::NotFoundError,
            Error::InvalidConversionTarget(_) | Error::InteractiveModeViolation => {
                ExitCode::ConfigError
            }
            Error::UserCancelled => ExitCode::Cancelled,
            Error::Io(_) => ExitCode::FileError,
        }
    }
}

impl From<&CliError> for ExitCode {
    fn from(error: &CliError) -> Self {
        match error {
            CliError::Core(err) => ExitCode::from(err),
            CliError::Http(_) => ExitCode::NetworkError,
            CliError::Io(_) => ExitCode::FileError,
            CliError::EmptyRun => ExitCode::ConfigError,
        }
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        if let Some(cli_error) = error.downcast_ref::<CliError>() {
            ExitCode::from(cli_error)
        } else if let Some(core_error) = error.downcast_ref::<tinytina_lib::Error>() {
            ExitCode::from(core_error)
        } else if error.downcast_ref::<HttpError>().is_some() {
            ExitCode::NetworkError
        } else if error.downcast_ref::<std::io::Error>().is_some() {
            ExitCode::FileError
        } else {
            ExitCode::GeneralError
        }
    }
}
