use crate::client::http::HttpError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum CliError {
    Core(tinytina_lib::Error),
    Http(HttpError),
    Io(io::Error),
    EmptyRun,
}

impl CliError {
    /// Hint printed after the message.
    pub fn info(&self) -> Option<&'static str> {
        match self {
            CliError::Core(err) => err.info(),
            CliError::EmptyRun => Some("To run all requests use the \"run-all\" command"),
            CliError::Http(_) | CliError::Io(_) => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, CliError::Core(err) if err.is_cancelled())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Core(err) => write!(f, "{err}"),
            CliError::Http(err) => write!(f, "{err}"),
            CliError::Io(err) => write!(f, "IO error: {err}"),
            CliError::EmptyRun => write!(f, "Empty argument list for \"run\""),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Core(err) => Some(err),
            CliError::Http(err) => Some(err),
            CliError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<tinytina_lib::Error> for CliError {
    fn from(err: tinytina_lib::Error) -> Self {
        CliError::Core(err)
    }
}

impl From<HttpError> for CliError {
    fn from(err: HttpError) -> Self {
        CliError::Http(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_run_has_hint() {
        let err = CliError::EmptyRun;
        assert_eq!(err.to_string(), "Empty argument list for \"run\"");
        assert_eq!(
            err.info(),
            Some("To run all requests use the \"run-all\" command")
        );
    }

    #[test]
    fn test_core_errors_keep_their_message() {
        let err = CliError::from(tinytina_lib::Error::InvalidConversionTarget("x".to_string()));
        assert_eq!(err.to_string(), "invalid parameter x");
        assert!(err.info().is_some());

        let cancelled = CliError::from(tinytina_lib::Error::UserCancelled);
        assert!(cancelled.is_cancelled());
    }
}
