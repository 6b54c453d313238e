use crate::query::RequestProp;
use thiserror::Error;

/// Failures produced while loading a schema or resolving queries against it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    SchemaMalformed(String),

    #[error("could not find collection {path}")]
    CollectionNotFound { path: String },

    #[error("the collection has no requests in {path}")]
    CollectionEmpty { path: String },

    #[error("could not find request {prop} {} in {path}", .identifiers.join(","))]
    RequestNotFound {
        prop: RequestProp,
        identifiers: Vec<String>,
        path: String,
    },

    #[error("Search failed:\n{}", join_lines(.0))]
    SearchFailed(Vec<Error>),

    #[error("invalid parameter {0}")]
    InvalidConversionTarget(String),

    #[error("Can't process multiple requests in interactive mode")]
    InteractiveModeViolation,

    #[error("Request cancelled by user")]
    UserCancelled,

    #[error("Can't render form. '{0}' needs to be an array")]
    FormUnsupported(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid schema: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Extra hint printed below the message, when there is one.
    pub fn info(&self) -> Option<&'static str> {
        match self {
            Error::InvalidConversionTarget(_) => {
                Some("The supported parameters are \"curl\", \"httpie\" and \"wget\"")
            }
            Error::SchemaMalformed(_) => {
                Some("A schema needs a \"collections\" array at the top level")
            }
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::UserCancelled)
    }
}

fn join_lines(errors: &[Error]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_not_found_lists_identifiers() {
        let err = Error::RequestNotFound {
            prop: RequestProp::Id,
            identifiers: vec!["a".to_string(), "b".to_string()],
            path: "users.admin".to_string(),
        };
        assert_eq!(err.to_string(), "could not find request id a,b in users.admin");
    }

    #[test]
    fn test_search_failed_joins_every_failure() {
        let err = Error::SearchFailed(vec![
            Error::CollectionNotFound {
                path: "nope".to_string(),
            },
            Error::CollectionEmpty {
                path: "empty".to_string(),
            },
        ]);
        let text = err.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Search failed:");
        assert_eq!(lines[1], "could not find collection nope");
        assert_eq!(lines[2], "the collection has no requests in empty");
    }
}
