//! Command-line equivalents of resolved requests.
//!
//! Each converter produces a list of arguments, a flag and its value kept
//! together, which is then joined with the caller's separator.

mod curl;
mod httpie;
mod wget;

use crate::error::{Error, Result};
use crate::fetch::FetchOptions;
use serde::Serialize;
use std::fmt;

pub const DEFAULT_ARG_SEPARATOR: &str = " ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    #[default]
    Curl,
    Httpie,
    Wget,
}

impl Syntax {
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "curl" => Ok(Self::Curl),
            "httpie" => Ok(Self::Httpie),
            "wget" => Ok(Self::Wget),
            other => Err(Error::InvalidConversionTarget(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Curl => "curl",
            Self::Httpie => "httpie",
            Self::Wget => "wget",
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn build_command(syntax: Syntax, options: &FetchOptions, arg_separator: &str) -> String {
    let args = match syntax {
        Syntax::Curl => curl::arguments(options),
        Syntax::Httpie => httpie::arguments(options),
        Syntax::Wget => wget::arguments(options),
    };
    args.join(arg_separator)
}

/// Quotes `s` for a POSIX shell, leaving it bare when nothing in it is special.
pub fn shell_quote(s: &str) -> String {
    let needs_quoting = s.chars().any(|c| {
        matches!(
            c,
            ' ' | '\'' | '"' | '\\' | '$' | '`' | '!' | '*' | '?' | '[' | ']' | '{' | '}' | '('
                | ')' | '<' | '>' | '|' | '&' | ';' | '#' | '~' | '\n' | '\t'
        )
    });

    if !needs_quoting && !s.is_empty() {
        return s.to_string();
    }

    format!("'{}'", s.replace('\'', "'\"'\"'"))
}

/// `flag value` with the value quoted.
fn flag(name: &str, value: &str) -> String {
    format!("{name} {}", shell_quote(value))
}
