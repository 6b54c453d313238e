use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    /// Renders `list` as pretty JSON, or one line per item through `line`.
    pub fn format_list<T, F>(&self, list: &[T], empty_msg: &str, line: F) -> String
    where
        T: Serialize,
        F: Fn(&T) -> String,
    {
        match self.engine {
            OutputFormat::Text => {
                if list.is_empty() {
                    return format!("{empty_msg}\n");
                }
                let mut out = String::new();
                for item in list {
                    out.push_str(&line(item));
                    out.push('\n');
                }
                out
            }
            OutputFormat::Json => {
                let mut out =
                    serde_json::to_string_pretty(list).unwrap_or_else(|_| "[]".to_string());
                out.push('\n');
                out
            }
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
