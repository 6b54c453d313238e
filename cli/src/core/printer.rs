use colored::Colorize;
use serde_json::Value;

/// Writes response bodies to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    raw: bool,
    color: bool,
}

impl Printer {
    pub fn new(raw: bool) -> Self {
        Self {
            raw,
            color: colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            raw: false,
            color: false,
        }
    }

    pub fn print(&self, body: &str) {
        println!("{}", self.render(body));
    }

    /// JSON bodies are indented (and coloured when the terminal allows it);
    /// anything else is passed through.
    pub fn render(&self, body: &str) -> String {
        if self.raw {
            return body.to_string();
        }

        match serde_json::from_str::<Value>(body) {
            Ok(value) if self.color => {
                let mut out = String::new();
                paint(&value, 0, &mut out);
                out
            }
            Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
            Err(_) => body.to_string(),
        }
    }
}

fn paint(value: &Value, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent + 1);
    let close = "  ".repeat(indent);

    match value {
        Value::Null => out.push_str(&"null".magenta().to_string()),
        Value::Bool(b) => out.push_str(&b.to_string().magenta().to_string()),
        Value::Number(n) => out.push_str(&n.to_string().magenta().to_string()),
        Value::String(s) => out.push_str(&Value::String(s.clone()).to_string().green().to_string()),
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(items) => {
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                out.push_str(&pad);
                paint(item, indent + 1, out);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&close);
            out.push(']');
        }
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) => {
            out.push_str("{\n");
            for (i, (key, item)) in map.iter().enumerate() {
                out.push_str(&pad);
                out.push_str(&Value::String(key.clone()).to_string().cyan().to_string());
                out.push_str(": ");
                paint(item, indent + 1, out);
                if i + 1 < map.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&close);
            out.push('}');
        }
    }
}
