use super::{flag, shell_quote};
use crate::fetch::{Body, FetchOptions};
use crate::schema::BodyType;
use serde_json::Value;

pub(super) fn arguments(options: &FetchOptions) -> Vec<String> {
    let mut parts = vec!["http".to_string()];

    let form = matches!(options.body, Some(Body::Form(_))) || options.files.is_some();
    if form && options.body_type != Some(BodyType::Json) {
        parts.push("--form".to_string());
    }

    if let Some(output) = &options.output {
        parts.push("--download".to_string());
        if let Some(dest) = output.destination() {
            parts.push(flag("--output", &dest));
        }
    }

    parts.push(options.method().to_string());
    parts.push(shell_quote(&options.url));

    for (name, value) in &options.opts.headers {
        parts.push(shell_quote(&format!("{name}:{value}")));
    }
    for (name, value) in &options.query {
        parts.push(shell_quote(&format!("{name}=={value}")));
    }

    match &options.body {
        Some(Body::Form(fields)) => {
            for (name, value) in fields {
                parts.push(shell_quote(&format!("{name}={value}")));
            }
        }
        Some(Body::Json(Value::Object(map))) => {
            for (name, value) in map {
                let item = match value {
                    Value::String(s) => format!("{name}={s}"),
                    other => format!("{name}:={other}"),
                };
                parts.push(shell_quote(&item));
            }
        }
        Some(Body::Json(other)) => {
            tracing::warn!(body = %other, "httpie items need a JSON object body, skipping");
        }
        None => {}
    }

    if let Some(files) = &options.files {
        for (name, path) in files {
            parts.push(shell_quote(&format!("{name}@{path}")));
        }
    }

    parts
}
