use super::{flag, shell_quote};
use crate::fetch::{Body, FetchOptions};
use crate::schema::BodyType;

pub(super) fn arguments(options: &FetchOptions) -> Vec<String> {
    let mut parts = vec!["curl".to_string()];

    if !options.method().is_get() {
        parts.push(format!("-X {}", options.method()));
    }

    parts.push(shell_quote(&options.full_url()));

    for (name, value) in &options.opts.headers {
        parts.push(flag("-H", &format!("{name}: {value}")));
    }

    match &options.body {
        Some(Body::Json(value)) => {
            if !has_header(options, "content-type") {
                parts.push(flag("-H", "Content-Type: application/json"));
            }
            parts.push(flag("-d", &value.to_string()));
        }
        Some(Body::Form(fields)) => {
            let multipart = options.body_type == Some(BodyType::Form);
            for (name, value) in fields {
                let field = format!("{name}={value}");
                if multipart {
                    parts.push(flag("-F", &field));
                } else {
                    parts.push(flag("--data-urlencode", &field));
                }
            }
        }
        None => {}
    }

    if let Some(files) = &options.files {
        for (name, path) in files {
            parts.push(flag("-F", &format!("{name}=@{path}")));
        }
    }

    if let Some(output) = &options.output {
        match output.destination() {
            Some(dest) => parts.push(flag("-o", &dest)),
            None => {
                parts.push("-OJ".to_string());
                parts.push(flag("--output-dir", &output.path));
            }
        }
    }

    parts
}

fn has_header(options: &FetchOptions, name: &str) -> bool {
    options
        .opts
        .headers
        .keys()
        .any(|key| key.eq_ignore_ascii_case(name))
}
