use super::{flag, shell_quote};
use crate::fetch::{Body, FetchOptions};

pub(super) fn arguments(options: &FetchOptions) -> Vec<String> {
    let mut parts = vec!["wget".to_string()];

    if !options.method().is_get() {
        parts.push(format!("--method={}", options.method()));
    }

    for (name, value) in &options.opts.headers {
        parts.push(format!("--header={}", shell_quote(&format!("{name}: {value}"))));
    }

    match &options.body {
        Some(Body::Json(value)) => {
            let has_content_type = options
                .opts
                .headers
                .keys()
                .any(|key| key.eq_ignore_ascii_case("content-type"));
            if !has_content_type {
                parts.push(format!(
                    "--header={}",
                    shell_quote("Content-Type: application/json")
                ));
            }
            parts.push(format!("--body-data={}", shell_quote(&value.to_string())));
        }
        Some(Body::Form(fields)) => {
            let encoded = serde_urlencoded::to_string(fields).unwrap_or_default();
            parts.push(format!("--body-data={}", shell_quote(&encoded)));
        }
        None => {}
    }

    if let Some(files) = &options.files {
        tracing::warn!(
            files = files.len(),
            url = %options.url,
            "wget cannot send multipart uploads, leaving files out"
        );
    }

    if let Some(output) = &options.output {
        match output.destination() {
            Some(dest) => parts.push(flag("-O", &dest)),
            None => {
                parts.push("--content-disposition".to_string());
                parts.push(flag("-P", &output.path));
            }
        }
    }

    parts.push(shell_quote(&options.full_url()));
    parts
}
