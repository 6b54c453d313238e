use crate::client::http::HttpError;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;
use tinytina_lib::OutputTarget;
use tokio::io::AsyncWriteExt;

lazy_static! {
    static ref FILENAME_REGEX: Regex = Regex::new(r"(filename=|filename\*='')(.*)$").unwrap();
}

/// Name for a download without a configured filename: whatever
/// `Content-Disposition` offers, else the last URL segment plus a timestamp.
pub fn guess_filename(content_disposition: Option<&str>, url: &str, now_ms: i64) -> String {
    if let Some(caps) = content_disposition.and_then(|cd| FILENAME_REGEX.captures(cd)) {
        let name = caps[2].trim().trim_matches('"');
        // Only the last component, a header must not pick the directory.
        if let Some(base) = Path::new(name).file_name().and_then(|n| n.to_str()) {
            return base.to_string();
        }
        tracing::debug!(name, "ignoring content-disposition filename");
    }

    let segment = url.rsplit('/').next().unwrap_or_default();
    format!("{segment}_{now_ms}")
}

/// Streams the response body to the output target, returning the message
/// shown in place of the body.
pub async fn save(
    mut response: reqwest::Response,
    output: &OutputTarget,
    url: &str,
) -> Result<String, HttpError> {
    let filename = if output.filename.is_empty() {
        let content_disposition = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok());
        guess_filename(content_disposition, url, chrono::Utc::now().timestamp_millis())
    } else {
        output.filename.clone()
    };

    let dest = Path::new(&output.path).join(&filename);
    tracing::debug!(dest = %dest.display(), "writing download");

    let mut file = tokio::fs::File::create(&dest)
        .await
        .map_err(|e| HttpError::new(format!("Failed to create {}: {e}", dest.display())))?;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
    }
    file.flush().await?;

    Ok(format!("file downloaded at {}", dest.display()))
}
