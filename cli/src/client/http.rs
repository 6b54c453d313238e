use crate::client::download;
use indexmap::IndexMap;
use reqwest::multipart;
use std::error::Error;
use std::fmt;
use std::future::Future;
use std::path::Path;
use tinytina_lib::{Body, BodyType, FetchOptions};

#[derive(Debug)]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP Error: {}", self.message)
    }
}

impl Error for HttpError {}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        HttpError {
            message: error.to_string(),
        }
    }
}

impl From<std::io::Error> for HttpError {
    fn from(error: std::io::Error) -> Self {
        HttpError {
            message: error.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: IndexMap<String, String>,
    pub body: String,
}

/// Sends one fully resolved request.
pub trait Transport: Send + Sync + 'static {
    fn send(
        &self,
        options: FetchOptions,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .user_agent(crate::core::version::user_agent())
            .build()?;
        Ok(Self { client })
    }

    async fn build(&self, options: &FetchOptions) -> Result<reqwest::RequestBuilder, HttpError> {
        let method = reqwest::Method::from_bytes(options.method().as_str().as_bytes())
            .map_err(|_| HttpError::new(format!("Invalid HTTP method: {}", options.method())))?;

        let mut builder = self.client.request(method, options.full_url());

        for (key, value) in &options.opts.headers {
            tracing::debug!("Adding header: {key}: {value}");
            builder = builder.header(key, value);
        }

        builder = match (options.body_type, &options.body) {
            (Some(BodyType::Form), body) => builder.multipart(multipart_form(body, options).await?),
            (_, Some(Body::Json(value))) => builder.json(value),
            (_, Some(Body::Form(fields))) => builder.form(fields),
            (_, None) => builder,
        };

        Ok(builder)
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, options: FetchOptions) -> Result<HttpResponse, HttpError> {
        tracing::debug!(
            method = %options.method(),
            url = %options.full_url(),
            "sending request"
        );

        let response = self.build(&options).await?.send().await?;
        let status = response.status().as_u16();

        let mut headers = IndexMap::new();
        for (key, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(key.to_string(), value_str.to_string());
            }
        }
        tracing::debug!(status, url = %options.url, "response received");

        let body = match &options.output {
            Some(output) => download::save(response, output, &options.url).await?,
            None => response.text().await?,
        };

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

async fn multipart_form(
    body: &Option<Body>,
    options: &FetchOptions,
) -> Result<multipart::Form, HttpError> {
    let mut form = multipart::Form::new();

    if let Some(Body::Form(fields)) = body {
        for (name, value) in fields {
            form = form.text(name.clone(), value.clone());
        }
    }

    for (name, path) in options.files.iter().flatten() {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| HttpError::new(format!("Failed to read {path}: {e}")))?;
        let file_name = Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.clone());
        form = form.part(name.clone(), multipart::Part::bytes(bytes).file_name(file_name));
    }

    Ok(form)
}
