use crate::expand::{expand_map, expand_pairs, expand_str, PairMap, VariableMap};
use crate::http_method::HttpMethod;
use crate::schema::{BodyType, Request, RequestData};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Fully expanded, transport-ready description of one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchOptions {
    pub url: String,
    pub opts: RequestOpts,
    pub query: PairMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<PairMap>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub body_type: Option<BodyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestOpts {
    pub method: HttpMethod,
    pub headers: PairMap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body {
    Form(PairMap),
    Json(Value),
}

/// Where a downloaded body goes. An empty filename is guessed when the
/// response arrives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputTarget {
    pub path: String,
    pub filename: String,
}

impl OutputTarget {
    /// `path/filename` when the filename is known up front.
    pub fn destination(&self) -> Option<String> {
        if self.filename.is_empty() {
            None
        } else {
            Some(Path::new(&self.path).join(&self.filename).display().to_string())
        }
    }
}

impl FetchOptions {
    /// URL with the query map appended as a urlencoded query string.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }

        let qs = serde_urlencoded::to_string(&self.query).unwrap_or_default();
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{separator}{qs}", self.url)
    }

    pub fn method(&self) -> &HttpMethod {
        &self.opts.method
    }
}

/// Expands every templated field of `request` against `env`.
///
/// GET requests never carry a body, files or a body type, even when the
/// schema gives them data.
pub fn build_fetch_options(env: &VariableMap, request: &Request) -> FetchOptions {
    let method = request.method();

    let output = request.output.as_ref().and_then(|output| {
        if output.path.is_empty() {
            return None;
        }
        Some(OutputTarget {
            path: expand_str(env, &output.path),
            filename: expand_str(env, output.filename.as_deref().unwrap_or("")),
        })
    });

    let mut options = FetchOptions {
        url: expand_str(env, &request.url),
        opts: RequestOpts {
            method,
            headers: expand_pairs(env, &request.headers),
        },
        query: expand_pairs(env, &request.query),
        body: None,
        files: None,
        body_type: None,
        output,
    };

    if options.opts.method.is_get() {
        return options;
    }

    let files = request.files.as_ref().map(|files| expand_pairs(env, files));
    let declared = request
        .body_type
        .as_deref()
        .and_then(BodyType::from_str)
        .unwrap_or_default();

    let body_type = match (&request.data, declared) {
        (Some(RequestData::Json(_)), _) => BodyType::Json,
        (_, BodyType::Urlencoded) if files.is_some() => BodyType::Form,
        (_, declared) => declared,
    };

    options.body = request.data.as_ref().map(|data| match data {
        RequestData::Json(map) => Body::Json(Value::Object(expand_map(env, map))),
        RequestData::Pairs(pairs) => {
            let expanded = expand_pairs(env, pairs);
            if body_type == BodyType::Json {
                Body::Json(Value::Object(
                    expanded
                        .into_iter()
                        .map(|(k, v)| (k, Value::String(v)))
                        .collect::<Map<String, Value>>(),
                ))
            } else {
                Body::Form(expanded)
            }
        }
    });
    options.files = files;
    options.body_type = Some(body_type);

    options
}
