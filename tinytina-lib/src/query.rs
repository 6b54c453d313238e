use crate::collection::get_collection;
use crate::error::{Error, Result};
use crate::schema::{Collection, Request};
use serde::Serialize;
use std::fmt;

/// Request field a query matches its identifiers against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestProp {
    #[default]
    Id,
    Name,
    Description,
}

impl RequestProp {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "description" => Some(Self::Description),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Description => "description",
        }
    }

    fn field<'a>(&self, request: &'a Request) -> Option<&'a str> {
        match self {
            Self::Id => request.id.as_deref(),
            Self::Name => request.name.as_deref(),
            Self::Description => request.description.as_deref(),
        }
    }
}

impl fmt::Display for RequestProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed `collection.path:request,request` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub collection: Vec<String>,
    pub requests: Vec<String>,
    pub request_prop: RequestProp,
}

impl Query {
    pub fn parse(request_prop: RequestProp, token: &str) -> Self {
        let (path, requests) = token.split_once(':').unwrap_or((token, ""));

        Self {
            collection: path.split('.').map(str::to_string).collect(),
            requests: if requests.is_empty() {
                Vec::new()
            } else {
                requests.split(',').map(str::to_string).collect()
            },
            request_prop,
        }
    }

    pub fn path(&self) -> String {
        self.collection.join(".")
    }
}

/// Requests of the collection named by `query`, in document order.
///
/// With no identifiers every request attached directly to the collection is
/// returned; nested collections are not searched.
pub fn get_requests<'a>(forest: &'a [Collection], query: &Query) -> Result<Vec<&'a Request>> {
    let path = query.path();
    let collection = get_collection(forest, &query.collection)
        .ok_or_else(|| Error::CollectionNotFound { path: path.clone() })?;

    let requests = collection.requests();
    if requests.is_empty() {
        return Err(Error::CollectionEmpty { path });
    }

    if query.requests.is_empty() {
        return Ok(requests.iter().collect());
    }

    match query.request_prop {
        RequestProp::Id => query_id(requests, &query.requests, path),
        prop => query_prop(requests, prop, &query.requests, path),
    }
}

fn query_id<'a>(requests: &'a [Request], ids: &[String], path: String) -> Result<Vec<&'a Request>> {
    let mut wanted: Vec<&str> = Vec::with_capacity(ids.len());
    for id in ids {
        if !wanted.contains(&id.as_str()) {
            wanted.push(id.as_str());
        }
    }

    let mut found = Vec::new();
    for request in requests {
        if wanted.is_empty() {
            break;
        }
        let Some(id) = request.id.as_deref() else {
            continue;
        };
        if let Some(pos) = wanted.iter().position(|w| *w == id) {
            wanted.remove(pos);
            found.push(request);
        }
    }

    if wanted.is_empty() {
        Ok(found)
    } else {
        Err(Error::RequestNotFound {
            prop: RequestProp::Id,
            identifiers: wanted.into_iter().map(str::to_string).collect(),
            path,
        })
    }
}

fn query_prop<'a>(
    requests: &'a [Request],
    prop: RequestProp,
    identifiers: &[String],
    path: String,
) -> Result<Vec<&'a Request>> {
    let wanted: Vec<String> = identifiers.iter().map(|s| s.to_lowercase()).collect();
    let mut matched = vec![false; wanted.len()];
    let mut found = Vec::new();

    for request in requests {
        let Some(value) = prop.field(request) else {
            continue;
        };
        let value = value.to_lowercase();
        let mut hit = false;
        for (i, w) in wanted.iter().enumerate() {
            if *w == value {
                matched[i] = true;
                hit = true;
            }
        }
        if hit {
            found.push(request);
        }
    }

    let missing: Vec<String> = identifiers
        .iter()
        .zip(&matched)
        .filter(|(_, hit)| !**hit)
        .map(|(id, _)| id.clone())
        .collect();

    if missing.is_empty() {
        Ok(found)
    } else {
        Err(Error::RequestNotFound {
            prop,
            identifiers: missing,
            path,
        })
    }
}

/// Runs every query, collecting all failures into one report instead of
/// stopping at the first.
pub fn search_requests<'a>(
    forest: &'a [Collection],
    queries: &[Query],
) -> Result<Vec<Vec<&'a Request>>> {
    let mut success = Vec::new();
    let mut failed = Vec::new();

    for query in queries {
        match get_requests(forest, query) {
            Ok(requests) => success.push(requests),
            Err(err) => failed.push(err),
        }
    }

    if failed.is_empty() {
        Ok(success)
    } else {
        Err(Error::SearchFailed(failed))
    }
}
