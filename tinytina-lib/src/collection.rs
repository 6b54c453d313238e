use crate::schema::{Collection, Request};
use serde::Serialize;

/// Nesting limit for tree walks. Schemas are expected to be acyclic and
/// shallow; this only stops runaway nesting.
pub const DEFAULT_MAX_DEPTH: usize = 15;

/// Result of a path lookup: the whole root set for an empty path, a single
/// collection otherwise.
#[derive(Debug, Clone, Copy)]
pub enum CollectionRef<'a> {
    Forest(&'a [Collection]),
    Node(&'a Collection),
}

impl<'a> CollectionRef<'a> {
    /// Requests attached directly to the node. The root set has none.
    pub fn requests(&self) -> &'a [Request] {
        match self {
            CollectionRef::Forest(_) => &[],
            CollectionRef::Node(collection) => &collection.requests,
        }
    }

    pub fn children(&self) -> &'a [Collection] {
        match self {
            CollectionRef::Forest(forest) => forest,
            CollectionRef::Node(collection) => &collection.collections,
        }
    }
}

/// Walks `path` segment by segment against sibling ids. Matching is exact and
/// the first sibling with the id wins.
pub fn get_collection<'a, S: AsRef<str>>(
    forest: &'a [Collection],
    path: &[S],
) -> Option<CollectionRef<'a>> {
    let Some((first, rest)) = path.split_first() else {
        return Some(CollectionRef::Forest(forest));
    };

    let item = forest.iter().find(|c| c.id == first.as_ref())?;
    if rest.is_empty() {
        Some(CollectionRef::Node(item))
    } else {
        get_collection(&item.collections, rest)
    }
}

/// A collection met during a pre-order walk.
#[derive(Debug, Clone, Copy)]
pub struct CollectionEntry<'a> {
    /// 1 for root collections.
    pub depth: usize,
    pub collection: &'a Collection,
    parent: Option<usize>,
}

/// Pre-order list of every collection down to `max_depth` levels.
pub fn walk_collections(forest: &[Collection], max_depth: usize) -> Vec<CollectionEntry<'_>> {
    let mut out = Vec::new();
    walk(forest, 1, max_depth, None, &mut out);
    out
}

fn walk<'a>(
    forest: &'a [Collection],
    depth: usize,
    max_depth: usize,
    parent: Option<usize>,
    out: &mut Vec<CollectionEntry<'a>>,
) {
    if depth > max_depth {
        if !forest.is_empty() {
            tracing::debug!(max_depth, skipped = forest.len(), "collection depth limit reached");
        }
        return;
    }
    for collection in forest {
        let index = out.len();
        out.push(CollectionEntry {
            depth,
            collection,
            parent,
        });
        walk(&collection.collections, depth + 1, max_depth, Some(index), out);
    }
}

/// Dotted id path of the entry at `index` in a `walk_collections` result.
pub fn entry_path(entries: &[CollectionEntry<'_>], index: usize) -> String {
    let mut segments = Vec::new();
    let mut current = Some(index);
    while let Some(i) = current {
        segments.push(entries[i].collection.id.as_str());
        current = entries[i].parent;
    }
    segments.reverse();
    segments.join(".")
}

/// Every request in the tree in pre-order, down to `max_depth` levels.
pub fn flatten_requests(forest: &[Collection], max_depth: usize) -> Vec<&Request> {
    walk_collections(forest, max_depth)
        .into_iter()
        .flat_map(|entry| entry.collection.requests.iter())
        .collect()
}

/// Listing row for a request, labelled with where it sits in the tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestEntry {
    pub depth: usize,
    pub collection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub method: String,
    pub url: String,
}

pub fn list_requests(forest: &[Collection], max_depth: usize) -> Vec<RequestEntry> {
    let entries = walk_collections(forest, max_depth);
    let mut out = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        let path = entry_path(&entries, index);
        for request in &entry.collection.requests {
            out.push(RequestEntry {
                depth: entry.depth,
                collection: path.clone(),
                id: request.id.clone(),
                name: request.name.clone(),
                description: request.description.clone(),
                method: request.method().to_string(),
                url: request.url.clone(),
            });
        }
    }
    out
}
