//! Markdown documentation for a whole schema.

use crate::collection::{entry_path, walk_collections, DEFAULT_MAX_DEPTH};
use crate::convert::{build_command, Syntax};
use crate::fetch::build_fetch_options;
use crate::query::{get_requests, Query};
use crate::schema::Request;
use crate::state::State;
use std::fmt::Write;

pub struct MarkdownOptions<'a> {
    pub syntax: Syntax,
    pub arg_separator: &'a str,
    /// Requests matched by any of these are left out of the document.
    pub exclude: &'a [Query],
}

pub const DEFAULT_MARKDOWN_SEPARATOR: &str = " \\\n  ";

pub fn render(state: &State, options: &MarkdownOptions<'_>) -> String {
    let excluded = excluded_requests(state, options.exclude);
    let mut out = String::new();

    let _ = writeln!(out, "# {}", state.name.as_deref().unwrap_or("API"));
    if let Some(description) = &state.description {
        let _ = writeln!(out, "\n{description}");
    }

    let entries = walk_collections(&state.collection, DEFAULT_MAX_DEPTH);
    for (index, entry) in entries.iter().enumerate() {
        let collection = entry.collection;
        let title = collection.name.as_deref().unwrap_or(&collection.id);
        let _ = writeln!(out, "\n{} {title}", heading(entry.depth + 1));
        let _ = writeln!(out, "\n`{}`", entry_path(&entries, index));
        if let Some(description) = &collection.description {
            let _ = writeln!(out, "\n{description}");
        }

        for request in &collection.requests {
            if excluded.iter().any(|r| std::ptr::eq(*r, request)) {
                continue;
            }
            render_request(&mut out, state, request, entry.depth + 2, options);
        }
    }

    out
}

fn render_request(
    out: &mut String,
    state: &State,
    request: &Request,
    level: usize,
    options: &MarkdownOptions<'_>,
) {
    let title = request
        .name
        .as_deref()
        .or(request.id.as_deref())
        .unwrap_or("request");
    let fetch = build_fetch_options(&state.env, request);

    let _ = writeln!(out, "\n{} {title}", heading(level));
    if let Some(description) = &request.description {
        let _ = writeln!(out, "\n{description}");
    }
    let _ = writeln!(out, "\n`{} {}`", fetch.method(), fetch.url);
    let _ = writeln!(
        out,
        "\n```sh\n{}\n```",
        build_command(options.syntax, &fetch, options.arg_separator)
    );
}

fn heading(level: usize) -> String {
    "#".repeat(level.min(6))
}

fn excluded_requests<'a>(state: &'a State, exclude: &[Query]) -> Vec<&'a Request> {
    let mut out = Vec::new();
    for query in exclude {
        match get_requests(&state.collection, query) {
            Ok(found) => out.extend(found),
            Err(err) => tracing::warn!(query = %query.path(), "exclude matched nothing: {err}"),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::RequestProp;
    use crate::schema::Schema;
    use crate::state::StateOptions;
    use serde_json::json;

    fn state() -> State {
        let schema: Schema = serde_json::from_value(json!({
            "name": "Pets",
            "description": "Pet store",
            "globals": { "host": "http://pets" },
            "collections": [{
                "id": "pets",
                "name": "Pets",
                "description": "All about pets",
                "requests": [
                    { "id": "list", "name": "List pets", "url": "{host}/pets" },
                    { "id": "secret", "url": "{host}/admin" }
                ],
                "collections": [{
                    "id": "toys",
                    "requests": [{ "id": "toy", "url": "{host}/toys", "method": "delete" }]
                }]
            }]
        }))
        .unwrap();
        State::new(schema, "", StateOptions::default()).unwrap()
    }

    #[test]
    fn test_document_layout() {
        let exclude = vec![Query::parse(RequestProp::Id, "pets:secret")];
        let doc = render(
            &state(),
            &MarkdownOptions {
                syntax: Syntax::Curl,
                arg_separator: " ",
                exclude: &exclude,
            },
        );

        assert!(doc.starts_with("# Pets\n\nPet store\n"));
        assert!(doc.contains("\n## Pets\n\n`pets`\n\nAll about pets\n"));
        assert!(doc.contains("\n### List pets\n\n`GET http://pets/pets`\n\n```sh\ncurl http://pets/pets\n```\n"));
        assert!(doc.contains("\n### toys\n\n`pets.toys`\n"));
        assert!(doc.contains("\n#### toy\n"));
        assert!(doc.contains("curl -X DELETE http://pets/toys"));
        assert!(!doc.contains("/admin"));
    }

    #[test]
    fn test_untitled_schema() {
        let schema = Schema::parse(r#"{ "collections": [] }"#).unwrap();
        let state = State::new(schema, "", StateOptions::default()).unwrap();
        let doc = render(
            &state,
            &MarkdownOptions {
                syntax: Syntax::Wget,
                arg_separator: DEFAULT_MARKDOWN_SEPARATOR,
                exclude: &[],
            },
        );
        assert_eq!(doc, "# API\n");
    }
}
