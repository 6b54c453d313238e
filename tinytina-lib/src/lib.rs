//! Schema resolution and request building for tinytina.
//!
//! Loads a collection schema, resolves an environment against it and turns
//! requests into fully expanded [`FetchOptions`]. Nothing here touches the
//! network.

pub mod collection;
pub mod convert;
pub mod env;
pub mod error;
pub mod expand;
pub mod fetch;
pub mod form;
pub mod http_method;
pub mod markdown;
pub mod query;
pub mod schema;
pub mod state;

pub use collection::{flatten_requests, get_collection, list_requests, RequestEntry, DEFAULT_MAX_DEPTH};
pub use convert::{build_command, Syntax};
pub use env::{build_env, parse_assignment};
pub use error::{Error, Result};
pub use expand::{expand_str, expand_value, VariableMap};
pub use fetch::{build_fetch_options, Body, FetchOptions, OutputTarget};
pub use form::{build_form, Answers, FieldKind, Form, FormField};
pub use http_method::HttpMethod;
pub use query::{get_requests, search_requests, Query, RequestProp};
pub use schema::{BodyType, Collection, Pair, Request, RequestData, Schema};
pub use state::{State, StateOptions};
