use crate::commands::shared::{self, OutputArgs, SchemaArgs};
use crate::core::error::CliError;
use clap::Args;
use tinytina_lib::{get_collection, list_requests, Error, RequestEntry, DEFAULT_MAX_DEPTH};

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[arg(value_name = "PATH", help = "Only list requests under this collection path")]
    pub path: Option<String>,
}

pub fn execute_list(args: &ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let schema = shared::load_schema(&args.schema)?;
    let collections = schema.collections.ok_or_else(|| {
        CliError::from(Error::SchemaMalformed(
            "could not find collections in schema".to_string(),
        ))
    })?;

    let mut entries = list_requests(&collections, DEFAULT_MAX_DEPTH);
    if let Some(path) = args.path.as_deref().filter(|p| !p.is_empty()) {
        let segments: Vec<&str> = path.split('.').collect();
        if get_collection(&collections, &segments).is_none() {
            return Err(CliError::from(Error::CollectionNotFound {
                path: path.to_string(),
            })
            .into());
        }
        entries.retain(|entry| under_path(&entry.collection, path));
    }

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_list(&entries, "No requests found", text_line)
    );

    Ok(())
}

fn under_path(collection: &str, path: &str) -> bool {
    collection == path
        || collection
            .strip_prefix(path)
            .is_some_and(|rest| rest.starts_with('.'))
}

fn text_line(entry: &RequestEntry) -> String {
    let indent = "  ".repeat(entry.depth.saturating_sub(1));
    let id = entry.id.as_deref().unwrap_or("-");
    let label = entry
        .name
        .as_deref()
        .or(entry.description.as_deref())
        .map(|l| format!("  ({l})"))
        .unwrap_or_default();
    format!(
        "{indent}{}:{id}  {} {}{label}",
        entry.collection, entry.method, entry.url
    )
}
