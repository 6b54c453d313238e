use crate::commands::shared::{self, EnvArgs, QueryArgs, SchemaArgs};
use crate::core::error::CliError;
use clap::Args;
use tinytina_lib::convert::DEFAULT_ARG_SEPARATOR;
use tinytina_lib::{
    build_command, build_fetch_options, flatten_requests, search_requests, Request, State,
    Syntax, DEFAULT_MAX_DEPTH,
};

#[derive(Debug, Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub env: EnvArgs,

    #[command(flatten)]
    pub query: QueryArgs,

    #[arg(
        long = "arg-separator",
        default_value = DEFAULT_ARG_SEPARATOR,
        help = "Text placed between command arguments"
    )]
    pub arg_separator: String,

    #[arg(value_name = "SYNTAX", help = "Target command: curl, httpie or wget")]
    pub syntax: String,

    #[arg(value_name = "QUERY", help = "Requests to convert; every request when empty")]
    pub queries: Vec<String>,
}

/// Commands for the selected requests, separated by blank lines.
pub fn convert(
    state: &State,
    syntax: Syntax,
    requests: &[&Request],
    arg_separator: &str,
) -> String {
    requests
        .iter()
        .map(|request| {
            let options = build_fetch_options(&state.env, request);
            build_command(syntax, &options, arg_separator)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn execute_convert(args: &ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let state = shared::load_state(&args.schema, &args.env)?;

    let requests: Vec<&Request> = if args.queries.is_empty() {
        flatten_requests(&state.collection, DEFAULT_MAX_DEPTH)
    } else {
        let queries = args.query.parse_all(&args.queries);
        search_requests(&state.collection, &queries)
            .map_err(CliError::from)?
            .into_iter()
            .flatten()
            .collect()
    };

    let syntax = Syntax::from_str(&args.syntax).map_err(CliError::from)?;
    println!("{}", convert(&state, syntax, &requests, &args.arg_separator));

    Ok(())
}
