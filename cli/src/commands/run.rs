use crate::client::runner::dispatch;
use crate::client::ReqwestTransport;
use crate::commands::shared::{self, EnvArgs, QueryArgs, SchemaArgs};
use crate::core::error::CliError;
use crate::core::printer::Printer;
use crate::interactive::{self, TerminalPrompter};
use clap::Args;
use std::sync::Arc;
use tinytina_lib::{
    build_fetch_options, flatten_requests, get_requests, search_requests, Error, FetchOptions,
    Query, Request, State, DEFAULT_MAX_DEPTH,
};

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub env: EnvArgs,

    #[command(flatten)]
    pub query: QueryArgs,

    #[arg(short = 'i', long = "interactive", help = "Edit the request before sending it")]
    pub interactive: bool,

    #[arg(short = 'r', long = "raw-response", help = "Print response bodies as received")]
    pub raw_response: bool,

    #[arg(value_name = "QUERY", help = "Requests to run, as collection.path:id,id")]
    pub queries: Vec<String>,
}

#[derive(Debug, Args)]
pub struct RunAllArgs {
    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub env: EnvArgs,

    #[arg(short = 'r', long = "raw-response", help = "Print response bodies as received")]
    pub raw_response: bool,
}

/// The single request an interactive run works on.
pub fn interactive_target<'a>(state: &'a State, queries: &[Query]) -> Result<&'a Request, Error> {
    if queries.len() != 1 || queries[0].requests.len() > 1 {
        return Err(Error::InteractiveModeViolation);
    }
    match get_requests(&state.collection, &queries[0])?.as_slice() {
        [request] => Ok(*request),
        _ => Err(Error::InteractiveModeViolation),
    }
}

pub async fn execute_run(args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.queries.is_empty() {
        return Err(CliError::EmptyRun.into());
    }

    let queries = args.query.parse_all(&args.queries);
    let state = shared::load_state(&args.schema, &args.env)?;
    let printer = Printer::new(args.raw_response);

    if args.interactive {
        let request = interactive_target(&state, &queries).map_err(CliError::from)?;
        let transport = ReqwestTransport::new().map_err(CliError::from)?;
        let mut prompter = TerminalPrompter::new();
        interactive::run(&state, request, &transport, &mut prompter, printer).await?;
        return Ok(());
    }

    let found = search_requests(&state.collection, &queries).map_err(CliError::from)?;
    let options: Vec<FetchOptions> = found
        .into_iter()
        .flatten()
        .map(|request| build_fetch_options(&state.env, request))
        .collect();

    send_all(options, printer).await
}

pub async fn execute_run_all(args: &RunAllArgs) -> Result<(), Box<dyn std::error::Error>> {
    let state = shared::load_state(&args.schema, &args.env)?;
    let options: Vec<FetchOptions> = flatten_requests(&state.collection, DEFAULT_MAX_DEPTH)
        .into_iter()
        .map(|request| build_fetch_options(&state.env, request))
        .collect();

    send_all(options, Printer::new(args.raw_response)).await
}

/// Prints every response in request order; the first failure becomes the
/// command's error once everything has been printed.
async fn send_all(
    options: Vec<FetchOptions>,
    printer: Printer,
) -> Result<(), Box<dyn std::error::Error>> {
    let transport = Arc::new(ReqwestTransport::new().map_err(CliError::from)?);
    let mut first_error = None;

    for result in dispatch(transport, options).await {
        match result {
            Ok(response) => {
                tracing::debug!(
                    status = response.status,
                    headers = response.headers.len(),
                    "printing response"
                );
                printer.print(&response.body);
            }
            Err(err) => {
                tracing::debug!("request failed: {err}");
                if first_error.is_none() {
                    first_error = Some(err);
                } else {
                    eprintln!("Error: {err}");
                }
            }
        }
    }

    match first_error {
        Some(err) => Err(CliError::from(err).into()),
        None => Ok(()),
    }
}
