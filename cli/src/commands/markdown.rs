use crate::commands::shared::{self, EnvArgs, QueryArgs, SchemaArgs};
use crate::core::error::CliError;
use clap::Args;
use tinytina_lib::markdown::{self, MarkdownOptions, DEFAULT_MARKDOWN_SEPARATOR};
use tinytina_lib::Syntax;

#[derive(Debug, Args)]
pub struct MarkdownArgs {
    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub env: EnvArgs,

    #[command(flatten)]
    pub query: QueryArgs,

    #[arg(
        long = "example-syntax",
        default_value = "curl",
        help = "Syntax of the examples: curl, httpie or wget"
    )]
    pub example_syntax: String,

    #[arg(
        long = "exclude",
        value_name = "QUERIES",
        help = "Space separated queries of requests to leave out"
    )]
    pub exclude: Option<String>,

    #[arg(
        long = "arg-separator",
        default_value = DEFAULT_MARKDOWN_SEPARATOR,
        hide_default_value = true,
        help = "Text placed between example arguments"
    )]
    pub arg_separator: String,
}

pub fn execute_markdown(args: &MarkdownArgs) -> Result<(), Box<dyn std::error::Error>> {
    let syntax = Syntax::from_str(&args.example_syntax).map_err(CliError::from)?;
    let state = shared::load_state(&args.schema, &args.env)?;

    let tokens: Vec<String> = args
        .exclude
        .as_deref()
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let exclude = args.query.parse_all(&tokens);

    let doc = markdown::render(
        &state,
        &MarkdownOptions {
            syntax,
            arg_separator: &args.arg_separator,
            exclude: &exclude,
        },
    );
    print!("{doc}");

    Ok(())
}
