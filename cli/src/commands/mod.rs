pub mod convert;
pub mod list;
pub mod markdown;
pub mod run;
pub mod shared;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the requests matched by one or more queries")]
    Run(run::RunArgs),
    #[command(name = "run-all", about = "Run every request in the schema")]
    RunAll(run::RunAllArgs),
    #[command(about = "List the requests in the schema")]
    List(list::ListArgs),
    #[command(
        name = "convert-to",
        about = "Print requests as curl, httpie or wget commands"
    )]
    ConvertTo(convert::ConvertArgs),
    #[command(visible_alias = "md", about = "Document the schema as markdown")]
    Markdown(markdown::MarkdownArgs),
}
