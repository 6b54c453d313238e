use clap::Parser;

mod client;
mod commands;
mod core;
mod interactive;

use commands::Commands;
use core::error::CliError;
use core::exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "tinytina")]
#[command(about = "Run, convert and document the HTTP requests described in a json schema.")]
#[command(version = crate::core::version::app_version())]
struct Args {
    #[arg(long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    crate::core::logger::Logger::init(args.debug);

    if let Err(e) = run(args.command).await {
        let exit_code = ExitCode::from(&e);
        if exit_code == ExitCode::Cancelled {
            eprintln!("{e}");
        } else {
            report(e.as_ref());
        }
        std::process::exit(exit_code.code());
    }
}

async fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Run(run_args) => commands::run::execute_run(&run_args).await,
        Commands::RunAll(run_all_args) => commands::run::execute_run_all(&run_all_args).await,
        Commands::List(list_args) => commands::list::execute_list(&list_args),
        Commands::ConvertTo(convert_args) => commands::convert::execute_convert(&convert_args),
        Commands::Markdown(markdown_args) => commands::markdown::execute_markdown(&markdown_args),
    }
}

fn report(error: &(dyn std::error::Error + 'static)) {
    eprintln!("Error: {error}");

    let info = error
        .downcast_ref::<CliError>()
        .and_then(CliError::info)
        .or_else(|| {
            error
                .downcast_ref::<tinytina_lib::Error>()
                .and_then(tinytina_lib::Error::info)
        });
    if let Some(info) = info {
        eprintln!("\nInfo: {info}");
    }

    if crate::core::logger::Logger::is_debug() {
        eprintln!("\n{error:?}");
    }
}
