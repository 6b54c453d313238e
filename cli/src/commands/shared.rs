use crate::commands::validators;
use crate::core::error::CliError;
use crate::core::formatter::OutputFormat;
use clap::Args;
use std::path::Path;
use tinytina_lib::{Query, RequestProp, Schema, State, StateOptions, VariableMap};

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct SchemaArgs {
    #[arg(
        short = 's',
        long = "schema",
        env = "TINYTINA_SCHEMA",
        help = "Path to the json schema file",
        value_parser = validators::validate_path_exists
    )]
    pub schema: String,
}

#[derive(Debug, Args)]
pub struct EnvArgs {
    #[arg(
        short = 'e',
        long = "env",
        default_value = "",
        hide_default_value = true,
        help = "Environment to use"
    )]
    pub env: String,

    #[arg(
        short = 'g',
        long = "global",
        value_name = "NAME:VALUE",
        help = "Set or override a variable",
        value_parser = validators::validate_assignment
    )]
    pub global: Vec<(String, String)>,

    #[arg(
        long = "hide",
        value_name = "NAME",
        help = "Hide a variable in interactive previews"
    )]
    pub hide: Vec<String>,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    #[arg(
        short = 'p',
        long = "request-prop",
        default_value = "id",
        help = "Request field queries match against: id, name or description",
        value_parser = validators::validate_request_prop
    )]
    pub request_prop: RequestProp,
}

impl QueryArgs {
    pub fn parse_all(&self, tokens: &[String]) -> Vec<Query> {
        tokens
            .iter()
            .map(|token| Query::parse(self.request_prop, token))
            .collect()
    }
}

pub fn load_schema(args: &SchemaArgs) -> Result<Schema, CliError> {
    tracing::debug!(path = %args.schema, "reading schema");
    Ok(Schema::from_path(Path::new(&args.schema))?)
}

pub fn load_state(schema: &SchemaArgs, env: &EnvArgs) -> Result<State, CliError> {
    let extra_vars: VariableMap = env.global.iter().cloned().collect();
    let options = StateOptions {
        extra_vars,
        hide_vars: env.hide.clone(),
    };
    Ok(State::new(load_schema(schema)?, &env.env, options)?)
}
