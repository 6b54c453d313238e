use crate::env::{build_env, hidden_vars};
use crate::error::{Error, Result};
use crate::expand::{expand_twice, VariableMap};
use crate::schema::{Collection, Schema};
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct StateOptions {
    pub extra_vars: VariableMap,
    pub hide_vars: Vec<String>,
}

/// Everything a command needs, built once from the schema and never changed
/// afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct State {
    pub collection: Vec<Collection>,
    pub env: VariableMap,
    pub env_name: String,
    pub hidden_env_vars: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl State {
    pub fn new(schema: Schema, env_name: &str, options: StateOptions) -> Result<Self> {
        if schema.collections.is_none() {
            return Err(Error::SchemaMalformed(
                "could not find collections in schema".to_string(),
            ));
        }

        let env = build_env(&schema, env_name, &options.extra_vars);
        let hidden_env_vars = hidden_vars(&schema, &options.hide_vars);

        tracing::debug!(
            env = env_name,
            variables = env.len(),
            hidden = hidden_env_vars.len(),
            "environment resolved"
        );

        Ok(Self {
            collection: schema.collections.unwrap_or_default(),
            env,
            env_name: env_name.to_string(),
            hidden_env_vars,
            name: schema.name,
            description: schema.description,
        })
    }

    /// The environment without hidden variables.
    pub fn visible_env(&self) -> VariableMap {
        self.env
            .iter()
            .filter(|(name, _)| !self.hidden_env_vars.contains(name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Human readable rendering of a templated value: hidden variables stay
    /// as placeholders, everything else is expanded twice.
    pub fn preview(&self, value: &str) -> String {
        if value.is_empty() {
            return String::new();
        }
        expand_twice(&self.visible_env(), value)
    }
}
