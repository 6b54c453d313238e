use crate::expand::{expand_str, VariableMap};
use crate::schema::{scalar_to_string, Schema};
use indexmap::IndexMap;
use serde_json::Value;

/// Merges globals, the named environment and command-line variables (later
/// layers win), then expands every value once against the merged map.
///
/// Unknown environment names contribute nothing. A value referencing a
/// variable that itself holds a placeholder resolves one level only.
pub fn build_env(schema: &Schema, env_name: &str, extra_vars: &VariableMap) -> VariableMap {
    let mut merged = VariableMap::new();

    if let Some(globals) = &schema.globals {
        insert_layer(&mut merged, globals);
    }

    if let Some(named) = schema.envs.as_ref().and_then(|envs| envs.get(env_name)) {
        insert_layer(&mut merged, named);
    }

    for (name, value) in extra_vars {
        merged.insert(name.clone(), value.clone());
    }

    merged
        .iter()
        .map(|(name, value)| (name.clone(), expand_str(&merged, value)))
        .collect()
}

fn insert_layer(target: &mut VariableMap, layer: &IndexMap<String, Value>) {
    for (name, value) in layer {
        target.insert(name.clone(), scalar_to_string(value));
    }
}

/// Variables redacted from interactive previews.
pub fn hidden_vars(schema: &Schema, cli_hide: &[String]) -> Vec<String> {
    let mut hidden = schema.hide.clone().unwrap_or_default();
    hidden.extend(cli_hide.iter().cloned());
    hidden
}

/// Splits a `name:value` assignment. The value keeps any further colons;
/// input without a colon is not an assignment.
pub fn parse_assignment(input: &str) -> Option<(String, String)> {
    let (name, value) = input.split_once(':')?;
    Some((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(value: serde_json::Value) -> Schema {
        serde_json::from_value(value).unwrap()
    }

    fn extra(entries: &[(&str, &str)]) -> VariableMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_layer_precedence() {
        let s = schema(json!({
            "globals": { "a": "1" },
            "envs": { "dev": { "a": "2", "b": "3" } },
            "collections": []
        }));

        let env = build_env(&s, "dev", &extra(&[("b", "4")]));
        assert_eq!(env, extra(&[("a", "2"), ("b", "4")]));
    }

    #[test]
    fn test_unknown_env_uses_globals_only() {
        let s = schema(json!({
            "globals": { "a": "1" },
            "envs": { "dev": { "a": "2" } },
            "collections": []
        }));

        let env = build_env(&s, "prod", &VariableMap::new());
        assert_eq!(env.get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_values_expand_against_other_layers() {
        let s = schema(json!({
            "globals": { "url": "{host}/api", "user": "{name}" },
            "envs": { "dev": { "host": "http://localhost" } },
            "collections": []
        }));

        let env = build_env(&s, "dev", &extra(&[("name", "tina")]));
        assert_eq!(env["url"], "http://localhost/api");
        assert_eq!(env["user"], "tina");
    }

    #[test]
    fn test_chains_resolve_one_level() {
        let s = schema(json!({
            "globals": { "a": "{b}", "b": "{c}", "c": "end" },
            "collections": []
        }));

        let env = build_env(&s, "", &VariableMap::new());
        assert_eq!(env["a"], "{c}");
        assert_eq!(env["b"], "end");
    }

    #[test]
    fn test_non_string_globals() {
        let s = schema(json!({
            "globals": { "port": 8080, "debug": false, "none": null },
            "collections": []
        }));

        let env = build_env(&s, "", &VariableMap::new());
        assert_eq!(env["port"], "8080");
        assert_eq!(env["debug"], "false");
        assert_eq!(env["none"], "");
    }

    #[test]
    fn test_hidden_vars_concatenates() {
        let s = schema(json!({ "hide": ["token"], "collections": [] }));
        let hidden = hidden_vars(&s, &["password".to_string()]);
        assert_eq!(hidden, vec!["token".to_string(), "password".to_string()]);
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("token:123"),
            Some(("token".to_string(), "123".to_string()))
        );
        assert_eq!(
            parse_assignment("url:http://localhost:3000"),
            Some(("url".to_string(), "http://localhost:3000".to_string()))
        );
        assert_eq!(parse_assignment("novalue"), None);
    }
}
