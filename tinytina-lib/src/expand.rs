//! `{placeholder}` substitution.
//!
//! Substitution is a single left-to-right pass: text coming out of a variable
//! is never scanned again. Placeholders without a matching variable are kept
//! as they are.

use crate::schema::Pair;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::{Map, Value};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{([^{}]+)\}").unwrap();
}

/// Flat, ordered `name -> value` variable map.
pub type VariableMap = IndexMap<String, String>;

/// Ordered map produced from a pair list, later names overwrite earlier ones.
pub type PairMap = IndexMap<String, String>;

pub fn expand_str(vars: &VariableMap, template: &str) -> String {
    if !template.contains('{') {
        return template.to_string();
    }

    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match vars.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Runs the expander twice, resolving one level of variables that point at
/// other variables. Only meant for previews.
pub fn expand_twice(vars: &VariableMap, template: &str) -> String {
    expand_str(vars, &expand_str(vars, template))
}

pub fn expand_value(vars: &VariableMap, value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(expand_str(vars, s)),
        Value::Array(items) => Value::Array(items.iter().map(|v| expand_value(vars, v)).collect()),
        Value::Object(map) => Value::Object(expand_map(vars, map)),
        other => other.clone(),
    }
}

pub fn expand_map(vars: &VariableMap, map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (key.clone(), expand_value(vars, value)))
        .collect()
}

/// Expands pair values and collapses them into an ordered map.
pub fn expand_pairs(vars: &VariableMap, pairs: &[Pair]) -> PairMap {
    let mut out = PairMap::with_capacity(pairs.len());
    for pair in pairs {
        out.insert(pair.name.clone(), expand_str(vars, &pair.value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vars(entries: &[(&str, &str)]) -> VariableMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_plain_strings_are_unchanged() {
        let v = vars(&[("host", "example.com")]);
        assert_eq!(expand_str(&v, "no placeholders here"), "no placeholders here");
        assert_eq!(expand_str(&v, ""), "");
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let v = vars(&[("h", "host.com"), ("api-key", "123")]);
        assert_eq!(expand_str(&v, "http://{h}/a/{h}"), "http://host.com/a/host.com");
        assert_eq!(expand_str(&v, "Bearer {api-key}"), "Bearer 123");
    }

    #[test]
    fn test_unknown_placeholders_stay_literal() {
        let v = vars(&[("a", "1")]);
        assert_eq!(expand_str(&v, "{a}-{missing}"), "1-{missing}");
        assert_eq!(expand_str(&v, "{ unclosed"), "{ unclosed");
    }

    #[test]
    fn test_single_pass() {
        let v = vars(&[("a", "{b}"), ("b", "deep")]);
        assert_eq!(expand_str(&v, "{a}"), "{b}");
        assert_eq!(expand_twice(&v, "{a}"), "deep");
    }

    #[test]
    fn test_expand_value_walks_arrays_and_objects() {
        let v = vars(&[("name", "tina"), ("n", "7")]);
        let input = json!({
            "user": { "name": "{name}", "tags": ["{name}", 3, null] },
            "count": 5,
            "{name}": "{n}"
        });
        let expanded = expand_value(&v, &input);
        assert_eq!(
            expanded,
            json!({
                "user": { "name": "tina", "tags": ["tina", 3, null] },
                "count": 5,
                "{name}": "7"
            })
        );
    }

    #[test]
    fn test_expand_pairs_later_names_win() {
        let v = vars(&[("t", "abc")]);
        let pairs = vec![
            Pair::new("Accept", "text/plain"),
            Pair::new("Authorization", "{t}"),
            Pair::new("Accept", "application/json"),
        ];
        let map = expand_pairs(&v, &pairs);
        let entries: Vec<(&str, &str)> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(
            entries,
            vec![("Accept", "application/json"), ("Authorization", "abc")]
        );
    }
}
