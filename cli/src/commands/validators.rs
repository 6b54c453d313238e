use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;
use tinytina_lib::RequestProp;

lazy_static! {
    static ref NAME_REGEX: Regex = Regex::new(r"^[^{}]+$").unwrap();
}

pub fn validate_path_exists(path: &str) -> Result<String, String> {
    if Path::new(path).is_file() {
        Ok(path.to_string())
    } else {
        Err(format!("Schema file does not exist: {path}"))
    }
}

pub fn validate_name(name: &str) -> Result<String, String> {
    if !NAME_REGEX.is_match(name) {
        return Err("Name must be non-empty and must not contain braces".to_string());
    }
    Ok(name.to_string())
}

/// `NAME:VALUE`, the value may contain further colons.
pub fn validate_assignment(assignment: &str) -> Result<(String, String), String> {
    let (name, value) = tinytina_lib::parse_assignment(assignment)
        .ok_or_else(|| "Variable must be in format NAME:VALUE".to_string())?;

    if let Err(e) = validate_name(&name) {
        return Err(format!("Invalid variable name: {e}"));
    }

    Ok((name, value))
}

pub fn validate_request_prop(prop: &str) -> Result<RequestProp, String> {
    RequestProp::from_str(prop)
        .ok_or_else(|| format!("Unknown request property '{prop}', use id, name or description"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("api-key").is_ok());
        assert!(validate_name("secret_thing").is_ok());
        assert!(validate_name("host.v2").is_ok());
        assert!(validate_name("$token").is_ok());
        assert!(validate_name("1st value").is_ok());

        assert!(validate_name("").is_err());
        assert!(validate_name("{host}").is_err());
    }

    #[test]
    fn test_validate_assignment_keeps_colons() {
        assert_eq!(
            validate_assignment("host:http://localhost:3000"),
            Ok(("host".to_string(), "http://localhost:3000".to_string()))
        );
        assert_eq!(
            validate_assignment("empty:"),
            Ok(("empty".to_string(), String::new()))
        );
        assert!(validate_assignment("no-colon").is_err());
        assert_eq!(
            validate_assignment("$token:abc"),
            Ok(("$token".to_string(), "abc".to_string()))
        );
        assert!(validate_assignment(":1").is_err());
    }

    #[test]
    fn test_validate_request_prop() {
        assert_eq!(validate_request_prop("Name"), Ok(RequestProp::Name));
        assert!(validate_request_prop("url").is_err());
    }
}
