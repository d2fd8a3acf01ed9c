//! Argument reading
//!
//! `key=value` tokens become map entries; no flag validation happens here.
//! Absent flags surface downstream as empty range bounds.

use std::collections::HashMap;

/// Parse command-line tokens into a flag map.
///
/// Each token is split on its first `=`; a token without one maps to
/// `None`. Later occurrences of a key overwrite earlier ones.
pub fn parse_args(tokens: impl Iterator<Item = String>) -> HashMap<String, Option<String>> {
    let mut args = HashMap::new();

    for token in tokens {
        match token.split_once('=') {
            Some((key, value)) => args.insert(key.to_string(), Some(value.to_string())),
            None => args.insert(token, None),
        };
    }

    args
}

/// Look up a flag value, treating absence and valuelessness as empty.
pub fn flag_value(args: &HashMap<String, Option<String>>, key: &str) -> String {
    args.get(key)
        .and_then(|v| v.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: &[&str]) -> HashMap<String, Option<String>> {
        parse_args(tokens.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_splits_on_first_equals() {
        let args = parse(&["--from=v1.0", "--to=release=candidate"]);
        assert_eq!(args["--from"], Some("v1.0".to_string()));
        assert_eq!(args["--to"], Some("release=candidate".to_string()));
    }

    #[test]
    fn test_token_without_equals_has_no_value() {
        let args = parse(&["--verbose"]);
        assert_eq!(args["--verbose"], None);
        assert_eq!(flag_value(&args, "--verbose"), "");
    }

    #[test]
    fn test_last_duplicate_wins() {
        let args = parse(&["--from=v1.0", "--from=v2.0"]);
        assert_eq!(args["--from"], Some("v2.0".to_string()));
    }

    #[test]
    fn test_absent_flag_is_empty() {
        let args = parse(&["--from=v1.0"]);
        assert_eq!(flag_value(&args, "--to"), "");
    }
}
