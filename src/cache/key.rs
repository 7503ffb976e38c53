//! Cache Key Derivation
//!
//! Builds deterministic cache keys from a namespace prefix and a parameter
//! set, so call sites querying the same logical data agree on a key.

use std::collections::BTreeMap;

use serde_json::Value;

// == Generate Key ==
/// Derives a cache key of the form `prefix:{sorted-params-json}`.
///
/// Parameters are sorted by name before serialization, so the same
/// key/value pairs produce an identical key regardless of the order they
/// were supplied in. An empty parameter set serializes as `{}`. When the
/// same name appears twice, the last value wins.
///
/// # Example
/// ```
/// use mboa_cache::cache::generate_key;
/// use serde_json::json;
///
/// let key = generate_key("annonces", &[("ville", json!("Douala")), ("page", json!(2))]);
/// assert_eq!(key, r#"annonces:{"page":2,"ville":"Douala"}"#);
/// ```
pub fn generate_key(prefix: &str, params: &[(&str, Value)]) -> String {
    let sorted: BTreeMap<&str, &Value> = params.iter().map(|(k, v)| (*k, v)).collect();

    // BTreeMap serialization cannot fail for string keys and Value values.
    let json = serde_json::to_string(&sorted).unwrap_or_else(|_| "{}".to_string());

    format!("{}:{}", prefix, json)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_format() {
        let key = generate_key("categories", &[("slug", json!("immobilier"))]);
        assert_eq!(key, r#"categories:{"slug":"immobilier"}"#);
    }

    #[test]
    fn test_key_empty_params() {
        assert_eq!(generate_key("annonces", &[]), "annonces:{}");
    }

    #[test]
    fn test_key_order_independence() {
        let a = generate_key("annonces", &[("b", json!(2)), ("a", json!(1))]);
        let b = generate_key("annonces", &[("a", json!(1)), ("b", json!(2))]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_key_distinguishes_values() {
        let a = generate_key("annonces", &[("page", json!(1))]);
        let b = generate_key("annonces", &[("page", json!(2))]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_distinguishes_prefixes() {
        let a = generate_key("annonces", &[("page", json!(1))]);
        let b = generate_key("favorites", &[("page", json!(1))]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_duplicate_param_last_wins() {
        let key = generate_key("annonces", &[("page", json!(1)), ("page", json!(2))]);
        assert_eq!(key, r#"annonces:{"page":2}"#);
    }

    #[test]
    fn test_key_mixed_value_types() {
        let key = generate_key(
            "annonces",
            &[
                ("ville", json!("Yaoundé")),
                ("max_prix", json!(150000)),
                ("urgent", json!(true)),
            ],
        );
        assert_eq!(
            key,
            r#"annonces:{"max_prix":150000,"urgent":true,"ville":"Yaoundé"}"#
        );
    }
}
