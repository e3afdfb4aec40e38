//! Helpers for reading typed rule parameters from a `serde_json::Value` object.
//!
//! Each helper takes the params object, a key, and a default. A missing key
//! or a value of the wrong JSON type yields the default, so rule
//! construction from loosely-typed input never fails on these.

use serde_json::Value;

/// Reads an `f64`, accepting integers too.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Reads a `bool`.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

/// Reads a string, or `None` when missing or not a string.
///
/// Used for optional selectors such as a pattern or preset name, where
/// absence means "use the built-in behavior".
pub fn param_str<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_f64_extracts_float_and_integer() {
        let params = json!({"feed_rate": 0.0367, "dt": 1});
        assert!((param_f64(&params, "feed_rate", 0.0) - 0.0367).abs() < f64::EPSILON);
        assert!((param_f64(&params, "dt", 0.5) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_falls_back_on_missing_or_wrong_type() {
        let params = json!({"kill_rate": "high", "feed_rate": null});
        assert!((param_f64(&params, "kill_rate", 0.062) - 0.062).abs() < f64::EPSILON);
        assert!((param_f64(&params, "feed_rate", 0.055) - 0.055).abs() < f64::EPSILON);
        assert!((param_f64(&params, "absent", 2.0) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_tolerates_non_object_params() {
        let params = json!([1, 2, 3]);
        assert!((param_f64(&params, "feed_rate", 7.0) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_bool_requires_json_bool() {
        let params = json!({"scatter": true, "numeric": 1});
        assert!(param_bool(&params, "scatter", false));
        assert!(!param_bool(&params, "numeric", false));
        assert!(param_bool(&params, "absent", true));
    }

    #[test]
    fn param_str_is_optional() {
        let params = json!({"pattern": "glider", "preset": 3});
        assert_eq!(param_str(&params, "pattern"), Some("glider"));
        assert_eq!(param_str(&params, "preset"), None);
        assert_eq!(param_str(&params, "absent"), None);
    }
}
