//! Helpers over loosely-typed JSON values

use serde_json::Value;

/// Whether a value counts as "empty" for form and response checks:
/// null, false, zero, the empty string or an empty array.
pub fn is_false_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}

pub fn is_any_false_value<'a, I>(values: I) -> bool
where
    I: IntoIterator<Item = &'a Value>,
{
    values.into_iter().any(is_false_value)
}

/// Flatten arbitrarily nested arrays into one list of leaf values.
///
/// A non-array input yields a single-element list.
pub fn flatten_deep(value: &Value) -> Vec<Value> {
    let mut out = Vec::new();
    flatten_into(value, &mut out);
    out
}

fn flatten_into(value: &Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
        leaf => out.push(leaf.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_false_value() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([])] {
            assert!(is_false_value(&value), "{} should be false", value);
        }
        for value in [json!(true), json!(1), json!(-0.5), json!("0"), json!([0]), json!({})] {
            assert!(!is_false_value(&value), "{} should not be false", value);
        }
    }

    #[test]
    fn test_is_any_false_value() {
        let filled = [json!("user"), json!("secret")];
        assert!(!is_any_false_value(&filled));

        let missing = [json!("user"), json!("")];
        assert!(is_any_false_value(&missing));
    }

    #[test]
    fn test_flatten_deep() {
        let nested = json!([1, [2, [3, [4]], 5], [], "x"]);
        assert_eq!(
            flatten_deep(&nested),
            vec![json!(1), json!(2), json!(3), json!(4), json!(5), json!("x")]
        );
    }

    #[test]
    fn test_flatten_deep_scalar() {
        assert_eq!(flatten_deep(&json!({"a": 1})), vec![json!({"a": 1})]);
    }
}
