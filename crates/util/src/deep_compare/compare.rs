use crate::value::Value;

/// Performs a recursive structural comparison of two values.
///
/// Rules are applied in this order:
/// 1. Both arguments are the same reference: equal.
/// 2. Different kinds are never equal. `Null` and `Undefined` are different kinds.
/// 3. Scalars compare by value, so `NaN` is not equal to itself.
/// 4. Regular expressions compare by source text.
/// 5. Dates compare by instant.
/// 6. Arrays compare element by element; order matters.
/// 7. Objects need the same key set and equal values under each key; key order
///    does not matter.
/// 8. Callables are equal only when they are the same callable.
///
/// # Examples
///
/// ```
/// use sdk_util::deep_compare;
/// use sdk_util::value::Value;
/// use serde_json::json;
///
/// let a = Value::from(json!({"a": 1, "b": [1, 2]}));
/// let b = Value::from(json!({"b": [1, 2], "a": 1}));
/// let c = Value::from(json!({"a": 1, "b": [2, 1]}));
///
/// assert!(deep_compare(&a, &b));
/// assert!(!deep_compare(&a, &c));
/// assert!(!deep_compare(&Value::from(json!({})), &Value::Null));
/// ```
pub fn deep_compare(a: &Value, b: &Value) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }

    if a.kind() != b.kind() {
        return false;
    }

    match (a, b) {
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,

        (Value::RegExp(a), Value::RegExp(b)) => a.as_str() == b.as_str(),

        (Value::Date(a), Value::Date(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            if arr_a.len() != arr_b.len() {
                return false;
            }
            arr_a
                .iter()
                .zip(arr_b.iter())
                .all(|(a, b)| deep_compare(a, b))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !deep_compare(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        // Identity is the only equality for callables.
        (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),

        _ => false,
    }
}
