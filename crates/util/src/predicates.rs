use crate::value::Value;

/// Check whether a value is callable.
///
/// An absent value (`None`) is not a function.
///
/// # Examples
///
/// ```
/// use sdk_util::is_function;
/// use sdk_util::value::{Callable, Value};
///
/// let f = Value::from(Callable::new(|_| Value::Undefined));
/// assert!(is_function(Some(&f)));
/// assert!(!is_function(Some(&Value::Null)));
/// assert!(!is_function(None));
/// ```
pub fn is_function(value: Option<&Value>) -> bool {
    value.is_some_and(Value::is_function)
}

/// Check whether a value is an array. An absent value is not an array.
pub fn is_array(value: Option<&Value>) -> bool {
    value.is_some_and(Value::is_array)
}
