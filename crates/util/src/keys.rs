//! Validation of an object's own keys against required and allowed sets.

use crate::error::{Error, Result};
use crate::value::Value;
use indexmap::IndexMap;
use serde_json::Map;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Access to the own keys of a string-keyed mapping.
pub trait ObjectKeys {
    /// Returns true if `key` is an own key.
    fn has_own_key(&self, key: &str) -> bool;

    /// Iterates the own keys.
    fn own_keys(&self) -> impl Iterator<Item = &str>;
}

impl<V, S: BuildHasher> ObjectKeys for IndexMap<String, V, S> {
    fn has_own_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn own_keys(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }
}

impl<V, S: BuildHasher> ObjectKeys for HashMap<String, V, S> {
    fn has_own_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn own_keys(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }
}

impl<V> ObjectKeys for BTreeMap<String, V> {
    fn has_own_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn own_keys(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }
}

impl ObjectKeys for Map<String, serde_json::Value> {
    fn has_own_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn own_keys(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }
}

/// Only objects have own keys; every other value reports none.
impl ObjectKeys for Value {
    fn has_own_key(&self, key: &str) -> bool {
        self.as_object().is_some_and(|obj| obj.contains_key(key))
    }

    fn own_keys(&self) -> impl Iterator<Item = &str> {
        self.as_object()
            .into_iter()
            .flat_map(|obj| obj.keys().map(String::as_str))
    }
}

/// Fails with [`Error::MissingKey`] for the first entry of `keys` that `obj`
/// does not have.
///
/// # Examples
///
/// ```
/// use serde_json::{json, Map};
/// use sdk_util::{check_object_has_keys, Error};
///
/// let empty = Map::new();
/// assert_eq!(
///     check_object_has_keys(&empty, &["foo"]),
///     Err(Error::MissingKey("foo".to_string()))
/// );
///
/// let obj = json!({"foo": "bar"});
/// assert!(check_object_has_keys(obj.as_object().unwrap(), &["foo"]).is_ok());
/// ```
pub fn check_object_has_keys<O, K>(obj: &O, keys: &[K]) -> Result<()>
where
    O: ObjectKeys + ?Sized,
    K: AsRef<str>,
{
    for key in keys {
        let key = key.as_ref();
        if !obj.has_own_key(key) {
            tracing::debug!(key, "object is missing a required key");
            return Err(Error::MissingKey(key.to_string()));
        }
    }
    Ok(())
}

/// Fails with [`Error::UnexpectedKey`] for the first own key of `obj` that is
/// not listed in `allowed_keys`.
pub fn check_object_has_no_additional_keys<O, K>(obj: &O, allowed_keys: &[K]) -> Result<()>
where
    O: ObjectKeys + ?Sized,
    K: AsRef<str>,
{
    for key in obj.own_keys() {
        if !allowed_keys.iter().any(|allowed| allowed.as_ref() == key) {
            tracing::debug!(key, "object has a key outside the allowed set");
            return Err(Error::UnexpectedKey(key.to_string()));
        }
    }
    Ok(())
}
