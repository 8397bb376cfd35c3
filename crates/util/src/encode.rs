//! Query-string and path encoding.
//!
//! Keys and values are percent-encoded as URI components: everything outside
//! `A-Z a-z 0-9 - _ . ~` is escaped.

use crate::error::{Error, Result};
use std::fmt::Display;

/// Builds a `&`-joined query string of percent-encoded `key=value` pairs.
///
/// Pairs are emitted in the iteration order of `params`, so pass an ordered
/// map (for example [`Object`](crate::value::Object)) when the order matters.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use sdk_util::encode_params;
///
/// let mut params = IndexMap::new();
/// params.insert("foo", "bar");
/// params.insert("baz", "beer@");
///
/// assert_eq!(encode_params(&params), "foo=bar&baz=beer%40");
/// ```
pub fn encode_params<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    params
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key.as_ref()),
                urlencoding::encode(&value.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Substitutes placeholders in a path template with percent-encoded values.
///
/// Every occurrence of each key is replaced. Keys are applied in the iteration
/// order of `substitutions` and the output of one replacement is visible to the
/// next, so placeholders must not be substrings of one another (`%here` and
/// `%here2` would clash). Prefixing every placeholder with a sentinel such as
/// `%` and keeping them distinct avoids this.
///
/// # Examples
///
/// ```
/// use sdk_util::encode_uri;
///
/// let path = encode_uri(
///     "foo/bar/%something/%here",
///     [("%something", "baz"), ("%here", "beer@")],
/// );
/// assert_eq!(path, "foo/bar/baz/beer%40");
/// ```
pub fn encode_uri<I, K, V>(template: &str, substitutions: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let mut path = template.to_string();
    for (key, value) in substitutions {
        let key = key.as_ref();
        if key.is_empty() {
            continue;
        }
        path = path.replace(key, &urlencoding::encode(&value.to_string()));
    }
    path
}

/// Splits a query string produced by [`encode_params`] back into decoded pairs.
///
/// A pair without `=` decodes to an empty value. Empty segments are skipped.
pub fn decode_params(query: &str) -> Result<Vec<(String, String)>> {
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            Ok((decode_component(key)?, decode_component(value)?))
        })
        .collect()
}

fn decode_component(s: &str) -> Result<String> {
    urlencoding::decode(s)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| Error::Decode(e.to_string()))
}
