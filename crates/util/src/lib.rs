//! sdk-util - Helper functions shared across the client SDK
//!
//! URL parameter and path encoding, sequence search and removal, value type
//! predicates, object key validation and structural deep equality.

pub mod deep_compare;
pub mod encode;
pub mod error;
pub mod keys;
pub mod predicates;
pub mod sequence;
pub mod value;

// Re-exports for convenience
pub use deep_compare::deep_compare;
pub use encode::{decode_params, encode_params, encode_uri};
pub use error::{Error, Result};
pub use keys::{check_object_has_keys, check_object_has_no_additional_keys, ObjectKeys};
pub use predicates::{is_array, is_function};
pub use sequence::{find_element, for_each, remove_element};
pub use value::{Callable, Kind, Object, Value};
