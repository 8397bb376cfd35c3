//! Structural equality for dynamic values.
//!
//! Values are classified by [`Kind`](crate::value::Kind) first; only operands of the
//! same kind reach the kind-specific rule.

mod compare;

pub use compare::deep_compare;
