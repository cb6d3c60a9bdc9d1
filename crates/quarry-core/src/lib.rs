//! Core constraint layer for Quarry: normalized values, typed field
//! constraints, and the query/filter artifacts they render into.

mod macros;

pub mod constraint;
pub mod dsl;
pub mod traits;
pub mod types;
pub mod value;

///
/// CONSTANTS
///

/// Reserved field under which the engine stores a document's identity.
///
/// Constraints on the logical `id` field must target this name instead;
/// the remap happens once, at constraint construction.
pub const ID_FIELD: &str = "_id";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No adapters, errors, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        constraint::{
            Bound, Constraint, Equality, Filter, Query, Range, equal, greater_than, less_than,
        },
        traits::{EntityIdentity, FieldValue},
        types::EntityRef,
        value::Value,
    };
}
