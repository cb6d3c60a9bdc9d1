mod artifact;
mod equal;
mod range;


use crate::traits::FieldValue;
use std::fmt;

// re-exports
pub use artifact::{Filter, Query};
pub use equal::Equality;
pub use range::{Bound, Range};

///
/// Constraint
///
/// Closed set of constraint kinds. Each kind renders into at most one
/// scored query and at most one unscored filter; a `None` render means
/// "this constraint contributes nothing", never a failure. Callers
/// collect the non-empty artifacts into their composite query.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Constraint {
    Equality(Equality),
    Range(Range),
}

impl Constraint {
    /// Render as a scored query, if this constraint is query-eligible.
    #[must_use]
    pub fn to_query(&self) -> Option<Query> {
        match self {
            Self::Equality(constraint) => constraint.to_query(),
            Self::Range(constraint) => constraint.to_query(),
        }
    }

    /// Render as an unscored filter, if this constraint is
    /// filter-eligible.
    #[must_use]
    pub fn to_filter(&self) -> Option<Filter> {
        match self {
            Self::Equality(constraint) => constraint.to_filter(),
            Self::Range(constraint) => constraint.to_filter(),
        }
    }

    /// Log-safe rendering; `redact` replaces the configured value with
    /// a placeholder.
    #[must_use]
    pub fn describe(&self, redact: bool) -> String {
        match self {
            Self::Equality(constraint) => constraint.describe(redact),
            Self::Range(constraint) => constraint.describe(redact),
        }
    }
}

impl From<Equality> for Constraint {
    fn from(constraint: Equality) -> Self {
        Self::Equality(constraint)
    }
}

impl From<Range> for Constraint {
    fn from(constraint: Range) -> Self {
        Self::Range(constraint)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe(false))
    }
}

// ----------------------------------------------------------------------
// Factories
// ----------------------------------------------------------------------

/// Constrain `field` to equal `value`.
#[must_use]
pub fn equal(field: impl Into<String>, value: impl FieldValue) -> Equality {
    Equality::on(field, value)
}

/// Constrain `field` to be strictly less than `value`.
#[must_use]
pub fn less_than(field: impl Into<String>, value: impl FieldValue) -> Range {
    Range::less(field, value)
}

/// Constrain `field` to be strictly greater than `value`.
#[must_use]
pub fn greater_than(field: impl Into<String>, value: impl FieldValue) -> Range {
    Range::greater(field, value)
}

// ----------------------------------------------------------------------
// Internal helpers (not public API)
// ----------------------------------------------------------------------

/// Remap the logical `id` field to the engine's reserved identity
/// field. Applied once, at construction.
fn effective_field(field: impl Into<String>) -> String {
    let field = field.into();
    if field.eq_ignore_ascii_case("id") {
        crate::ID_FIELD.to_string()
    } else {
        field
    }
}

/// Placeholder-or-value rendering shared by the describe surfaces.
fn shown_value(value: &crate::value::Value, redact: bool) -> String {
    if redact {
        "?".to_string()
    } else {
        value.to_string()
    }
}
