use serde::Serialize;
use std::fmt;

///
/// Value
///
/// Normalized form of a domain value, as the engine compares it.
/// Produced once, at constraint construction, by the `FieldValue`
/// conversions in `traits`; never re-normalized afterwards.
///
/// `None` is the distinguished absent marker. It is not the same as a
/// present empty string: only `None` triggers the absent-value branches
/// of the constraint render rules.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
}

impl Value {
    /// True when no value was supplied.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}
