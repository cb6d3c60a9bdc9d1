use crate::{
    constraint::{Filter, Query, shown_value},
    traits::FieldValue,
    value::Value,
};
use derive_more::Display;
use serde::Serialize;
use std::fmt;

///
/// Bound
///
/// Range comparison variant. Strict bounds may widen to their
/// inclusive counterpart through `Range::including`; bounds never
/// narrow.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bound {
    #[display("<")]
    Lt,
    #[display("<=")]
    Lte,
    #[display(">")]
    Gt,
    #[display(">=")]
    Gte,
}

impl Bound {
    /// Engine DSL key for this bound.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Gt => "gt",
            Self::Gte => "gte",
        }
    }

    /// Widen a strict bound to its inclusive counterpart.
    #[must_use]
    const fn widened(self) -> Self {
        match self {
            Self::Lt => Self::Lte,
            Self::Gt => Self::Gte,
            inclusive => inclusive,
        }
    }
}

///
/// Range
///
/// Constrains a field against a single comparison bound. Renders as a
/// scored range query by default, or as an unscored range filter after
/// `as_filter()`. `or_empty()` additionally accepts documents with no
/// value for the field; since that acceptance is structural rather
/// than a ranking signal, it forces filter mode.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Range {
    field: String,
    bound: Bound,
    value: Value,
    is_filter: bool,
    match_absent: bool,
}

impl Range {
    // Ranges target the field verbatim; only equality participates in
    // the reserved identity remap.
    fn new(field: impl Into<String>, bound: Bound, value: impl FieldValue) -> Self {
        Self {
            field: field.into(),
            bound,
            value: value.to_value(),
            is_filter: false,
            match_absent: false,
        }
    }

    /// Constrain `field < value`.
    #[must_use]
    pub fn less(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::new(field, Bound::Lt, value)
    }

    /// Constrain `field > value`.
    #[must_use]
    pub fn greater(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::new(field, Bound::Gt, value)
    }

    /// Include the limit itself: `<` becomes `<=`, `>` becomes `>=`.
    /// No-op when the bound is already inclusive.
    #[must_use]
    pub const fn including(mut self) -> Self {
        self.bound = self.bound.widened();
        self
    }

    /// Also match documents with no value for the field. Implies
    /// `as_filter()`.
    #[must_use]
    pub const fn or_empty(self) -> Self {
        let mut this = self.as_filter();
        this.match_absent = true;
        this
    }

    /// Apply as an unscored filter instead of a scored query.
    #[must_use]
    pub const fn as_filter(mut self) -> Self {
        self.is_filter = true;
        self
    }

    /// Target field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Active comparison bound.
    #[must_use]
    pub const fn bound(&self) -> Bound {
        self.bound
    }

    /// Normalized comparison value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Render as a scored range query.
    #[must_use]
    pub fn to_query(&self) -> Option<Query> {
        if self.is_filter || self.match_absent || self.value.is_absent() {
            return None;
        }

        Some(Query::Range {
            field: self.field.clone(),
            bound: self.bound,
            value: self.value.clone(),
        })
    }

    /// Render as an unscored filter.
    #[must_use]
    pub fn to_filter(&self) -> Option<Filter> {
        if !self.is_filter || self.value.is_absent() {
            return None;
        }

        let range = Filter::Range {
            field: self.field.clone(),
            bound: self.bound,
            value: self.value.clone(),
        };

        if self.match_absent {
            let missing = Filter::Missing {
                field: self.field.clone(),
            };
            return Some(Filter::Or(vec![range, missing]));
        }

        Some(range)
    }

    /// Log-safe rendering; `redact` hides the configured value.
    #[must_use]
    pub fn describe(&self, redact: bool) -> String {
        format!(
            "{} {} '{}'",
            self.field,
            self.bound,
            shown_value(&self.value, redact)
        )
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe(false))
    }
}
