use crate::{
    constraint::{Filter, Query, effective_field, shown_value},
    traits::FieldValue,
    value::Value,
};
use std::fmt;

///
/// Equality
///
/// Constrains a field to a single normalized value. Renders as a
/// scored term query by default, or as an unscored term filter after
/// `as_filter()`.
///
/// An absent value can never be relevance-scored, so it always
/// degrades to the filter side: the filter render falls back to a
/// field-is-missing test unless `ignore_absent()` suppresses it.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Equality {
    field: String,
    value: Value,
    is_filter: bool,
    ignore_absent: bool,
}

impl Equality {
    /// Constrain `field` to equal `value`. The logical `id` field is
    /// remapped to the reserved identity field; the value is
    /// normalized here, once.
    #[must_use]
    pub fn on(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self {
            field: effective_field(field),
            value: value.to_value(),
            is_filter: false,
            ignore_absent: false,
        }
    }

    /// Render nothing at all when the value is absent, instead of
    /// falling back to a field-is-missing filter.
    #[must_use]
    pub const fn ignore_absent(mut self) -> Self {
        self.ignore_absent = true;
        self
    }

    /// Apply as an unscored filter instead of a scored query.
    #[must_use]
    pub const fn as_filter(mut self) -> Self {
        self.is_filter = true;
        self
    }

    /// Target field name, after the identity remap.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Normalized comparison value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Render as a scored term query.
    #[must_use]
    pub fn to_query(&self) -> Option<Query> {
        if self.value.is_absent() || self.is_filter {
            return None;
        }

        Some(Query::Term {
            field: self.field.clone(),
            value: self.value.clone(),
        })
    }

    /// Render as an unscored filter.
    #[must_use]
    pub fn to_filter(&self) -> Option<Filter> {
        if self.value.is_absent() {
            if self.ignore_absent {
                return None;
            }

            // Equality against absence is a structural test, not a
            // ranking signal; it only exists on the filter side.
            return Some(Filter::Missing {
                field: self.field.clone(),
            });
        }

        if self.is_filter {
            return Some(Filter::Term {
                field: self.field.clone(),
                value: self.value.clone(),
            });
        }

        None
    }

    /// Log-safe rendering; `redact` hides the configured value.
    #[must_use]
    pub fn describe(&self, redact: bool) -> String {
        format!("{} = '{}'", self.field, shown_value(&self.value, redact))
    }
}

impl fmt::Display for Equality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe(false))
    }
}

#[cfg(test)]
mod tests {
    use super::Equality;
    use crate::{
        constraint::{Filter, Query, equal},
        value::Value,
    };

    #[test]
    fn id_field_remaps_in_any_case() {
        for field in ["id", "ID", "Id", "iD"] {
            assert_eq!(equal(field, 1i64).field(), crate::ID_FIELD);
        }
        assert_eq!(equal("ident", 1i64).field(), "ident");
    }

    #[test]
    fn value_normalizes_at_construction() {
        let constraint = equal("count", 5i32);
        assert_eq!(constraint.value(), &Value::Int(5));
    }

    #[test]
    fn renders_term_query_by_default() {
        let constraint = equal("status", "open");
        assert_eq!(
            constraint.to_query(),
            Some(Query::Term {
                field: "status".to_string(),
                value: Value::Text("open".to_string()),
            })
        );
        assert_eq!(constraint.to_filter(), None);
    }

    #[test]
    fn as_filter_moves_the_render_to_the_filter_side() {
        let constraint = equal("status", "open").as_filter();
        assert_eq!(constraint.to_query(), None);
        assert_eq!(
            constraint.to_filter(),
            Some(Filter::Term {
                field: "status".to_string(),
                value: Value::Text("open".to_string()),
            })
        );
    }

    #[test]
    fn absent_value_never_queries() {
        let constraint = equal("status", Option::<&str>::None);
        assert_eq!(constraint.to_query(), None);

        let constraint = equal("status", Option::<&str>::None).as_filter();
        assert_eq!(constraint.to_query(), None);
    }

    #[test]
    fn absent_value_falls_back_to_a_missing_filter() {
        let constraint = equal("status", Option::<&str>::None);
        assert_eq!(
            constraint.to_filter(),
            Some(Filter::Missing {
                field: "status".to_string(),
            })
        );
    }

    #[test]
    fn ignore_absent_suppresses_the_missing_fallback() {
        let constraint = equal("status", Option::<&str>::None).ignore_absent();
        assert_eq!(constraint.to_filter(), None);
        assert_eq!(constraint.to_query(), None);
    }

    #[test]
    fn query_and_filter_are_never_both_present() {
        let plain = equal("status", "open");
        assert!(plain.to_query().is_some() != plain.to_filter().is_some());

        let filtered = equal("status", "open").as_filter();
        assert!(filtered.to_query().is_some() != filtered.to_filter().is_some());
    }

    #[test]
    fn describe_redacts_on_request() {
        let constraint = equal("status", "open");
        assert_eq!(constraint.describe(false), "status = 'open'");
        assert_eq!(constraint.describe(true), "status = '?'");
        assert_eq!(constraint.to_string(), "status = 'open'");
    }

    #[test]
    fn renders_are_idempotent_snapshots() {
        let constraint = Equality::on("status", "open").as_filter();
        assert_eq!(constraint.to_filter(), constraint.to_filter());
    }
}
