use crate::{constraint::Bound, value::Value};
use serde::Serialize;

///
/// Query
///
/// Scored-query artifact: a predicate that contributes to relevance
/// ranking. Logical shape only; the `dsl` adapter owns the engine
/// wire syntax. Artifacts are snapshots of the constraint at render
/// time, never live views.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    Term {
        field: String,
        value: Value,
    },
    Range {
        field: String,
        bound: Bound,
        value: Value,
    },
}

///
/// Filter
///
/// Unscored-filter artifact: pure inclusion/exclusion, no effect on
/// ranking. `Missing` matches documents with no value for the field;
/// `Or` is satisfied when any branch is.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    Term {
        field: String,
        value: Value,
    },
    Range {
        field: String,
        bound: Bound,
        value: Value,
    },
    Missing {
        field: String,
    },
    Or(Vec<Filter>),
}
