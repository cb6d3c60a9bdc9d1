use crate::{
    constraint::{Filter, Query},
    value::Value,
};
use serde_json::{Map, Number, Value as Json};
use thiserror::Error as ThisError;

///
/// Engine query DSL rendering
///
/// Converts the logical query/filter artifacts into the engine's JSON
/// query DSL. This is pure value-to-value translation; no client,
/// transport, or schema knowledge lives here.
///

///
/// DslError
///
/// The constraint core is infallible, but JSON is narrower than
/// `Value`: non-finite floats have no encoding, and artifacts are
/// never constructed with absent values in the first place.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DslError {
    #[error("field '{field}' compares against a non-finite number, which the query DSL cannot encode")]
    NonFiniteNumber { field: String },

    #[error("field '{field}' compares against an absent value; absent values never render")]
    AbsentValue { field: String },
}

/// Render a scored-query artifact into the JSON query DSL.
pub fn query_json(query: &Query) -> Result<Json, DslError> {
    match query {
        Query::Term { field, value } => Ok(wrap("term", field, scalar(field, value)?)),
        Query::Range {
            field,
            bound,
            value,
        } => {
            let body = object(bound.key(), scalar(field, value)?);
            Ok(wrap("range", field, body))
        }
    }
}

/// Render an unscored-filter artifact into the JSON query DSL.
pub fn filter_json(filter: &Filter) -> Result<Json, DslError> {
    match filter {
        Filter::Term { field, value } => Ok(wrap("term", field, scalar(field, value)?)),
        Filter::Range {
            field,
            bound,
            value,
        } => {
            let body = object(bound.key(), scalar(field, value)?);
            Ok(wrap("range", field, body))
        }
        Filter::Missing { field } => {
            Ok(object("missing", object("field", Json::String(field.clone()))))
        }
        Filter::Or(branches) => {
            let should = branches
                .iter()
                .map(filter_json)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(object("bool", object("should", Json::Array(should))))
        }
    }
}

fn scalar(field: &str, value: &Value) -> Result<Json, DslError> {
    match value {
        Value::None => Err(DslError::AbsentValue {
            field: field.to_string(),
        }),
        Value::Bool(v) => Ok(Json::Bool(*v)),
        Value::Int(v) => Ok(Json::Number(Number::from(*v))),
        Value::Uint(v) => Ok(Json::Number(Number::from(*v))),
        Value::Float(v) => Number::from_f64(*v).map(Json::Number).ok_or_else(|| {
            DslError::NonFiniteNumber {
                field: field.to_string(),
            }
        }),
        Value::Text(v) => Ok(Json::String(v.clone())),
    }
}

fn object(key: &str, body: Json) -> Json {
    let mut map = Map::new();
    map.insert(key.to_string(), body);
    Json::Object(map)
}

fn wrap(op: &str, field: &str, body: Json) -> Json {
    object(op, object(field, body))
}

#[cfg(test)]
mod tests {
    use super::{DslError, filter_json, query_json};
    use crate::{
        constraint::{equal, greater_than, less_than, Query},
        value::Value,
    };
    use serde_json::json;

    #[test]
    fn term_query_shape() {
        let query = equal("status", "open").to_query().unwrap();
        assert_eq!(
            query_json(&query).unwrap(),
            json!({ "term": { "status": "open" } })
        );
    }

    #[test]
    fn range_query_shape() {
        let query = less_than("age", 5i64).including().to_query().unwrap();
        assert_eq!(
            query_json(&query).unwrap(),
            json!({ "range": { "age": { "lte": 5 } } })
        );
    }

    #[test]
    fn term_filter_shape() {
        let filter = equal("status", "open").as_filter().to_filter().unwrap();
        assert_eq!(
            filter_json(&filter).unwrap(),
            json!({ "term": { "status": "open" } })
        );
    }

    #[test]
    fn missing_filter_shape() {
        let filter = equal("status", Option::<&str>::None).to_filter().unwrap();
        assert_eq!(
            filter_json(&filter).unwrap(),
            json!({ "missing": { "field": "status" } })
        );
    }

    #[test]
    fn or_empty_filter_nests_a_should_clause() {
        let filter = greater_than("age", 5i64).or_empty().to_filter().unwrap();
        assert_eq!(
            filter_json(&filter).unwrap(),
            json!({
                "bool": {
                    "should": [
                        { "range": { "age": { "gt": 5 } } },
                        { "missing": { "field": "age" } }
                    ]
                }
            })
        );
    }

    #[test]
    fn non_finite_floats_error_instead_of_panicking() {
        let query = Query::Term {
            field: "score".to_string(),
            value: Value::Float(f64::NAN),
        };
        assert_eq!(
            query_json(&query),
            Err(DslError::NonFiniteNumber {
                field: "score".to_string(),
            })
        );
    }

    #[test]
    fn absent_values_error_if_forced_into_an_artifact() {
        let query = Query::Term {
            field: "status".to_string(),
            value: Value::None,
        };
        assert_eq!(
            query_json(&query),
            Err(DslError::AbsentValue {
                field: "status".to_string(),
            })
        );
    }
}
