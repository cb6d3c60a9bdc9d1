use crate::value::Value;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

///
/// FieldValue
///
/// Conversion of a domain value into its normalized engine form.
/// This is the normalization seam: every recognized input shape gets
/// one impl, and the impl applies that shape's rule exactly once.
///
/// Recognized shapes:
/// - primitives pass through into the matching `Value` variant
/// - `Option` maps `None` to the absent marker
/// - domain enums map to their variant name (via `symbol_value!`)
/// - entity references map to the referenced identity string
/// - absolute instants are converted to the system-zone civil
///   date-time, then formatted like any other date-time
/// - date-times format as ISO-8601 local date-time, dates as ISO-8601
///   local date
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

///
/// EntityIdentity
///
/// Identity surface of a stored entity. Constraints never hold the
/// entity itself, only its identity string, extracted through
/// `EntityRef::to` at construction.
///

pub trait EntityIdentity {
    fn id(&self) -> &str;
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::None, FieldValue::to_value)
    }
}

// Already-normalized values are passed through untouched.
impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FieldValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! int_field_value {
    ($($ty:ty),+) => {
        $(impl FieldValue for $ty {
            fn to_value(&self) -> Value {
                Value::Int(i64::from(*self))
            }
        })+
    };
}

macro_rules! uint_field_value {
    ($($ty:ty),+) => {
        $(impl FieldValue for $ty {
            fn to_value(&self) -> Value {
                Value::Uint(u64::from(*self))
            }
        })+
    };
}

int_field_value!(i8, i16, i32, i64);
uint_field_value!(u8, u16, u32, u64);

impl FieldValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl FieldValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

// ----------------------------------------------------------------------
// Temporal shapes
// ----------------------------------------------------------------------

/// ISO-8601 local date-time, seconds precision, no offset.
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// ISO-8601 local date.
const DATE_FORMAT: &str = "%Y-%m-%d";

// An instant has no civil meaning on its own; it enters the engine as
// the civil date-time it denotes in the system default zone.
impl FieldValue for DateTime<Utc> {
    fn to_value(&self) -> Value {
        self.with_timezone(&Local).naive_local().to_value()
    }
}

impl FieldValue for DateTime<Local> {
    fn to_value(&self) -> Value {
        self.naive_local().to_value()
    }
}

impl FieldValue for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::Text(self.format(DATE_TIME_FORMAT).to_string())
    }
}

impl FieldValue for NaiveDate {
    fn to_value(&self) -> Value {
        Value::Text(self.format(DATE_FORMAT).to_string())
    }
}
