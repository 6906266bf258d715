use crate::utils::time::{parse_iso, to_iso_string};
use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use chrono::Utc;

/// ISO-8601 date-time. Accepts any RFC 3339 string with an offset and
/// always serializes as UTC with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTime(pub chrono::DateTime<Utc>);

#[Scalar(name = "DateTime")]
impl ScalarType for DateTime {
    fn parse(value: Value) -> InputValueResult<Self> {
        match &value {
            Value::String(s) => parse_iso(s)
                .map(DateTime)
                .ok_or_else(|| InputValueError::custom(format!("\"{}\" is not an ISO-8601 date-time", s))),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn is_valid(value: &Value) -> bool {
        matches!(value, Value::String(s) if parse_iso(s).is_some())
    }

    fn to_value(&self) -> Value {
        Value::String(to_iso_string(&self.0))
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(dt: chrono::DateTime<Utc>) -> Self {
        DateTime(dt)
    }
}

impl From<DateTime> for chrono::DateTime<Utc> {
    fn from(dt: DateTime) -> Self {
        dt.0
    }
}
