use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A dynamically bound SQL parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    OptionalText(Option<String>),
    Integer(i64),
    Uuid(Uuid),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<Option<String>> for SqlValue {
    fn from(value: Option<String>) -> Self {
        SqlValue::OptionalText(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<Uuid> for SqlValue {
    fn from(value: Uuid) -> Self {
        SqlValue::Uuid(value)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(value: NaiveDate) -> Self {
        SqlValue::Date(value)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(value: DateTime<Utc>) -> Self {
        SqlValue::Timestamp(value)
    }
}

/// Binds every value in order onto a `sqlx` query, query_as or query_scalar.
macro_rules! bind_values {
    ($query:expr, $values:expr) => {{
        let mut query = $query;
        for value in $values {
            query = match value {
                $crate::database::value::SqlValue::Text(v) => query.bind(v),
                $crate::database::value::SqlValue::OptionalText(v) => query.bind(v),
                $crate::database::value::SqlValue::Integer(v) => query.bind(v),
                $crate::database::value::SqlValue::Uuid(v) => query.bind(v),
                $crate::database::value::SqlValue::Date(v) => query.bind(v),
                $crate::database::value::SqlValue::Timestamp(v) => query.bind(v),
            };
        }
        query
    }};
}

pub(crate) use bind_values;
