//! Request body values.
//!
//! `Body` is the tagged union handed to the dispatcher: plain JSON, dates,
//! Typed Records, and lists or maps of any of these. Serialization walks the
//! tree once, emitting records as their field maps and dates as ISO-8601.

use crate::Record;

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// `YYYY-MM-DD`, the platform's date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `YYYY-MM-DDTHH:MM:SS`, with a fractional part only when non-zero.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Timestamp(DateTime<FixedOffset>),
    Record(Record),
    List(Vec<Body>),
    Map(BTreeMap<String, Body>),
}

impl Body {
    pub fn null() -> Self {
        Body::Json(Value::Null)
    }

    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Body>,
    {
        Body::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Body>,
    {
        Body::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Body::Json(Value::Null))
    }

    /// Render as a JSON tree.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Render as a single query-string value. Strings are passed through
    /// unquoted; everything else uses its JSON text.
    pub fn to_query_value(&self) -> String {
        match self {
            Body::Json(Value::String(text)) => text.clone(),
            Body::Json(value) => value.to_string(),
            Body::Date(date) => format_date(date),
            Body::DateTime(datetime) => format_datetime(datetime),
            Body::Timestamp(timestamp) => format_timestamp(timestamp),
            nested => serde_json::to_string(nested).unwrap_or_default(),
        }
    }
}

impl Serialize for Body {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Body::Json(value) => value.serialize(serializer),
            Body::Date(date) => serializer.serialize_str(&format_date(date)),
            Body::DateTime(datetime) => serializer.serialize_str(&format_datetime(datetime)),
            Body::Timestamp(timestamp) => serializer.serialize_str(&format_timestamp(timestamp)),
            Body::Record(record) => record.serialize(serializer),
            Body::List(items) => serializer.collect_seq(items),
            Body::Map(entries) => serializer.collect_map(entries),
        }
    }
}

fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn format_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format(DATETIME_FORMAT).to_string()
}

fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

// ============================================
// CONVERSIONS
// ============================================

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Body::Json(value)
    }
}

impl From<&str> for Body {
    fn from(value: &str) -> Self {
        Body::Json(Value::from(value))
    }
}

impl From<String> for Body {
    fn from(value: String) -> Self {
        Body::Json(Value::from(value))
    }
}

impl From<bool> for Body {
    fn from(value: bool) -> Self {
        Body::Json(Value::from(value))
    }
}

impl From<i32> for Body {
    fn from(value: i32) -> Self {
        Body::Json(Value::from(value))
    }
}

impl From<i64> for Body {
    fn from(value: i64) -> Self {
        Body::Json(Value::from(value))
    }
}

impl From<u32> for Body {
    fn from(value: u32) -> Self {
        Body::Json(Value::from(value))
    }
}

impl From<u64> for Body {
    fn from(value: u64) -> Self {
        Body::Json(Value::from(value))
    }
}

/// Non-finite values become JSON `null`.
impl From<f64> for Body {
    fn from(value: f64) -> Self {
        Body::Json(Value::from(value))
    }
}

impl From<NaiveDate> for Body {
    fn from(value: NaiveDate) -> Self {
        Body::Date(value)
    }
}

impl From<NaiveDateTime> for Body {
    fn from(value: NaiveDateTime) -> Self {
        Body::DateTime(value)
    }
}

impl From<DateTime<FixedOffset>> for Body {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Body::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for Body {
    fn from(value: DateTime<Utc>) -> Self {
        Body::Timestamp(value.fixed_offset())
    }
}

impl From<Record> for Body {
    fn from(value: Record) -> Self {
        Body::Record(value)
    }
}

impl From<Vec<Record>> for Body {
    fn from(value: Vec<Record>) -> Self {
        Body::List(value.into_iter().map(Body::Record).collect())
    }
}

impl From<Vec<Body>> for Body {
    fn from(value: Vec<Body>) -> Self {
        Body::List(value)
    }
}

impl From<BTreeMap<String, Body>> for Body {
    fn from(value: BTreeMap<String, Body>) -> Self {
        Body::Map(value)
    }
}

impl<T: Into<Body>> From<Option<T>> for Body {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_else(Body::null)
    }
}
