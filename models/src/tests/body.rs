// Unit tests for Body serialization
// Nested records, dates, collections

use crate::{Body, RecordKind, SchemaRegistry};

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// **VALUE**: Records nested anywhere in a body serialize as their field maps.
///
/// **WHY THIS MATTERS**: Create calls wrap records in envelopes such as
/// `{"client": ..., "addresses": [...]}`. A record that serialized as
/// anything else would corrupt the whole request.
#[test]
fn given_records_nested_in_map_and_list_when_serialized_then_each_becomes_object() {
    let registry = SchemaRegistry::builtin();
    let client = registry
        .record_from(RecordKind::Client, [("firstName", "Ada")])
        .unwrap();
    let address = registry
        .record_from(RecordKind::Address, [("city", "London")])
        .unwrap();

    let body = Body::map([
        ("client", Body::from(client)),
        ("addresses", Body::from(vec![address])),
    ]);

    assert_eq!(
        body.to_json().unwrap(),
        json!({"client": {"firstName": "Ada"}, "addresses": [{"city": "London"}]})
    );
}

#[test]
fn given_dates_when_serialized_then_iso_strings() {
    let midnight = date(2015, 9, 4).and_hms_opt(0, 0, 0).unwrap();
    let with_millis = date(2015, 9, 4).and_hms_milli_opt(10, 30, 0, 250).unwrap();
    let stamp = Utc.with_ymd_and_hms(2015, 9, 4, 8, 0, 0).unwrap();

    let body = Body::list([
        Body::from(date(2015, 9, 4)),
        Body::from(midnight),
        Body::from(with_millis),
        Body::from(stamp),
    ]);

    assert_eq!(
        body.to_json().unwrap(),
        json!([
            "2015-09-04",
            "2015-09-04T00:00:00",
            "2015-09-04T10:30:00.250",
            "2015-09-04T08:00:00+00:00"
        ])
    );
}

#[test]
fn given_date_inside_record_when_serialized_then_formatted() {
    let record = SchemaRegistry::builtin()
        .record_from(
            RecordKind::LoanTransaction,
            [("type", Body::from("FEE")), ("date", Body::from(date(2016, 1, 31)))],
        )
        .unwrap();

    assert_eq!(
        Body::from(record).to_json().unwrap(),
        json!({"type": "FEE", "date": "2016-01-31"})
    );
}

#[test]
fn given_none_when_converted_then_null() {
    let missing: Option<&str> = None;

    assert!(Body::from(missing).is_null());
    assert_eq!(Body::from(Some("x")), Body::from("x"));
}

#[test]
fn given_non_finite_float_when_converted_then_null() {
    assert!(Body::from(f64::NAN).is_null());
}

#[test]
fn given_plain_map_when_serialized_then_keys_sorted_object() {
    let mut entries = BTreeMap::new();
    entries.insert("value".to_string(), Body::from(3));
    entries.insert("customFieldID".to_string(), Body::from("c_city"));

    let json = Body::from(entries).to_json().unwrap();

    assert_eq!(json, json!({"customFieldID": "c_city", "value": 3}));
}
