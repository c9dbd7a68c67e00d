// Unit tests for date coercion and the dated-transaction omission rule

use crate::dates::{DateLike, explicit_date};
use crate::error::MambuClientError;

use chrono::NaiveDate;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn given_supported_text_forms_when_coerced_then_same_calendar_day() {
    let inputs = [
        "2015-09-04",
        "2015-09-04T00:00:00",
        "2015-09-04T17:30:00.125",
        "2015-09-04 17:30:00",
        "2015-09-04T00:00:00+0000",
        "2015-09-04T23:59:59+02:00",
    ];

    for input in inputs {
        let coerced = DateLike::from(input).coerce_date();

        assert_eq!(coerced.unwrap(), day(2015, 9, 4), "input: {input}");
    }
}

#[test]
fn given_datetime_when_formatted_then_platform_date_only() {
    let datetime = day(2021, 1, 31).and_hms_opt(13, 5, 0).unwrap();

    assert_eq!(DateLike::from(datetime).mambu_date().unwrap(), "2021-01-31");
}

#[test]
fn given_garbage_text_when_coerced_then_invalid_date_names_input() {
    let result = DateLike::from("next tuesday").coerce_date();

    match result {
        Err(MambuClientError::InvalidDate { value, .. }) => assert_eq!(value, "next tuesday"),
        other => panic!("expected InvalidDate, got {other:?}"),
    }
}

/// **VALUE**: Today's date is never sent explicitly.
///
/// **WHY THIS MATTERS**: The platform books an explicitly dated transaction
/// at midnight and an undated one at the current time. Interest and
/// ordering differ between the two.
///
/// **BUG THIS CATCHES**: Would catch comparing the raw input instead of the
/// coerced date (a datetime of today must still be omitted).
#[test]
fn given_absent_or_today_when_explicit_date_then_none() {
    let today = day(2024, 3, 15);
    let today_at_noon = DateLike::from(today.and_hms_opt(12, 0, 0).unwrap());

    assert_eq!(explicit_date(None, today).unwrap(), None);
    assert_eq!(explicit_date(Some(&DateLike::from(today)), today).unwrap(), None);
    assert_eq!(explicit_date(Some(&DateLike::from("2024-03-15")), today).unwrap(), None);
    assert_eq!(explicit_date(Some(&today_at_noon), today).unwrap(), None);
}

#[test]
fn given_other_day_when_explicit_date_then_that_day() {
    let today = day(2024, 3, 15);

    let past = explicit_date(Some(&DateLike::from("2024-03-14")), today).unwrap();
    let future = explicit_date(Some(&DateLike::from(day(2024, 4, 1))), today).unwrap();

    assert_eq!(past, Some(day(2024, 3, 14)));
    assert_eq!(future, Some(day(2024, 4, 1)));
}
