#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn now_iso_round_trips_through_rfc3339() {
    let now = now_iso();
    assert!(OffsetDateTime::parse(&now, &Rfc3339).is_ok(), "{now}");
}

#[test]
fn time_of_day_formats_hours_and_minutes_in_utc() {
    assert_eq!(time_of_day("2025-06-01T09:05:00Z"), "09:05");
    assert_eq!(time_of_day("2025-06-01T09:05:00+02:00"), "07:05");
}

#[test]
fn time_of_day_is_empty_for_garbage() {
    assert_eq!(time_of_day("yesterday"), "");
}

#[test]
fn date_time_formats_full_stamp() {
    assert_eq!(date_time("2025-06-01T23:59:00Z"), "2025-06-01 23:59");
}
