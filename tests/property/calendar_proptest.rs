//! Property-based tests for calendar and collection adapters
//!
//! Uses proptest to generate random inputs and verify properties

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use serde_json::json;
use social_api_model::json::{CsvCollectionAdapter, JsonAdapter, SafeCalendarAdapter};
use social_api_model::shared::calendar::SafeCalendar;

proptest! {
    #[test]
    fn test_calendar_never_fails(text in ".*") {
        let adapter = SafeCalendarAdapter::default();
        prop_assert!(adapter.from_json(&json!(text)).is_ok());
    }

    #[test]
    fn test_full_dates_round_trip(year in 1900i32..=2099, ordinal in 1u32..=365) {
        let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let adapter = SafeCalendarAdapter::default();
        let calendar = SafeCalendar::from_date(date);
        let encoded = adapter.to_json(&calendar);
        prop_assert_eq!(adapter.from_json(&encoded).unwrap(), calendar);
        prop_assert_eq!(calendar.date(), Some(date));
    }

    #[test]
    fn test_instants_round_trip(seconds in 0i64..4_000_000_000) {
        let instant = Utc.timestamp_opt(seconds, 0).unwrap();
        let adapter = SafeCalendarAdapter::default();
        let calendar = SafeCalendar::from_datetime(instant);
        let decoded = adapter.from_json(&adapter.to_json(&calendar)).unwrap();
        prop_assert_eq!(decoded.datetime(), Some(instant));
    }

    #[test]
    fn test_years_outside_window_are_unset(year in 1000i32..1900) {
        let adapter = SafeCalendarAdapter::default();
        let calendar = adapter.from_json(&json!(format!("{}-06-15", year))).unwrap();
        prop_assert!(calendar.is_unset());
    }

    #[test]
    fn test_offset_instants_decode_stably(
        seconds in -2_209_075_200i64..4_102_531_200,
        quarter_hours in -48i32..=56,
    ) {
        let offset = FixedOffset::east_opt(quarter_hours * 900).unwrap();
        let local = offset.timestamp_opt(seconds, 0).unwrap();
        let adapter = SafeCalendarAdapter::default();
        let decoded = adapter.from_json(&json!(local.format("%Y-%m-%dT%H:%M:%S%:z").to_string())).unwrap();
        let again = adapter.from_json(&adapter.to_json(&decoded)).unwrap();
        prop_assert_eq!(again, decoded);
        if let Some(year) = decoded.year() {
            prop_assert!((1900..=2099).contains(&year));
        }
    }

    #[test]
    fn test_csv_round_trip(items in prop::collection::vec("[a-z][a-z ]{0,10}[a-z]", 0..8)) {
        let adapter = CsvCollectionAdapter::default();
        let encoded = adapter.to_json(&items);
        prop_assert_eq!(adapter.from_json(&encoded).unwrap(), items);
    }
}
