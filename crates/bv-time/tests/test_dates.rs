//! Integration tests for `Date` construction and arithmetic.

use bv_time::Date;
use proptest::prelude::*;

#[test]
fn serial_matches_known_dates() {
    // Serial 1 = 1900-01-01; a couple of hand-checked anchors
    assert_eq!(Date::from_ymd(1900, 1, 1).unwrap().serial(), 1);
    assert_eq!(Date::from_ymd(1900, 12, 31).unwrap().serial(), 365);
    assert_eq!(Date::from_ymd(1901, 1, 1).unwrap().serial(), 366);
    // 1900 is not a leap year
    assert_eq!(Date::from_ymd(1900, 3, 1).unwrap().serial(), 60);
}

#[test]
fn consecutive_days_are_consecutive_serials() {
    let mut d = Date::from_ymd(2024, 2, 27).unwrap();
    let expected = ["2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"];
    for text in expected {
        d += 1;
        assert_eq!(d.to_string(), text);
    }
}

#[test]
fn quoted_pillar_offsets() {
    // The quoted-pillar layout used throughout the curve tests
    let reference = Date::from_ymd(2025, 1, 2).unwrap();
    let pillars = [reference + 30, reference + 90, reference + 180];
    assert_eq!(pillars[0].to_string(), "2025-02-01");
    assert_eq!(pillars[1].to_string(), "2025-04-02");
    assert_eq!(pillars[2].to_string(), "2025-07-01");
    assert!(pillars.windows(2).all(|w| w[0] < w[1]));
}

proptest! {
    #[test]
    fn serial_ymd_round_trip(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let back = Date::from_ymd(d.year(), d.month(), d.day_of_month()).unwrap();
        prop_assert_eq!(back.serial(), serial);
    }

    #[test]
    fn add_days_is_serial_addition(
        serial in Date::MIN.serial()..=Date::MAX.serial() - 1000,
        n in 0i32..1000,
    ) {
        let d = Date::from_serial(serial).unwrap();
        prop_assert_eq!(d.add_days(n).unwrap().serial(), serial + n);
    }
}
