use chrono::{DateTime, Duration, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;

use slotio_core::countdown::Countdown;

#[test]
fn test_zero_diff_is_started() {
    let countdown = Countdown::from_diff(Duration::zero());
    assert!(countdown.is_started());
    assert_eq!(countdown.to_string(), "Session started!");
}

#[test]
fn test_negative_diff_is_started() {
    assert!(Countdown::from_diff(Duration::seconds(-30)).is_started());
}

#[rstest]
#[case(59_999, "59s")]
#[case(60_000, "1m 0s")]
#[case(3_600_000, "1h 0m 0s")]
#[case(1_000, "1s")]
#[case(90 * 60 * 1000, "1h 30m 0s")]
#[case(3_599_999, "59m 59s")]
#[case(2 * 3_600_000 + 5 * 60_000 + 9_000, "2h 5m 9s")]
fn test_formatting_boundaries(#[case] millis: i64, #[case] expected: &str) {
    let countdown = Countdown::from_diff(Duration::milliseconds(millis));
    assert_eq!(countdown.to_string(), expected);
}

#[test]
fn test_until_subtracts_now_from_start() {
    let now: DateTime<Utc> = "2024-01-01T10:00:00Z".parse().expect("valid timestamp");
    let start: DateTime<Utc> = "2024-01-01T11:30:00Z".parse().expect("valid timestamp");

    assert_eq!(Countdown::until(start, now).to_string(), "1h 30m 0s");
    assert!(Countdown::until(now, start).is_started());
}
