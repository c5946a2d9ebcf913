use chrono::{DateTime, Duration, Utc};

/// Length of every bookable session.
pub fn session_length() -> Duration {
    Duration::minutes(90)
}

/// Locally estimated session window, used for display only when the
/// session-detail fetch after a successful booking fails. The start is
/// `now` rounded up to the next `:00` or `:30` boundary; when `now` sits
/// exactly on a boundary the estimate advances to the next whole hour.
pub fn fallback_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let secs = now.timestamp();
    let subsec = i64::from(now.timestamp_subsec_nanos());
    let on_boundary = secs.rem_euclid(1800) == 0 && subsec == 0;

    let start_secs = if on_boundary {
        (secs.div_euclid(3600) + 1) * 3600
    } else {
        (secs.div_euclid(1800) + 1) * 1800
    };

    let start = now + Duration::seconds(start_secs - secs) - Duration::nanoseconds(subsec);
    (start, start + session_length())
}
