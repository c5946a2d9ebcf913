use std::fmt::Display;
use std::fmt::Write as _;

use chrono::{DateTime, TimeZone, Utc};

use slotio_core::models::{BookingData, TimeSlot, UserDetails};
use slotio_core::slots::{self, Period, SlotStatus};

pub fn format_time<Tz: TimeZone>(time: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    time.with_timezone(tz).format("%-I:%M %p").to_string()
}

pub fn format_date<Tz: TimeZone>(time: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    time.with_timezone(tz).format("%A, %B %-d").to_string()
}

pub fn format_datetime<Tz: TimeZone>(time: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    time.with_timezone(tz)
        .format("%A, %B %-d at %-I:%M %p")
        .to_string()
}

fn period_icon(period: Period) -> &'static str {
    match period {
        Period::LateNight => "🌜",
        Period::Morning => "☀️",
        Period::Afternoon => "🌤️",
        Period::Evening => "🌙",
    }
}

fn status_marker(status: SlotStatus) -> &'static str {
    match status {
        SlotStatus::Past => "[past]",
        SlotStatus::Available => "[available]",
        SlotStatus::Booked => "[booked]",
    }
}

/// Render the grouped slot list. Returns the text alongside the slots in
/// render order, so entry `N` on screen is element `N - 1` of the
/// returned vector. Empty periods are skipped entirely. Status is
/// derived from `now` at render time, never cached.
pub fn slot_board<Tz: TimeZone>(
    slots: &[TimeSlot],
    now: DateTime<Utc>,
    tz: &Tz,
) -> (String, Vec<TimeSlot>)
where
    Tz::Offset: Display,
{
    let grouped = slots::group_by_period(slots, tz);
    let mut text = String::new();
    let mut ordered = Vec::with_capacity(slots.len());

    for period in Period::ALL {
        let bucket = grouped.get(period);
        if bucket.is_empty() {
            continue;
        }
        let _ = writeln!(
            text,
            "{} {} ({})",
            period_icon(period),
            period.label(),
            period.time_range()
        );
        for slot in bucket {
            ordered.push(slot.clone());
            let _ = writeln!(
                text,
                "  {:>2}) {} - {}  {}",
                ordered.len(),
                format_time(slot.start_time, tz),
                format_time(slot.end_time, tz),
                status_marker(SlotStatus::of(slot, now))
            );
        }
        let _ = writeln!(text);
    }

    let counts = slots::count_by_status(slots, now);
    let _ = writeln!(
        text,
        "{} available • {} booked • {} past • {} total",
        counts.available, counts.booked, counts.past, counts.total
    );

    (text, ordered)
}

pub fn confirm_prompt<Tz: TimeZone>(slot: &TimeSlot, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    format!(
        "Confirm your booking:\n  {} - {}\n  Duration: 1.5 hours\n  Date: {}",
        format_time(slot.start_time, tz),
        format_time(slot.end_time, tz),
        format_date(slot.start_time, tz),
    )
}

pub fn confirmation_card<Tz: TimeZone>(user: &UserDetails, booking: &BookingData, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    let mut text = String::new();
    let _ = writeln!(text, "Booking confirmed!");
    let _ = writeln!(
        text,
        "Your credentials will be sent to {} at {}.",
        user.email,
        format_time(booking.start_time, tz)
    );
    let _ = writeln!(text);
    let _ = writeln!(text, "  Name:       {}", user.name);
    let _ = writeln!(text, "  Email:      {}", user.email);
    let _ = writeln!(
        text,
        "  Time:       {} - {}",
        format_time(booking.start_time, tz),
        format_time(booking.end_time, tz)
    );
    let _ = writeln!(text, "  Date:       {}", format_date(booking.start_time, tz));
    let _ = writeln!(text, "  Duration:   1.5 hours");
    let _ = writeln!(text, "  Session ID: {}", booking.session_id);
    let _ = writeln!(text);
    let _ = writeln!(
        text,
        "You will be logged out automatically at {}.",
        format_time(booking.end_time, tz)
    );
    let _ = writeln!(text, "Check your email at session start for login details.");
    let _ = write!(text, "Only one person can use the account at a time.");
    text
}
