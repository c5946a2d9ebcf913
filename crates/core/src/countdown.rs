use std::fmt;

use chrono::{DateTime, Duration, Utc};

/// Time remaining until a session starts, recomputed once per second by
/// the display loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// The start time has been reached; the loop stops after this.
    Started,
    Remaining {
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
}

impl Countdown {
    pub fn until(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_diff(start - now)
    }

    pub fn from_diff(diff: Duration) -> Self {
        if diff <= Duration::zero() {
            return Countdown::Started;
        }
        Countdown::Remaining {
            hours: diff.num_hours(),
            minutes: diff.num_minutes() % 60,
            seconds: diff.num_seconds() % 60,
        }
    }

    pub fn is_started(self) -> bool {
        matches!(self, Countdown::Started)
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Countdown::Started => write!(f, "Session started!"),
            Countdown::Remaining {
                hours,
                minutes,
                seconds,
            } => {
                if hours > 0 {
                    write!(f, "{hours}h {minutes}m {seconds}s")
                } else if minutes > 0 {
                    write!(f, "{minutes}m {seconds}s")
                } else {
                    write!(f, "{seconds}s")
                }
            }
        }
    }
}
