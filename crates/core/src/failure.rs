use std::borrow::Cow;

/// User-facing category for a rejected booking, derived from the backend
/// message text alone. The backend remains the source of truth for why a
/// booking failed; this only picks the wording shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingFailure {
    /// One booking per email per day.
    DuplicateBooking,
    /// The slot went stale between fetch and submission.
    SlotUnavailable,
    /// Stale or incorrect slot identifier; a refresh usually fixes it.
    InvalidSlot,
    /// Anything else is shown verbatim.
    Other(String),
}

impl BookingFailure {
    /// Case-insensitive substring match against the backend message.
    pub fn categorize(message: &str) -> Self {
        let lowered = message.to_lowercase();
        if lowered.contains("already booked") || lowered.contains("duplicate") {
            BookingFailure::DuplicateBooking
        } else if lowered.contains("not available") || lowered.contains("unavailable") {
            BookingFailure::SlotUnavailable
        } else if lowered.contains("invalid slot") {
            BookingFailure::InvalidSlot
        } else {
            BookingFailure::Other(message.to_string())
        }
    }

    pub fn user_message(&self) -> Cow<'_, str> {
        match self {
            BookingFailure::DuplicateBooking => Cow::Borrowed(
                "You have already booked a slot today. Each email can only book one slot per day.",
            ),
            BookingFailure::SlotUnavailable => {
                Cow::Borrowed("This slot is no longer available. Please choose another slot.")
            }
            BookingFailure::InvalidSlot => {
                Cow::Borrowed("Invalid slot selected. Please refresh and try again.")
            }
            BookingFailure::Other(message) => Cow::Borrowed(message),
        }
    }
}
