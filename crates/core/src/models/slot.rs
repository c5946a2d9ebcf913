use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One bookable 90-minute window, as returned by `GET /api/slots`.
///
/// `available` is a snapshot taken at fetch time; another user can book
/// the slot between fetch and submission, in which case the booking
/// request fails with the slot-unavailable category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsResponse {
    pub slots: Vec<TimeSlot>,
}
