use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ClientError, ClientResult};

/// Details captured on the wizard's form step. Held in memory for one
/// wizard pass and cleared on start-over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetails {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub slot_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub success: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl BookingResponse {
    /// Apply the booking success contract: a booking counts as created
    /// only when `success` is true and `session_id` is a non-empty
    /// string. Anything else is a failure even on HTTP 2xx.
    pub fn into_session_id(self) -> ClientResult<String> {
        if !self.success {
            let message = self
                .message
                .unwrap_or_else(|| "Booking was not accepted".to_string());
            return Err(ClientError::Api(message));
        }
        match self.session_id {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(ClientError::InvalidResponse(
                "booking reported success without a session id".to_string(),
            )),
        }
    }
}

/// The committed booking as the wizard displays it. The bounds come from
/// the session-detail fetch, or from the local fallback estimate when
/// that fetch fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingData {
    pub session_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}
