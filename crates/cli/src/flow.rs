use chrono::Utc;
use tracing::{debug, warn};

use slotio_client::BookingApi;
use slotio_core::errors::{ClientError, ClientResult};
use slotio_core::estimate::fallback_window;
use slotio_core::failure::BookingFailure;
use slotio_core::models::{BookingData, BookingRequest, TimeSlot, UserDetails};

/// Map a failed submission to its user-facing category. Backend
/// rejections are categorized by message text; transport and malformed
/// responses are shown as-is.
pub fn categorize_error(err: &ClientError) -> BookingFailure {
    match err {
        ClientError::Api(message) => BookingFailure::categorize(message),
        other => BookingFailure::Other(other.to_string()),
    }
}

/// Submit the booking and resolve the session window for display.
///
/// The session-detail fetch after a successful booking is best-effort:
/// the booking is already committed server-side, so any failure there is
/// papered over with the locally estimated window rather than reported.
/// Only the booking submission itself can fail.
pub async fn complete_booking(
    api: &dyn BookingApi,
    user: &UserDetails,
    slot: &TimeSlot,
) -> ClientResult<BookingData> {
    let session_id = api
        .create_booking(BookingRequest {
            name: user.name.clone(),
            email: user.email.clone(),
            slot_id: slot.id.clone(),
        })
        .await?;
    debug!(%session_id, "booking created");

    match api.get_session_details(&session_id).await {
        Ok(details) => Ok(BookingData {
            session_id,
            start_time: details.start_time,
            end_time: details.end_time,
        }),
        Err(err) => {
            warn!(%err, "session detail fetch failed, using estimated window");
            let (start_time, end_time) = fallback_window(Utc::now());
            Ok(BookingData {
                session_id,
                start_time,
                end_time,
            })
        }
    }
}
