use async_trait::async_trait;
use mockall::mock;

use slotio_core::errors::ClientResult;
use slotio_core::models::{ActiveSession, BookingRequest, SessionDetails, TimeSlot};

use crate::BookingApi;

// Mock booking API for testing the wizard without a backend.
mock! {
    pub BookingApi {}

    #[async_trait]
    impl BookingApi for BookingApi {
        async fn get_slots(&self) -> ClientResult<Vec<TimeSlot>>;

        async fn create_booking(&self, request: BookingRequest) -> ClientResult<String>;

        async fn get_session_details(&self, session_id: &str) -> ClientResult<SessionDetails>;

        async fn get_active_session(&self) -> ClientResult<Option<ActiveSession>>;
    }
}
