//! # Slotio Client
//!
//! The typed API client for the Slotio booking backend. The wizard
//! frontend depends on the [`BookingApi`] trait rather than on concrete
//! transport details, so tests can substitute the mock in [`mock`] while
//! the binary wires in [`HttpApiClient`] over reqwest.

/// Client configuration from environment variables
pub mod config;
/// The reqwest-backed implementation of [`BookingApi`]
pub mod http;
/// A mockall double of [`BookingApi`] for tests
pub mod mock;

use async_trait::async_trait;
use slotio_core::errors::ClientResult;
use slotio_core::models::{ActiveSession, BookingRequest, SessionDetails, TimeSlot};

pub use config::ClientConfig;
pub use http::HttpApiClient;

/// The booking API consumed by the wizard. The backend is the sole
/// source of truth for slot availability and booking outcomes; this
/// trait only moves data.
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// `GET /api/slots` — the bookable slots for the next 24 hours. An
    /// empty list is a valid response, not an error.
    async fn get_slots(&self) -> ClientResult<Vec<TimeSlot>>;

    /// `POST /api/bookings` — returns the session id on success. A 2xx
    /// response that does not satisfy the success contract (`success`
    /// true plus a non-empty `session_id`) is an error.
    async fn create_booking(&self, request: BookingRequest) -> ClientResult<String>;

    /// `GET /api/sessions/{id}` — authoritative bounds for a booked
    /// session. Callers treat failures as best-effort and fall back to a
    /// locally estimated window.
    async fn get_session_details(&self, session_id: &str) -> ClientResult<SessionDetails>;

    /// `GET /api/sessions/active` — the session currently in progress,
    /// if any.
    async fn get_active_session(&self) -> ClientResult<Option<ActiveSession>>;
}
