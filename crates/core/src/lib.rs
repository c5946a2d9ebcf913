//! # Slotio Core
//!
//! Domain types and pure logic for the Slotio booking client: wire models
//! for the booking API, the wizard state machine, slot grouping and status
//! derivation, countdown formatting, and the fallback session-window
//! estimate. This crate performs no I/O; transport lives in
//! `slotio-client` and the interactive frontend in `slotio-cli`.

/// Countdown-to-session-start formatting
pub mod countdown;
/// Error types shared across the client
pub mod errors;
/// Fallback session-window estimation
pub mod estimate;
/// Booking-failure categorization
pub mod failure;
/// Wire models and in-memory booking state
pub mod models;
/// Slot grouping and derived display status
pub mod slots;
/// The booking wizard state machine
pub mod wizard;
