use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::{from_str, to_string};
use uuid::Uuid;

use slotio_core::errors::ClientError;
use slotio_core::models::{
    ActiveSession, BookingData, BookingRequest, BookingResponse, SessionDetails, SlotsResponse,
    TimeSlot, UserDetails,
};

#[test]
fn test_time_slot_serialization() {
    let start_time = Utc::now();
    let slot = TimeSlot {
        id: Uuid::new_v4().to_string(),
        start_time,
        end_time: start_time + Duration::minutes(90),
        available: true,
    };

    let json = to_string(&slot).expect("Failed to serialize slot");
    let deserialized: TimeSlot = from_str(&json).expect("Failed to deserialize slot");

    assert_eq!(deserialized, slot);
}

#[test]
fn test_slots_response_deserialization() {
    let json = r#"{
        "slots": [
            {
                "id": "slot_1",
                "start_time": "2024-01-01T09:00:00Z",
                "end_time": "2024-01-01T10:30:00Z",
                "available": false
            }
        ]
    }"#;

    let response: SlotsResponse = from_str(json).expect("Failed to deserialize slots response");

    assert_eq!(response.slots.len(), 1);
    assert_eq!(response.slots[0].id, "slot_1");
    assert!(!response.slots[0].available);
}

#[test]
fn test_empty_slots_response_is_valid() {
    let response: SlotsResponse = from_str(r#"{"slots": []}"#).expect("Failed to deserialize");
    assert!(response.slots.is_empty());
}

#[test]
fn test_booking_request_serialization() {
    let request = BookingRequest {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        slot_id: "slot_7".to_string(),
    };

    let json = to_string(&request).expect("Failed to serialize booking request");

    assert!(json.contains("\"slot_id\":\"slot_7\""));
    assert!(json.contains("\"email\":\"ada@example.com\""));
}

#[test]
fn test_booking_response_success_contract() {
    let response = BookingResponse {
        success: true,
        session_id: Some("sess_42".to_string()),
        message: Some("Booked successfully".to_string()),
    };

    assert_eq!(response.into_session_id().unwrap(), "sess_42");
}

#[test]
fn test_booking_response_success_without_session_id_is_failure() {
    // `{"success": true}` with no id must not be treated as a booking.
    let response: BookingResponse = from_str(r#"{"success": true}"#).expect("Failed to parse");

    match response.into_session_id() {
        Err(ClientError::InvalidResponse(_)) => {}
        other => panic!("expected InvalidResponse, got {other:?}"),
    }
}

#[test]
fn test_booking_response_empty_session_id_is_failure() {
    let response = BookingResponse {
        success: true,
        session_id: Some(String::new()),
        message: None,
    };

    assert!(matches!(
        response.into_session_id(),
        Err(ClientError::InvalidResponse(_))
    ));
}

#[test]
fn test_booking_response_failure_carries_backend_message() {
    let response = BookingResponse {
        success: false,
        session_id: None,
        message: Some("This slot is no longer available".to_string()),
    };

    match response.into_session_id() {
        Err(ClientError::Api(message)) => {
            assert_eq!(message, "This slot is no longer available");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn test_session_details_deserialization() {
    let json = r#"{
        "session_id": "sess_42",
        "user_name": "Ada",
        "user_email": "ada@example.com",
        "start_time": "2024-01-01T11:00:00Z",
        "end_time": "2024-01-01T12:30:00Z",
        "status": "pending"
    }"#;

    let details: SessionDetails = from_str(json).expect("Failed to deserialize session details");

    assert_eq!(details.session_id, "sess_42");
    assert_eq!(details.status, "pending");
    assert_eq!(details.end_time - details.start_time, Duration::minutes(90));
}

#[test]
fn test_active_session_null_body() {
    let session: Option<ActiveSession> = from_str("null").expect("Failed to deserialize null");
    assert!(session.is_none());
}

#[test]
fn test_booking_data_serialization() {
    let start_time = Utc::now();
    let data = BookingData {
        session_id: "sess_9".to_string(),
        start_time,
        end_time: start_time + Duration::minutes(90),
    };

    let json = to_string(&data).expect("Failed to serialize booking data");
    let deserialized: BookingData = from_str(&json).expect("Failed to deserialize booking data");

    assert_eq!(deserialized, data);
}

#[test]
fn test_user_details_equality() {
    let details = UserDetails {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
    };

    assert_eq!(details.clone(), details);
}
