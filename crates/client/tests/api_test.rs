use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;

use slotio_client::mock::MockBookingApi;
use slotio_client::{BookingApi, ClientConfig, HttpApiClient};
use slotio_core::errors::ClientError;
use slotio_core::models::{BookingRequest, TimeSlot};

#[test]
fn test_http_client_trims_trailing_slash() {
    let config = ClientConfig {
        api_base_url: "https://api.slotio.example/".to_string(),
        request_timeout: 5,
    };

    let client = HttpApiClient::new(&config).expect("client should build");

    assert_eq!(client.base_url(), "https://api.slotio.example");
}

#[tokio::test]
async fn test_mock_returns_slots() {
    let mut api = MockBookingApi::new();
    let start_time = Utc::now() + Duration::hours(1);
    let slot = TimeSlot {
        id: "slot_1".to_string(),
        start_time,
        end_time: start_time + Duration::minutes(90),
        available: true,
    };
    let expected = vec![slot.clone()];
    api.expect_get_slots().returning(move || Ok(expected.clone()));

    let slots = api.get_slots().await.expect("mock should return slots");

    assert_eq!(slots, vec![slot]);
}

#[tokio::test]
async fn test_mock_propagates_booking_rejection() {
    let mut api = MockBookingApi::new();
    api.expect_create_booking()
        .withf(|request: &BookingRequest| request.slot_id == "slot_1")
        .returning(|_| Err(ClientError::Api("This slot is no longer available".to_string())));

    let result = api
        .create_booking(BookingRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            slot_id: "slot_1".to_string(),
        })
        .await;

    match result {
        Err(ClientError::Api(message)) => {
            assert_eq!(message, "This slot is no longer available");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
