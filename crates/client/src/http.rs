use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use slotio_core::errors::{ClientError, ClientResult};
use slotio_core::models::{
    ActiveSession, BookingRequest, BookingResponse, SessionDetails, SlotsResponse, TimeSlot,
};

use crate::{BookingApi, ClientConfig};

/// [`BookingApi`] over HTTP. All requests carry JSON bodies against the
/// configured base URL; no authentication is required for the booking
/// flow.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(transport)?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }
}

#[async_trait]
impl BookingApi for HttpApiClient {
    async fn get_slots(&self) -> ClientResult<Vec<TimeSlot>> {
        debug!("fetching slots");
        let response: SlotsResponse = self.get_json("/api/slots").await?;
        debug!(count = response.slots.len(), "fetched slots");
        Ok(response.slots)
    }

    async fn create_booking(&self, request: BookingRequest) -> ClientResult<String> {
        debug!(slot_id = %request.slot_id, "submitting booking");
        let response: BookingResponse = self.post_json("/api/bookings", &request).await?;
        response.into_session_id()
    }

    async fn get_session_details(&self, session_id: &str) -> ClientResult<SessionDetails> {
        self.get_json(&format!("/api/sessions/{session_id}")).await
    }

    async fn get_active_session(&self) -> ClientResult<Option<ActiveSession>> {
        self.get_json("/api/sessions/active").await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Api(error_message(status, response).await));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ClientError::InvalidResponse(err.to_string()))
}

/// Pull the backend's `detail` or `message` field out of an error body,
/// falling back to the status line when the body is not JSON.
async fn error_message(status: StatusCode, response: Response) -> String {
    #[derive(Debug, Default, serde::Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
        message: Option<String>,
    }

    let body: ErrorBody = response.json().await.unwrap_or_default();
    body.detail
        .or(body.message)
        .unwrap_or_else(|| format!("HTTP {status}"))
}

fn transport(err: reqwest::Error) -> ClientError {
    ClientError::Transport(Box::new(err))
}
