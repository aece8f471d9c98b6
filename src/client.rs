use async_trait::async_trait;
use dotenv::dotenv;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::env;
use tracing::{debug, info, warn};

use crate::error::ApiClientError;
use crate::models::reservation::{DeletePeriodsRequest, SlotId, UserSchedulesResponse};

const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api";

/// Operations the portal needs from the booking backend.
///
/// Fronting the concrete client with a trait lets handlers, the page
/// controller, and tests swap in a mock implementation.
#[async_trait]
pub trait ReservationApi: Send + Sync {
    /// Fetch a user's reservations keyed by ISO date.
    async fn get_schedules_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<UserSchedulesResponse, ApiClientError>;

    /// Delete a single reservation slot.
    async fn delete_schedule(&self, slot_id: &SlotId) -> Result<(), ApiClientError>;

    /// Delete several slots in one batch request.
    async fn delete_periods(&self, ids: &[SlotId]) -> Result<(), ApiClientError>;
}

/// Client for the booking backend API
pub struct BookingApiClient {
    http: Client,
    endpoint: String,
}

impl BookingApiClient {
    /// Create a new booking API client from environment variables
    pub fn new() -> Self {
        dotenv().ok();

        Self {
            http: Client::new(),
            endpoint: env::var("RESERVATION_API_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
        }
    }

    /// Create a client against a specific endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for BookingApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a non-2xx response into an `Api` error carrying the message from
/// the body's `error` field when the upstream supplied one.
async fn api_error(response: Response) -> ApiClientError {
    let status = response.status();
    let body = response.json::<Value>().await.ok();

    ApiClientError::Api {
        status: status.as_u16(),
        message: extract_error_message(status, body.as_ref()),
    }
}

/// The upstream reports failures as `{"error": "..."}`.
pub(crate) fn extract_error_message(status: StatusCode, body: Option<&Value>) -> String {
    body.and_then(|value| value.get("error"))
        .and_then(|message| message.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

#[async_trait]
impl ReservationApi for BookingApiClient {
    async fn get_schedules_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<UserSchedulesResponse, ApiClientError> {
        let url = format!("{}/reservas/usuario/{}", self.endpoint, user_id);

        info!("Fetching reservations for user {}", user_id);
        debug!("API URL: {}", url);

        let response = self.http.get(&url).send().await?;
        info!("Response received with status: {}", response.status());

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body = response.text().await?;
        match serde_json::from_str::<UserSchedulesResponse>(&body) {
            Ok(schedules) => Ok(schedules),
            Err(err) => {
                // A malformed payload renders as an empty schedule, not an error
                warn!("Malformed schedules payload, treating as empty: {}", err);
                Ok(UserSchedulesResponse::default())
            }
        }
    }

    async fn delete_schedule(&self, slot_id: &SlotId) -> Result<(), ApiClientError> {
        let url = format!("{}/reserva/{}", self.endpoint, slot_id);

        info!("Deleting reservation slot {}", slot_id);
        debug!("API URL: {}", url);

        let response = self.http.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(())
    }

    async fn delete_periods(&self, ids: &[SlotId]) -> Result<(), ApiClientError> {
        let url = format!("{}/deletarPeriodos", self.endpoint);
        let request = DeletePeriodsRequest { ids: ids.to_vec() };

        info!("Deleting {} reservation periods", request.ids.len());
        debug!("API URL: {}", url);

        let response = self.http.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(())
    }
}
