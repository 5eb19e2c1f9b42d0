use anyhow::{anyhow, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::models::BookingSubmission;

/// Client for the external booking API, the system of record for actual
/// availability and conflicts. The caller's bearer token is forwarded
/// opaquely; no verification happens here.
pub struct BookingService {
    client: Client,
    base_url: String,
    api_key: String,
}

impl BookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.booking_api_url.clone(),
            api_key: config.booking_api_key.clone(),
        }
    }

    fn headers(&self, auth_token: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if !self.api_key.is_empty() {
            headers.insert("apikey", HeaderValue::from_str(&self.api_key)?);
        }
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", auth_token))?,
        );

        Ok(headers)
    }

    /// Forward a booking submission upstream and return the created booking.
    pub async fn submit_booking(
        &self,
        submission: &BookingSubmission,
        auth_token: &str,
    ) -> Result<Value> {
        let url = format!("{}/bookings", self.base_url);
        debug!(
            "Forwarding booking for resource {} at {} to {}",
            submission.resource_id, submission.appointment_time, url
        );

        let response = self
            .client
            .post(&url)
            .headers(self.headers(auth_token)?)
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Booking API error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Authentication error: {}", error_text),
                409 => anyhow!("Booking conflict: {}", error_text),
                _ => anyhow!("Booking API error ({}): {}", status, error_text),
            });
        }

        let booking = response.json::<Value>().await?;
        Ok(booking)
    }
}
