//! Outbound mail transport client.
//!
//! Posts one JSON message per relay to the configured mail API. Failures
//! are classified into the closed transport taxonomy here; nothing is
//! retried.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, error};

use crate::config::MailSettings;
use crate::error::{Result, ServiceError};

/// Request timeout for mail API calls.
const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// One outbound email as the mail API accepts it.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Client for the outbound mail API.
#[derive(Clone)]
pub struct MailClient {
    client: Client,
    settings: MailSettings,
}

impl MailClient {
    /// Create a new mail client from transport settings.
    pub fn new(settings: MailSettings) -> Self {
        let client = Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, settings }
    }

    /// Operator address used as both sender and recipient.
    pub fn account(&self) -> &str {
        &self.settings.account
    }

    /// Deliver one email.
    pub async fn send(&self, email: &OutboundEmail) -> Result<()> {
        debug!(to = %email.to, reply_to = %email.reply_to, "Posting message to mail API");

        let response = self
            .client
            .post(&self.settings.api_url)
            .bearer_auth(&self.settings.token)
            .json(email)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Mail API request failed");
                classify_request_error(&e)
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        error!(%status, body = %body, "Mail API rejected the message");
        Err(classify_status(status, &body))
    }
}

/// Classify a failed request into the transport taxonomy.
fn classify_request_error(err: &reqwest::Error) -> ServiceError {
    let detail = err.to_string();
    if err.is_connect() || err.is_timeout() {
        ServiceError::TransportConnection { detail }
    } else {
        ServiceError::TransportOther { detail }
    }
}

/// Classify a non-success mail API status into the transport taxonomy.
fn classify_status(status: StatusCode, body: &str) -> ServiceError {
    let detail = format!("HTTP {status}: {body}");
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ServiceError::TransportAuth { detail },
        _ => ServiceError::TransportOther { detail },
    }
}
