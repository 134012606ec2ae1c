//! Contact form client component.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error};

/// Lifecycle of the form between user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
}

/// Settled result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The relay accepted the submission; the fields were cleared.
    Success { message: String },
    /// The relay or the network rejected it; the fields were kept.
    Failure { message: String },
}

/// What the relay answers; success and failure bodies both carry `message`.
#[derive(Debug, Deserialize)]
struct RelayReply {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// The contact form: three text fields and a submission state machine.
///
/// `Idle → Submitting → Idle`; a second submit while one is in flight is
/// refused rather than queued, and nothing is retried automatically; the
/// user resubmits by hand.
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    state: FormState,
    client: Client,
    endpoint: String,
}

impl ContactForm {
    /// Create an empty form posting to `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            state: FormState::Idle,
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Current submission state.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Fill the three fields.
    pub fn fill(&mut self, name: &str, email: &str, message: &str) {
        self.name = name.to_string();
        self.email = email.to_string();
        self.message = message.to_string();
    }

    /// Submit the current fields to the relay.
    ///
    /// Returns `None` when a submission is already in flight. On success
    /// the fields are cleared; on any failure they are kept so the user can
    /// correct and resubmit.
    pub async fn submit(&mut self) -> Option<SubmitOutcome> {
        if self.state == FormState::Submitting {
            return None;
        }
        self.state = FormState::Submitting;

        let outcome = self.post().await;

        self.state = FormState::Idle;
        if matches!(outcome, SubmitOutcome::Success { .. }) {
            self.name.clear();
            self.email.clear();
            self.message.clear();
        }
        Some(outcome)
    }

    async fn post(&self) -> SubmitOutcome {
        let payload = json!({
            "name": self.name,
            "email": self.email,
            "message": self.message,
        });

        let response = match self.client.post(&self.endpoint).json(&payload).send().await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Contact request failed");
                let message = if e.is_connect() {
                    "Error sending message. Cannot connect to server.".to_string()
                } else {
                    "Error sending message. Please check your connection and try again."
                        .to_string()
                };
                return SubmitOutcome::Failure { message };
            }
        };

        let ok = response.status().is_success();

        // A body that is not the relay's JSON shape is its own failure
        // class, distinct from validation and transport errors.
        let reply: RelayReply = match response.json().await {
            Ok(reply) => reply,
            Err(e) => {
                debug!(error = %e, "Relay response was not JSON");
                return SubmitOutcome::Failure {
                    message: "Server did not respond properly. Is the backend server running?"
                        .to_string(),
                };
            }
        };

        if ok {
            SubmitOutcome::Success {
                message: reply
                    .message
                    .unwrap_or_else(|| "Message sent successfully!".to_string()),
            }
        } else {
            SubmitOutcome::Failure {
                message: reply
                    .message
                    .or(reply.error)
                    .unwrap_or_else(|| "Failed to send message. Please try again.".to_string()),
            }
        }
    }
}
