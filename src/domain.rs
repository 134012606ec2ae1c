//! Contact submission domain type and validation.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{Result, ServiceError};

/// One contact-form submission.
///
/// Exists only for the duration of a single request; never persisted.
/// Missing JSON fields deserialize to empty strings so that absence and
/// emptiness are reported through the same validation path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

impl ContactSubmission {
    /// Check field presence and email shape.
    ///
    /// All three fields must be non-empty, and `email` must look like
    /// `local@domain.tld`. The relay never touches the mail transport when
    /// this fails.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ServiceError::MissingFields);
        }
        if !email_regex().is_match(&self.email) {
            return Err(ServiceError::InvalidEmail);
        }
        Ok(())
    }
}
