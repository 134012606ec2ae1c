//! Service layer for the portfolio backend.
//!
//! This module contains the relay and delivery logic separated from
//! transport concerns. The same service backs the standalone server, the
//! single-invocation handler, and the CLI.

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::config::Settings;
use crate::domain::ContactSubmission;
use crate::error::{Result, ServiceError};
use crate::mailer::{MailClient, OutboundEmail};

/// Fixed user-facing message for a successful relay.
pub const CONTACT_SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Fixed download filename for the resume.
pub const RESUME_FILENAME: &str = "resume.pdf";

/// Content type the resume is served with.
pub const RESUME_CONTENT_TYPE: &str = "application/pdf";

/// The resume document as served to clients.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    /// Filename offered to the browser's save dialog.
    pub filename: &'static str,
    /// Content type of the body.
    pub content_type: &'static str,
    /// Exact file bytes.
    pub bytes: Vec<u8>,
}

/// The portfolio backend contract: contact relay and resume delivery.
pub struct PortfolioService {
    mail: Option<MailClient>,
    resume_path: PathBuf,
}

impl PortfolioService {
    /// Build the service from settings.
    ///
    /// Missing mail configuration is not an error until a relay is
    /// attempted; the download endpoint works either way.
    pub fn new(settings: &Settings) -> Self {
        if settings.mail.is_none() {
            warn!("Mail transport not configured; contact relay will report a configuration error");
        }

        Self {
            mail: settings.mail.clone().map(MailClient::new),
            resume_path: settings.resume_path.clone(),
        }
    }

    /// Relay one contact submission to the operator's mailbox.
    ///
    /// Configuration is checked before the submission is looked at, so an
    /// unconfigured deployment reports the same error for any input. On a
    /// validation failure the mail transport is never invoked. Exactly one
    /// email goes out per successful call; delivery failures are reported
    /// once and never retried.
    pub async fn submit_contact(&self, submission: &ContactSubmission) -> Result<()> {
        let Some(mail) = &self.mail else {
            error!("Contact relay attempted without mail transport configuration");
            return Err(ServiceError::MissingConfiguration);
        };

        submission.validate()?;

        let email = compose_email(mail.account(), submission);
        mail.send(&email).await?;

        info!(
            name = %submission.name,
            email = %submission.email,
            "Relayed contact message"
        );
        Ok(())
    }

    /// Fetch the resume document for download.
    pub async fn fetch_resume(&self) -> Result<ResumeFile> {
        match tokio::fs::read(&self.resume_path).await {
            Ok(bytes) => Ok(ResumeFile {
                filename: RESUME_FILENAME,
                content_type: RESUME_CONTENT_TYPE,
                bytes,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %self.resume_path.display(), "Resume file not found");
                Err(ServiceError::ResumeNotFound)
            }
            Err(e) => {
                error!(path = %self.resume_path.display(), error = %e, "Failed to read resume file");
                Err(ServiceError::ResumeRead(e))
            }
        }
    }
}

/// Compose the relayed email: operator mails themself, with one-click reply
/// to the submitter.
fn compose_email(account: &str, submission: &ContactSubmission) -> OutboundEmail {
    OutboundEmail {
        from: format!("Portfolio Contact <{account}>"),
        to: account.to_string(),
        reply_to: submission.email.clone(),
        subject: format!("New Contact Message from {}", submission.name),
        text: format!(
            "New Contact Message\n\nName: {}\nEmail: {}\nMessage: {}\n",
            submission.name, submission.email, submission.message
        ),
        html: format!(
            "<h3>New Contact Message</h3>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Message:</strong></p>\
             <p>{}</p>",
            submission.name, submission.email, submission.message
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MailSettings;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello!".to_string(),
        }
    }

    /// Settings whose mail transport points at a closed local port, so any
    /// transport call would fail with a connection error rather than hang.
    fn unreachable_mail_settings() -> Settings {
        Settings {
            mail: Some(MailSettings {
                api_url: "http://127.0.0.1:9/send".to_string(),
                account: "owner@example.com".to_string(),
                token: "secret".to_string(),
            }),
            ..Settings::default()
        }
    }

    #[test]
    fn test_compose_email_addressing() {
        let email = compose_email("owner@example.com", &submission());
        assert_eq!(email.to, "owner@example.com");
        assert_eq!(email.from, "Portfolio Contact <owner@example.com>");
        assert_eq!(email.reply_to, "ada@example.com");
        assert_eq!(email.subject, "New Contact Message from Ada Lovelace");
        assert!(email.text.contains("Hello!"));
        assert!(email.html.contains("<strong>Name:</strong> Ada Lovelace"));
    }

    #[tokio::test]
    async fn test_unconfigured_relay_fails_before_validation() {
        let service = PortfolioService::new(&Settings::default());

        // Valid and invalid inputs report the same configuration error.
        let valid = service.submit_contact(&submission()).await;
        assert!(matches!(valid, Err(ServiceError::MissingConfiguration)));

        let invalid = service.submit_contact(&ContactSubmission::default()).await;
        assert!(matches!(invalid, Err(ServiceError::MissingConfiguration)));
    }

    #[tokio::test]
    async fn test_validation_failure_never_touches_transport() {
        let service = PortfolioService::new(&unreachable_mail_settings());

        let mut missing = submission();
        missing.message.clear();
        let result = service.submit_contact(&missing).await;
        assert!(matches!(result, Err(ServiceError::MissingFields)));

        let mut malformed = submission();
        malformed.email = "foo@bar".to_string();
        let result = service.submit_contact(&malformed).await;
        assert!(matches!(result, Err(ServiceError::InvalidEmail)));
    }

    #[tokio::test]
    async fn test_valid_submission_reaches_transport() {
        let service = PortfolioService::new(&unreachable_mail_settings());

        // Validation passes, so the failure comes from the transport layer.
        let result = service.submit_contact(&submission()).await;
        assert!(matches!(
            result,
            Err(ServiceError::TransportConnection { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_resume_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let settings = Settings::with_resume_path(dir.path().join("resume.pdf"));
        let service = PortfolioService::new(&settings);

        let result = service.fetch_resume().await;
        assert!(matches!(result, Err(ServiceError::ResumeNotFound)));
    }

    #[tokio::test]
    async fn test_fetch_resume_returns_exact_bytes() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("resume.pdf");
        let content = b"%PDF-1.4 test resume";
        std::fs::write(&path, content).expect("Failed to write fixture");

        let service = PortfolioService::new(&Settings::with_resume_path(path));
        let resume = service.fetch_resume().await.expect("resume should load");

        assert_eq!(resume.bytes, content);
        assert_eq!(resume.filename, "resume.pdf");
        assert_eq!(resume.content_type, "application/pdf");
    }
}
