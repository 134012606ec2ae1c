//! Configuration loaded from the process environment.
//!
//! Settings are read once at startup and passed into the service
//! constructor. Missing mail credentials are deliberately not an error
//! here: they surface as a configuration failure on the first relay call,
//! so an unconfigured deployment still serves the download endpoint.

use std::env;
use std::path::PathBuf;

/// Default listener port for the standalone server.
pub const DEFAULT_PORT: u16 = 5000;

/// Default location of the pre-provisioned resume PDF.
pub const DEFAULT_RESUME_PATH: &str = "uploads/resume.pdf";

/// Outbound mail transport settings.
#[derive(Debug, Clone)]
pub struct MailSettings {
    /// Mail API endpoint the relay posts to.
    pub api_url: String,
    /// Operator address, used as both sender and recipient.
    pub account: String,
    /// Bearer credential for the mail API.
    pub token: String,
}

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Mail transport settings, `None` when the environment is incomplete.
    pub mail: Option<MailSettings>,
    /// Path to the resume PDF.
    pub resume_path: PathBuf,
    /// Listener port for the standalone server.
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mail: None,
            resume_path: PathBuf::from(DEFAULT_RESUME_PATH),
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// The mail transport is configured only when `MAIL_API_URL`,
    /// `MAIL_ACCOUNT` and `MAIL_TOKEN` are all set and non-empty.
    pub fn from_env() -> Self {
        let mail = match (var("MAIL_API_URL"), var("MAIL_ACCOUNT"), var("MAIL_TOKEN")) {
            (Some(api_url), Some(account), Some(token)) => Some(MailSettings {
                api_url,
                account,
                token,
            }),
            _ => None,
        };

        let resume_path = var("RESUME_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESUME_PATH));

        let port = var("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            mail,
            resume_path,
            port,
        }
    }

    /// Create settings with a custom resume path.
    pub fn with_resume_path(resume_path: PathBuf) -> Self {
        Self {
            resume_path,
            ..Default::default()
        }
    }
}

/// Read an environment variable, treating empty values as unset.
fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.mail.is_none());
        assert_eq!(settings.resume_path, PathBuf::from("uploads/resume.pdf"));
        assert_eq!(settings.port, 5000);
    }

    #[test]
    fn test_with_resume_path() {
        let settings = Settings::with_resume_path(PathBuf::from("/tmp/cv.pdf"));
        assert_eq!(settings.resume_path, PathBuf::from("/tmp/cv.pdf"));
        assert!(settings.mail.is_none());
    }
}
