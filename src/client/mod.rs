//! Client-side components mirroring the site's contact form and download
//! button.

mod download;
mod form;

pub use download::{DownloadFailed, ResumeDownloader};
pub use form::{ContactForm, FormState, SubmitOutcome};
