//! Portfolio site backend: contact-form relay and resume delivery.
//!
//! The contract (validate-and-relay a contact submission, serve a fixed
//! resume PDF as a download) is implemented once in
//! [`services::PortfolioService`] and exposed through two thin adapters: a
//! long-running HTTP listener ([`server`]) and a single-invocation handler
//! for function platforms ([`function`]). The [`client`] module holds the
//! matching form and download components.

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod function;
pub mod mailer;
pub mod server;
pub mod services;
