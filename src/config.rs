//! Application configuration loaded from the environment.
//!
//! Everything has a sensible default, so the binary runs with no setup.
//! Supported variables:
//! - `RENOCOST_CONTACT_URL`: outbound contact link shown with the turnkey
//!   result; must be an http(s) URL
//! - `RENOCOST_CURRENCY`: currency label appended to formatted amounts

use crate::error::{AppError, Result};

const DEFAULT_CONTACT_URL: &str = "https://www.instagram.com/remont_odessa_legko/";
const DEFAULT_CURRENCY: &str = "UAH";

/// Runtime configuration for the presentation layer. Opaque to the engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub contact_url: String,
    pub currency: String,
}

impl AppConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let contact_url = std::env::var("RENOCOST_CONTACT_URL")
            .unwrap_or_else(|_| DEFAULT_CONTACT_URL.to_string());
        let currency =
            std::env::var("RENOCOST_CURRENCY").unwrap_or_else(|_| DEFAULT_CURRENCY.to_string());
        Self::from_parts(contact_url, currency)
    }

    fn from_parts(contact_url: String, currency: String) -> Result<Self> {
        if !contact_url.starts_with("http://") && !contact_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "RENOCOST_CONTACT_URL must be an http(s) URL, got: {contact_url}"
            )));
        }
        if currency.trim().is_empty() {
            return Err(AppError::Config(
                "RENOCOST_CURRENCY must not be empty".to_string(),
            ));
        }
        Ok(Self {
            contact_url,
            currency,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contact_url: DEFAULT_CONTACT_URL.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}
