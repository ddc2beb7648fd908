// src/recaptcha/mod.rs

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::SiteVerifyResponse;

pub mod google;

pub use google::GoogleVerifier;

/// Lowest score accepted as human traffic.
pub const MIN_SCORE: f64 = 0.5;

/// Something that can check a client token against a reCAPTCHA backend.
///
/// Held behind `Arc<dyn SiteVerifier>` in the application state, so handlers can be
/// exercised against a stub backend.
#[async_trait]
pub trait SiteVerifier: Send + Sync {
    /// Verifies `token` and returns the backend's verdict unchanged.
    async fn verify(&self, token: &str) -> Result<SiteVerifyResponse>;
}

impl SiteVerifyResponse {
    /// True when the score clears [`MIN_SCORE`].
    pub fn is_human(&self) -> bool {
        self.score >= MIN_SCORE
    }

    /// The client-facing message for a verdict Google reported as failed.
    pub fn failure_message(&self) -> String {
        let mut message = "reCAPTCHA validation failed".to_string();
        if !self.error_codes.is_empty() {
            message.push_str(": ");
            message.push_str(&self.error_codes.join(", "));
        }
        message
    }
}
