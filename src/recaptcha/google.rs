// src/recaptcha/google.rs

use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;

use crate::errors::{Result, VerifyError};
use crate::models::SiteVerifyResponse;
use crate::recaptcha::SiteVerifier;

pub const SITEVERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Verifies tokens against Google's siteverify API.
pub struct GoogleVerifier {
    client: Client,
    secret: String,
    endpoint: String,
}

impl GoogleVerifier {
    /// Creates a new `GoogleVerifier` talking to [`SITEVERIFY_URL`].
    pub fn new(client: Client, secret: impl Into<String>) -> Self {
        Self {
            client,
            secret: secret.into(),
            endpoint: SITEVERIFY_URL.to_string(),
        }
    }

    /// Points the verifier at another siteverify-compatible URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SiteVerifier for GoogleVerifier {
    async fn verify(&self, token: &str) -> Result<SiteVerifyResponse> {
        if self.secret.is_empty() {
            return Err(VerifyError::MissingSecret);
        }

        log::debug!("Calling siteverify: {}", self.endpoint);

        let params = [("secret", self.secret.as_str()), ("response", token)];
        let start = Instant::now();

        let resp = self.client.post(&self.endpoint).form(&params).send().await?;

        let status = resp.status();
        let body = resp.bytes().await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        log::debug!("siteverify response status: {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            return Err(VerifyError::Provider {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let verdict: SiteVerifyResponse = serde_json::from_slice(&body)?;
        Ok(verdict)
    }
}
