// src/models.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /validate-recaptcha`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RecaptchaRequest {
    #[serde(default)]
    pub token: String,
}

/// Google's siteverify reply, passed through to clients as-is.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct SiteVerifyResponse {
    /// A reply without the flag counts as a failed verification.
    #[serde(default)]
    pub success: bool,
    /// Only present for v3 tokens.
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub challenge_ts: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(rename = "error-codes", default, skip_serializing_if = "Vec::is_empty")]
    pub error_codes: Vec<String>,
}

/// The envelope every endpoint answers with.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub success: bool,
    pub error_message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { data: Some(data), success: true, error_message: None }
    }

    /// A failure that still carries a payload, e.g. the provider's verdict.
    pub fn rejected(data: T, message: impl Into<String>) -> Self {
        Self { data: Some(data), success: false, error_message: Some(message.into()) }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self { data: None, success: false, error_message: Some(message.into()) }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}
