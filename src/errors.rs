// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("RECAPTCHA_SECRET_KEY is not configured")]
    MissingSecret,

    #[error("HTTP request to reCAPTCHA failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("reCAPTCHA returned status {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("Failed to parse reCAPTCHA response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VerifyError>;
