// src/api/state.rs
use crate::config::AppConfig;
use crate::recaptcha::{GoogleVerifier, SiteVerifier};
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<dyn SiteVerifier>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let verifier = GoogleVerifier::new(Client::new(), config.secret_key.clone());
        Self::with_verifier(Arc::new(verifier))
    }

    pub fn with_verifier(verifier: Arc<dyn SiteVerifier>) -> Self {
        Self { verifier }
    }
}
