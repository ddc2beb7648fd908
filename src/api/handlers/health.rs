// src/api/handlers/health.rs
use actix_web::{HttpResponse, Result};
use crate::models::{ApiResponse, HealthStatus};

pub const SERVICE_NAME: &str = "reCAPTCHA Validation Service";

pub async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(HealthStatus {
        status: "OK".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })))
}
