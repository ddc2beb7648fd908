// src/api/handlers/methods.rs
use actix_web::{http::header, HttpResponse, Result};
use crate::models::ApiResponse;

fn method_not_allowed(allow: &str) -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, allow.to_string()))
        .json(ApiResponse::error(format!("Method not allowed. Use {}", allow)))
}

/// Fallback for resources that only answer POST.
pub async fn post_only() -> Result<HttpResponse> {
    Ok(method_not_allowed("POST"))
}

/// Fallback for resources that only answer GET.
pub async fn get_only() -> Result<HttpResponse> {
    Ok(method_not_allowed("GET"))
}
