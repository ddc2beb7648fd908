// src/api/routes.rs
use actix_cors::Cors;
use actix_web::{error, http::header, web, HttpResponse};
use super::handlers;
use crate::models::ApiResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    for path in ["/", "/health"] {
        cfg.service(
            web::resource(path)
                .route(web::get().to(handlers::health_check))
                .default_service(web::to(handlers::get_only)),
        );
    }
    cfg.service(
        web::resource("/validate-recaptcha")
            .app_data(json_config())
            .route(web::post().to(handlers::validate_recaptcha))
            .default_service(web::to(handlers::post_only)),
    );
}

/// Any origin may call the service from a browser.
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}

/// Malformed bodies still get the JSON envelope instead of actix's plain-text error.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            let message = format!("Error parsing request: {}", err);
            log::info!("{}", message);
            let response = HttpResponse::BadRequest().json(ApiResponse::error(message));
            error::InternalError::from_response(err, response).into()
        })
}
