// src/api/handlers/recaptcha.rs
use actix_web::{web, HttpResponse, Result};
use crate::api::AppState;
use crate::models::{ApiResponse, RecaptchaRequest};

pub async fn validate_recaptcha(
    state: web::Data<AppState>,
    req: web::Json<RecaptchaRequest>,
) -> Result<HttpResponse> {
    let token = req.into_inner().token;

    if token.trim().is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error("The reCAPTCHA token is required")));
    }

    let verdict = match state.verifier.verify(&token).await {
        Ok(verdict) => verdict,
        Err(e) => {
            log::error!("reCAPTCHA verification error: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(format!("Error validating reCAPTCHA: {}", e))));
        }
    };

    if !verdict.success {
        let message = verdict.failure_message();
        log::info!("{}", message);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::rejected(verdict, message)));
    }

    // v3 tokens also carry a score; anything under the threshold is treated as a bot.
    if !verdict.is_human() {
        log::warn!(
            "Low reCAPTCHA score {} for action '{}' on '{}'",
            verdict.score,
            verdict.action,
            verdict.hostname
        );
        return Ok(HttpResponse::BadRequest().json(ApiResponse::rejected(
            verdict,
            "reCAPTCHA score too low. Possible bot detected",
        )));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok(verdict)))
}
