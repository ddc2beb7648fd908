// src/api/handlers/mod.rs
mod health;
mod methods;
mod recaptcha;

pub use health::health_check;
pub use methods::{get_only, post_only};
pub use recaptcha::validate_recaptcha;
