// src/lib.rs
pub mod config;
pub mod errors;
pub mod recaptcha;
pub mod models;
pub mod banner;
pub mod api;
