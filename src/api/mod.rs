// src/api/mod.rs
pub mod routes;
pub mod handlers;
pub mod state;

pub use routes::{configure_routes, cors_policy};
pub use state::AppState;
