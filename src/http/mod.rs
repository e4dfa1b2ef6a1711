//! HTTP server module
//!
//! This module handles HTTP request routing and handling:
//! - Axum router with the player page, video lookup and caption upload
//! - Request handlers
//! - Request logging middleware
//! - CORS and upload size limits

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
