//! # offer-api
//!
//! HTTP API layer for the offers service.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for creating, reading and cancelling offers
//! - Environment configuration and optional TOML seed data
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/offers/{offer_code}` | Get offer (404 if unknown, cancelled or expired) |
//! | PUT | `/offers/{offer_code}/cancel` | Cancel offer |
//! | POST | `/offers/` | Create offer (409 if the code exists) |

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod seed;
pub mod state;

pub use config::AppConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
