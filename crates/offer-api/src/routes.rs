//! # Routes
//!
//! Axum router configuration for the offers API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /offers/{offer_code} - Get a usable offer
/// - PUT  /offers/{offer_code}/cancel - Cancel an offer
/// - POST /offers/ (or /offers) - Create an offer
/// - GET  /health - Health check
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // Offers
        .route("/offers", post(handlers::create_offer))
        .route("/offers/", post(handlers::create_offer))
        .route("/offers/{offer_code}", get(handlers::get_offer))
        .route("/offers/{offer_code}/cancel", put(handlers::cancel_offer))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
