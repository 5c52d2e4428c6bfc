//! HTTP Quote API
//!
//! This crate provides the REST API for the quote forms using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Quote, checkout and health endpoints
//! - **Middleware**: Request id, tracing, request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(calculator, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_pricing::PremiumCalculator;

use crate::config::ApiConfig;
use crate::handlers::{checkout, health, quotes};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub calculator: PremiumCalculator,
    pub config: ApiConfig,
}

impl AppState {
    /// Current instant
    pub fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// Calendar date of `now` in the configured timezone
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        self.config.timezone.local_date(now)
    }

    /// Calendar year of `now` in the configured timezone
    pub fn current_year(&self, now: DateTime<Utc>) -> i32 {
        self.config.timezone.local_year(now)
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `calculator` - Premium calculator holding the active tariff
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(calculator: PremiumCalculator, config: ApiConfig) -> Router {
    let state = AppState { calculator, config };

    // Public routes
    let public_routes = Router::new().route("/health", get(health::health_check));

    let quote_routes = Router::new()
        .route("/health", post(quotes::quote_health))
        .route("/car", post(quotes::quote_car))
        .route("/life", post(quotes::quote_life));

    let purchase_routes = Router::new().route("/checkout", post(checkout::checkout));

    let api_routes = Router::new()
        .nest("/quotes", quote_routes)
        .nest("/purchases", purchase_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
