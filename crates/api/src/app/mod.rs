//! HTTP API application wiring (Axum router + shared services).
//!
//! - `services.rs`: catalog, cart store and order log
//! - `routes/`: HTTP routes + handlers (one file per storefront area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    with_services(services::build_services(config))
}

/// Router over pre-built services (tests inject fixture catalogs this way).
pub fn with_services(services: AppServices) -> Router {
    routes::router()
        .layer(Extension(Arc::new(services)))
        .layer(ServiceBuilder::new())
}
