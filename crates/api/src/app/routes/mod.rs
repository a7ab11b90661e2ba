use axum::{routing::get, Router};

pub mod calculator;
pub mod carts;
pub mod catalog;
pub mod orders;
pub mod system;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/catalog", catalog::router())
        .nest("/calculator", calculator::router())
        .nest("/carts", carts::router())
        .nest("/orders", orders::router())
}
