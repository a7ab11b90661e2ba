use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", get(list_orders))
}

pub async fn list_orders(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match tokio::task::spawn_blocking(move || services.orders()).await {
        Ok(Ok(items)) => (
            StatusCode::OK,
            Json(dto::OrdersResponse {
                count: items.len(),
                items,
            }),
        )
            .into_response(),
        Ok(Err(e)) => errors::service_error_to_response(e),
        Err(e) => errors::join_error_to_response(e),
    }
}
