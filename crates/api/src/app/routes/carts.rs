use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};

use deckstore_sales::CheckoutForm;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_cart))
        .route("/:id", get(get_cart))
        .route("/:id/items", post(add_item))
        .route("/:id/items/:product_id", put(update_quantity).delete(remove_item))
        .route("/:id/checkout", post(checkout))
}

pub async fn create_cart(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.create_cart() {
        Ok(cart) => (StatusCode::CREATED, Json(dto::CartResponse::from(&cart))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let cart_id = match errors::parse_cart_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.cart(cart_id) {
        Ok(cart) => (StatusCode::OK, Json(dto::CartResponse::from(&cart))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::AddItemRequest>,
) -> axum::response::Response {
    let cart_id = match errors::parse_cart_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.add_item(cart_id, &body.product_id, body.quantity) {
        Ok(cart) => (StatusCode::OK, Json(dto::CartResponse::from(&cart))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn update_quantity(
    Extension(services): Extension<Arc<AppServices>>,
    Path((id, product_id)): Path<(String, String)>,
    Json(body): Json<dto::UpdateQuantityRequest>,
) -> axum::response::Response {
    let cart_id = match errors::parse_cart_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.update_quantity(cart_id, &product_id, body.quantity) {
        Ok(cart) => (StatusCode::OK, Json(dto::CartResponse::from(&cart))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path((id, product_id)): Path<(String, String)>,
) -> axum::response::Response {
    let cart_id = match errors::parse_cart_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.remove_item(cart_id, &product_id) {
        Ok(cart) => (StatusCode::OK, Json(dto::CartResponse::from(&cart))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn checkout(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(form): Json<CheckoutForm>,
) -> axum::response::Response {
    let cart_id = match errors::parse_cart_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    // The order log may touch the filesystem; keep it off the async workers.
    let placed = tokio::task::spawn_blocking(move || services.checkout(cart_id, &form)).await;
    match placed {
        Ok(Ok(order)) => (StatusCode::CREATED, Json(order)).into_response(),
        Ok(Err(e)) => errors::service_error_to_response(e),
        Err(e) => errors::join_error_to_response(e),
    }
}
