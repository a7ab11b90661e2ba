use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use deckstore_core::{CartId, DomainError};
use deckstore_sales::CheckoutError;

use crate::app::services::ServiceError;

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Domain(e) => domain_error_to_response(e),
        ServiceError::CartNotFound => {
            json_error(StatusCode::NOT_FOUND, "not_found", "cart not found")
        }
        ServiceError::ProductNotFound(id) => json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("product {id} not found"),
        ),
        ServiceError::Checkout(CheckoutError::EmptyCart) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "empty_cart", "cart is empty")
        }
        ServiceError::Checkout(CheckoutError::InvalidForm(fields)) => (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({
                "error": "validation_error",
                "message": fields.to_string(),
                "fields": fields,
            })),
        )
            .into_response(),
        ServiceError::OrderLog(e) => {
            tracing::error!("order log failure: {e}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "order_log_error", e.to_string())
        }
        ServiceError::Poisoned => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "cart store unavailable",
        ),
    }
}

pub fn join_error_to_response(err: tokio::task::JoinError) -> axum::response::Response {
    tracing::error!("blocking task failed: {err}");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "request task failed")
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_cart_id(s: &str) -> Result<CartId, axum::response::Response> {
    s.parse()
        .map_err(|_| json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid cart id"))
}
