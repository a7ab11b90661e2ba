use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use deckstore_calculator::Calculator;
use deckstore_catalog::ProductId;

use crate::app::dto;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", post(calculate))
}

/// Invalid input is not an error: the response simply carries no result.
pub async fn calculate(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CalculatorRequest>,
) -> axum::response::Response {
    let mut calculator = Calculator::new();
    calculator.set_width(body.width);
    calculator.set_length(body.length);
    calculator.select_product(body.product_id.and_then(|id| ProductId::new(id).ok()));

    let result = calculator.calculate(services.catalog()).map(dto::CalculationView::from);

    (
        StatusCode::OK,
        Json(dto::CalculatorResponse {
            result,
            cart_request: calculator.cart_request(),
        }),
    )
        .into_response()
}
