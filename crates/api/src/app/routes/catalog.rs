use std::sync::Arc;

use axum::{
    extract::{Extension, Path, RawQuery},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use deckstore_catalog::{
    from_query_params, to_query_params, BoardType, QueryParams, SortKey,
};
use deckstore_core::Money;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Request-only price bounds; never echoed back into the canonical query.
const PARAM_MIN_PRICE: &str = "min_price";
const PARAM_MAX_PRICE: &str = "max_price";

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_catalog))
        .route("/facets", get(get_facets))
        .route("/highlights", get(get_highlights))
        .route("/:id", get(get_product))
}

pub async fn list_catalog(
    Extension(services): Extension<Arc<AppServices>>,
    RawQuery(raw): RawQuery,
) -> axum::response::Response {
    let params = match QueryParams::parse(raw.as_deref().unwrap_or_default()) {
        Ok(p) => p,
        Err(e) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_query", e.to_string());
        }
    };

    let (mut filter, sort) = from_query_params(&params);

    let min = match parse_price(PARAM_MIN_PRICE, params.get(PARAM_MIN_PRICE)) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let max = match parse_price(PARAM_MAX_PRICE, params.get(PARAM_MAX_PRICE)) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    if let Err(e) = filter.set_price_bounds(min, max) {
        return errors::domain_error_to_response(e);
    }

    let query = match to_query_params(&filter, sort).to_query_string() {
        Ok(q) => q,
        Err(e) => {
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "query_encode_error",
                e.to_string(),
            );
        }
    };

    let view = services.catalog().query(&filter, sort);
    let no_results = view.is_no_results();
    let products = view.into_products();

    (
        StatusCode::OK,
        Json(dto::CatalogResponse {
            count: products.len(),
            products,
            no_results,
            query,
        }),
    )
        .into_response()
}

pub async fn get_facets(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(dto::FacetsResponse {
            facets: services.catalog().facets(),
            types: BoardType::all().iter().map(|t| t.as_str()).collect(),
            sorts: SortKey::all().iter().map(|s| s.as_str()).collect(),
        }),
    )
        .into_response()
}

pub async fn get_highlights(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let catalog = services.catalog();
    (
        StatusCode::OK,
        Json(dto::HighlightsResponse {
            popular: catalog.popular().into_iter().cloned().collect(),
            newest: catalog.newest().into_iter().cloned().collect(),
        }),
    )
        .into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let catalog = services.catalog();
    match catalog.find_str(&id) {
        Some(product) => (
            StatusCode::OK,
            Json(dto::ProductDetailResponse {
                related: catalog.related(&product.id).into_iter().cloned().collect(),
                product: product.clone(),
            }),
        )
            .into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}

fn parse_price(
    name: &'static str,
    raw: Option<&str>,
) -> Result<Option<Money>, axum::response::Response> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<u64>().map(|v| Some(Money(v))).map_err(|_| {
        errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            format!("{name} must be a non-negative integer"),
        )
    })
}
