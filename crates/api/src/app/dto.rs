use serde::{Deserialize, Serialize};

use deckstore_calculator::{CalculationResult, CartRequest};
use deckstore_catalog::{Facets, Product, ProductId};
use deckstore_core::{AggregateRoot, CartId, Money};
use deckstore_sales::{Cart, CartLine, Order};

// -------------------------
// Request DTOs
// -------------------------

/// Raw calculator form: dimensions arrive as the user typed them.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CalculatorRequest {
    pub width: String,
    pub length: String,
    pub product_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: u32,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub products: Vec<Product>,
    pub count: usize,
    pub no_results: bool,
    /// Canonical query string for the active filter/sort.
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    #[serde(flatten)]
    pub facets: Facets,
    pub types: Vec<&'static str>,
    pub sorts: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct HighlightsResponse {
    pub popular: Vec<Product>,
    pub newest: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct ProductDetailResponse {
    pub product: Product,
    pub related: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct CalculationView {
    pub product_id: ProductId,
    pub area_m2: f64,
    pub board_area_m2: f64,
    pub board_count: u64,
    pub total_price: Money,
    pub area_display: String,
    pub total_price_display: String,
}

impl From<&CalculationResult> for CalculationView {
    fn from(result: &CalculationResult) -> Self {
        Self {
            product_id: result.product_id.clone(),
            area_m2: result.area_m2,
            board_area_m2: result.board_area_m2,
            board_count: result.board_count,
            total_price: result.total_price,
            area_display: result.area_display(),
            total_price_display: result.total_price_display(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CalculatorResponse {
    pub result: Option<CalculationView>,
    pub cart_request: Option<CartRequest>,
}

#[derive(Debug, Serialize)]
pub struct CartLineView {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.clone(),
            name: line.name.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub id: CartId,
    pub items: Vec<CartLineView>,
    pub total_item_count: u64,
    pub total_price: Money,
    pub version: u64,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            id: cart.id_typed(),
            items: cart.items().iter().map(CartLineView::from).collect(),
            total_item_count: cart.total_item_count(),
            total_price: cart.total_price(),
            version: cart.version(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub count: usize,
    pub items: Vec<Order>,
}
