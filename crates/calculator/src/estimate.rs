use serde::{Deserialize, Serialize};

use deckstore_catalog::{Product, ProductId};
use deckstore_core::{Money, ValueObject};

/// Derived calculation output. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub product_id: ProductId,
    /// Covered area in square meters.
    pub area_m2: f64,
    /// Face area of one board in square meters.
    pub board_area_m2: f64,
    /// Boards to buy, rounded up (partial boards are not sold).
    pub board_count: u64,
    pub total_price: Money,
}

impl ValueObject for CalculationResult {}

impl CalculationResult {
    pub fn area_display(&self) -> String {
        format_area(self.area_m2)
    }

    pub fn total_price_display(&self) -> String {
        self.total_price.grouped()
    }
}

/// Area with two decimals, e.g. `15.00`.
pub fn format_area(area_m2: f64) -> String {
    format!("{area_m2:.2}")
}

/// Boards needed to cover `width_cm` x `length_cm` with `product`.
///
/// `None` for non-positive or non-finite dimensions, a board without face area,
/// or a count/price that does not fit the integer types.
pub fn estimate(width_cm: f64, length_cm: f64, product: &Product) -> Option<CalculationResult> {
    if !(width_cm.is_finite() && length_cm.is_finite() && width_cm > 0.0 && length_cm > 0.0) {
        return None;
    }
    let board_mm2 = product.dimensions.face_area_mm2();
    if board_mm2 == 0 {
        return None;
    }

    let area_cm2 = width_cm * length_cm;
    let area_m2 = area_cm2 / 10_000.0;
    let board_area_m2 = product.dimensions.face_area_m2();

    // area_m2 / board_area_m2, taken in mm² (1 cm² = 100 mm²) so that exact
    // multiples of a board divide without binary rounding. A positive area
    // always needs at least one board, even when the product underflows to 0.
    let boards = (area_cm2 * 100.0 / board_mm2 as f64).ceil().max(1.0);
    if !boards.is_finite() || boards >= u64::MAX as f64 {
        return None;
    }
    let board_count = boards as u64;
    let total_price = product.price.checked_times(board_count)?;

    Some(CalculationResult {
        product_id: product.id.clone(),
        area_m2,
        board_area_m2,
        board_count,
        total_price,
    })
}
