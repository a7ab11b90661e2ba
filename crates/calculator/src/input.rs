use serde::{Deserialize, Serialize};

use deckstore_catalog::ProductId;

/// Validated calculator input: positive finite dimensions and a product reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub width_cm: f64,
    pub length_cm: f64,
    pub product_id: ProductId,
}

impl CalculatorInput {
    /// Build from raw form text. `None` when a field is missing, non-numeric,
    /// not positive, or no product is selected.
    pub fn parse(width: &str, length: &str, product_id: Option<&str>) -> Option<Self> {
        let width_cm = parse_centimeters(width)?;
        let length_cm = parse_centimeters(length)?;
        let product_id = ProductId::new(product_id?).ok()?;
        Some(Self {
            width_cm,
            length_cm,
            product_id,
        })
    }
}

/// Parse a dimension typed by the user. Accepts a decimal comma.
pub fn parse_centimeters(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let value: f64 = text.replace(',', ".").parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}
