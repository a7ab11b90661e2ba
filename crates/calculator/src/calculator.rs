//! Calculator form state.
//!
//! Two states: `Idle` (nothing computed) and `Computed` (a valid result is
//! held). `calculate` is guarded by input validity and never clears a previous
//! result on bad input; `reset` always returns to `Idle`.

use serde::{Deserialize, Serialize};

use deckstore_catalog::{Catalog, ProductId};

use crate::estimate::{estimate, CalculationResult};
use crate::input::CalculatorInput;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "result", rename_all = "snake_case")]
pub enum CalculatorState {
    #[default]
    Idle,
    Computed(CalculationResult),
}

/// Quantity handed to the cart after a successful calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    width: String,
    length: String,
    product_id: Option<ProductId>,
    state: CalculatorState,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator opened from a product page, with that product preselected.
    pub fn with_product(product_id: ProductId) -> Self {
        Self {
            product_id: Some(product_id),
            ..Self::default()
        }
    }

    pub fn width(&self) -> &str {
        &self.width
    }

    pub fn length(&self) -> &str {
        &self.length
    }

    pub fn product_id(&self) -> Option<&ProductId> {
        self.product_id.as_ref()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        match &self.state {
            CalculatorState::Computed(result) => Some(result),
            CalculatorState::Idle => None,
        }
    }

    pub fn set_width(&mut self, text: impl Into<String>) {
        self.width = text.into();
    }

    pub fn set_length(&mut self, text: impl Into<String>) {
        self.length = text.into();
    }

    pub fn select_product(&mut self, product_id: Option<ProductId>) {
        self.product_id = product_id;
    }

    /// Whether `calculate` could possibly succeed (all fields filled in).
    pub fn can_calculate(&self) -> bool {
        !self.width.trim().is_empty() && !self.length.trim().is_empty() && self.product_id.is_some()
    }

    /// Idle/Computed -> Computed when the input is valid; otherwise no transition.
    ///
    /// Returns the new result, or `None` when the guard rejected the input (the
    /// previously displayed result, if any, stays in place).
    pub fn calculate(&mut self, catalog: &Catalog) -> Option<&CalculationResult> {
        let product_id = self.product_id.as_ref().map(ProductId::as_str);
        let Some(input) = CalculatorInput::parse(&self.width, &self.length, product_id) else {
            tracing::debug!(
                width = %self.width,
                length = %self.length,
                "calculator input rejected"
            );
            return None;
        };
        let Some(product) = catalog.find(&input.product_id) else {
            tracing::debug!(product_id = %input.product_id, "calculator product not in catalog");
            return None;
        };
        let Some(result) = estimate(input.width_cm, input.length_cm, product) else {
            tracing::debug!(product_id = %input.product_id, "calculator estimate out of range");
            return None;
        };

        tracing::debug!(
            product_id = %result.product_id,
            boards = result.board_count,
            total = %result.total_price,
            "calculator computed"
        );
        self.state = CalculatorState::Computed(result);
        self.result()
    }

    /// Any state -> Idle. Clears dimensions and derived values; the product
    /// selection is kept.
    pub fn reset(&mut self) {
        self.width.clear();
        self.length.clear();
        self.state = CalculatorState::Idle;
    }

    /// Boards of the computed product to add to the cart. Only available in
    /// `Computed`.
    pub fn cart_request(&self) -> Option<CartRequest> {
        let result = self.result()?;
        let quantity = u32::try_from(result.board_count).ok().filter(|q| *q > 0)?;
        Some(CartRequest {
            product_id: result.product_id.clone(),
            quantity,
        })
    }
}
