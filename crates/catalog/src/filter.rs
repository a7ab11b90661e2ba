//! Filter set applied to the catalog.

use serde::{Deserialize, Serialize};

use deckstore_core::{DomainError, DomainResult, Money, ValueObject};

use crate::product::{BoardType, Product};

/// Range the filter editor starts from when a price bound is first edited.
pub const DEFAULT_PRICE_RANGE: PriceRange = PriceRange {
    min: Money(0),
    max: Money(5000),
};

/// Inclusive price range in currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    min: Money,
    max: Money,
}

impl ValueObject for PriceRange {}

impl PriceRange {
    pub fn new(min: Money, max: Money) -> DomainResult<Self> {
        if min > max {
            return Err(DomainError::validation(format!(
                "price range min ({min}) must not exceed max ({max})"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Money {
        self.min
    }

    pub fn max(&self) -> Money {
        self.max
    }

    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Active catalog filters.
///
/// Every dimension is independently optional: an empty list or a missing range
/// places no constraint on that dimension. `FilterState::default()` is the
/// reset state and admits the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub colors: Vec<String>,
    pub types: Vec<BoardType>,
    pub purposes: Vec<String>,
    pub price_range: Option<PriceRange>,
}

impl FilterState {
    /// True when no dimension constrains the result.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.types.is_empty()
            && self.purposes.is_empty()
            && self.price_range.is_none()
    }

    /// The filter predicate.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.types.is_empty() && !self.types.contains(&product.board_type) {
            return false;
        }
        if !self.colors.is_empty() && !self.colors.contains(&product.color) {
            return false;
        }
        if !self.purposes.is_empty() && !product.has_any_purpose(&self.purposes) {
            return false;
        }
        if let Some(range) = &self.price_range {
            if !range.contains(product.price) {
                return false;
            }
        }
        true
    }

    pub fn toggle_color(&mut self, color: &str) {
        toggle(&mut self.colors, color.to_string());
    }

    pub fn toggle_type(&mut self, board_type: BoardType) {
        toggle(&mut self.types, board_type);
    }

    pub fn toggle_purpose(&mut self, purpose: &str) {
        toggle(&mut self.purposes, purpose.to_string());
    }

    /// Set the lower price bound, starting from [`DEFAULT_PRICE_RANGE`] if no
    /// range is active. Leaves the filter untouched on an inverted range.
    pub fn set_price_min(&mut self, min: Money) -> DomainResult<()> {
        let current = self.price_range.unwrap_or(DEFAULT_PRICE_RANGE);
        self.price_range = Some(PriceRange::new(min, current.max)?);
        Ok(())
    }

    /// Set the upper price bound, starting from [`DEFAULT_PRICE_RANGE`] if no
    /// range is active. Leaves the filter untouched on an inverted range.
    pub fn set_price_max(&mut self, max: Money) -> DomainResult<()> {
        let current = self.price_range.unwrap_or(DEFAULT_PRICE_RANGE);
        self.price_range = Some(PriceRange::new(current.min, max)?);
        Ok(())
    }

    /// Replace the range from request bounds taken together. A missing lower
    /// bound is 0 and a missing upper bound is unbounded; with neither, the
    /// range is cleared.
    pub fn set_price_bounds(
        &mut self,
        min: Option<Money>,
        max: Option<Money>,
    ) -> DomainResult<()> {
        if min.is_none() && max.is_none() {
            self.price_range = None;
            return Ok(());
        }
        let min = min.unwrap_or(Money::ZERO);
        let max = max.unwrap_or(Money(u64::MAX));
        self.price_range = Some(PriceRange::new(min, max)?);
        Ok(())
    }

    pub fn clear_price_range(&mut self) {
        self.price_range = None;
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(pos) = values.iter().position(|v| *v == value) {
        values.remove(pos);
    } else {
        values.push(value);
    }
}
