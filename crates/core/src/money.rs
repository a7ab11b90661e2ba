//! Money amounts in whole currency units.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// An amount in whole currency units (prices in the catalog carry no fractional part).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn units(self) -> u64 {
        self.0
    }

    /// `self * quantity`, `None` on overflow.
    pub fn checked_times(self, quantity: u64) -> Option<Money> {
        self.0.checked_mul(quantity).map(Money)
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Amount with thousands grouped by a space, e.g. `43 200`.
    pub fn grouped(self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(' ');
            }
            out.push(ch);
        }
        out
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.grouped())
    }
}

impl From<u64> for Money {
    fn from(value: u64) -> Self {
        Money(value)
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Money(iter.map(|m| m.0).sum())
    }
}
