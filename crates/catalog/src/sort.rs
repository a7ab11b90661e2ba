use serde::{Deserialize, Serialize};

use deckstore_core::DomainError;

use crate::product::Product;

/// Catalog ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    /// Popular boards first, catalog order otherwise.
    #[default]
    Popularity,
    /// New boards first, catalog order otherwise.
    Newest,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Popularity => "popularity",
            SortKey::Newest => "newest",
        }
    }

    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::Popularity,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::Newest,
        ]
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown sort key '{s}'")))
    }
}

/// Sort in place. Stable: ties keep their incoming (catalog) order.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Popularity => products.sort_by(|a, b| b.is_popular.cmp(&a.is_popular)),
        SortKey::Newest => products.sort_by(|a, b| b.is_new.cmp(&a.is_new)),
    }
}
