use std::sync::Arc;

use serde::Serialize;

use deckstore_core::find_by_id;

use crate::data::seed_products;
use crate::filter::FilterState;
use crate::product::{Product, ProductId};
use crate::sort::SortKey;
use crate::view::{derive_visible_list, CatalogView};

const RELATED_LIMIT: usize = 4;

/// Read-only, ordered product catalog.
///
/// Built once and shared (cloning is cheap). Tests inject fixture lists via
/// [`Catalog::new`]; the storefront uses [`Catalog::seed`].
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

/// Distinct filterable values, in first-seen catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub colors: Vec<String>,
    pub purposes: Vec<String>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    pub fn seed() -> Self {
        Self::new(seed_products())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product; a stale or unknown id is simply `None`.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        find_by_id(self.products(), id)
    }

    /// Same as [`Catalog::find`] for raw ids taken from user input.
    pub fn find_str(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Up to four other products of the same board type, in catalog order.
    pub fn related(&self, id: &ProductId) -> Vec<&Product> {
        let Some(product) = self.find(id) else {
            return Vec::new();
        };
        self.products
            .iter()
            .filter(|p| p.id != product.id && p.board_type == product.board_type)
            .take(RELATED_LIMIT)
            .collect()
    }

    pub fn popular(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_popular).collect()
    }

    pub fn newest(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_new).collect()
    }

    pub fn facets(&self) -> Facets {
        let mut facets = Facets::default();
        for product in self.products.iter() {
            if !facets.colors.contains(&product.color) {
                facets.colors.push(product.color.clone());
            }
            for purpose in &product.purpose {
                if !facets.purposes.contains(purpose) {
                    facets.purposes.push(purpose.clone());
                }
            }
        }
        facets
    }

    /// Filter + sort this catalog into a view.
    pub fn query(&self, filter: &FilterState, sort: SortKey) -> CatalogView {
        CatalogView::from(derive_visible_list(&self.products, filter, sort))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}
