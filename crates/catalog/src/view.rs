use serde::Serialize;

use crate::filter::FilterState;
use crate::product::Product;
use crate::sort::{sort_products, SortKey};

/// Derive the displayed list: filter, then stable sort.
///
/// Returns a fresh vector; the catalog slice is never touched.
pub fn derive_visible_list(
    catalog: &[Product],
    filter: &FilterState,
    sort: SortKey,
) -> Vec<Product> {
    let mut visible: Vec<Product> = catalog
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();
    sort_products(&mut visible, sort);

    tracing::debug!(
        catalog = catalog.len(),
        visible = visible.len(),
        sort = %sort,
        "derived visible catalog list"
    );
    visible
}

/// Outcome of a catalog query. An empty result is its own state so callers
/// render an explicit "no results" message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "products", rename_all = "snake_case")]
pub enum CatalogView {
    Populated(Vec<Product>),
    NoResults,
}

impl CatalogView {
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogView::Populated(products) => products,
            CatalogView::NoResults => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.products().len()
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self, CatalogView::NoResults)
    }

    pub fn into_products(self) -> Vec<Product> {
        match self {
            CatalogView::Populated(products) => products,
            CatalogView::NoResults => Vec::new(),
        }
    }
}

impl From<Vec<Product>> for CatalogView {
    fn from(products: Vec<Product>) -> Self {
        if products.is_empty() {
            CatalogView::NoResults
        } else {
            CatalogView::Populated(products)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckstore_core::Money;

    use crate::data::seed_products;
    use crate::filter::PriceRange;
    use crate::product::BoardType;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_under_popularity_keeps_catalog_order_per_group() {
        let catalog = seed_products();
        let visible = derive_visible_list(&catalog, &FilterState::default(), SortKey::Popularity);
        assert_eq!(visible.len(), catalog.len());

        let popular: Vec<&str> = catalog
            .iter()
            .filter(|p| p.is_popular)
            .map(|p| p.id.as_str())
            .collect();
        let rest: Vec<&str> = catalog
            .iter()
            .filter(|p| !p.is_popular)
            .map(|p| p.id.as_str())
            .collect();
        let expected: Vec<&str> = popular.into_iter().chain(rest).collect();
        assert_eq!(ids(&visible), expected);
    }

    #[test]
    fn input_catalog_is_not_mutated() {
        let catalog = seed_products();
        let before = catalog.clone();
        let _ = derive_visible_list(&catalog, &FilterState::default(), SortKey::PriceDesc);
        assert_eq!(catalog, before);
    }

    #[test]
    fn filter_then_sort() {
        let catalog = seed_products();
        let filter = FilterState {
            types: vec![BoardType::Hollow],
            ..Default::default()
        };
        let visible = derive_visible_list(&catalog, &filter, SortKey::PriceDesc);
        assert_eq!(ids(&visible), vec!["deck-003", "deck-001", "deck-004"]);
    }

    #[test]
    fn no_results_is_distinct() {
        let catalog = seed_products();
        let filter = FilterState {
            price_range: Some(PriceRange::new(Money(1), Money(10)).unwrap()),
            ..Default::default()
        };
        let view = CatalogView::from(derive_visible_list(&catalog, &filter, SortKey::Newest));
        assert!(view.is_no_results());
        assert_eq!(view.len(), 0);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["status"], "no_results");
    }

    #[test]
    fn empty_catalog_is_no_results() {
        let visible = derive_visible_list(&[], &FilterState::default(), SortKey::Popularity);
        let view = CatalogView::from(visible);
        assert_eq!(view, CatalogView::NoResults);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_filter() -> impl Strategy<Value = FilterState> {
            (
                proptest::sample::subsequence(
                    vec!["Орех", "Венге", "Тик", "Серый", "Графит", "Дуб"],
                    0..3,
                ),
                proptest::sample::subsequence(vec![BoardType::Hollow, BoardType::Solid], 0..=2),
                proptest::sample::subsequence(vec!["Терраса", "Балкон", "Причал", "Крыльцо"], 0..3),
                proptest::option::of((0u64..2500, 0u64..2500)),
            )
                .prop_map(|(colors, types, purposes, range)| FilterState {
                    colors: colors.into_iter().map(String::from).collect(),
                    types,
                    purposes: purposes.into_iter().map(String::from).collect(),
                    price_range: range.map(|(a, b)| {
                        PriceRange::new(Money(a.min(b)), Money(a.max(b))).unwrap()
                    }),
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: same inputs always derive the same list.
            #[test]
            fn derivation_is_deterministic(filter in arb_filter(), sort_idx in 0usize..4) {
                let catalog = seed_products();
                let sort = SortKey::all()[sort_idx];
                prop_assert_eq!(
                    derive_visible_list(&catalog, &filter, sort),
                    derive_visible_list(&catalog, &filter, sort)
                );
            }

            /// Property: the visible list is exactly the matching subset, whatever the order.
            #[test]
            fn visible_list_is_the_matching_subset(filter in arb_filter(), sort_idx in 0usize..4) {
                let catalog = seed_products();
                let visible = derive_visible_list(&catalog, &filter, SortKey::all()[sort_idx]);

                prop_assert!(visible.iter().all(|p| filter.matches(p)));
                let expected = catalog.iter().filter(|p| filter.matches(p)).count();
                prop_assert_eq!(visible.len(), expected);
            }

            /// Property: with distinct prices, descending order reverses ascending order.
            #[test]
            fn price_desc_reverses_price_asc(filter in arb_filter()) {
                let catalog = seed_products();
                let asc = derive_visible_list(&catalog, &filter, SortKey::PriceAsc);
                let mut desc = derive_visible_list(&catalog, &filter, SortKey::PriceDesc);
                desc.reverse();
                prop_assert_eq!(asc, desc);
            }
        }
    }
}
