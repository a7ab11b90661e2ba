//! Product catalog module.
//!
//! Holds the static decking-board catalog and the query engine that derives the
//! visible product list from a filter set and a sort key, plus the query-string
//! representation of that state. Pure, deterministic logic (no IO).

pub mod catalog;
pub mod data;
pub mod filter;
pub mod product;
pub mod query;
pub mod sort;
pub mod view;

pub use catalog::{Catalog, Facets};
pub use filter::{FilterState, PriceRange, DEFAULT_PRICE_RANGE};
pub use product::{BoardType, Dimensions, Product, ProductId, SpecValue};
pub use query::{from_query_params, to_query_params, QueryError, QueryParams};
pub use sort::{sort_products, SortKey};
pub use view::{derive_visible_list, CatalogView};
