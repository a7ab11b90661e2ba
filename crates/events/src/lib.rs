//! Domain events emitted by storefront aggregates (cart).

pub mod event;

pub use event::{event_types, Event};
