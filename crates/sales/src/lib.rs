//! Sales module: shopping cart, checkout and the local order log.
//!
//! The cart is an event-sourced aggregate implemented as deterministic domain
//! logic. Checkout validates the customer form and turns a cart into an order;
//! the order log is the only IO in this crate.

pub mod cart;
pub mod checkout;
pub mod order;
pub mod order_log;

pub use cart::{
    AddItem, Cart, CartCleared, CartCommand, CartEvent, CartLine, ClearCart, ItemAdded,
    ItemRemoved, QuantityUpdated, RemoveItem, UpdateQuantity,
};
pub use checkout::{place_order, CheckoutError, CheckoutField, CheckoutForm, FieldErrors};
pub use order::{DeliveryMethod, Order, OrderStatus, PaymentMethod, ShippingAddress};
pub use order_log::{InMemoryOrderLog, JsonFileOrderLog, OrderLog, OrderLogError};
