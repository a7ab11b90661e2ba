//! Shared application state: the read-only catalog, open carts and the order log.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use thiserror::Error;

use deckstore_catalog::{Catalog, ProductId};
use deckstore_core::{Aggregate, AggregateRoot, CartId, DomainError};
use deckstore_events::event_types;
use deckstore_sales::{
    AddItem, Cart, CartCommand, CheckoutError, CheckoutForm, ClearCart, InMemoryOrderLog,
    JsonFileOrderLog, Order, OrderLog, OrderLogError, RemoveItem, UpdateQuantity, place_order,
};

use crate::config::ApiConfig;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("cart not found")]
    CartNotFound,

    #[error("product {0} not found")]
    ProductNotFound(String),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    OrderLog(#[from] OrderLogError),

    #[error("cart store lock poisoned")]
    Poisoned,
}

pub struct AppServices {
    catalog: Catalog,
    carts: RwLock<HashMap<CartId, Cart>>,
    orders: Arc<dyn OrderLog>,
}

pub fn build_services(config: &ApiConfig) -> AppServices {
    let orders: Arc<dyn OrderLog> = match &config.order_log {
        Some(path) => {
            tracing::info!(path = %path.display(), "using JSON file order log");
            Arc::new(JsonFileOrderLog::new(path))
        }
        None => Arc::new(InMemoryOrderLog::new()),
    };
    AppServices::new(Catalog::seed(), orders)
}

impl AppServices {
    pub fn new(catalog: Catalog, orders: Arc<dyn OrderLog>) -> Self {
        Self {
            catalog,
            carts: RwLock::new(HashMap::new()),
            orders,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn create_cart(&self) -> Result<Cart, ServiceError> {
        let cart = Cart::new(CartId::new());
        let mut carts = self.carts.write().map_err(|_| ServiceError::Poisoned)?;
        carts.insert(cart.id_typed(), cart.clone());
        tracing::info!(cart_id = %cart.id_typed(), "cart created");
        Ok(cart)
    }

    pub fn cart(&self, cart_id: CartId) -> Result<Cart, ServiceError> {
        let carts = self.carts.read().map_err(|_| ServiceError::Poisoned)?;
        carts.get(&cart_id).cloned().ok_or(ServiceError::CartNotFound)
    }

    pub fn add_item(
        &self,
        cart_id: CartId,
        product_id: &str,
        quantity: u32,
    ) -> Result<Cart, ServiceError> {
        let product = self
            .catalog
            .find_str(product_id)
            .ok_or_else(|| ServiceError::ProductNotFound(product_id.to_string()))?;
        let cmd = AddItem::for_product(cart_id, product, quantity, Utc::now());
        self.execute(cart_id, CartCommand::AddItem(cmd))
    }

    pub fn update_quantity(
        &self,
        cart_id: CartId,
        product_id: &str,
        quantity: u32,
    ) -> Result<Cart, ServiceError> {
        let cmd = UpdateQuantity {
            cart_id,
            product_id: ProductId::new(product_id)?,
            quantity,
            occurred_at: Utc::now(),
        };
        self.execute(cart_id, CartCommand::UpdateQuantity(cmd))
    }

    pub fn remove_item(&self, cart_id: CartId, product_id: &str) -> Result<Cart, ServiceError> {
        let cmd = RemoveItem {
            cart_id,
            product_id: ProductId::new(product_id)?,
            occurred_at: Utc::now(),
        };
        self.execute(cart_id, CartCommand::RemoveItem(cmd))
    }

    /// Place an order from the cart, record it, then empty the cart.
    ///
    /// The cart is only cleared once the order log accepted the order. Blocks on
    /// the order log while holding the cart store; call it from a blocking task.
    pub fn checkout(&self, cart_id: CartId, form: &CheckoutForm) -> Result<Order, ServiceError> {
        let mut carts = self.carts.write().map_err(|_| ServiceError::Poisoned)?;
        let cart = carts.get_mut(&cart_id).ok_or(ServiceError::CartNotFound)?;

        let now = Utc::now();
        let order = place_order(cart, form, now)?;
        self.orders.append(order.clone())?;

        cart.execute(&CartCommand::ClearCart(ClearCart {
            cart_id,
            occurred_at: now,
        }))?;
        Ok(order)
    }

    pub fn orders(&self) -> Result<Vec<Order>, ServiceError> {
        Ok(self.orders.list()?)
    }

    fn execute(&self, cart_id: CartId, command: CartCommand) -> Result<Cart, ServiceError> {
        let mut carts = self.carts.write().map_err(|_| ServiceError::Poisoned)?;
        let cart = carts.get_mut(&cart_id).ok_or(ServiceError::CartNotFound)?;

        let events = cart.execute(&command)?;
        tracing::debug!(
            cart_id = %cart_id,
            events = ?event_types(&events),
            version = cart.version(),
            "cart command executed"
        );
        Ok(cart.clone())
    }
}
