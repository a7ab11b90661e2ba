use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use deckstore_catalog::{Product, ProductId};
use deckstore_core::{Aggregate, AggregateRoot, CartId, DomainError, Money};
use deckstore_events::Event;

/// Cart line: product snapshot and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        Money(self.unit_price.units().saturating_mul(u64::from(self.quantity)))
    }
}

/// Aggregate root: Cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    lines: Vec<CartLine>,
    version: u64,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    pub fn items(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }

    /// Sum of quantities across lines.
    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

impl AddItem {
    pub fn for_product(
        cart_id: CartId,
        product: &Product,
        quantity: u32,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            cart_id,
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            occurred_at,
        }
    }
}

/// Command: UpdateQuantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateQuantity {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ClearCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCart {
    pub cart_id: CartId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddItem(AddItem),
    UpdateQuantity(UpdateQuantity),
    RemoveItem(RemoveItem),
    ClearCart(ClearCart),
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityUpdated {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCleared {
    pub cart_id: CartId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    QuantityUpdated(QuantityUpdated),
    ItemRemoved(ItemRemoved),
    CartCleared(CartCleared),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "sales.cart.item_added",
            CartEvent::QuantityUpdated(_) => "sales.cart.quantity_updated",
            CartEvent::ItemRemoved(_) => "sales.cart.item_removed",
            CartEvent::CartCleared(_) => "sales.cart.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::QuantityUpdated(e) => e.occurred_at,
            CartEvent::ItemRemoved(e) => e.occurred_at,
            CartEvent::CartCleared(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => {
                match self.lines.iter_mut().find(|l| l.product_id == e.product_id) {
                    Some(line) => line.quantity = line.quantity.saturating_add(e.quantity),
                    None => self.lines.push(CartLine {
                        product_id: e.product_id.clone(),
                        name: e.name.clone(),
                        unit_price: e.unit_price,
                        quantity: e.quantity,
                    }),
                }
            }
            CartEvent::QuantityUpdated(e) => {
                if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == e.product_id) {
                    line.quantity = e.quantity;
                }
            }
            CartEvent::ItemRemoved(e) => {
                self.lines.retain(|l| l.product_id != e.product_id);
            }
            CartEvent::CartCleared(_) => {
                self.lines.clear();
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddItem(cmd) => self.handle_add_item(cmd),
            CartCommand::UpdateQuantity(cmd) => self.handle_update_quantity(cmd),
            CartCommand::RemoveItem(cmd) => self.handle_remove_item(cmd),
            CartCommand::ClearCart(cmd) => self.handle_clear(cmd),
        }
    }
}

impl Cart {
    fn ensure_cart_id(&self, cart_id: CartId) -> Result<(), DomainError> {
        if self.id != cart_id {
            return Err(DomainError::invariant("cart_id mismatch"));
        }
        Ok(())
    }

    fn handle_add_item(&self, cmd: &AddItem) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        if cmd.quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        if cmd.unit_price == Money::ZERO {
            return Err(DomainError::validation("unit_price must be positive"));
        }

        if let Some(line) = self.line(&cmd.product_id) {
            if line.quantity.checked_add(cmd.quantity).is_none() {
                return Err(DomainError::validation("quantity too large"));
            }
        }

        Ok(vec![CartEvent::ItemAdded(ItemAdded {
            cart_id: cmd.cart_id,
            product_id: cmd.product_id.clone(),
            name: cmd.name.clone(),
            unit_price: cmd.unit_price,
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_update_quantity(
        &self,
        cmd: &UpdateQuantity,
    ) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        if cmd.quantity == 0 {
            return Err(DomainError::validation(
                "quantity must be positive (remove the item instead)",
            ));
        }

        // Unknown product or unchanged quantity: nothing happened.
        match self.line(&cmd.product_id) {
            Some(line) if line.quantity != cmd.quantity => {
                Ok(vec![CartEvent::QuantityUpdated(QuantityUpdated {
                    cart_id: cmd.cart_id,
                    product_id: cmd.product_id.clone(),
                    quantity: cmd.quantity,
                    occurred_at: cmd.occurred_at,
                })])
            }
            _ => Ok(Vec::new()),
        }
    }

    fn handle_remove_item(&self, cmd: &RemoveItem) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        if self.line(&cmd.product_id).is_none() {
            return Ok(Vec::new());
        }

        Ok(vec![CartEvent::ItemRemoved(ItemRemoved {
            cart_id: cmd.cart_id,
            product_id: cmd.product_id.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_clear(&self, cmd: &ClearCart) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        if self.lines.is_empty() {
            return Ok(Vec::new());
        }

        Ok(vec![CartEvent::CartCleared(CartCleared {
            cart_id: cmd.cart_id,
            occurred_at: cmd.occurred_at,
        })])
    }
}
