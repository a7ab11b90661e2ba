use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use deckstore_core::{Entity, Money, OrderId};

use crate::cart::CartLine;

/// Order status lifecycle. Orders are placed as `Pending`; later states are
/// set by whoever processes the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
    BankTransfer,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    #[default]
    Courier,
    Pickup,
}

impl DeliveryMethod {
    pub fn requires_address(self) -> bool {
        matches!(self, DeliveryMethod::Courier)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// A placed order, as written to the order log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartLine>,
    pub total_amount: Money,
    pub shipping_address: ShippingAddress,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub delivery_method: DeliveryMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
