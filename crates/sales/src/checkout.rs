//! Checkout form validation and order placement.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use deckstore_core::OrderId;

use crate::cart::Cart;
use crate::order::{DeliveryMethod, Order, OrderStatus, PaymentMethod, ShippingAddress};

const PHONE_MIN_DIGITS: usize = 10;
const PHONE_MAX_DIGITS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutField {
    Name,
    Phone,
    Email,
    Address,
}

impl CheckoutField {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckoutField::Name => "name",
            CheckoutField::Phone => "phone",
            CheckoutField::Email => "email",
            CheckoutField::Address => "address",
        }
    }
}

/// Per-field validation messages. Every failing field is reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<CheckoutField, String>);

impl FieldErrors {
    fn push(&mut self, field: CheckoutField, message: &str) {
        self.0.insert(field, message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: CheckoutField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = CheckoutField> + '_ {
        self.0.keys().copied()
    }
}

impl core::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.as_str(), message)?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("invalid checkout form: {0}")]
    InvalidForm(FieldErrors),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub comment: Option<String>,
    pub delivery: DeliveryMethod,
    pub payment: PaymentMethod,
}

impl CheckoutForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.push(CheckoutField::Name, "please enter your name");
        }

        if self.phone.trim().is_empty() {
            errors.push(CheckoutField::Phone, "please enter a phone number");
        } else if !is_valid_phone(&self.phone) {
            errors.push(CheckoutField::Phone, "please enter a valid phone number");
        }

        if self.email.trim().is_empty() {
            errors.push(CheckoutField::Email, "please enter an email");
        } else if !is_valid_email(&self.email) {
            errors.push(CheckoutField::Email, "please enter a valid email");
        }

        if self.delivery.requires_address() && self.address.trim().is_empty() {
            errors.push(CheckoutField::Address, "please enter a delivery address");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Optional leading `+`, then 10-15 digits; whitespace anywhere is ignored.
fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit())
}

/// `local@domain.tld`: no whitespace, exactly one `@`.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some dot with text on both sides.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Turn a cart and a valid form into a pending order. The cart itself is not
/// cleared here; callers issue `ClearCart` once the order is logged.
pub fn place_order(
    cart: &Cart,
    form: &CheckoutForm,
    placed_at: DateTime<Utc>,
) -> Result<Order, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    form.validate().map_err(CheckoutError::InvalidForm)?;

    let comment = form
        .comment
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    let order = Order {
        id: OrderId::new(),
        items: cart.items().to_vec(),
        total_amount: cart.total_price(),
        shipping_address: ShippingAddress {
            name: form.name.trim().to_string(),
            phone: form.phone.trim().to_string(),
            email: form.email.trim().to_string(),
            address: form.address.trim().to_string(),
        },
        order_date: placed_at,
        status: OrderStatus::Pending,
        payment_method: form.payment,
        delivery_method: form.delivery,
        comment,
    };

    tracing::info!(
        order_id = %order.id,
        items = order.items.len(),
        total = %order.total_amount,
        "order placed"
    );
    Ok(order)
}
