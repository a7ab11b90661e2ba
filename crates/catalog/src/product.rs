use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use deckstore_core::{DomainError, Entity, Money, ValueObject};

/// Product identifier as used by the storefront (e.g. `deck-001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("ProductId: empty"));
        }
        Ok(Self(id))
    }

    /// Seed data ids are non-empty literals.
    pub(crate) fn from_static(id: &'static str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Board construction variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardType {
    Hollow,
    Solid,
}

impl BoardType {
    pub fn as_str(self) -> &'static str {
        match self {
            BoardType::Hollow => "hollow",
            BoardType::Solid => "solid",
        }
    }

    pub fn all() -> &'static [BoardType] {
        &[BoardType::Hollow, BoardType::Solid]
    }
}

impl core::fmt::Display for BoardType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for BoardType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hollow" => Ok(BoardType::Hollow),
            "solid" => Ok(BoardType::Solid),
            other => Err(DomainError::validation(format!(
                "unknown board type '{other}' (expected hollow or solid)"
            ))),
        }
    }
}

/// Board dimensions in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub length: u32,
    pub thickness: u32,
}

impl ValueObject for Dimensions {}

impl Dimensions {
    /// Face area of a single board in square meters.
    pub fn face_area_m2(&self) -> f64 {
        (f64::from(self.width) / 1000.0) * (f64::from(self.length) / 1000.0)
    }

    /// Face area of a single board in square millimeters.
    pub fn face_area_mm2(&self) -> u64 {
        u64::from(self.width) * u64::from(self.length)
    }
}

/// A value in the free-form specification table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Number(f64),
    Text(String),
}

impl From<&str> for SpecValue {
    fn from(value: &str) -> Self {
        SpecValue::Text(value.to_string())
    }
}

impl core::fmt::Display for SpecValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpecValue::Number(n) => write!(f, "{n}"),
            SpecValue::Text(s) => f.write_str(s),
        }
    }
}

/// A catalog product. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub short_description: String,
    /// Price of a single board.
    pub price: Money,
    pub price_per_square_meter: Money,
    pub images: Vec<String>,
    pub dimensions: Dimensions,
    pub color: String,
    #[serde(rename = "type")]
    pub board_type: BoardType,
    pub purpose: Vec<String>,
    pub in_stock: bool,
    pub is_popular: bool,
    pub is_new: bool,
    pub specifications: BTreeMap<String, SpecValue>,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Product {
    pub fn has_any_purpose(&self, purposes: &[String]) -> bool {
        self.purpose.iter().any(|p| purposes.contains(p))
    }
}
