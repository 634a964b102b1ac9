use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Categories offered even when no product uses them yet.
pub const SEED_CATEGORIES: [&str; 4] = ["Electronics", "Stationery", "Accessories", "Home"];

/// Opaque product identifier.
///
/// New ids are uuid v4 in simple (hex) form, but any string read back from
/// storage is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, enough to address a row by prefix.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single inventory record.
///
/// Field order matters: exported documents list name, category, price,
/// quantity and then the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
    pub id: ProductId,
}

impl Product {
    /// Builds a record with a fresh id, trimming the text fields.
    pub fn new(name: &str, category: &str, price: f64, quantity: i64) -> Self {
        Self {
            name: name.trim().to_string(),
            category: category.trim().to_string(),
            price,
            quantity,
            id: ProductId::generate(),
        }
    }

    pub fn value(&self) -> f64 {
        self.price * self.quantity as f64
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }

    /// Same record content, ignoring the id.
    pub fn same_content(&self, other: &Product) -> bool {
        self.name == other.name
            && self.category == other.category
            && self.price == other.price
            && self.quantity == other.quantity
    }
}

/// Records with a quantity strictly below this count as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// An editable product field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Category,
    Price,
    Quantity,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Price => "price",
            Field::Quantity => "quantity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "category" | "cat" => Ok(Field::Category),
            "price" => Ok(Field::Price),
            "quantity" | "qty" => Ok(Field::Quantity),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

/// Raw form input for a new product, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }
}

/// The built-in sample inventory.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("Wireless Mouse", "Electronics", 24.99, 12),
        Product::new("Mechanical Keyboard", "Electronics", 79.9, 4),
        Product::new("Notebook A5", "Stationery", 3.5, 50),
        Product::new("Ballpoint Pens (10 pack)", "Stationery", 5.25, 8),
        Product::new("USB-C Cable 1m", "Accessories", 7.99, 2),
        Product::new("LED Desk Lamp", "Home", 29.0, 6),
    ]
}
