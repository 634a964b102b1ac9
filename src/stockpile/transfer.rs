//! # JSON Export and Import
//!
//! Export writes the collection as a pretty-printed JSON array. Import reads any
//! JSON document, requires a top-level array of objects, and maps every element
//! through the same construction path as the add form. Ids are never imported:
//! each record gets a fresh one.
//!
//! Import is all-or-nothing. A document that does not parse, is not an array,
//! or holds a non-object element is rejected as a whole; the caller's
//! collection is untouched until a complete replacement list exists.
//!
//! ## Policies
//!
//! How individual fields that are missing or unreadable are treated depends on
//! [`ImportPolicy`]:
//!
//! - `Lenient`: every element becomes a record. Text fields are trimmed (missing
//!   text reads as empty), numbers are coerced, and a number that cannot be read
//!   at all is stored as `0`. Each such coercion is reported as a warning.
//! - `Strict`: every element must pass [`crate::validate::validate`]; the first
//!   document with any failing row is rejected with all row errors listed.

use crate::coerce;
use crate::error::{Result, StockpileError};
use crate::model::{Field, Product};
use crate::validate::{exact_quantity, validate, Candidate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportPolicy {
    #[default]
    Lenient,
    Strict,
}

impl fmt::Display for ImportPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportPolicy::Lenient => f.write_str("lenient"),
            ImportPolicy::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for ImportPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(ImportPolicy::Lenient),
            "strict" => Ok(ImportPolicy::Strict),
            other => Err(format!(
                "Unknown import policy: {} (expected lenient or strict)",
                other
            )),
        }
    }
}

/// Records read from an import document, plus any coercions applied.
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    pub products: Vec<Product>,
    pub warnings: Vec<String>,
}

pub fn export_json(products: &[Product]) -> Result<String> {
    serde_json::to_string_pretty(products).map_err(StockpileError::Serialization)
}

pub fn import_json(text: &str, policy: ImportPolicy) -> Result<ImportOutcome> {
    let doc: Value = serde_json::from_str(text)
        .map_err(|e| StockpileError::ImportFormat(format!("not valid JSON ({})", e)))?;
    let Value::Array(items) = doc else {
        return Err(StockpileError::ImportFormat(
            "expected an array of {name, category, price, quantity}".to_string(),
        ));
    };

    let mut rows = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item {
            Value::Object(obj) => rows.push(RawRow::read(obj)),
            _ => {
                return Err(StockpileError::ImportFormat(format!(
                    "row {} is not an object",
                    i + 1
                )))
            }
        }
    }

    let outcome = match policy {
        ImportPolicy::Lenient => build_lenient(rows),
        ImportPolicy::Strict => build_strict(rows)?,
    };
    info!(
        count = outcome.products.len(),
        warnings = outcome.warnings.len(),
        %policy,
        "parsed import document"
    );
    Ok(outcome)
}

/// One element's fields, coerced but not yet checked.
struct RawRow {
    name: String,
    category: String,
    price: f64,
    quantity: f64,
}

impl RawRow {
    fn read(obj: &Map<String, Value>) -> Self {
        Self {
            name: text_of(obj.get("name")),
            category: text_of(obj.get("category")),
            price: number_of(obj.get("price")),
            quantity: quantity_of(obj.get("quantity")),
        }
    }

    fn candidate(&self) -> Candidate {
        Candidate {
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price,
            quantity: self.quantity,
        }
    }
}

fn text_of(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => coerce::text(s),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn number_of(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => coerce::number(s),
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::Null) => 0.0,
        _ => f64::NAN,
    }
}

fn quantity_of(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().map(f64::trunc).unwrap_or(f64::NAN),
        Some(Value::String(s)) => coerce::integer_or_nan(s),
        _ => f64::NAN,
    }
}

fn build_lenient(rows: Vec<RawRow>) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();
    for (i, row) in rows.into_iter().enumerate() {
        let price = if row.price.is_finite() {
            row.price
        } else {
            outcome
                .warnings
                .push(format!("row {}: unreadable {}, stored as 0", i + 1, Field::Price));
            0.0
        };
        let quantity = exact_quantity(row.quantity).unwrap_or_else(|| {
            outcome
                .warnings
                .push(format!("row {}: unreadable {}, stored as 0", i + 1, Field::Quantity));
            0
        });
        debug!(row = i + 1, name = %row.name, "imported row");
        outcome
            .products
            .push(Product::new(&row.name, &row.category, price, quantity));
    }
    outcome
}

fn build_strict(rows: Vec<RawRow>) -> Result<ImportOutcome> {
    let mut products = Vec::with_capacity(rows.len());
    let mut problems = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        let candidate = row.candidate();
        let validation = validate(&candidate);
        match exact_quantity(candidate.quantity) {
            Some(quantity) if validation.is_valid() => products.push(Product::new(
                &candidate.name,
                &candidate.category,
                candidate.price,
                quantity,
            )),
            _ => problems.push(format!("row {}: {}", i + 1, validation)),
        }
    }

    if !problems.is_empty() {
        return Err(StockpileError::ImportFormat(problems.join("; ")));
    }
    Ok(ImportOutcome {
        products,
        warnings: Vec::new(),
    })
}
