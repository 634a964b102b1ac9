//! # Record Validation
//!
//! Validation works on a [`Candidate`]: a record whose values have already been
//! coerced from user text (see [`crate::coerce`]) but not yet checked. Numeric
//! fields are carried as `f64` so that "not a number" and "not an integer" are
//! representable and can be reported instead of silently truncated.
//!
//! [`validate`] is pure and total: it never fails, it only describes what is
//! wrong, one message per field.

use crate::coerce;
use crate::model::{Field, Product, ProductDraft};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const NAME_REQUIRED: &str = "Product name is required.";
pub const CATEGORY_REQUIRED: &str = "Category is required.";
pub const PRICE_INVALID: &str = "Price must be a number greater than 0.";
pub const QUANTITY_INVALID: &str = "Quantity must be an integer greater than or equal to 0.";
pub const INVALID_VALUE: &str = "Invalid value.";

/// Largest quantity held exactly. Integers beyond it cannot round-trip through
/// the `f64` a candidate carries.
pub const MAX_QUANTITY: i64 = 9_007_199_254_740_991;

/// The whole number a coerced quantity stands for, or `None` when it is not
/// an integer within `±MAX_QUANTITY`.
pub fn exact_quantity(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_QUANTITY as f64)
        .then_some(value as i64)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: f64,
}

impl Candidate {
    /// Coerces raw form input the way the add form reads it.
    pub fn from_draft(draft: &ProductDraft) -> Self {
        Self {
            name: coerce::text(&draft.name),
            category: coerce::text(&draft.category),
            price: coerce::number(&draft.price),
            quantity: coerce::number(&draft.quantity),
        }
    }

    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            quantity: product.quantity as f64,
        }
    }

    /// Replaces a single field with a coerced raw value, as an inline edit does.
    pub fn with_field(mut self, field: Field, raw: &str) -> Self {
        match field {
            Field::Name => self.name = coerce::text(raw),
            Field::Category => self.category = coerce::text(raw),
            Field::Price => self.price = coerce::number(raw),
            Field::Quantity => self.quantity = coerce::integer_or_nan(raw),
        }
        self
    }
}

/// Outcome of validating a candidate: field → message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub errors: BTreeMap<Field, String>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// The message for `field`, or a generic one when the candidate failed on
    /// some other field.
    pub fn message_for(&self, field: Field) -> &str {
        self.error(field).unwrap_or(INVALID_VALUE)
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

pub fn validate(candidate: &Candidate) -> Validation {
    let mut errors = BTreeMap::new();

    if candidate.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED.to_string());
    }
    if candidate.category.trim().is_empty() {
        errors.insert(Field::Category, CATEGORY_REQUIRED.to_string());
    }
    if !(candidate.price.is_finite() && candidate.price > 0.0) {
        errors.insert(Field::Price, PRICE_INVALID.to_string());
    }
    if !matches!(exact_quantity(candidate.quantity), Some(n) if n >= 0) {
        errors.insert(Field::Quantity, QUANTITY_INVALID.to_string());
    }

    Validation { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, category: &str, price: f64, quantity: f64) -> Candidate {
        Candidate {
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }

    #[test]
    fn valid_candidate_has_no_errors() {
        let v = validate(&candidate("Mouse", "Electronics", 24.99, 12.0));
        assert!(v.is_valid());
        assert!(v.errors.is_empty());
    }

    #[test]
    fn zero_quantity_is_valid() {
        assert!(validate(&candidate("Mouse", "Electronics", 1.0, 0.0)).is_valid());
    }

    #[test]
    fn blank_name_and_category_are_required() {
        let v = validate(&candidate("   ", "", 1.0, 1.0));
        assert_eq!(v.error(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(v.error(Field::Category), Some(CATEGORY_REQUIRED));
        assert_eq!(v.errors.len(), 2);
    }

    #[test]
    fn bad_price_reports_only_price() {
        for price in [0.0, -1.0, f64::NAN] {
            let v = validate(&candidate("Mouse", "Electronics", price, 3.0));
            assert_eq!(v.errors.len(), 1, "price {}", price);
            assert_eq!(v.error(Field::Price), Some(PRICE_INVALID));
        }
    }

    #[test]
    fn fractional_or_negative_quantity_is_rejected() {
        for qty in [1.5, -1.0, f64::NAN] {
            let v = validate(&candidate("Mouse", "Electronics", 1.0, qty));
            assert_eq!(v.error(Field::Quantity), Some(QUANTITY_INVALID));
        }
    }

    #[test]
    fn quantity_beyond_exact_range_is_rejected() {
        let v = validate(&candidate("Bolts", "Home", 1.0, 1e20));
        assert_eq!(v.error(Field::Quantity), Some(QUANTITY_INVALID));
        assert!(validate(&candidate("Bolts", "Home", 1.0, MAX_QUANTITY as f64)).is_valid());
    }

    #[test]
    fn exact_quantity_checks_range_and_fraction() {
        assert_eq!(exact_quantity(12.0), Some(12));
        assert_eq!(exact_quantity(-3.0), Some(-3));
        assert_eq!(exact_quantity(2.5), None);
        assert_eq!(exact_quantity(f64::NAN), None);
        assert_eq!(exact_quantity(9.3e18), None);
    }

    #[test]
    fn draft_coercion_reads_form_text() {
        let draft = ProductDraft::new(" Mouse ", "Electronics", "abc", "");
        let c = Candidate::from_draft(&draft);
        assert_eq!(c.name, "Mouse");
        assert!(c.price.is_nan());
        assert_eq!(c.quantity, 0.0);

        let v = validate(&c);
        assert_eq!(v.errors.keys().copied().collect::<Vec<_>>(), vec![Field::Price]);
    }

    #[test]
    fn with_field_uses_leading_integer_for_quantity() {
        let c = candidate("Mouse", "Electronics", 1.0, 1.0).with_field(Field::Quantity, "7 units");
        assert_eq!(c.quantity, 7.0);
        let c = c.with_field(Field::Quantity, "lots");
        assert!(c.quantity.is_nan());
    }

    #[test]
    fn message_for_falls_back_to_generic() {
        let v = validate(&candidate("", "Electronics", 1.0, 1.0));
        assert_eq!(v.message_for(Field::Name), NAME_REQUIRED);
        assert_eq!(v.message_for(Field::Price), INVALID_VALUE);
    }

    #[test]
    fn display_lists_fields() {
        let v = validate(&candidate("", "", 1.0, 1.0));
        assert_eq!(
            v.to_string(),
            "name: Product name is required.; category: Category is required."
        );
    }
}
