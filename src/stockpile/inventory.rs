//! # Product Store
//!
//! [`Inventory`] owns the ordered product collection and the storage backend it
//! is persisted to. Every mutation is computed on a copy, written through
//! [`persist::save`], and only then swapped in. A failed write leaves the
//! in-memory collection exactly as it was, so the persisted snapshot and the
//! in-memory list never disagree after an operation returns.
//!
//! Insertion order is canonical. Edits replace a record at its position;
//! deletes close the gap.

use crate::error::{Result, StockpileError};
use crate::model::{seed_products, Field, Product, ProductDraft, ProductId};
use crate::store::{keys, persist, KeyValueStore};
use crate::validate::{exact_quantity, validate, Candidate, Validation, QUANTITY_INVALID};
use tracing::{debug, info, warn};

pub struct Inventory<S: KeyValueStore> {
    store: S,
    products: Vec<Product>,
}

impl<S: KeyValueStore> Inventory<S> {
    /// Loads the persisted collection, or the sample inventory when nothing
    /// usable is stored. An empty persisted list stays empty.
    ///
    /// The sample is written back right away so its ids survive into the next
    /// session. A failed write is logged and the sample is still used.
    pub fn load(store: S) -> Self {
        let products = match persist::load::<_, Vec<Product>>(&store, keys::PRODUCTS) {
            Some(products) => {
                debug!(count = products.len(), "loaded products");
                products
            }
            None => {
                info!("no stored products, starting from sample inventory");
                let seed = seed_products();
                if let Err(e) = persist::save(&store, keys::PRODUCTS, &seed) {
                    warn!(error = %e, "could not store sample inventory");
                }
                seed
            }
        };
        Self { store, products }
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn add(&mut self, product: Product) -> Result<()> {
        let mut next = self.products.clone();
        debug!(id = %product.id, name = %product.name, "adding product");
        next.push(product);
        self.commit(next)
    }

    /// Validates raw form input and appends the resulting record.
    pub fn add_draft(&mut self, draft: &ProductDraft) -> Result<Product> {
        let candidate = Candidate::from_draft(draft);
        let validation = validate(&candidate);
        if !validation.is_valid() {
            return Err(StockpileError::Validation(validation));
        }
        let product = Product::new(
            &candidate.name,
            &candidate.category,
            candidate.price,
            stored_quantity(&candidate)?,
        );
        self.add(product.clone())?;
        Ok(product)
    }

    /// Replaces a single field of the record with `id`.
    ///
    /// The whole record is re-validated with the new value in place. On failure
    /// the returned [`StockpileError::Validation`] carries only the message for
    /// `field`, or "Invalid value." when a different field is what failed.
    pub fn update(&mut self, id: &ProductId, field: Field, raw: &str) -> Result<Product> {
        let pos = self.position(id)?;
        let current = &self.products[pos];

        let candidate = Candidate::from_product(current).with_field(field, raw);
        let validation = validate(&candidate);
        if !validation.is_valid() {
            let mut only = Validation::default();
            only.errors
                .insert(field, validation.message_for(field).to_string());
            return Err(StockpileError::Validation(only));
        }

        let quantity = stored_quantity(&candidate)?;
        let updated = Product {
            name: candidate.name,
            category: candidate.category,
            price: candidate.price,
            quantity,
            id: current.id.clone(),
        };
        let mut next = self.products.clone();
        next[pos] = updated.clone();
        self.commit(next)?;
        debug!(id = %updated.id, %field, "updated product");
        Ok(updated)
    }

    pub fn remove(&mut self, id: &ProductId) -> Result<Product> {
        let pos = self.position(id)?;
        let mut next = self.products.clone();
        let removed = next.remove(pos);
        self.commit(next)?;
        debug!(id = %removed.id, name = %removed.name, "removed product");
        Ok(removed)
    }

    /// Removes every record whose id is listed, with a single write. Unknown
    /// and repeated ids are skipped. Removed records come back in collection
    /// order.
    pub fn remove_many(&mut self, ids: &[ProductId]) -> Result<Vec<Product>> {
        let (removed, kept): (Vec<Product>, Vec<Product>) = self
            .products
            .iter()
            .cloned()
            .partition(|p| ids.contains(&p.id));
        if removed.is_empty() {
            return Ok(removed);
        }
        self.commit(kept)?;
        debug!(count = removed.len(), "removed products");
        Ok(removed)
    }

    pub fn replace_all(&mut self, products: Vec<Product>) -> Result<()> {
        let count = products.len();
        self.commit(products)?;
        info!(count, "replaced product collection");
        Ok(())
    }

    fn position(&self, id: &ProductId) -> Result<usize> {
        self.products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| StockpileError::NotFound(id.to_string()))
    }

    fn commit(&mut self, next: Vec<Product>) -> Result<()> {
        persist::save(&self.store, keys::PRODUCTS, &next)?;
        self.products = next;
        Ok(())
    }
}

/// Quantity of a candidate that passed validation, converted without loss.
fn stored_quantity(candidate: &Candidate) -> Result<i64> {
    exact_quantity(candidate.quantity).ok_or_else(|| {
        let mut invalid = Validation::default();
        invalid
            .errors
            .insert(Field::Quantity, QUANTITY_INVALID.to_string());
        StockpileError::Validation(invalid)
    })
}
