use super::KeyValueStore;
use crate::error::{Result, StockpileError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory key/value store for testing and development.
/// Does NOT persist data.
///
/// Uses `RefCell` for interior mutability since stockpile is single-threaded.
#[derive(Default)]
pub struct InMemoryStore {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail, like a full quota.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Raw access for tests that plant malformed values.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(StockpileError::Storage("Simulated quota exceeded".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(StockpileError::Storage("Simulated quota exceeded".to_string()));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Product;
    use crate::store::{keys, persist};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_products(self, products: &[Product]) -> Self {
            persist::save(&self.store, keys::PRODUCTS, &products.to_vec()).unwrap();
            self
        }

        /// The two-record collection used throughout the examples.
        pub fn with_mouse_and_keyboard(self) -> Self {
            self.with_products(&[
                Product::new("Mouse", "Electronics", 24.99, 12),
                Product::new("Keyboard", "Electronics", 79.90, 4),
            ])
        }

        pub fn with_raw(self, key: &str, value: &str) -> Self {
            self.store.set(key, value).unwrap();
            self
        }
    }
}
