//! # Storage Layer
//!
//! Stockpile keeps all of its state in a tiny key/value store of strings, the
//! same shape as a browser's local storage. The [`KeyValueStore`] trait is that
//! contract; everything above it (the product collection, the view state, the
//! theme flag) is serialized to JSON text by [`persist`] and stored under one of
//! the well-known [`keys`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one file per key inside the data directory.
//!   Writes are atomic (tmp file + rename) so a failed write never clobbers the
//!   previous value.
//! - [`memory::InMemoryStore`]: a map behind a `RefCell`, for tests. It can be
//!   told to fail writes to exercise the error paths.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── stockpile.products   # JSON array of products
//! ├── stockpile.state      # JSON object: search / filter / sort
//! ├── stockpile.theme      # "dark" or "light"
//! └── config.json          # configuration (see config.rs)
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod persist;

/// Well-known keys.
pub mod keys {
    pub const PRODUCTS: &str = "stockpile.products";
    pub const STATE: &str = "stockpile.state";
    pub const THEME: &str = "stockpile.theme";
}

/// Synchronous string key/value storage.
///
/// All methods take `&self`: the file store is stateless and the memory store
/// uses interior mutability, which lets several owners (product store, view
/// state, theme) share one backend by reference.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value for `key`. Must be all-or-nothing.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`; removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
