//! # Stockpile Architecture
//!
//! Stockpile is a **UI-agnostic inventory list editor**. It keeps an ordered
//! collection of product records, lets a user search, filter, sort and edit
//! them, and persists everything to a small key/value store. The `stockpile`
//! binary is one client of the library, not the other way around.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, asks for confirmation, renders tables  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session: inventory, view state, theme           │
//! │  - Normalizes inputs (row numbers / id prefixes → ids)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user operation, returns CmdResult         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (inventory, view, query, validate, stats, transfer)   │
//! │  - Product store with rollback on failed writes             │
//! │  - Pure filter/sort, validation and totals                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait, typed JSON persist helpers          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Addressing Rows
//!
//! Records carry opaque ids, but users point at rows by their 1-based position
//! in the current filtered and sorted view, or by an id prefix. See
//! [`index`] for the selector syntax.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never prompts and
//! never exits the process. Confirmation before destructive operations is the
//! client's job. Files are only touched by the storage backend and by explicit
//! export/import paths.
//!
//! ## Testing Strategy
//!
//! 1. **Core and commands**: unit tests against `InMemoryStore`, including
//!    simulated write failures. Filter/sort properties are checked with proptest.
//! 2. **API** (`api.rs`): dispatch and input normalization.
//! 3. **CLI**: integration tests in `tests/` drive the binary with a temporary
//!    `STOCKPILE_HOME`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`inventory`]: The product collection and its persistence
//! - [`view`]: Search / filter / sort state
//! - [`query`]: Filtering, sorting and category choices
//! - [`validate`] and [`coerce`]: Form rules and text-to-value coercion
//! - [`stats`]: Totals and number formatting
//! - [`transfer`]: JSON export and import
//! - [`theme`]: Dark/light preference
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Product`, `Field`, seed data)
//! - [`index`]: Row selectors
//! - [`config`]: Configuration management
//! - [`init`]: Data directory discovery and context setup
//! - [`error`]: Error types

pub mod api;
pub mod coerce;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod inventory;
pub mod model;
pub mod query;
pub mod stats;
pub mod store;
pub mod theme;
pub mod transfer;
pub mod validate;
pub mod view;
