//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all stockpile operations, whichever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns session state**: the [`Inventory`], the [`ViewState`] and the
//!   [`ThemeMode`], all loaded from the same backend at construction
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (row numbers and id prefixes into [`RowSelector`]s,
//!   field names into [`Field`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Confirmation**: asking before delete or reset is the UI's job
//! - **Presentation**: returns data structures, not strings
//!
//! ## Generic Over KeyValueStore
//!
//! `StockpileApi<S: KeyValueStore>`:
//! - Production: `StockpileApi<FileStore>`
//! - Testing: `StockpileApi<InMemoryStore>`

use crate::commands;
use crate::error::{Result, StockpileError};
use crate::index::RowSelector;
use crate::inventory::Inventory;
use crate::model::{Field, ProductDraft};
use crate::store::KeyValueStore;
use crate::theme::{self, ThemeMode};
use crate::transfer::ImportPolicy;
use crate::view::{SortKey, ViewState};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The main API facade for stockpile operations.
pub struct StockpileApi<S: KeyValueStore> {
    inventory: Inventory<S>,
    view: ViewState,
    theme: ThemeMode,
    data_dir: PathBuf,
}

impl<S: KeyValueStore> StockpileApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self::with_theme_detector(store, data_dir, theme::system_preference)
    }

    /// Like [`StockpileApi::new`] with an injectable system theme detector.
    pub fn with_theme_detector<F>(store: S, data_dir: PathBuf, detect: F) -> Self
    where
        F: FnOnce() -> ThemeMode,
    {
        let view = ViewState::load(&store);
        let theme = ThemeMode::load_with(&store, detect);
        let inventory = Inventory::load(store);
        Self {
            inventory,
            view,
            theme,
            data_dir,
        }
    }

    pub fn list_products(&mut self, options: commands::list::ListOptions) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory, &mut self.view, options)
    }

    pub fn add_product(&mut self, draft: &ProductDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.inventory, draft)
    }

    pub fn edit_product(
        &mut self,
        selector: &str,
        field: &str,
        value: &str,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        let field = Field::from_str(field).map_err(StockpileError::Api)?;
        commands::edit::run(&mut self.inventory, &self.view, &selector, field, value)
    }

    pub fn delete_products<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
        pacing: commands::delete::DeletePacing,
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.inventory, &self.view, &selectors, pacing)
    }

    /// Resolves selectors without changing anything, for confirmation prompts.
    pub fn preview_products<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        let resolved = commands::helpers::resolve_selectors(
            self.inventory.products(),
            &self.view,
            &selectors,
        )?;
        let products = resolved
            .iter()
            .filter_map(|(_, id)| self.inventory.find(id).cloned())
            .collect();
        Ok(commands::CmdResult::default().with_affected_products(products))
    }

    pub fn sort_by(&mut self, key: SortKey) -> Result<commands::CmdResult> {
        commands::view::sort(&self.inventory, &mut self.view, key)
    }

    pub fn clear_filters(&mut self) -> Result<commands::CmdResult> {
        commands::view::clear(&self.inventory, &mut self.view)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.inventory)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::categories::run(&self.inventory)
    }

    pub fn export_products(&self, output: Option<&Path>) -> Result<commands::CmdResult> {
        commands::export::run(&self.inventory, output)
    }

    pub fn import_products(
        &mut self,
        path: &Path,
        policy: ImportPolicy,
    ) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.inventory, path, policy)
    }

    pub fn reset_to_sample(&mut self) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.inventory)
    }

    pub fn theme(&mut self, action: ThemeAction) -> Result<commands::CmdResult> {
        commands::theme::run(self.inventory.backend(), &mut self.theme, action)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn current_theme(&self) -> ThemeMode {
        self.theme
    }
}

fn parse_selector(input: &str) -> Result<RowSelector> {
    RowSelector::from_str(input).map_err(StockpileError::Api)
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RowSelector>> {
    if inputs.is_empty() {
        return Err(StockpileError::Api("No rows given".to_string()));
    }
    inputs.iter().map(|s| parse_selector(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::delete::DeletePacing;
pub use crate::commands::list::ListOptions;
pub use crate::commands::theme::ThemeAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
