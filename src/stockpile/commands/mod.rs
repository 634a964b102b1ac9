use crate::config::StockpileConfig;
use crate::error::StockpileError;
use crate::index::DisplayProduct;
use crate::model::Product;
use crate::stats::Stats;
use crate::theme::ThemeMode;
use crate::validate::Validation;
use crate::view::ViewState;
use std::path::PathBuf;

pub mod add;
pub mod categories;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod reset;
pub mod stats;
pub mod theme;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }

    /// The warning shown when a change could not be written.
    pub fn storage(err: &StockpileError) -> Self {
        Self::warning(format!("Unable to save data: {}", err))
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<DisplayProduct>,
    /// Size of the whole collection behind `listed_products`.
    pub total_products: usize,
    pub stats: Option<Stats>,
    pub view: Option<ViewState>,
    pub categories: Vec<String>,
    pub field_errors: Option<Validation>,
    pub config: Option<StockpileConfig>,
    pub theme: Option<ThemeMode>,
    pub exported: Option<String>,
    pub written_to: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<DisplayProduct>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_view(mut self, view: ViewState) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_field_errors(mut self, errors: Validation) -> Self {
        self.field_errors = Some(errors);
        self
    }

    pub fn with_config(mut self, config: StockpileConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
