use crate::validate::Validation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockpileError {
    #[error("Invalid product: {0}")]
    Validation(Validation),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Import failed: {0}")]
    ImportFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl StockpileError {
    /// True for failures of the persistence layer, which callers report as
    /// warnings instead of aborting the session.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            StockpileError::Storage(_) | StockpileError::Io(_) | StockpileError::Serialization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StockpileError>;
