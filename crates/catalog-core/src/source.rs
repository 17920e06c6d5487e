//! Data sources.
//!
//! A source produces the whole catalog in one go, with text resolved for one
//! language. Loading is asynchronous so hosts can keep painting while it runs;
//! the futures here do not depend on any particular executor.

use std::future::Future;
use std::path::PathBuf;

use catalog_ingest::load_catalog;
use catalog_model::Item;

use crate::error::LoadError;

/// Yields the item collection or a load failure.
pub trait DataSource {
    fn load(&self, language: &str) -> impl Future<Output = Result<Vec<Item>, LoadError>>;
}

/// Reads a destination document from disk on every load.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for JsonFileSource {
    async fn load(&self, language: &str) -> Result<Vec<Item>, LoadError> {
        tracing::debug!(path = %self.path.display(), language, "Loading destinations");
        load_catalog(&self.path, language).map_err(LoadError::from)
    }
}

/// Serves a fixed outcome whatever the language. Each load hands out a fresh copy.
#[derive(Debug, Clone)]
pub struct StaticSource {
    outcome: Result<Vec<Item>, LoadError>,
}

impl StaticSource {
    pub fn items(items: Vec<Item>) -> Self {
        Self { outcome: Ok(items) }
    }

    pub fn failing(error: LoadError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

impl DataSource for StaticSource {
    async fn load(&self, _language: &str) -> Result<Vec<Item>, LoadError> {
        self.outcome.clone()
    }
}
