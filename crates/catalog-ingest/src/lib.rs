//! Catalog data ingestion.
//!
//! This crate reads the published destination documents and label tables
//! and turns them into [`catalog_model::Item`] values.
//!
//! # Features
//!
//! - **Field aliases**: `name`/`title`/`nombre`, `cat`/`category`, `img`/`image` and more
//! - **Localisation**: per-language text and badge maps with English fallback
//! - **Label tables**: category, subcategory and interface strings via [`Translations`]
//!
//! # Example
//!
//! ```
//! use catalog_ingest::parse_catalog;
//!
//! let json = r#"[{"id": "salto", "cat": "nature", "name": {"en": "Laja Falls", "es": "Salto del Laja"}}]"#;
//! let items = parse_catalog(json, "inline", "es").unwrap();
//! assert_eq!(items[0].title, "Salto del Laja");
//! ```

mod document;
mod error;
mod i18n;
mod loader;
mod resolve;

/// Language used when a requested translation is missing.
pub const DEFAULT_LANGUAGE: &str = "en";

// === Error Types ===
pub use error::{IngestError, Result};

// === Catalog Loading ===
pub use loader::{load_catalog, parse_catalog};

// === Labels ===
pub use i18n::{TextKey, Translations, capitalize};
