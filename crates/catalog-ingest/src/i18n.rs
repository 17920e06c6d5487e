//! Display label tables.
//!
//! Labels never take part in matching; they are only used when painting.
//! The table file maps a language code to a flat key/value map:
//!
//! ```json
//! { "en": { "filter_nature": "Nature" }, "es": { "filter_nature": "Naturaleza" } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use catalog_model::Category;
use serde::Deserialize;

use crate::error::{IngestError, Result};

/// Fixed interface strings with built-in English defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    NoResults,
    LoadFailed,
    Loading,
    NotFound,
    SubfilterAll,
    FilterAll,
    ViewDetails,
    ActivitiesFeatures,
    OpenInMaps,
    InfoSheet,
}

impl TextKey {
    pub fn key(&self) -> &'static str {
        match self {
            Self::NoResults => "no_destinations_found",
            Self::LoadFailed => "error_loading_destinations",
            Self::Loading => "loading_destinations",
            Self::NotFound => "destination_not_found",
            Self::SubfilterAll => "subfilter_all",
            Self::FilterAll => "filter_all",
            Self::ViewDetails => "map_popup_details",
            Self::ActivitiesFeatures => "modal_activities_features",
            Self::OpenInMaps => "modal_map_link",
            Self::InfoSheet => "modal_sheet_link",
        }
    }

    pub fn default_text(&self) -> &'static str {
        match self {
            Self::NoResults => "No destinations found matching your search.",
            Self::LoadFailed => "Error loading destinations. Please try again later.",
            Self::Loading => "Loading destinations...",
            Self::NotFound => "The requested destination could not be found.",
            Self::SubfilterAll => "All",
            Self::FilterAll => "All",
            Self::ViewDetails => "View details",
            Self::ActivitiesFeatures => "Activities & Features:",
            Self::OpenInMaps => "Open in Google Maps",
            Self::InfoSheet => "Information sheet",
        }
    }
}

/// Per-language label lookup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    tables: BTreeMap<String, BTreeMap<String, String>>,
}

impl Translations {
    /// Load a label table from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let translations = Self::parse(&content, &path.display().to_string())?;
        tracing::debug!(
            path = %path.display(),
            languages = translations.tables.len(),
            "Loaded label table"
        );
        Ok(translations)
    }

    /// Parse a label table; `origin` names the source in errors.
    pub fn parse(json: &str, origin: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| IngestError::Parse {
            origin: origin.to_string(),
            source,
        })
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.tables.contains_key(language)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Raw lookup without fallback.
    pub fn get(&self, language: &str, key: &str) -> Option<&str> {
        self.tables
            .get(language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Interface text in `language`, or the English default.
    pub fn text(&self, language: &str, key: TextKey) -> &str {
        self.get(language, key.key())
            .unwrap_or_else(|| key.default_text())
    }

    /// Category label (`filter_<category>`), or the capitalised key.
    pub fn category_label(&self, language: &str, category: Category) -> String {
        let key = format!("filter_{}", category.as_str());
        self.get(language, &key)
            .map_or_else(|| capitalize(category.as_str()), str::to_string)
    }

    /// Subcategory label (`subcat_<subcategory>`), or the capitalised key.
    pub fn subcategory_label(&self, language: &str, subcategory: &str) -> String {
        let key = format!("subcat_{subcategory}");
        self.get(language, &key)
            .map_or_else(|| capitalize(subcategory), str::to_string)
    }
}

/// Upper-case the first character.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Translations {
        Translations::parse(
            r#"{
                "en": {"filter_nature": "Nature", "subfilter_all": "All"},
                "es": {"filter_nature": "Naturaleza", "subcat_lagos": "Lagos y lagunas",
                       "no_destinations_found": "No se encontraron destinos."}
            }"#,
            "inline",
        )
        .unwrap()
    }

    #[test]
    fn category_label_prefers_table() {
        let t = sample();
        assert_eq!(t.category_label("es", Category::Nature), "Naturaleza");
        assert_eq!(t.category_label("es", Category::Urban), "Urban");
    }

    #[test]
    fn subcategory_label_falls_back_to_capitalised_key() {
        let t = sample();
        assert_eq!(t.subcategory_label("es", "lagos"), "Lagos y lagunas");
        assert_eq!(t.subcategory_label("en", "parks"), "Parks");
    }

    #[test]
    fn text_uses_default_when_missing() {
        let t = sample();
        assert_eq!(t.text("es", TextKey::NoResults), "No se encontraron destinos.");
        assert_eq!(
            t.text("en", TextKey::NoResults),
            "No destinations found matching your search."
        );
    }

    #[test]
    fn capitalize_handles_unicode() {
        assert_eq!(capitalize("ñuble"), "Ñuble");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn malformed_table_is_a_parse_error() {
        let err = Translations::parse("[1,2]", "i18n.json").unwrap_err();
        assert!(matches!(err, IngestError::Parse { ref origin, .. } if origin == "i18n.json"));
    }
}
