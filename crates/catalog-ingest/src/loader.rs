//! Catalog document loading.

use std::path::Path;

use catalog_model::Item;

use crate::document::RawDocument;
use crate::error::{IngestError, Result};
use crate::resolve::Resolver;

/// Load destinations from a JSON file, resolving text for `language`.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use catalog_ingest::load_catalog;
///
/// let items = load_catalog(Path::new("assets/data/destinations.json"), "es")?;
/// println!("{} destinations", items.len());
/// ```
pub fn load_catalog(path: &Path, language: &str) -> Result<Vec<Item>> {
    let content = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&content, &path.display().to_string(), language)
}

/// Parse a destination document held in memory; `origin` names it in errors.
pub fn parse_catalog(json: &str, origin: &str, language: &str) -> Result<Vec<Item>> {
    let document: RawDocument =
        serde_json::from_str(json).map_err(|source| IngestError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    let resolver = Resolver::new(language);
    let items = document
        .into_destinations()
        .into_iter()
        .enumerate()
        .map(|(index, raw)| resolver.item(index, raw))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(origin, language, items = items.len(), "Parsed destination document");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_document_order() {
        let items = parse_catalog(
            r#"[{"id":"z","cat":"urban"},{"id":"a","cat":"nature"}]"#,
            "inline",
            "en",
        )
        .unwrap();
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a"]);
    }

    #[test]
    fn truncated_json_is_a_parse_error() {
        let err = parse_catalog(r#"[{"id":"a","#, "inline", "en").unwrap_err();
        assert!(matches!(err, IngestError::Parse { .. }));
    }

    #[test]
    fn one_bad_entry_fails_the_document() {
        let err = parse_catalog(
            r#"[{"id":"a","cat":"nature"},{"id":"b","cat":"space"}]"#,
            "inline",
            "en",
        )
        .unwrap_err();
        assert!(matches!(err, IngestError::InvalidItem { index: 1, .. }));
    }
}
