//! File-backed ingestion tests.

use std::fs;

use catalog_ingest::{IngestError, Translations, load_catalog};
use catalog_model::{Category, Coordinates};
use tempfile::TempDir;

const DESTINATIONS: &str = r#"[
  {
    "id": "salto-del-laja",
    "cat": "nature",
    "subcat": "waterfalls",
    "name": { "en": "Laja Falls", "es": "Salto del Laja" },
    "description": { "en": "Famous waterfalls.", "es": "Famosas cascadas." },
    "long": { "en": "A long description." },
    "coords": [-37.2153, -72.3747],
    "address": "Ruta 5 Sur km 480",
    "badges": { "en": ["Hiking", "Photography"], "es": ["Senderismo", "Fotografía"] },
    "img": "assets/img/salto.jpg",
    "infoSheet": "assets/docs/salto.pdf"
  },
  {
    "id": "cafe-literario",
    "category": "gastronomy",
    "title": "Café Literario",
    "img": "assets/img/cafe.jpg"
  }
]"#;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_full_destination_in_spanish() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "destinations.json", DESTINATIONS);

    let items = load_catalog(&path, "es").unwrap();
    assert_eq!(items.len(), 2);

    let salto = &items[0];
    assert_eq!(salto.id.as_str(), "salto-del-laja");
    assert_eq!(salto.category, Category::Nature);
    assert_eq!(salto.subcategory.as_deref(), Some("waterfalls"));
    assert_eq!(salto.title, "Salto del Laja");
    assert_eq!(salto.short_text, "Famosas cascadas.");
    assert_eq!(salto.long_text, "A long description.");
    assert_eq!(salto.coordinates, Some(Coordinates::new(-37.2153, -72.3747)));
    assert_eq!(salto.badges, vec!["Senderismo", "Fotografía"]);
    assert_eq!(salto.info_sheet_ref.as_deref(), Some("assets/docs/salto.pdf"));

    let cafe = &items[1];
    assert_eq!(cafe.category, Category::Gastronomy);
    assert_eq!(cafe.title, "Café Literario");
    assert!(cafe.badges.is_empty());
    assert_eq!(cafe.media_ref, "assets/img/cafe.jpg");
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    let err = load_catalog(&path, "en").unwrap_err();
    assert!(matches!(err, IngestError::FileRead { path: ref p, .. } if p == &path));
}

#[test]
fn label_table_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "i18n.json",
        r#"{"es": {"filter_gastronomy": "Gastronomía"}}"#,
    );
    let labels = Translations::load(&path).unwrap();
    assert!(labels.has_language("es"));
    assert!(!labels.has_language("en"));
    assert_eq!(labels.category_label("es", Category::Gastronomy), "Gastronomía");
}
