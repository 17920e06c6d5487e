//! Search text normalisation.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::Item;

/// Separates fields in the search haystack so a query never spans two fields.
const FIELD_SEPARATOR: char = '\u{1f}';

/// Case-fold, strip diacritics and trim.
///
/// `"  Café Ñandú "` becomes `"cafe nandu"`.
pub fn normalize_text(value: &str) -> String {
    value
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalised concatenation of every searchable field of an item.
///
/// Fields: title, short and long text, category key, subcategory, badges and
/// address.
pub fn search_haystack(item: &Item) -> String {
    let mut fields: Vec<&str> = vec![
        item.title.as_str(),
        item.short_text.as_str(),
        item.long_text.as_str(),
        item.category.as_str(),
    ];
    if let Some(subcategory) = &item.subcategory {
        fields.push(subcategory);
    }
    fields.extend(item.badges.iter().map(String::as_str));
    if let Some(address) = &item.address {
        fields.push(address);
    }

    let mut haystack = String::new();
    for field in fields {
        if !haystack.is_empty() {
            haystack.push(FIELD_SEPARATOR);
        }
        haystack.push_str(&normalize_text(field));
    }
    haystack
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(normalize_text("  Café Ñandú "), "cafe nandu");
        assert_eq!(normalize_text("BIOBÍO"), "biobio");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn haystack_covers_badges_and_address() {
        let item = Item::new("a", Category::Nature, "Salto del Laja")
            .unwrap()
            .with_badges(["Senderismo", "Cascadas"])
            .with_address("Ruta 5 Sur, Los Ángeles");
        let haystack = search_haystack(&item);
        assert!(haystack.contains("cascadas"));
        assert!(haystack.contains("los angeles"));
        assert!(haystack.contains("nature"));
    }

    #[test]
    fn fields_do_not_run_together() {
        let item = Item::new("a", Category::Urban, "Plaza")
            .unwrap()
            .with_short_text("Mayor");
        assert!(!search_haystack(&item).contains("plazamayor"));
    }
}
