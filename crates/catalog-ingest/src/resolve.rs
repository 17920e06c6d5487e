//! Turning raw destinations into catalog items for one language.

use catalog_model::{Category, Coordinates, Item, ItemId};

use crate::DEFAULT_LANGUAGE;
use crate::document::{LocalizedList, LocalizedText, RawCoordinates, RawDestination, RawId};
use crate::error::{IngestError, Result};

/// Picks language variants with a fallback to [`DEFAULT_LANGUAGE`].
#[derive(Debug, Clone)]
pub(crate) struct Resolver<'a> {
    language: &'a str,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(language: &'a str) -> Self {
        Self { language }
    }

    fn text(&self, value: Option<&LocalizedText>) -> Option<String> {
        let text = match value? {
            LocalizedText::Plain(text) => Some(text.as_str()),
            LocalizedText::ByLanguage(map) => [self.language, DEFAULT_LANGUAGE]
                .into_iter()
                .filter_map(|lang| map.get(lang))
                .map(String::as_str)
                .find(|text| !text.trim().is_empty()),
        }?;
        (!text.trim().is_empty()).then(|| text.to_string())
    }

    fn list(&self, value: Option<&LocalizedList>) -> Vec<String> {
        match value {
            None => Vec::new(),
            Some(LocalizedList::Plain(list)) => list.clone(),
            Some(LocalizedList::ByLanguage(map)) => [self.language, DEFAULT_LANGUAGE]
                .into_iter()
                .filter_map(|lang| map.get(lang))
                .find(|list| !list.is_empty())
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Resolve one destination; `index` is its position in the document.
    pub(crate) fn item(&self, index: usize, raw: RawDestination) -> Result<Item> {
        let raw_id = raw.id.map(RawId::into_string);
        let id = raw_id
            .as_deref()
            .map(ItemId::new)
            .transpose()
            .ok()
            .flatten()
            .ok_or_else(|| IngestError::invalid_item(index, raw_id.as_deref(), "missing id"))?;

        let category_name = raw.cat.as_deref().ok_or_else(|| {
            IngestError::invalid_item(index, Some(id.as_str()), "missing category")
        })?;
        let category: Category = category_name
            .parse()
            .map_err(|err| IngestError::invalid_item(index, Some(id.as_str()), format!("{err}")))?;

        let title = self
            .text(raw.name.as_ref())
            .unwrap_or_else(|| id.to_string());

        Ok(Item {
            title,
            category,
            subcategory: raw
                .subcat
                .map(|sub| sub.trim().to_string())
                .filter(|sub| !sub.is_empty()),
            short_text: self.text(raw.description.as_ref()).unwrap_or_default(),
            long_text: self.text(raw.long.as_ref()).unwrap_or_default(),
            coordinates: raw.coords.and_then(coordinates),
            address: self.text(raw.address.as_ref()),
            badges: self.list(raw.badges.as_ref()),
            media_ref: raw.img.unwrap_or_default(),
            info_sheet_ref: raw.info_sheet.filter(|sheet| !sheet.trim().is_empty()),
            id,
        })
    }
}

/// Only well-formed pairs become coordinates; anything else is dropped.
fn coordinates(raw: RawCoordinates) -> Option<Coordinates> {
    let (lat, lng) = match raw {
        RawCoordinates::Pair(pair) if pair.len() == 2 => (pair[0], pair[1]),
        RawCoordinates::Pair(_) => return None,
        RawCoordinates::Object { lat, lng } => (lat, lng),
    };
    (lat.is_finite() && lng.is_finite()).then(|| Coordinates::new(lat, lng))
}
