//! Catalog item type.

use serde::{Deserialize, Serialize};

use crate::{Category, ItemId, ModelError};

/// Geographic position of an item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// External map link for the "open in maps" action.
    pub fn maps_url(&self) -> String {
        format!("https://www.google.com/maps?q={},{}", self.lat, self.lng)
    }
}

/// One point of interest.
///
/// Items are immutable after loading. Text fields are already resolved to a
/// single language by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub category: Category,
    /// Only meaningful within `category`.
    pub subcategory: Option<String>,
    pub title: String,
    pub short_text: String,
    pub long_text: String,
    pub coordinates: Option<Coordinates>,
    pub address: Option<String>,
    pub badges: Vec<String>,
    pub media_ref: String,
    pub info_sheet_ref: Option<String>,
}

impl Item {
    /// Create an item with the required fields; everything else is empty.
    pub fn new(
        id: impl Into<String>,
        category: Category,
        title: impl Into<String>,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            id: ItemId::new(id)?,
            category,
            subcategory: None,
            title: title.into(),
            short_text: String::new(),
            long_text: String::new(),
            coordinates: None,
            address: None,
            badges: Vec::new(),
            media_ref: String::new(),
            info_sheet_ref: None,
        })
    }

    #[must_use]
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        let subcategory = subcategory.into();
        self.subcategory = (!subcategory.trim().is_empty()).then_some(subcategory);
        self
    }

    #[must_use]
    pub fn with_short_text(mut self, text: impl Into<String>) -> Self {
        self.short_text = text.into();
        self
    }

    #[must_use]
    pub fn with_long_text(mut self, text: impl Into<String>) -> Self {
        self.long_text = text.into();
        self
    }

    #[must_use]
    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.coordinates = Some(Coordinates::new(lat, lng));
        self
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn with_badges<I, S>(mut self, badges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.badges = badges.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_media_ref(mut self, media_ref: impl Into<String>) -> Self {
        self.media_ref = media_ref.into();
        self
    }

    #[must_use]
    pub fn with_info_sheet_ref(mut self, info_sheet_ref: impl Into<String>) -> Self {
        self.info_sheet_ref = Some(info_sheet_ref.into());
        self
    }
}
