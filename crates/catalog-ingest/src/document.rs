//! Raw destination document shapes.
//!
//! The published destination files were edited by hand over time, so the
//! same concept shows up under several field names and textual fields may be
//! either a plain string or a per-language map. These types accept every
//! known variant; [`crate::resolve`] turns them into catalog items.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level document: a bare array or `{ "destinations": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawDocument {
    List(Vec<RawDestination>),
    Wrapped { destinations: Vec<RawDestination> },
}

impl RawDocument {
    pub(crate) fn into_destinations(self) -> Vec<RawDestination> {
        match self {
            Self::List(destinations) | Self::Wrapped { destinations } => destinations,
        }
    }
}

/// Identifier written as a string or a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    pub(crate) fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// Text that is either language-neutral or keyed by language code.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum LocalizedText {
    Plain(String),
    ByLanguage(BTreeMap<String, String>),
}

/// Badge list that is either language-neutral or keyed by language code.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum LocalizedList {
    Plain(Vec<String>),
    ByLanguage(BTreeMap<String, Vec<String>>),
}

/// Coordinates as `[lat, lng]` or `{ "lat": .., "lng": .. }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawCoordinates {
    Pair(Vec<f64>),
    Object {
        lat: f64,
        #[serde(alias = "lon")]
        lng: f64,
    },
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDestination {
    #[serde(default)]
    pub id: Option<RawId>,

    #[serde(default, alias = "title", alias = "nombre")]
    pub name: Option<LocalizedText>,

    #[serde(default, alias = "category", alias = "categoria")]
    pub cat: Option<String>,

    #[serde(default, alias = "subcategory")]
    pub subcat: Option<String>,

    #[serde(default, alias = "short")]
    pub description: Option<LocalizedText>,

    #[serde(default, alias = "long_description")]
    pub long: Option<LocalizedText>,

    #[serde(default, alias = "coordinates")]
    pub coords: Option<RawCoordinates>,

    #[serde(default)]
    pub address: Option<LocalizedText>,

    #[serde(default)]
    pub badges: Option<LocalizedList>,

    #[serde(default, alias = "image")]
    pub img: Option<String>,

    #[serde(default, rename = "infoSheet", alias = "info_sheet")]
    pub info_sheet: Option<String>,
}
