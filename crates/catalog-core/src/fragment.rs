//! URL fragment grammar.
//!
//! ```text
//! ""             -> List
//! "dest/<id>"    -> Detail(<id>)
//! anything else  -> List
//! ```
//!
//! A leading `#` is accepted and ignored. The id is taken verbatim after
//! trimming surrounding whitespace; an empty id falls back to the list.

use catalog_model::{ItemId, ViewTarget};

/// Prefix of a detail fragment.
pub const DETAIL_PREFIX: &str = "dest/";

/// Strip the optional `#` marker.
pub fn strip_marker(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}

/// Parse a fragment into a view target.
///
/// Never fails: unrecognised input means the list.
pub fn parse_fragment(fragment: &str) -> ViewTarget {
    strip_marker(fragment)
        .strip_prefix(DETAIL_PREFIX)
        .and_then(|id| ItemId::new(id).ok())
        .map_or(ViewTarget::List, ViewTarget::Detail)
}

/// Canonical fragment (without `#`) for a view target.
pub fn fragment_for(target: &ViewTarget) -> String {
    match target {
        ViewTarget::List => String::new(),
        ViewTarget::Detail(id) => format!("{DETAIL_PREFIX}{id}"),
    }
}
