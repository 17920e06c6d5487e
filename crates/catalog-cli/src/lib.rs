//! Terminal host components for the catalog browser.

pub mod logging;
pub mod render;
pub mod script;
pub mod settings;
