//! Configuration parsing for the snippet workspace
//!
//! Supports an optional `snipdesk.toml` served next to the page.

pub mod settings;
pub mod types;

pub use settings::{load_settings, parse_settings, SETTINGS_PATH};
pub use types::*;
