//! Configuration and manifest data models

pub mod config;
pub mod manifest;

pub use config::{FontConfig, FontSection, GlyphConfig};
pub use manifest::{FontRecord, GlyphRecord};
