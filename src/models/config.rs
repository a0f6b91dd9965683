use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// One per-font YAML config file
#[derive(Debug, Default, Deserialize)]
pub struct FontConfig {
    /// Font metadata, passed through to the manifest
    #[serde(default)]
    pub font: FontSection,
    /// Requested glyph selection
    #[serde(default)]
    pub glyphs: Vec<GlyphConfig>,
}

/// The "font:" mapping of a config file
#[derive(Debug, Default, Deserialize)]
pub struct FontSection {
    /// Stem of the source font file under the fonts directory
    pub fontname: Option<String>,
    /// Remaining metadata keys, carried verbatim into the manifest
    #[serde(flatten)]
    pub meta: BTreeMap<String, Value>,
}

/// One entry of the "glyphs:" list
#[derive(Debug, Clone, Deserialize)]
pub struct GlyphConfig {
    /// Unicode code point; entries without one are dropped
    pub code: Option<u32>,
    /// CSS name; defaults to `file` when absent
    pub css: Option<String>,
    /// Output-file reference
    pub file: Option<String>,
    /// Remaining keys, carried verbatim into the manifest
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl FontSection {
    /// The declared fontname, treating an empty string as absent
    pub fn fontname(&self) -> Option<&str> {
        self.fontname.as_deref().filter(|name| !name.is_empty())
    }
}
