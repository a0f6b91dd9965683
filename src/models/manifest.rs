use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// One font entry of the emitted manifest
#[derive(Debug, Serialize)]
pub struct FontRecord {
    /// Zero-based position of the config on the command line
    pub id: usize,
    pub fontname: String,
    /// Metadata keys carried over from the config's "font:" mapping
    #[serde(flatten)]
    pub meta: BTreeMap<String, Value>,
    /// Glyphs that resolved against the source font
    pub glyphs: Vec<GlyphRecord>,
}

/// One verified glyph of a font record
#[derive(Debug, Serialize)]
pub struct GlyphRecord {
    pub css: String,
    pub code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_serializes_with_passthrough_metadata() {
        let mut meta = BTreeMap::new();
        meta.insert("copyright".to_string(), json!("Icon author"));

        let mut extra = BTreeMap::new();
        extra.insert("uid".to_string(), json!("9dd9e835"));

        let record = FontRecord {
            id: 0,
            fontname: "fontello".to_string(),
            meta,
            glyphs: vec![GlyphRecord {
                css: "mail".to_string(),
                code: 0xe800,
                file: Some("mail.svg".to_string()),
                extra,
            }],
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], json!(0));
        assert_eq!(value["fontname"], json!("fontello"));
        assert_eq!(value["copyright"], json!("Icon author"));
        assert_eq!(value["glyphs"][0]["code"], json!(59392));
        assert_eq!(value["glyphs"][0]["uid"], json!("9dd9e835"));
    }

    #[test]
    fn absent_file_reference_is_omitted() {
        let glyph = GlyphRecord {
            css: "mail".to_string(),
            code: 0xe800,
            file: None,
            extra: BTreeMap::new(),
        };
        let value = serde_json::to_value(&glyph).unwrap();
        assert!(value.get("file").is_none());
    }
}
