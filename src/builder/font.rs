use std::fs;
use std::path::Path;

use crate::cli::Args;
use crate::error::{Error, Result};
use crate::font::{has_glyph, load_font, open_face};
use crate::models::{FontConfig, FontRecord, GlyphConfig, GlyphRecord};
use crate::utils::{font_file_path, is_valid_fontname, log};

use super::validate::duplicate_codes;

/// Read and parse one YAML config file
pub fn load_config(path: &Path) -> Result<FontConfig> {
    let content =
        fs::read_to_string(path).map_err(|err| Error::ConfigRead(path.to_path_buf(), err))?;
    serde_yaml::from_str(&content).map_err(|err| Error::Yaml(path.to_path_buf(), err))
}

/// Build the manifest record for one config file. `id` is the zero-based
/// position of the config on the command line.
pub fn build_font(id: usize, config_path: &Path, fonts_dir: &Path, args: &Args) -> Result<FontRecord> {
    let config = load_config(config_path)?;

    let fontname = match config.font.fontname() {
        Some(name) => name.to_string(),
        None => return Err(Error::MissingFontname(config_path.to_path_buf())),
    };
    if !is_valid_fontname(&fontname) {
        return Err(Error::Config(format!(
            "invalid \"font: fontname\" value '{}' in file {}",
            fontname,
            config_path.display()
        )));
    }

    // Entries without a code are dropped before any validation
    let glyphs: Vec<(u32, GlyphConfig)> = config
        .glyphs
        .into_iter()
        .filter_map(|glyph| glyph.code.map(|code| (code, glyph)))
        .collect();

    let codes: Vec<u32> = glyphs.iter().map(|(code, _)| *code).collect();
    let dups = duplicate_codes(&codes);
    if !dups.is_empty() {
        return Err(Error::DuplicateCodes {
            path: config_path.to_path_buf(),
            codes: dups.keys().copied().collect(),
        });
    }

    let font_path = font_file_path(fonts_dir, &fontname);
    log(args, format!("Opening source font {}", font_path.display()));

    let data = load_font(&font_path)?;
    let face = open_face(&data, &font_path)?;

    let mut records = Vec::with_capacity(glyphs.len());
    for (code, glyph) in glyphs {
        if !has_glyph(&face, code) {
            eprintln!(
                "Warning: no such glyph in the source font (code=0x{:04x})",
                code
            );
            continue;
        }
        records.push(finalize_glyph(config_path, code, glyph)?);
    }

    log(
        args,
        format!("Font '{}': {} glyph(s) resolved", fontname, records.len()),
    );

    Ok(FontRecord {
        id,
        fontname,
        meta: config.font.meta,
        glyphs: records,
    })
}

/// Apply the css-defaulting rule and freeze one glyph entry
fn finalize_glyph(config_path: &Path, code: u32, glyph: GlyphConfig) -> Result<GlyphRecord> {
    let css = match (glyph.css, &glyph.file) {
        (Some(css), _) => css,
        (None, Some(file)) => file.clone(),
        (None, None) => {
            return Err(Error::Config(format!(
                "glyph 0x{:04x} in file {} has neither 'css' nor 'file'",
                code,
                config_path.display()
            )));
        }
    };

    Ok(GlyphRecord {
        css,
        code,
        file: glyph.file,
        extra: glyph.extra,
    })
}
