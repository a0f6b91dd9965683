use std::fs;
use std::path::Path;

use ttf_parser::Face;

use crate::error::{Error, Result};

/// Read a source font file, checking the sfnt magic before handing the
/// bytes to the parser
pub fn load_font(path: &Path) -> Result<Vec<u8>> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) => return Err(Error::FontOpen(path.to_path_buf(), err.to_string())),
    };

    let is_valid_magic = data.len() >= 4
        && (data[..4] == [0x00, 0x01, 0x00, 0x00] || // TTF
            data[..4] == [0x4F, 0x54, 0x54, 0x4F]); // OTF

    if !is_valid_magic {
        return Err(Error::FontOpen(
            path.to_path_buf(),
            "not a TrueType or OpenType font".to_string(),
        ));
    }

    Ok(data)
}

/// Parse the first face of a font file
pub fn open_face<'a>(data: &'a [u8], path: &Path) -> Result<Face<'a>> {
    Face::parse(data, 0).map_err(|err| Error::FontOpen(path.to_path_buf(), err.to_string()))
}

/// Whether the face's character map resolves the given code point.
/// Codes that are not Unicode scalar values never resolve.
pub fn has_glyph(face: &Face, code: u32) -> bool {
    match char::from_u32(code) {
        Some(ch) => face.glyph_index(ch).is_some(),
        None => false,
    }
}
