use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FONTNAME_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$").unwrap();
}

/// Check that a configured fontname is a plain file stem.
/// The name is joined into "<fonts_dir>/<fontname>.ttf", so path
/// separators and leading dots or dashes are not allowed.
pub fn is_valid_fontname(name: &str) -> bool {
    FONTNAME_PATTERN.is_match(name)
}

/// Build the path of the source font file for a fontname
pub fn font_file_path(fonts_dir: &Path, fontname: &str) -> PathBuf {
    fonts_dir.join(format!("{}.ttf", fontname))
}
