use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::FontRecord;

/// Serialize the font records, optionally wrapping them as a CommonJS
/// module. In module form the JSON body sits one indent level inside
/// "module.exports = [ ... ];".
pub fn render_manifest(fonts: &[FontRecord], json_only: bool) -> Result<String> {
    let json = serde_json::to_string_pretty(fonts).map_err(Error::Json)?;

    if json_only {
        Ok(json)
    } else {
        Ok(format!("module.exports = [{}];", json.replace('\n', "\n  ")))
    }
}

/// Write the rendered manifest to the destination file
pub fn write_manifest(dst_file: &Path, contents: &str) -> Result<()> {
    fs::write(dst_file, contents).map_err(|err| Error::OutputWrite(dst_file.to_path_buf(), err))
}
