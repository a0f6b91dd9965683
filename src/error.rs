use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the FontEmbed application
#[derive(Debug)]
pub enum Error {
    /// A config file could not be read
    ConfigRead(PathBuf, io::Error),
    /// A config file is not valid YAML
    Yaml(PathBuf, serde_yaml::Error),
    /// A config file has no usable "font: fontname" entry
    MissingFontname(PathBuf),
    /// Glyph codes within one config file are not unique
    DuplicateCodes {
        path: PathBuf,
        /// Offending codes, in ascending order
        codes: Vec<u32>,
    },
    /// Configuration errors
    Config(String),
    /// A source font could not be opened or parsed
    FontOpen(PathBuf, String),
    /// The manifest could not be serialized
    Json(serde_json::Error),
    /// The destination file could not be written
    OutputWrite(PathBuf, io::Error),
    /// Command-line usage errors
    Usage(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigRead(path, err) => {
                write!(f, "Cannot open {}: {}", path.display(), err)
            }
            Error::Yaml(path, err) => match err.location() {
                Some(loc) => write!(
                    f,
                    "YAML parser error in file {} at line {}, col {}",
                    path.display(),
                    loc.line(),
                    loc.column()
                ),
                None => write!(f, "YAML parser error in file {}: {}", path.display(), err),
            },
            Error::MissingFontname(path) => {
                write!(
                    f,
                    "Error: cannot find \"font: fontname\" in file {}",
                    path.display()
                )
            }
            Error::DuplicateCodes { path, codes } => {
                write!(
                    f,
                    "Error in file {}: glyph codes aren't unique:",
                    path.display()
                )?;
                for code in codes {
                    write!(f, "\nDuplicate 'code:' 0x{:04x}", code)?;
                }
                Ok(())
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::FontOpen(path, msg) => {
                write!(f, "Cannot open font {}: {}", path.display(), msg)
            }
            Error::Json(err) => write!(f, "Cannot serialize manifest: {}", err),
            Error::OutputWrite(path, err) => {
                write!(f, "Cannot write to file {}: {}", path.display(), err)
            }
            Error::Usage(msg) => write!(f, "Error: {}", msg),
        }
    }
}

/// Result type alias for FontEmbed operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn duplicate_codes_lists_every_offender() {
        let err = Error::DuplicateCodes {
            path: Path::new("src/font1/config.yml").to_path_buf(),
            codes: vec![0xe800, 0xe8a1],
        };
        let text = err.to_string();
        assert!(text.starts_with("Error in file src/font1/config.yml: glyph codes aren't unique:"));
        assert!(text.contains("\nDuplicate 'code:' 0xe800"));
        assert!(text.ends_with("Duplicate 'code:' 0xe8a1"));
    }

    #[test]
    fn missing_fontname_names_the_file() {
        let err = Error::MissingFontname(Path::new("config.yml").to_path_buf());
        assert_eq!(
            err.to_string(),
            "Error: cannot find \"font: fontname\" in file config.yml"
        );
    }

    #[test]
    fn yaml_error_reports_line_and_column() {
        let parse_err = serde_yaml::from_str::<serde_yaml::Value>("font: [oops")
            .expect_err("unterminated flow sequence should not parse");
        let err = Error::Yaml(Path::new("bad.yml").to_path_buf(), parse_err);
        let text = err.to_string();
        assert!(text.starts_with("YAML parser error in file bad.yml"));
    }
}
