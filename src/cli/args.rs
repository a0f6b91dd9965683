use std::path::PathBuf;

use crate::error::{Error, Result};

/// Parsed command-line arguments
#[derive(Debug, Clone)]
pub struct Args {
    /// Config files, one per font, in command-line order
    pub configs: Vec<PathBuf>,
    /// Directory containing the source .ttf files
    pub fonts_dir: PathBuf,
    /// Output file path
    pub dst_file: PathBuf,
    /// Emit plain JSON instead of a CommonJS module
    pub json: bool,
    /// Enable debug output
    pub debug: bool,
}

/// Parse a full argv (program name included) into `Args`
pub fn parse(argv: &[String]) -> Result<Args> {
    let mut configs = Vec::new();
    let mut fonts_dir = None;
    let mut dst_file = None;
    let mut json = false;
    let mut debug = false;

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "-i" | "--fonts_dir" => {
                i += 1;
                if i >= argv.len() {
                    return Err(Error::Usage(
                        "--fonts_dir option requires a directory path".to_string(),
                    ));
                }
                fonts_dir = Some(PathBuf::from(&argv[i]));
            }
            "-o" | "--dst_file" => {
                i += 1;
                if i >= argv.len() {
                    return Err(Error::Usage(
                        "--dst_file option requires a file path".to_string(),
                    ));
                }
                dst_file = Some(PathBuf::from(&argv[i]));
            }
            "-j" | "--json" => json = true,
            "--debug" => debug = true,
            arg if arg.starts_with('-') => {
                return Err(Error::Usage(format!("unknown option '{}'", arg)));
            }
            arg => configs.push(PathBuf::from(arg)),
        }
        i += 1;
    }

    if configs.is_empty() {
        return Err(Error::Usage(
            "at least one config file is required".to_string(),
        ));
    }

    let fonts_dir =
        fonts_dir.ok_or_else(|| Error::Usage("--fonts_dir option is required".to_string()))?;
    let dst_file =
        dst_file.ok_or_else(|| Error::Usage("--dst_file option is required".to_string()))?;

    Ok(Args {
        configs,
        fonts_dir,
        dst_file,
        json,
        debug,
    })
}

/// Get the help message for command-line usage
pub fn get_help_message() -> String {
    r#"Embedded Fonts Builder - packs icon glyph selections into a font manifest

USAGE:
    FontEmbed [OPTIONS] <CONFIG>... -i <FONTS_DIR> -o <DST_FILE>

ARGS:
    <CONFIG>...    One or more font config files (e.g. src/font1/config.yml)

OPTIONS:
    -h, --help               Show this help message
    -i, --fonts_dir <DIR>    Input fonts directory (required)
    -o, --dst_file <FILE>    Output file (required)
    -j, --json               Output file in json format instead of js
    --debug                  Enable debug output

Each config file describes one font: its metadata under "font:" and the
selected glyphs under "glyphs:". Every requested code point is checked
against <FONTS_DIR>/<fontname>.ttf, and one record per font, numbered in
command-line order, is written to <DST_FILE>.
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn argv(parts: &[&str]) -> Vec<String> {
        let mut v = vec!["FontEmbed".to_string()];
        v.extend(parts.iter().map(|s| s.to_string()));
        v
    }

    #[test]
    fn parses_configs_and_options() {
        let args = parse(&argv(&[
            "src/font1/config.yml",
            "src/font2/config.yml",
            "-i",
            "fonts",
            "-o",
            "out.js",
        ]))
        .unwrap();

        assert_eq!(args.configs.len(), 2);
        assert_eq!(args.configs[0], Path::new("src/font1/config.yml"));
        assert_eq!(args.fonts_dir, Path::new("fonts"));
        assert_eq!(args.dst_file, Path::new("out.js"));
        assert!(!args.json);
        assert!(!args.debug);
    }

    #[test]
    fn long_options_and_flags() {
        let args = parse(&argv(&[
            "--fonts_dir",
            "fonts",
            "--dst_file",
            "out.json",
            "--json",
            "--debug",
            "config.yml",
        ]))
        .unwrap();

        assert!(args.json);
        assert!(args.debug);
        assert_eq!(args.configs, vec![PathBuf::from("config.yml")]);
    }

    #[test]
    fn missing_fonts_dir_is_a_usage_error() {
        let err = parse(&argv(&["config.yml", "-o", "out.js"])).unwrap_err();
        assert_eq!(err.to_string(), "Error: --fonts_dir option is required");
    }

    #[test]
    fn missing_configs_is_a_usage_error() {
        let err = parse(&argv(&["-i", "fonts", "-o", "out.js"])).unwrap_err();
        assert_eq!(err.to_string(), "Error: at least one config file is required");
    }

    #[test]
    fn dangling_option_value_is_a_usage_error() {
        let err = parse(&argv(&["config.yml", "-o"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error: --dst_file option requires a file path"
        );
    }

    #[test]
    fn unknown_option_is_rejected() {
        let err = parse(&argv(&["config.yml", "-i", "fonts", "-o", "o.js", "--frob"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Error: unknown option '--frob'");
    }
}
