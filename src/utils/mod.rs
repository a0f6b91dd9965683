pub mod logging;
pub mod naming;

pub use logging::log;
pub use naming::{font_file_path, is_valid_fontname};
