//! Manifest assembly: per-font record building, validation and output

pub mod font;
pub mod output;
pub mod validate;

pub use font::build_font;
pub use output::{render_manifest, write_manifest};
pub use validate::duplicate_codes;
