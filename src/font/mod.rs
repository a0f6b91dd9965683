//! Source font loading and glyph lookup

pub mod face;

pub use face::{has_glyph, load_font, open_face};
