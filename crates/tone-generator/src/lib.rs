//! Perceptual palette generation.
//!
//! One input color becomes an 11-shade scale (50 through 950). Lightness and
//! chroma come from a table of hand-tuned anchor curves blended by hue, with a
//! dedicated correction for the yellow region. The input's own lightness and
//! chroma are ignored.
//!
//! ```
//! let palette = tone_generator::generate_palette("#0ea5e9").unwrap();
//! assert_eq!(palette.iter().count(), 11);
//! ```

use thiserror::Error;

pub mod anchors;
pub mod blend;
pub mod cie;
pub mod color;
pub mod config;
pub mod gamut;
pub mod generator;
pub mod scale;
pub mod shade;
pub mod yellow;

pub use anchors::{AnchorCurve, AnchorTable, CurveSample};
pub use color::Tone;
pub use config::EngineConfig;
pub use generator::PaletteGenerator;
pub use scale::ColorPalette;
pub use shade::Shade;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid color `{value}` for shade {shade}")]
    InvalidColor { shade: Shade, value: String },
    #[error("Invalid anchor table: {0}")]
    InvalidAnchorTable(String),
    #[error("Could not parse anchor table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Generates a palette with the built-in configuration.
///
/// Returns `None` if `hex` is not a 3 or 6 digit hex color.
pub fn generate_palette(hex: &str) -> Option<ColorPalette> {
    PaletteGenerator::new().generate_palette(hex)
}

/// See [`PaletteGenerator::adjust_color`].
pub fn adjust_color(
    hex: &str,
    hue_shift: f64,
    lightness_shift: f64,
    chroma_shift: f64,
) -> Option<String> {
    PaletteGenerator::new().adjust_color(hex, hue_shift, lightness_shift, chroma_shift)
}

/// See [`PaletteGenerator::adjust_palette`].
pub fn adjust_palette(
    palette: &ColorPalette,
    hue_shift: f64,
    lightness_shift: f64,
    chroma_shift: f64,
) -> Result<ColorPalette> {
    PaletteGenerator::new().adjust_palette(palette, hue_shift, lightness_shift, chroma_shift)
}
