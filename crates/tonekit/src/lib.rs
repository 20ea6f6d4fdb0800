use owo_colors::{OwoColorize as _, Stream};
use thiserror::Error;
use tone_generator::color::parse_hex;
use tone_generator::{AnchorTable, EngineConfig, PaletteGenerator};

use std::path::Path;
use std::sync::Arc;

pub mod commands {
    pub mod adjust;
    pub mod anchors;
    pub mod generate;
    pub mod gradient;
}

pub mod logger;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    Palette(#[from] tone_generator::Error),
    #[error("`{0}` is not a valid hex color")]
    InvalidColor(String),
}

/// A generator using the built-in anchors, or the ones in `anchors` if given.
pub fn load_generator(anchors: Option<&Path>) -> Result<PaletteGenerator> {
    let Some(path) = anchors else {
        return Ok(PaletteGenerator::new());
    };

    let json = std::fs::read_to_string(path)?;
    let table = AnchorTable::from_json(&json)?;
    log::debug!("Using anchor table from {}", path.display());

    Ok(PaletteGenerator::with_config(Arc::new(
        EngineConfig::default().with_anchors(table),
    )))
}

/// A two-character block in `hex`, when the terminal supports it.
pub(crate) fn swatch(hex: &str) -> String {
    match parse_hex(hex) {
        Some(rgb) => "██"
            .if_supports_color(Stream::Stdout, |s| s.truecolor(rgb.red, rgb.green, rgb.blue))
            .to_string(),
        None => "  ".to_string(),
    }
}
