//! Palette assembly: turns one input color into an 11-shade palette, and
//! applies uniform adjustments to colors and palettes.

use std::sync::Arc;

use rayon::prelude::*;

use crate::anchors::CurveSample;
use crate::blend::blend;
use crate::color::{hex_to_oklch, normalize_hue, oklch_to_hex, Tone};
use crate::config::EngineConfig;
use crate::scale::ColorPalette;
use crate::shade::Shade;
use crate::{Error, Result};

/// Fraction of the maximum in-gamut chroma used when a shade has to be
/// clamped, leaving room for rounding in the final hex conversion.
pub const GAMUT_MARGIN: f64 = 0.99;

#[derive(Debug, Clone)]
pub struct PaletteGenerator {
    config: Arc<EngineConfig>,
}

impl Default for PaletteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteGenerator {
    /// A generator using the built-in configuration.
    pub fn new() -> Self {
        PaletteGenerator {
            config: EngineConfig::shared(),
        }
    }

    pub fn with_config(config: Arc<EngineConfig>) -> Self {
        PaletteGenerator { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generates the full palette for `hex`, or `None` if it does not parse.
    ///
    /// The input hue is used as is, so small hue differences between inputs
    /// survive into the output.
    pub fn generate_palette(&self, hex: &str) -> Option<ColorPalette> {
        let base = hex_to_oklch(hex)?;

        let shades = Shade::ALL.map(|shade| oklch_to_hex(self.shade_color(base.hue, shade)));

        Some(ColorPalette::from_valid_hexes(shades))
    }

    /// Generates palettes for many inputs in parallel, preserving input order.
    pub fn generate_palettes<S>(&self, hexes: &[S]) -> Vec<Option<ColorPalette>>
    where
        S: AsRef<str> + Sync,
    {
        hexes
            .par_iter()
            .map(|hex| self.generate_palette(hex.as_ref()))
            .collect()
    }

    /// The curve values for `shade` after blending and yellow correction.
    pub fn curve_sample(&self, hue: f64, shade: Shade) -> CurveSample {
        let config = &self.config;

        let blended = match blend(&config.anchors, hue, shade) {
            Some(blended) => blended.sample,
            // An empty table cannot be constructed, but stay total anyway
            None => CurveSample::default(),
        };

        config.yellow.apply(&config.anchors, hue, shade, blended)
    }

    fn shade_color(&self, base_hue: f64, shade: Shade) -> Tone {
        let gamut = &self.config.gamut;
        let sample = self.curve_sample(base_hue, shade);

        let l = sample.lightness;
        let h = normalize_hue(base_hue + sample.hue_shift);

        // Most shades are already displayable, skip the search for them
        if gamut.is_in_gamut(l, sample.chroma, h) {
            return Tone::new(l, sample.chroma, h);
        }

        let chroma = gamut.max_chroma_in_gamut(l, h) * GAMUT_MARGIN;
        log::trace!(
            "Shade {} at hue {:.1}: chroma {:.2} clamped to {:.2}",
            shade,
            h,
            sample.chroma,
            chroma
        );

        Tone::new(l, chroma, h)
    }

    /// Shifts a single color in OKLCh.
    ///
    /// Hue wraps around, lightness is kept in `[0, 100]` and chroma is kept
    /// non-negative. Returns `None` if `hex` does not parse.
    pub fn adjust_color(
        &self,
        hex: &str,
        hue_shift: f64,
        lightness_shift: f64,
        chroma_shift: f64,
    ) -> Option<String> {
        let tone = hex_to_oklch(hex)?;

        let l = (tone.lightness + lightness_shift).clamp(0.0, 100.0);
        let c = (tone.chroma + chroma_shift).max(0.0);
        let h = normalize_hue(tone.hue + hue_shift);

        let shifted = hue_shift != 0.0 || lightness_shift != 0.0 || chroma_shift != 0.0;
        let gamut = &self.config.gamut;

        let c = if shifted && !gamut.is_in_gamut(l, c, h) {
            gamut.max_chroma_in_gamut(l, h) * GAMUT_MARGIN
        } else {
            c
        };

        Some(oklch_to_hex(Tone::new(l, c, h)))
    }

    /// Applies [`adjust_color`](Self::adjust_color) to every shade.
    ///
    /// Fails as a whole if any shade fails; shades are never dropped.
    pub fn adjust_palette(
        &self,
        palette: &ColorPalette,
        hue_shift: f64,
        lightness_shift: f64,
        chroma_shift: f64,
    ) -> Result<ColorPalette> {
        let mut shades: [String; crate::shade::SHADE_COUNT] = Default::default();

        for (shade, hex) in palette.iter() {
            shades[shade.index()] = self
                .adjust_color(hex, hue_shift, lightness_shift, chroma_shift)
                .ok_or_else(|| Error::InvalidColor {
                    shade,
                    value: hex.to_string(),
                })?;
        }

        Ok(ColorPalette::from_valid_hexes(shades))
    }
}
