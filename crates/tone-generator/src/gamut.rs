//! sRGB gamut checks for OKLCh colors in engine units.

use serde::{Deserialize, Serialize};

use crate::color::{oklch_to_linear_srgb, Tone};

/// Accuracy/speed knobs for the gamut search.
///
/// A finer `precision` is visually imperceptible but roughly doubles the cost
/// of every out-of-gamut shade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GamutLimits {
    /// Linear channels may overshoot `[0, 1]` by this much.
    pub tolerance: f64,
    /// Upper bound of the chroma search, in engine units.
    pub chroma_ceiling: f64,
    /// The search stops once the bracket is this narrow.
    pub precision: f64,
}

impl Default for GamutLimits {
    fn default() -> Self {
        GamutLimits {
            tolerance: 0.001,
            chroma_ceiling: 150.0,
            precision: 0.5,
        }
    }
}

impl GamutLimits {
    pub fn is_in_gamut(&self, l: f64, c: f64, h: f64) -> bool {
        let low = -self.tolerance;
        let high = 1.0 + self.tolerance;

        oklch_to_linear_srgb(Tone::new(l, c, h))
            .iter()
            .all(|channel| (low..=high).contains(channel))
    }

    /// Largest chroma confirmed displayable for this lightness and hue.
    ///
    /// Always terminates; returns 0 when nothing but gray fits, e.g. at the
    /// lightness extremes.
    pub fn max_chroma_in_gamut(&self, l: f64, h: f64) -> f64 {
        let mut low = 0.0;
        let mut high = self.chroma_ceiling;

        if !self.is_in_gamut(l, low, h) {
            return 0.0;
        }

        while high - low > self.precision {
            let mid = (low + high) / 2.0;

            if self.is_in_gamut(l, mid, h) {
                low = mid;
            } else {
                high = mid;
            }
        }

        low
    }
}
