//! Color-space kernel.
//!
//! Everything here is a pure conversion between sRGB, linear RGB, XYZ (D65),
//! OKLab and OKLCh. The engine works in OKLCh with its own units: lightness is
//! OKLab `L × 100` and chroma is OKLab chroma `× 130`. Both scale factors are
//! part of the anchor table's contract, changing either shifts every palette.

use palette::convert::FromColorUnclamped;
use palette::white_point::D65;
use palette::{LinSrgb, Oklab, Oklch, Srgb, Xyz};

/// An 8-bit sRGB color, the leaf representation for display and storage.
pub type Rgb = Srgb<u8>;

/// OKLab lightness `[0, 1]` is scaled to `[0, 100]`.
pub const LIGHTNESS_SCALE: f64 = 100.0;

/// OKLab chroma is scaled by this factor for the a/b decomposition.
pub const CHROMA_SCALE: f64 = 130.0;

/// OKLab chroma below which a color counts as gray and gets hue 0.
///
/// Exact sRGB grays convert with up to ~4e-5 of chroma, because the D65 white
/// of the XYZ matrices and the one OKLab was fitted to differ slightly.
pub const ACHROMATIC_CHROMA: f64 = 1e-4;

/// An OKLCh color expressed in engine units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// 0 (black) to 100 (white).
    pub lightness: f64,
    /// 0 (achromatic) upwards, unbounded.
    pub chroma: f64,
    /// Degrees in `[0, 360)`.
    pub hue: f64,
}

impl Tone {
    pub fn new(lightness: f64, chroma: f64, hue: f64) -> Self {
        Tone {
            lightness,
            chroma,
            hue: normalize_hue(hue),
        }
    }

    pub fn with_chroma(self, chroma: f64) -> Self {
        Tone { chroma, ..self }
    }

    fn to_oklab(self) -> Oklab<f64> {
        let c = self.chroma / CHROMA_SCALE;
        let (sin, cos) = self.hue.to_radians().sin_cos();

        Oklab::new(self.lightness / LIGHTNESS_SCALE, c * cos, c * sin)
    }

    fn from_oklab(lab: Oklab<f64>) -> Self {
        let lch = Oklch::<f64>::from_color_unclamped(lab);

        let hue = if lch.chroma < ACHROMATIC_CHROMA {
            0.0
        } else {
            normalize_hue(lch.hue.into_positive_degrees())
        };

        Tone {
            lightness: lch.l * LIGHTNESS_SCALE,
            chroma: lch.chroma * CHROMA_SCALE,
            hue,
        }
    }
}

/// Parses `#rgb`, `#rrggbb`, `rgb` or `rrggbb`.
///
/// Returns `None` for any other length or a non-hex character, which is the
/// normal state of a text field while the user is still typing.
pub fn parse_hex(input: &str) -> Option<Rgb> {
    let hex = input.strip_prefix('#').unwrap_or(input);

    if !matches!(hex.len(), 3 | 6) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    hex.parse::<Rgb>().ok()
}

pub fn to_hex(color: Rgb) -> String {
    format!("#{:x}", color)
}

pub fn rgb_to_oklch(color: Rgb) -> Tone {
    let srgb: Srgb<f64> = color.into_format();
    let linear: LinSrgb<f64> = srgb.into_linear();
    let xyz = Xyz::<D65, f64>::from_color_unclamped(linear);

    Tone::from_oklab(Oklab::<f64>::from_color_unclamped(xyz))
}

/// Converts back to 8-bit sRGB, rounding and clamping each channel.
pub fn oklch_to_rgb(tone: Tone) -> Rgb {
    let [r, g, b] = oklch_to_linear_srgb(tone);
    let srgb = Srgb::<f64>::from_linear(LinSrgb::new(r, g, b));

    let channel = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;

    Rgb::new(channel(srgb.red), channel(srgb.green), channel(srgb.blue))
}

/// Unclamped linear sRGB channels. Out-of-gamut colors fall outside `[0, 1]`.
pub fn oklch_to_linear_srgb(tone: Tone) -> [f64; 3] {
    let xyz = Xyz::<D65, f64>::from_color_unclamped(tone.to_oklab());
    let linear = LinSrgb::<f64>::from_color_unclamped(xyz);

    [linear.red, linear.green, linear.blue]
}

/// Convenience wrapper around [`parse_hex`] and [`rgb_to_oklch`].
pub fn hex_to_oklch(hex: &str) -> Option<Tone> {
    parse_hex(hex).map(rgb_to_oklch)
}

pub fn oklch_to_hex(tone: Tone) -> String {
    to_hex(oklch_to_rgb(tone))
}

/// Wraps any angle into `[0, 360)`.
pub fn normalize_hue(hue: f64) -> f64 {
    let h = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Shortest distance between two angles, in `[0, 180]`.
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs().rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Signed shortest-arc difference `to - from`, in `[-180, 180)`.
pub fn hue_difference(from: f64, to: f64) -> f64 {
    (to - from + 180.0).rem_euclid(360.0) - 180.0
}

/// Interpolates two angles along the shorter arc.
///
/// The result is not normalized, so relative quantities such as hue shifts
/// keep their sign.
pub fn lerp_hue(from: f64, to: f64, t: f64) -> f64 {
    from + hue_difference(from, to) * t
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
