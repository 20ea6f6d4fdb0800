//! CIE Lab/LCh conversions for the gradient preview.
//!
//! This path is independent of the OKLCh kernel and is never used to generate
//! palettes. Lightness is `0..=100` and chroma is in CIE units.

use palette::convert::FromColorUnclamped;
use palette::white_point::D65;
use palette::{Lab, Lch, LinSrgb, Srgb, Xyz};

use crate::color::{lerp, lerp_hue, normalize_hue, parse_hex, to_hex, Rgb};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLch {
    pub l: f64,
    pub chroma: f64,
    pub hue: f64,
}

pub fn rgb_to_lab(color: Rgb) -> Lab<D65, f64> {
    let srgb: Srgb<f64> = color.into_format();
    let linear: LinSrgb<f64> = srgb.into_linear();
    let xyz = Xyz::<D65, f64>::from_color_unclamped(linear);

    Lab::from_color_unclamped(xyz)
}

pub fn lab_to_rgb(lab: Lab<D65, f64>) -> Rgb {
    let xyz = Xyz::<D65, f64>::from_color_unclamped(lab);
    let linear = LinSrgb::<f64>::from_color_unclamped(xyz);
    let srgb = Srgb::<f64>::from_linear(linear);

    let channel = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;

    Rgb::new(channel(srgb.red), channel(srgb.green), channel(srgb.blue))
}

pub fn rgb_to_lch(color: Rgb) -> CieLch {
    let lch = Lch::<D65, f64>::from_color_unclamped(rgb_to_lab(color));

    CieLch {
        l: lch.l,
        chroma: lch.chroma,
        hue: normalize_hue(lch.hue.into_positive_degrees()),
    }
}

pub fn lch_to_rgb(lch: CieLch) -> Rgb {
    let lch = Lch::<D65, f64>::new(lch.l, lch.chroma, lch.hue);

    lab_to_rgb(Lab::from_color_unclamped(lch))
}

/// An evenly spaced CIE LCh gradient between two hex colors, endpoints
/// included.
///
/// Hue travels along the shorter arc. When one end is achromatic its hue is
/// meaningless, so the other end's hue is used for the whole gradient.
pub fn gradient(from: &str, to: &str, steps: usize) -> Option<Vec<String>> {
    let start = rgb_to_lch(parse_hex(from)?);
    let end = rgb_to_lch(parse_hex(to)?);
    let steps = steps.max(2);

    let (start_hue, end_hue) = match (start.chroma < 1e-4, end.chroma < 1e-4) {
        (true, false) => (end.hue, end.hue),
        (false, true) => (start.hue, start.hue),
        _ => (start.hue, end.hue),
    };

    let colors = (0..steps)
        .map(|i| {
            let t = i as f64 / (steps - 1) as f64;

            lch_to_rgb(CieLch {
                l: lerp(start.l, end.l, t),
                chroma: lerp(start.chroma, end.chroma, t),
                hue: normalize_hue(lerp_hue(start_hue, end_hue, t)),
            })
        })
        .map(to_hex)
        .collect();

    Some(colors)
}
