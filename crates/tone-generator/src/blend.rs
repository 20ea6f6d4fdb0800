//! Continuous interpolation between the two anchors surrounding a hue.
//!
//! An input hue is never matched to a single closest anchor: nearby hues must
//! produce nearby palettes, so every hue blends the anchors on either side of
//! it.

use crate::anchors::{AnchorCurve, AnchorTable, CurveSample};
use crate::color::{circular_distance, lerp, lerp_hue, normalize_hue};
use crate::shade::Shade;

/// The outcome of blending one shade for one hue.
#[derive(Debug, Clone, Copy)]
pub struct Blend<'a> {
    /// Anchor at or before the hue.
    pub from: &'a AnchorCurve,
    /// Anchor after the hue.
    pub to: &'a AnchorCurve,
    /// 0 at `from`, 1 at `to`.
    pub t: f64,
    pub sample: CurveSample,
}

/// The anchors bracketing `hue` and the blend ratio between them.
///
/// Returns `None` only for an empty table.
pub fn bracket(table: &AnchorTable, hue: f64) -> Option<(&AnchorCurve, &AnchorCurve, f64)> {
    let anchors = table.as_slice();
    let hue = normalize_hue(hue);

    let first = anchors.first()?;
    let last = anchors.last()?;

    let (from, to) = anchors
        .windows(2)
        .find(|pair| pair[0].center_hue <= hue && hue < pair[1].center_hue)
        .map(|pair| (&pair[0], &pair[1]))
        // Hue is past the last anchor or before the first one
        .unwrap_or((last, first));

    let d1 = circular_distance(hue, from.center_hue);
    let d2 = circular_distance(hue, to.center_hue);

    let t = if d1 + d2 == 0.0 { 0.0 } else { d1 / (d1 + d2) };

    Some((from, to, t))
}

pub fn blend(table: &AnchorTable, hue: f64, shade: Shade) -> Option<Blend<'_>> {
    let (from, to, t) = bracket(table, hue)?;

    let a = from.sample(shade);
    let b = to.sample(shade);

    Some(Blend {
        from,
        to,
        t,
        sample: CurveSample {
            lightness: lerp(a.lightness, b.lightness, t),
            chroma: lerp(a.chroma, b.chroma, t),
            hue_shift: lerp_hue(a.hue_shift, b.hue_shift, t),
        },
    })
}
