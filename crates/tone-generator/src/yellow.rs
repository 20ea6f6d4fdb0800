//! Perceptual corrections for hues around yellow.
//!
//! Small hue errors near yellow are far more visible than anywhere else on the
//! wheel: light tints turn green and dark shades turn into muddy brown. Inside
//! a bounded window around the yellow anchor, the blended curves are pulled
//! towards the yellow anchor's own curves and then clamped.
//!
//! The corrections interact, so they run as a fixed pipeline ([`STAGES`]).
//! Hue shift is settled first, then chroma, then lightness and its floor.

use crate::anchors::{AnchorTable, CurveSample, ShadeCurve};
use crate::color::{circular_distance, lerp, lerp_hue};
use crate::shade::Shade;

/// A single step of the correction pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Pull the hue shift towards the yellow anchor's.
    HueShiftBlend,
    /// Keep dark ambers out of brown and light limes out of green.
    HueShiftClamp,
    /// Warm up hues close to synthetic `#ffff00`.
    PureYellowShift,
    /// Pull chroma towards the yellow anchor's.
    ChromaBlend,
    /// Pull lightness towards the yellow anchor's.
    LightnessBlend,
    /// Enforce the minimum lightness per shade.
    LightnessFloor,
}

/// Execution order of the pipeline. Reordering changes the output.
pub const STAGES: [Stage; 6] = [
    Stage::HueShiftBlend,
    Stage::HueShiftClamp,
    Stage::PureYellowShift,
    Stage::ChromaBlend,
    Stage::LightnessBlend,
    Stage::LightnessFloor,
];

/// Which side of the yellow center a hue falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Towards orange, below the center.
    Amber,
    Center,
    /// Towards green, above the center.
    Lime,
}

/// Super-Gaussian warm shift around maximally saturated synthetic yellow.
#[derive(Debug, Clone, PartialEq)]
pub struct PureYellow {
    pub hue: f64,
    /// Hues further away than this are left alone.
    pub radius: f64,
    pub width: f64,
    pub exponent: i32,
    /// Added to the hue shift at the exact center.
    pub max_shift: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YellowCorrection {
    /// Anchor whose curves the window is pulled towards.
    pub anchor: String,
    /// Anchor consulted for the lime-side lightness rule.
    pub lime_anchor: String,
    /// Inclusive hue range the correction is active in.
    pub window: (f64, f64),
    pub center: f64,
    pub sigma_amber: f64,
    pub sigma_lime: f64,

    pub hue_shift_strength: f64,
    /// Applied on the lime side when yellow's own shift is positive.
    pub lime_positive_shift_factor: f64,
    /// Applied on the amber side from `dark_from` onwards.
    pub amber_dark_shift_factor: f64,

    pub chroma_strength: f64,
    /// Applied on the lime side when yellow's chroma is below the blend.
    pub lime_chroma_factor: f64,

    pub lightness_strength: f64,
    pub lime_lightness_min_strength: f64,

    /// First shade treated as dark on the amber side.
    pub dark_from: Shade,
    /// Last shade treated as light on the lime side.
    pub light_until: Shade,
    pub amber_shift_floor: f64,
    pub lime_shift_cap: f64,
    /// Tighter cap used above `synthetic_cap_from`.
    pub synthetic_shift_cap: f64,
    pub synthetic_cap_from: f64,

    pub lightness_floor: ShadeCurve,
    pub pure_yellow: PureYellow,
}

impl Default for YellowCorrection {
    fn default() -> Self {
        YellowCorrection {
            anchor: "yellow".to_string(),
            lime_anchor: "lime".to_string(),
            window: (70.0, 115.0),
            center: 86.0,
            sigma_amber: 28.0,
            sigma_lime: 12.0,
            hue_shift_strength: 0.5,
            lime_positive_shift_factor: 0.1,
            amber_dark_shift_factor: 0.4,
            chroma_strength: 0.5,
            lime_chroma_factor: 0.3,
            lightness_strength: 0.5,
            lime_lightness_min_strength: 0.3,
            dark_from: Shade::S600,
            light_until: Shade::S400,
            amber_shift_floor: -6.0,
            lime_shift_cap: 4.0,
            synthetic_shift_cap: 2.0,
            synthetic_cap_from: 105.0,
            lightness_floor: [97.0, 94.0, 89.0, 84.0, 77.0, 70.0, 58.0, 46.0, 39.0, 34.0, 24.5],
            pure_yellow: PureYellow {
                hue: 110.0,
                radius: 8.0,
                width: 5.0,
                exponent: 4,
                max_shift: -4.0,
            },
        }
    }
}

/// Per-call state shared between stages.
struct Context {
    hue: f64,
    shade: Shade,
    side: Side,
    influence: f64,
    yellow: Option<CurveSample>,
    lime: Option<CurveSample>,
    /// Set by the chroma stage, read by the lightness stage.
    chroma_strength: f64,
}

impl YellowCorrection {
    pub fn in_window(&self, hue: f64) -> bool {
        (self.window.0..=self.window.1).contains(&hue)
    }

    pub fn side(&self, hue: f64) -> Side {
        if hue < self.center {
            Side::Amber
        } else if hue > self.center {
            Side::Lime
        } else {
            Side::Center
        }
    }

    /// Asymmetric Gaussian weight of the yellow anchor, 1 at the center.
    pub fn influence(&self, hue: f64) -> f64 {
        let d = hue - self.center;
        let sigma = if d < 0.0 {
            self.sigma_amber
        } else {
            self.sigma_lime
        };

        (-(d * d) / (2.0 * sigma * sigma)).exp()
    }

    /// Corrects a blended sample. Hues outside the window pass through.
    pub fn apply(
        &self,
        table: &AnchorTable,
        hue: f64,
        shade: Shade,
        sample: CurveSample,
    ) -> CurveSample {
        if !self.in_window(hue) {
            return sample;
        }

        let mut ctx = Context {
            hue,
            shade,
            side: self.side(hue),
            influence: self.influence(hue),
            yellow: table.get(&self.anchor).map(|a| a.sample(shade)),
            lime: table.get(&self.lime_anchor).map(|a| a.sample(shade)),
            chroma_strength: self.chroma_strength,
        };

        STAGES
            .iter()
            .fold(sample, |sample, stage| self.run(*stage, &mut ctx, sample))
    }

    fn run(&self, stage: Stage, ctx: &mut Context, mut sample: CurveSample) -> CurveSample {
        match stage {
            Stage::HueShiftBlend => {
                if let Some(yellow) = ctx.yellow {
                    let mut strength = self.hue_shift_strength;

                    if ctx.side == Side::Lime && yellow.hue_shift > 0.0 {
                        strength *= self.lime_positive_shift_factor;
                    }
                    if ctx.side == Side::Amber && ctx.shade >= self.dark_from {
                        strength *= self.amber_dark_shift_factor;
                    }

                    sample.hue_shift =
                        lerp_hue(sample.hue_shift, yellow.hue_shift, ctx.influence * strength);
                }
            }
            Stage::HueShiftClamp => match ctx.side {
                Side::Amber if ctx.shade >= self.dark_from => {
                    sample.hue_shift = sample.hue_shift.max(self.amber_shift_floor);
                }
                Side::Lime if ctx.shade <= self.light_until => {
                    let cap = if ctx.hue > self.synthetic_cap_from {
                        self.synthetic_shift_cap
                    } else {
                        self.lime_shift_cap
                    };

                    sample.hue_shift = sample.hue_shift.min(cap);
                }
                _ => {}
            },
            Stage::PureYellowShift => {
                let pure = &self.pure_yellow;
                let d = circular_distance(ctx.hue, pure.hue);

                if d <= pure.radius {
                    let weight = (-(d / pure.width).powi(pure.exponent)).exp();
                    sample.hue_shift += pure.max_shift * weight;
                }
            }
            Stage::ChromaBlend => {
                if let Some(yellow) = ctx.yellow {
                    let mut strength = self.chroma_strength;

                    if ctx.side == Side::Lime && yellow.chroma < sample.chroma {
                        strength *= self.lime_chroma_factor;
                    }

                    ctx.chroma_strength = strength;
                    sample.chroma = lerp(sample.chroma, yellow.chroma, ctx.influence * strength);
                }
            }
            Stage::LightnessBlend => {
                if let Some(yellow) = ctx.yellow {
                    let mut strength = self.lightness_strength;

                    if let (Side::Lime, Some(lime)) = (ctx.side, ctx.lime) {
                        if yellow.chroma < lime.chroma {
                            strength = ctx.chroma_strength.max(self.lime_lightness_min_strength);
                        }
                    }

                    sample.lightness =
                        lerp(sample.lightness, yellow.lightness, ctx.influence * strength);
                }
            }
            Stage::LightnessFloor => {
                sample.lightness = sample.lightness.max(self.lightness_floor[ctx.shade.index()]);
            }
        }

        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blend::blend;

    fn correct(hue: f64, shade: Shade) -> (CurveSample, CurveSample) {
        let table = AnchorTable::builtin();
        let blended = blend(table, hue, shade).unwrap().sample;

        (blended, YellowCorrection::default().apply(table, hue, shade, blended))
    }

    #[test]
    fn hues_outside_the_window_pass_through() {
        for hue in [0.0, 69.9, 115.1, 200.0] {
            for shade in Shade::ALL {
                let (blended, corrected) = correct(hue, shade);
                assert_eq!(blended, corrected);
            }
        }
    }

    #[test]
    fn influence_is_asymmetric() {
        let correction = YellowCorrection::default();

        assert_eq!(correction.influence(86.0), 1.0);
        // Same distance, amber bleeds further than lime
        assert!(correction.influence(76.0) > correction.influence(96.0));
        assert!((correction.influence(86.0 - 28.0) - (-0.5f64).exp()).abs() < 1e-12);
        assert!((correction.influence(86.0 + 12.0) - (-0.5f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn center_reproduces_the_yellow_anchor_except_for_the_floor() {
        let correction = YellowCorrection::default();
        let yellow = AnchorTable::builtin().get("yellow").unwrap();

        for shade in Shade::ALL {
            let (_, corrected) = correct(86.0, shade);
            let expected = yellow.sample(shade);

            assert!((corrected.hue_shift - expected.hue_shift).abs() < 1e-9);
            assert!((corrected.chroma - expected.chroma).abs() < 1e-9);
            assert_eq!(
                corrected.lightness,
                expected.lightness.max(correction.lightness_floor[shade.index()])
            );
        }
    }

    #[test]
    fn dark_ambers_do_not_shift_past_the_floor() {
        for hue in [70.0, 74.0, 78.0, 82.0, 85.9] {
            for shade in [Shade::S600, Shade::S700, Shade::S800, Shade::S900, Shade::S950] {
                let (_, corrected) = correct(hue, shade);
                assert!(corrected.hue_shift >= -6.0, "{} at {} shifted {}", shade, hue, corrected.hue_shift);
            }
        }
    }

    #[test]
    fn light_limes_are_capped() {
        for hue in [87.0, 95.0, 101.0, 104.9] {
            for shade in [Shade::S50, Shade::S100, Shade::S200, Shade::S300, Shade::S400] {
                let (_, corrected) = correct(hue, shade);
                assert!(corrected.hue_shift <= 4.0);
            }
        }

        for hue in [105.5, 112.0, 115.0] {
            for shade in [Shade::S50, Shade::S100, Shade::S200, Shade::S300, Shade::S400] {
                let (_, corrected) = correct(hue, shade);
                assert!(corrected.hue_shift <= 2.0);
            }
        }
    }

    #[test]
    fn pure_yellow_is_warmed_up() {
        let mut correction = YellowCorrection::default();
        let table = AnchorTable::builtin();
        let hue = 110.0;
        let blended = blend(table, hue, Shade::S500).unwrap().sample;

        let with = correction.apply(table, hue, Shade::S500, blended);
        correction.pure_yellow.max_shift = 0.0;
        let without = correction.apply(table, hue, Shade::S500, blended);

        assert!((with.hue_shift - (without.hue_shift - 4.0)).abs() < 1e-9);
    }

    #[test]
    fn pure_yellow_shift_falls_off_and_stops_at_the_radius() {
        let table = AnchorTable::builtin();
        let shift_at = |hue: f64| {
            let mut correction = YellowCorrection::default();
            let blended = blend(table, hue, Shade::S300).unwrap().sample;

            let with = correction.apply(table, hue, Shade::S300, blended);
            correction.pure_yellow.max_shift = 0.0;
            let without = correction.apply(table, hue, Shade::S300, blended);

            with.hue_shift - without.hue_shift
        };

        // -4 * exp(-(d / 5)^4)
        for (hue, d) in [(106.0, 4.0), (113.0, 3.0), (108.0, 2.0)] {
            let expected = -4.0 * (-(d / 5.0f64).powi(4)).exp();
            assert!((shift_at(hue) - expected).abs() < 1e-9, "shift at {}", hue);
        }

        assert!(shift_at(106.0) > shift_at(108.0));
        assert_eq!(shift_at(101.9), 0.0);
        assert_eq!(shift_at(90.0), 0.0);
    }

    #[test]
    fn lightness_floor_holds_everywhere_in_the_window() {
        let correction = YellowCorrection::default();

        for step in 0..=45 {
            let hue = 70.0 + step as f64;

            for shade in Shade::ALL {
                let (_, corrected) = correct(hue, shade);
                assert!(corrected.lightness >= correction.lightness_floor[shade.index()]);
            }
        }
    }

    #[test]
    fn lime_side_chroma_is_only_lightly_reduced() {
        // Lime is more vivid than yellow at shade 400; the pull towards yellow
        // is weakened on the lime side.
        let correction = YellowCorrection::default();
        let hue = 95.0;
        let (blended, corrected) = correct(hue, Shade::S400);
        let yellow = AnchorTable::builtin().get("yellow").unwrap().sample(Shade::S400);

        assert!(yellow.chroma < blended.chroma);
        let expected = lerp(
            blended.chroma,
            yellow.chroma,
            correction.influence(hue) * correction.chroma_strength * correction.lime_chroma_factor,
        );
        assert!((corrected.chroma - expected).abs() < 1e-9);
    }

    #[test]
    fn missing_yellow_anchor_still_clamps_and_floors() {
        let table = AnchorTable::builtin();
        let without_yellow = AnchorTable::new(
            table
                .iter()
                .filter(|anchor| anchor.name != "yellow")
                .cloned()
                .collect(),
        )
        .unwrap();
        let correction = YellowCorrection::default();

        let blended = blend(&without_yellow, 80.0, Shade::S950).unwrap().sample;
        let corrected = correction.apply(&without_yellow, 80.0, Shade::S950, blended);

        assert!(corrected.hue_shift >= -6.0);
        assert!(corrected.lightness >= 24.5);
    }

    #[test]
    fn stages_run_hue_then_chroma_then_lightness() {
        assert_eq!(STAGES.first(), Some(&Stage::HueShiftBlend));
        assert_eq!(STAGES.last(), Some(&Stage::LightnessFloor));

        let position = |stage| STAGES.iter().position(|s| *s == stage).unwrap();
        assert!(position(Stage::HueShiftClamp) < position(Stage::ChromaBlend));
        assert!(position(Stage::ChromaBlend) < position(Stage::LightnessBlend));
    }
}
