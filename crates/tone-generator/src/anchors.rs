//! Reference curves for the hue families palettes are interpolated from.
//!
//! The built-in table is constructed once and shared for the lifetime of the
//! process. Custom tables (e.g. the output of a recalibration run) can be
//! loaded from JSON in the same format [`AnchorTable::to_json`] writes.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::{oklch_to_hex, Tone};
use crate::gamut::GamutLimits;
use crate::shade::{Shade, SHADE_COUNT};
use crate::{Error, Result};

mod builtin;

/// One value per shade, indexed by [`Shade::index`].
pub type ShadeCurve = [f64; SHADE_COUNT];

static BUILTIN: Lazy<AnchorTable> = Lazy::new(|| AnchorTable::sorted(builtin::anchors()));

/// The lightness, chroma and hue shift an anchor prescribes for one shade.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CurveSample {
    pub lightness: f64,
    pub chroma: f64,
    /// Degrees relative to the anchor's center hue.
    pub hue_shift: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorCurve {
    pub name: String,
    pub center_hue: f64,
    pub lightness: ShadeCurve,
    pub chroma: ShadeCurve,
    pub hue_shift: ShadeCurve,
}

impl AnchorCurve {
    pub fn new(
        name: &str,
        center_hue: f64,
        lightness: ShadeCurve,
        chroma: ShadeCurve,
        hue_shift: ShadeCurve,
    ) -> Self {
        AnchorCurve {
            name: name.to_string(),
            center_hue,
            lightness,
            chroma,
            hue_shift,
        }
    }

    pub fn sample(&self, shade: Shade) -> CurveSample {
        let i = shade.index();

        CurveSample {
            lightness: self.lightness[i],
            chroma: self.chroma[i],
            hue_shift: self.hue_shift[i],
        }
    }

    /// The anchor's swatch for `shade` at its center hue, chroma pulled into
    /// gamut if needed.
    ///
    /// The shade's own `hue_shift` is not applied, so every swatch of one
    /// anchor shares a hue and should generate the same palette.
    pub fn center_swatch(&self, shade: Shade, limits: &GamutLimits) -> String {
        let sample = self.sample(shade);
        let (l, h) = (sample.lightness, self.center_hue);

        let chroma = if limits.is_in_gamut(l, sample.chroma, h) {
            sample.chroma
        } else {
            limits.max_chroma_in_gamut(l, h) * 0.99
        };

        oklch_to_hex(Tone::new(l, chroma, h))
    }

    fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Err(Error::InvalidAnchorTable(reason));

        if self.name.trim().is_empty() {
            return invalid("anchor with an empty name".to_string());
        }

        if !(0.0..360.0).contains(&self.center_hue) {
            return invalid(format!(
                "anchor `{}` has center hue {} outside [0, 360)",
                self.name, self.center_hue
            ));
        }

        for (curve, values) in [
            ("lightness", &self.lightness),
            ("chroma", &self.chroma),
            ("hue_shift", &self.hue_shift),
        ] {
            if let Some(value) = values.iter().find(|v| !v.is_finite()) {
                return invalid(format!(
                    "anchor `{}` has a non-finite {} value: {}",
                    self.name, curve, value
                ));
            }
        }

        if self.chroma.iter().any(|c| *c < 0.0) {
            return invalid(format!("anchor `{}` has negative chroma", self.name));
        }

        if self.lightness.iter().any(|l| !(0.0..=100.0).contains(l)) {
            return invalid(format!(
                "anchor `{}` has lightness outside [0, 100]",
                self.name
            ));
        }

        Ok(())
    }
}

/// Anchors sorted by center hue.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnchorTable {
    anchors: Vec<AnchorCurve>,
}

impl AnchorTable {
    /// The table shipped with the engine.
    pub fn builtin() -> &'static AnchorTable {
        &BUILTIN
    }

    /// Validates and sorts a set of anchors.
    pub fn new(anchors: Vec<AnchorCurve>) -> Result<Self> {
        if anchors.is_empty() {
            return Err(Error::InvalidAnchorTable(
                "the table has no anchors".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for anchor in &anchors {
            anchor.validate()?;

            if !names.insert(anchor.name.as_str()) {
                return Err(Error::InvalidAnchorTable(format!(
                    "anchor `{}` is defined more than once",
                    anchor.name
                )));
            }
        }

        Ok(Self::sorted(anchors))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let anchors: Vec<AnchorCurve> = serde_json::from_str(json)?;
        let table = Self::new(anchors)?;

        log::debug!("Loaded anchor table with {} anchors", table.len());

        Ok(table)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn sorted(mut anchors: Vec<AnchorCurve>) -> Self {
        anchors.sort_by(|a, b| a.center_hue.total_cmp(&b.center_hue));

        AnchorTable { anchors }
    }

    pub fn get(&self, name: &str) -> Option<&AnchorCurve> {
        self.anchors.iter().find(|anchor| anchor.name == name)
    }

    /// Anchors in ascending center hue order.
    pub fn iter(&self) -> std::slice::Iter<'_, AnchorCurve> {
        self.anchors.iter()
    }

    pub fn as_slice(&self) -> &[AnchorCurve] {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

impl<'a> IntoIterator for &'a AnchorTable {
    type Item = &'a AnchorCurve;
    type IntoIter = std::slice::Iter<'a, AnchorCurve>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
