use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::parse_hex;
use crate::shade::{Shade, SHADE_COUNT};
use crate::{Error, Result};

/// A generated palette: one hex color for each of the 11 shades.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorPalette {
    shades: [String; SHADE_COUNT],
}

impl ColorPalette {
    /// Builds a palette from hex strings ordered from shade 50 to shade 950.
    pub fn from_hexes(shades: [String; SHADE_COUNT]) -> Result<Self> {
        for (shade, value) in Shade::ALL.iter().zip(&shades) {
            if parse_hex(value).is_none() {
                return Err(Error::InvalidColor {
                    shade: *shade,
                    value: value.clone(),
                });
            }
        }

        Ok(ColorPalette { shades })
    }

    /// Callers guarantee every entry is a valid hex color.
    pub(crate) fn from_valid_hexes(shades: [String; SHADE_COUNT]) -> Self {
        ColorPalette { shades }
    }

    pub fn get(&self, shade: Shade) -> &str {
        &self.shades[shade.index()]
    }

    pub fn shades(&self) -> &[String; SHADE_COUNT] {
        &self.shades
    }

    pub fn iter(&self) -> impl Iterator<Item = (Shade, &str)> + '_ {
        Shade::ALL
            .into_iter()
            .zip(self.shades.iter().map(String::as_str))
    }

    pub fn generate_css(&self, color_name: &str, selector: &str) -> String {
        let mut css = String::new();

        let _ = writeln!(css, "{} {{", selector);
        for (shade, hex) in self.iter() {
            let _ = writeln!(css, "  --{}-{}: {};", color_name, shade, hex);
        }
        css.push_str("}\n");

        css
    }
}

impl std::ops::Index<Shade> for ColorPalette {
    type Output = str;

    fn index(&self, shade: Shade) -> &str {
        self.get(shade)
    }
}

impl Serialize for ColorPalette {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SHADE_COUNT))?;

        for (shade, hex) in self.iter() {
            map.serialize_entry(&shade, hex)?;
        }

        map.end()
    }
}

impl<'de> Deserialize<'de> for ColorPalette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let mut entries = BTreeMap::<Shade, String>::deserialize(deserializer)?;

        let mut shades: [String; SHADE_COUNT] = Default::default();
        for shade in Shade::ALL {
            shades[shade.index()] = entries
                .remove(&shade)
                .ok_or_else(|| D::Error::custom(format!("missing shade {}", shade)))?;
        }

        ColorPalette::from_hexes(shades).map_err(D::Error::custom)
    }
}
