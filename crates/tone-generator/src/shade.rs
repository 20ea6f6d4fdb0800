use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of shades in every palette.
pub const SHADE_COUNT: usize = 11;

/// One of the fixed tonal steps, ordered from lightest to darkest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    pub const ALL: [Shade; SHADE_COUNT] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    /// Position in [`Shade::ALL`], used to index per-shade arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn level(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
            Shade::S950 => 950,
        }
    }

    pub fn from_level(level: u16) -> Option<Shade> {
        Shade::ALL.into_iter().find(|shade| shade.level() == level)
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

impl FromStr for Shade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u16>()
            .ok()
            .and_then(Shade::from_level)
            .ok_or_else(|| format!("`{}` is not a shade level", s))
    }
}

impl TryFrom<String> for Shade {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Shade> for String {
    fn from(shade: Shade) -> Self {
        shade.to_string()
    }
}
