//! Color tags: the closed set of body species

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of distinct color tags
pub const COLOR_COUNT: usize = 8;

/// Species tag of a body. Drives both the interaction lookup and the fill color.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Red = 0,
    Blue = 1,
    Green = 2,
    Yellow = 3,
    Purple = 4,
    Cyan = 5,
    Orange = 6,
    Magenta = 7,
}

/// Returned when parsing a name that is not one of the eight tags
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color tag: {0}")]
pub struct ParseColorTagError(pub String);

impl ColorTag {
    /// All tags in table order
    pub const ALL: [ColorTag; COLOR_COUNT] = [
        ColorTag::Red,
        ColorTag::Blue,
        ColorTag::Green,
        ColorTag::Yellow,
        ColorTag::Purple,
        ColorTag::Cyan,
        ColorTag::Orange,
        ColorTag::Magenta,
    ];

    /// Row/column index into the interaction table
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            ColorTag::Red => "red",
            ColorTag::Blue => "blue",
            ColorTag::Green => "green",
            ColorTag::Yellow => "yellow",
            ColorTag::Purple => "purple",
            ColorTag::Cyan => "cyan",
            ColorTag::Orange => "orange",
            ColorTag::Magenta => "magenta",
        }
    }

    /// sRGB fill color
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            ColorTag::Red => [255, 0, 0],
            ColorTag::Blue => [0, 0, 255],
            ColorTag::Green => [0, 255, 0],
            ColorTag::Yellow => [255, 255, 0],
            ColorTag::Purple => [128, 0, 128],
            ColorTag::Cyan => [0, 255, 255],
            ColorTag::Orange => [255, 165, 0],
            ColorTag::Magenta => [255, 0, 255],
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorTag {
    type Err = ParseColorTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.name() == s)
            .ok_or_else(|| ParseColorTagError(s.to_string()))
    }
}

impl Distribution<ColorTag> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ColorTag {
        ColorTag::ALL[rng.random_range(0..COLOR_COUNT)]
    }
}
