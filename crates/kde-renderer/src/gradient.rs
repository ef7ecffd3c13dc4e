//! Gradient registry mapping a gradient identifier to a fixed color ramp.

use crate::tables;
use kde_common::{KdeError, KdeResult};
use serde::{Deserialize, Serialize};

/// Number of entries in every gradient table.
pub const GRADIENT_SIZE: usize = 256;

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }
}

/// A fixed 3x256 RGB color ramp.
#[derive(Debug)]
pub struct GradientTable {
    pub r: [u8; GRADIENT_SIZE],
    pub g: [u8; GRADIENT_SIZE],
    pub b: [u8; GRADIENT_SIZE],
}

impl GradientTable {
    /// Look up the color at `index` with the given alpha.
    #[inline]
    pub fn color(&self, index: u8, alpha: u8) -> Color {
        let i = index as usize;
        Color::new(self.r[i], self.g[i], self.b[i], alpha)
    }
}

/// Named color ramps.
///
/// Numeric ids follow declaration order, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum GradientType {
    #[default]
    Classic,
    Fire,
    Omg,
    Pbj,
    Pjaitch,
    Rdyibu,
}

impl GradientType {
    /// Every gradient, in id order.
    pub const ALL: [GradientType; 6] = [
        GradientType::Classic,
        GradientType::Fire,
        GradientType::Omg,
        GradientType::Pbj,
        GradientType::Pjaitch,
        GradientType::Rdyibu,
    ];

    /// Resolve a numeric gradient id.
    pub fn from_id(id: i32) -> KdeResult<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| KdeError::unknown_enum("gradient", id))
    }

    pub fn id(&self) -> i32 {
        *self as i32
    }

    pub fn name(&self) -> &'static str {
        match self {
            GradientType::Classic => "CLASSIC",
            GradientType::Fire => "FIRE",
            GradientType::Omg => "OMG",
            GradientType::Pbj => "PBJ",
            GradientType::Pjaitch => "PJAITCH",
            GradientType::Rdyibu => "RDYIBU",
        }
    }

    /// The color table for this gradient.
    pub fn table(&self) -> &'static GradientTable {
        match self {
            GradientType::Classic => &tables::CLASSIC,
            GradientType::Fire => &tables::FIRE,
            GradientType::Omg => &tables::OMG,
            GradientType::Pbj => &tables::PBJ,
            GradientType::Pjaitch => &tables::PJAITCH,
            GradientType::Rdyibu => &tables::RDYIBU,
        }
    }
}

impl std::str::FromStr for GradientType {
    type Err = KdeError;

    /// Parse a gradient name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.name() == upper)
            .ok_or_else(|| KdeError::unknown_enum("gradient", s))
    }
}

impl std::fmt::Display for GradientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
