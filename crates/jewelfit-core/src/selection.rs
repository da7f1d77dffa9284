//! The user's jewelry choice and the active preview mode.
//!
//! A [`Selection`] always holds exactly one value for each of the three
//! fields. It starts at (and resets to) earrings / gold / ruby.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shape::Rgb;

/// Error returned when parsing an unknown option identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {value:?} (expected one of: {expected})")]
pub struct ParseSelectionError {
    /// Which option set was being parsed (e.g. `"material"`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated list of valid identifiers.
    pub expected: String,
}

/// Look up `input` among `all` by identifier.
fn parse_option<T: Copy>(
    kind: &'static str,
    input: &str,
    all: &[T],
    id: fn(T) -> &'static str,
) -> Result<T, ParseSelectionError> {
    all.iter()
        .copied()
        .find(|&candidate| id(candidate) == input)
        .ok_or_else(|| ParseSelectionError {
            kind,
            value: input.to_owned(),
            expected: all.iter().map(|&c| id(c)).collect::<Vec<_>>().join(", "),
        })
}

/// Kind of jewelry being tried on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JewelryType {
    #[default]
    Earrings,
    Necklace,
    Ring,
}

impl JewelryType {
    /// All jewelry types in panel order.
    pub const ALL: [Self; 3] = [Self::Earrings, Self::Necklace, Self::Ring];

    /// Stable identifier, matching the serde representation.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Earrings => "earrings",
            Self::Necklace => "necklace",
            Self::Ring => "ring",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Earrings => "Earrings",
            Self::Necklace => "Necklace",
            Self::Ring => "Ring",
        }
    }
}

/// Metal the piece is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Material {
    #[default]
    Gold,
    Silver,
    RoseGold,
}

impl Material {
    /// All materials in panel order.
    pub const ALL: [Self; 3] = [Self::Gold, Self::Silver, Self::RoseGold];

    /// Stable identifier, matching the serde representation.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::RoseGold => "rose-gold",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::RoseGold => "Rose Gold",
        }
    }

    /// Base color of the metal in the 3D preview.
    #[must_use]
    pub const fn color(self) -> Rgb {
        match self {
            Self::Gold => Rgb::from_hex(0xFF_D7_00),
            Self::Silver => Rgb::from_hex(0xC0_C0_C0),
            Self::RoseGold => Rgb::from_hex(0xE8_B4_A0),
        }
    }

    /// Hue rotation, in degrees, applied to the photo overlay sprite.
    #[must_use]
    pub const fn overlay_hue_degrees(self) -> u16 {
        match self {
            Self::Silver => 0,
            Self::RoseGold => 15,
            Self::Gold => 45,
        }
    }
}

/// Gemstone set into the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gemstone {
    #[default]
    Ruby,
    Emerald,
    Sapphire,
    Diamond,
}

impl Gemstone {
    /// All gemstones in panel order.
    pub const ALL: [Self; 4] = [Self::Ruby, Self::Emerald, Self::Sapphire, Self::Diamond];

    /// Stable identifier, matching the serde representation.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Ruby => "ruby",
            Self::Emerald => "emerald",
            Self::Sapphire => "sapphire",
            Self::Diamond => "diamond",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ruby => "Ruby",
            Self::Emerald => "Emerald",
            Self::Sapphire => "Sapphire",
            Self::Diamond => "Diamond",
        }
    }

    /// Color of the stone in the 3D preview.
    #[must_use]
    pub const fn color(self) -> Rgb {
        match self {
            Self::Ruby => Rgb::from_hex(0xE0_11_5F),
            Self::Emerald => Rgb::from_hex(0x50_C8_78),
            Self::Sapphire => Rgb::from_hex(0x0F_52_BA),
            Self::Diamond => Rgb::from_hex(0xF0_F8_FF),
        }
    }
}

impl FromStr for JewelryType {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("jewelry type", s, &Self::ALL, Self::id)
    }
}

impl FromStr for Material {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("material", s, &Self::ALL, Self::id)
    }
}

impl FromStr for Gemstone {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("gemstone", s, &Self::ALL, Self::id)
    }
}

impl fmt::Display for JewelryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Gemstone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three choices that define the piece being previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub jewelry_type: JewelryType,
    pub material: Material,
    pub gemstone: Gemstone,
}

impl Selection {
    /// Create a selection from its three fields.
    #[must_use]
    pub const fn new(jewelry_type: JewelryType, material: Material, gemstone: Gemstone) -> Self {
        Self {
            jewelry_type,
            material,
            gemstone,
        }
    }

    /// Restore all three fields to the defaults in one step.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `jewelfit-<type>-<material>-<gemstone>`, used for snapshot file names.
    #[must_use]
    pub fn slug(&self) -> String {
        format!(
            "jewelfit-{}-{}-{}",
            self.jewelry_type.id(),
            self.material.id(),
            self.gemstone.id()
        )
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} with {}",
            self.material, self.jewelry_type, self.gemstone
        )
    }
}

/// Which preview is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    #[serde(rename = "photo")]
    Photo,
    #[serde(rename = "3d")]
    ThreeD,
}

impl ViewMode {
    /// Both modes in tab order.
    pub const ALL: [Self; 2] = [Self::Photo, Self::ThreeD];

    /// Tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Photo => "Photo Mode",
            Self::ThreeD => "3D Model Mode",
        }
    }
}
