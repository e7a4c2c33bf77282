//! Transformation tiers and the druid-level gate.
//!
//! A tier is the polymorph spell a wild shape use emulates. The tier decides
//! which sizes are legal, which size-modifier row applies, and which grants
//! are unlocked.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::FormKind;
use crate::error::DomainError;
use crate::value_objects::CreatureSize;

/// The three spell families a tier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TierFamily {
    BeastShape,
    ElementalBody,
    PlantShape,
}

impl TierFamily {
    /// Whether a form of `kind` can be assumed through this family.
    pub fn accepts(&self, kind: FormKind) -> bool {
        matches!(
            (self, kind),
            (Self::BeastShape, FormKind::Animal)
                | (Self::BeastShape, FormKind::MagicalBeast)
                | (Self::ElementalBody, FormKind::Elemental)
                | (Self::PlantShape, FormKind::Plant)
        )
    }
}

/// One of the eleven transformation tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Beast Shape I")]
    BeastShapeI,
    #[serde(rename = "Beast Shape II")]
    BeastShapeII,
    #[serde(rename = "Beast Shape III")]
    BeastShapeIII,
    #[serde(rename = "Beast Shape IV")]
    BeastShapeIV,
    #[serde(rename = "Elemental Body I")]
    ElementalBodyI,
    #[serde(rename = "Elemental Body II")]
    ElementalBodyII,
    #[serde(rename = "Elemental Body III")]
    ElementalBodyIII,
    #[serde(rename = "Elemental Body IV")]
    ElementalBodyIV,
    #[serde(rename = "Plant Shape I")]
    PlantShapeI,
    #[serde(rename = "Plant Shape II")]
    PlantShapeII,
    #[serde(rename = "Plant Shape III")]
    PlantShapeIII,
}

use CreatureSize::{Diminutive, Huge, Large, Medium, Small, Tiny};

const BEAST_I_SIZES: &[CreatureSize] = &[Small, Medium];
const BEAST_II_SIZES: &[CreatureSize] = &[Tiny, Small, Medium, Large];
const BEAST_III_SIZES: &[CreatureSize] = &[Diminutive, Tiny, Small, Medium, Large, Huge];
const ELEMENTAL_I_SIZES: &[CreatureSize] = &[Small];
const ELEMENTAL_II_SIZES: &[CreatureSize] = &[Small, Medium];
const ELEMENTAL_III_SIZES: &[CreatureSize] = &[Small, Medium, Large];
const ELEMENTAL_IV_SIZES: &[CreatureSize] = &[Small, Medium, Large, Huge];
const MAGICAL_BEAST_III_SIZES: &[CreatureSize] = &[Small, Medium];
const MAGICAL_BEAST_IV_SIZES: &[CreatureSize] = &[Tiny, Small, Medium, Large];

/// Effective druid level at which each tier unlocks.
const TIER_UNLOCKS: [(Tier, u8); 11] = [
    (Tier::BeastShapeI, 4),
    (Tier::BeastShapeII, 6),
    (Tier::ElementalBodyI, 6),
    (Tier::BeastShapeIII, 8),
    (Tier::ElementalBodyII, 8),
    (Tier::PlantShapeI, 8),
    (Tier::ElementalBodyIII, 10),
    (Tier::PlantShapeII, 10),
    (Tier::BeastShapeIV, 12),
    (Tier::ElementalBodyIV, 12),
    (Tier::PlantShapeIII, 12),
];

impl Tier {
    pub const ALL: [Tier; 11] = [
        Self::BeastShapeI,
        Self::BeastShapeII,
        Self::BeastShapeIII,
        Self::BeastShapeIV,
        Self::ElementalBodyI,
        Self::ElementalBodyII,
        Self::ElementalBodyIII,
        Self::ElementalBodyIV,
        Self::PlantShapeI,
        Self::PlantShapeII,
        Self::PlantShapeIII,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeastShapeI => "Beast Shape I",
            Self::BeastShapeII => "Beast Shape II",
            Self::BeastShapeIII => "Beast Shape III",
            Self::BeastShapeIV => "Beast Shape IV",
            Self::ElementalBodyI => "Elemental Body I",
            Self::ElementalBodyII => "Elemental Body II",
            Self::ElementalBodyIII => "Elemental Body III",
            Self::ElementalBodyIV => "Elemental Body IV",
            Self::PlantShapeI => "Plant Shape I",
            Self::PlantShapeII => "Plant Shape II",
            Self::PlantShapeIII => "Plant Shape III",
        }
    }

    pub fn family(&self) -> TierFamily {
        match self {
            Self::BeastShapeI | Self::BeastShapeII | Self::BeastShapeIII | Self::BeastShapeIV => {
                TierFamily::BeastShape
            }
            Self::ElementalBodyI
            | Self::ElementalBodyII
            | Self::ElementalBodyIII
            | Self::ElementalBodyIV => TierFamily::ElementalBody,
            Self::PlantShapeI | Self::PlantShapeII | Self::PlantShapeIII => TierFamily::PlantShape,
        }
    }

    /// Spell rank within the family (I = 1).
    pub fn rank(&self) -> u8 {
        match self {
            Self::BeastShapeI | Self::ElementalBodyI | Self::PlantShapeI => 1,
            Self::BeastShapeII | Self::ElementalBodyII | Self::PlantShapeII => 2,
            Self::BeastShapeIII | Self::ElementalBodyIII | Self::PlantShapeIII => 3,
            Self::BeastShapeIV | Self::ElementalBodyIV => 4,
        }
    }

    /// Sizes this tier allows for animals, elementals, and plants.
    pub fn allowed_sizes(&self) -> &'static [CreatureSize] {
        match self {
            Self::BeastShapeI | Self::PlantShapeI => BEAST_I_SIZES,
            Self::BeastShapeII => BEAST_II_SIZES,
            Self::BeastShapeIII | Self::BeastShapeIV => BEAST_III_SIZES,
            Self::ElementalBodyI => ELEMENTAL_I_SIZES,
            Self::ElementalBodyII => ELEMENTAL_II_SIZES,
            Self::ElementalBodyIII | Self::PlantShapeII => ELEMENTAL_III_SIZES,
            Self::ElementalBodyIV | Self::PlantShapeIII => ELEMENTAL_IV_SIZES,
        }
    }

    /// Sizes this tier allows for magical beasts (empty below Beast Shape III).
    pub fn magical_beast_sizes(&self) -> &'static [CreatureSize] {
        match self {
            Self::BeastShapeIII => MAGICAL_BEAST_III_SIZES,
            Self::BeastShapeIV => MAGICAL_BEAST_IV_SIZES,
            _ => &[],
        }
    }

    /// Effective druid level needed to use this tier.
    pub fn min_druid_level(&self) -> u8 {
        TIER_UNLOCKS
            .iter()
            .find(|(tier, _)| tier == self)
            .map(|(_, level)| *level)
            .unwrap_or(u8::MAX)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tier| {
                tier.as_str()
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .collect::<String>()
                    .to_lowercase()
                    == needle
            })
            .ok_or_else(|| DomainError::parse(format!("Unknown tier: {}", s)))
    }
}

/// Tiers unlocked at an effective druid level. Empty below level 4.
pub fn get_tier_for_edl(edl: u8) -> Vec<Tier> {
    Tier::ALL
        .into_iter()
        .filter(|tier| tier.min_druid_level() <= edl)
        .collect()
}

/// Whether `tier` is unlocked at an effective druid level.
pub fn is_tier_available(tier: Tier, edl: u8) -> bool {
    tier.min_druid_level() <= edl
}

/// Whether `tier` allows assuming a form of `size`.
pub fn is_size_allowed_for_tier(tier: Tier, size: CreatureSize) -> bool {
    tier.allowed_sizes().contains(&size)
}

/// Size check that also honours the narrower magical beast range.
pub fn is_size_allowed_for_form(tier: Tier, size: CreatureSize, kind: FormKind) -> bool {
    match kind {
        FormKind::MagicalBeast => tier.magical_beast_sizes().contains(&size),
        _ => is_size_allowed_for_tier(tier, size),
    }
}
