//! Creature size categories and the size-keyed modifier tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// PF1e size category, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CreatureSize {
    Fine,
    Diminutive,
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
    Gargantuan,
    Colossal,
}

/// Size modifier applied to attack rolls and Armor Class.
pub const SIZE_TO_HIT_AC: [(CreatureSize, i32); 9] = [
    (CreatureSize::Fine, 8),
    (CreatureSize::Diminutive, 4),
    (CreatureSize::Tiny, 2),
    (CreatureSize::Small, 1),
    (CreatureSize::Medium, 0),
    (CreatureSize::Large, -1),
    (CreatureSize::Huge, -2),
    (CreatureSize::Gargantuan, -4),
    (CreatureSize::Colossal, -8),
];

impl CreatureSize {
    pub const ALL: [CreatureSize; 9] = [
        Self::Fine,
        Self::Diminutive,
        Self::Tiny,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Huge,
        Self::Gargantuan,
        Self::Colossal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fine => "Fine",
            Self::Diminutive => "Diminutive",
            Self::Tiny => "Tiny",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Huge => "Huge",
            Self::Gargantuan => "Gargantuan",
            Self::Colossal => "Colossal",
        }
    }

    /// Position on the size ladder (Fine = 0, Colossal = 8).
    pub fn index(&self) -> i32 {
        *self as i32
    }

    /// Number of size steps from `self` to `other` (positive when growing).
    pub fn steps_to(&self, other: CreatureSize) -> i32 {
        other.index() - self.index()
    }

    /// Size modifier to attack rolls and AC (Large is -1, Small is +1).
    pub fn to_hit_ac_modifier(&self) -> i32 {
        SIZE_TO_HIT_AC
            .iter()
            .find(|(size, _)| size == self)
            .map(|(_, modifier)| *modifier)
            .unwrap_or(0)
    }

    /// Special size modifier used for CMB and CMD (mirror of the AC modifier).
    pub fn special_size_modifier(&self) -> i32 {
        -self.to_hit_ac_modifier()
    }
}

impl fmt::Display for CreatureSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CreatureSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::parse(format!("Unknown creature size: {}", s)))
    }
}
