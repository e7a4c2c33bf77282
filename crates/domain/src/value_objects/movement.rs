//! Movement speeds and flight maneuverability.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Flight maneuverability class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Maneuverability {
    Clumsy,
    Poor,
    Average,
    Good,
    Perfect,
}

impl Maneuverability {
    /// Fly skill modifier for this maneuverability class.
    pub fn fly_skill_modifier(&self) -> i32 {
        match self {
            Self::Clumsy => -8,
            Self::Poor => -4,
            Self::Average => 0,
            Self::Good => 4,
            Self::Perfect => 8,
        }
    }
}

impl fmt::Display for Maneuverability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clumsy => "clumsy",
            Self::Poor => "poor",
            Self::Average => "average",
            Self::Good => "good",
            Self::Perfect => "perfect",
        };
        write!(f, "{}", name)
    }
}

/// Movement speeds in feet. Zero means the mode is unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    #[serde(default)]
    pub land: u32,
    #[serde(default)]
    pub burrow: u32,
    #[serde(default)]
    pub climb: u32,
    #[serde(default)]
    pub fly: u32,
    #[serde(default)]
    pub swim: u32,
    /// Only meaningful when `fly` is non-zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fly_maneuverability: Option<Maneuverability>,
}

impl Movement {
    pub const fn land(feet: u32) -> Self {
        Self {
            land: feet,
            burrow: 0,
            climb: 0,
            fly: 0,
            swim: 0,
            fly_maneuverability: None,
        }
    }

    /// True when the creature has no way to move at all.
    pub fn is_immobile(&self) -> bool {
        self.land == 0 && self.burrow == 0 && self.climb == 0 && self.fly == 0 && self.swim == 0
    }

    /// Limit every non-land mode to the matching ceiling in `limits`.
    ///
    /// Land speed is never limited. Fly maneuverability comes from `limits`
    /// whenever flight survives.
    pub fn capped_by(&self, limits: &Movement) -> Movement {
        let fly = self.fly.min(limits.fly);
        Movement {
            land: self.land,
            burrow: self.burrow.min(limits.burrow),
            climb: self.climb.min(limits.climb),
            fly,
            swim: self.swim.min(limits.swim),
            fly_maneuverability: if fly > 0 {
                limits.fly_maneuverability.or(self.fly_maneuverability)
            } else {
                None
            },
        }
    }

    /// Per-mode maximum of two speed sets; the better maneuverability wins.
    pub fn fastest(&self, other: &Movement) -> Movement {
        let fly = self.fly.max(other.fly);
        Movement {
            land: self.land.max(other.land),
            burrow: self.burrow.max(other.burrow),
            climb: self.climb.max(other.climb),
            fly,
            swim: self.swim.max(other.swim),
            fly_maneuverability: if fly > 0 {
                self.fly_maneuverability.max(other.fly_maneuverability)
            } else {
                None
            },
        }
    }
}
