//! Special senses.

use serde::{Deserialize, Serialize};

/// Senses a creature possesses. Ranges are in feet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Senses {
    #[serde(default)]
    pub low_light: bool,
    #[serde(default)]
    pub scent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub darkvision: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blindsense: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blindsight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tremorsense: Option<u32>,
}

fn longest(a: Option<u32>, b: Option<u32>) -> Option<u32> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.max(y)),
        (x, None) => x,
        (None, y) => y,
    }
}

/// Clamp a sense range to a ceiling; no ceiling means the sense is not kept.
fn within(range: Option<u32>, ceiling: Option<u32>) -> Option<u32> {
    match (range, ceiling) {
        (Some(r), Some(c)) if r > 0 && c > 0 => Some(r.min(c)),
        _ => None,
    }
}

impl Senses {
    /// Combine two sense sets, keeping every flag and the longest range.
    pub fn union(&self, other: &Senses) -> Senses {
        Senses {
            low_light: self.low_light || other.low_light,
            scent: self.scent || other.scent,
            darkvision: longest(self.darkvision, other.darkvision),
            blindsense: longest(self.blindsense, other.blindsense),
            blindsight: longest(self.blindsight, other.blindsight),
            tremorsense: longest(self.tremorsense, other.tremorsense),
        }
    }

    /// Keep only the ranged senses allowed by `ceilings`, clamped to them.
    ///
    /// Flags are dropped; they are granted outright, never inherited.
    pub fn ranges_within(&self, ceilings: &Senses) -> Senses {
        Senses {
            low_light: false,
            scent: false,
            darkvision: within(self.darkvision, ceilings.darkvision),
            blindsense: within(self.blindsense, ceilings.blindsense),
            blindsight: within(self.blindsight, ceilings.blindsight),
            tremorsense: within(self.tremorsense, ceilings.tremorsense),
        }
    }
}
