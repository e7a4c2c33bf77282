//! Tier grants - what a transformation spell confers regardless of the
//! specific creature chosen.
//!
//! A grant bundle has two halves. Outright grants apply to every form the
//! tier can produce. Limited grants only keep what the form already has,
//! capped at the tier's ceiling.

use super::beast::get_beast_grants;
use super::elemental::get_elemental_grants;
use super::plant::get_plant_grants;
use super::tier::{Tier, TierFamily};
use crate::entities::ElementType;
use crate::value_objects::{Maneuverability, Movement, Senses};

/// Movement half of a grant bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementGrant {
    /// Speeds the tier confers outright
    pub granted: Movement,
    /// Ceilings on the form's own non-land speeds; zero drops the mode
    pub limits: Movement,
}

impl MovementGrant {
    pub const NONE: MovementGrant = MovementGrant {
        granted: Movement::land(0),
        limits: Movement::land(0),
    };

    /// Final speeds for a form's native movement under this grant.
    pub fn apply(&self, native: &Movement) -> Movement {
        native.capped_by(&self.limits).fastest(&self.granted)
    }
}

/// Senses half of a grant bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensesGrant {
    /// Senses the tier confers outright
    pub granted: Senses,
    /// Range ceilings for the form's own ranged senses
    pub limits: Senses,
}

impl SensesGrant {
    /// Final senses for a form's native senses under this grant.
    pub fn apply(&self, native: &Senses) -> Senses {
        native.ranges_within(&self.limits).union(&self.granted)
    }
}

/// Everything one tier confers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierGrants {
    pub movement: Option<MovementGrant>,
    pub senses: Option<SensesGrant>,
    /// Traits every form at this tier gains
    pub traits: &'static [&'static str],
    /// Special abilities kept only when the form has them
    pub abilities: &'static [&'static str],
}

impl TierGrants {
    pub const EMPTY: TierGrants = TierGrants {
        movement: None,
        senses: None,
        traits: &[],
        abilities: &[],
    };

    /// Whether `name` is conferred by this bundle, outright or as a kept ability.
    pub fn grants_trait(&self, name: &str) -> bool {
        self.traits
            .iter()
            .chain(self.abilities.iter())
            .any(|keyword| trait_matches(name, keyword))
    }
}

pub(crate) const fn senses(
    low_light: bool,
    scent: bool,
    darkvision: Option<u32>,
    blindsense: Option<u32>,
    tremorsense: Option<u32>,
) -> Senses {
    Senses {
        low_light,
        scent,
        darkvision,
        blindsense,
        blindsight: None,
        tremorsense,
    }
}

pub(crate) const fn speeds(
    land: u32,
    burrow: u32,
    climb: u32,
    fly: u32,
    swim: u32,
    fly_maneuverability: Option<Maneuverability>,
) -> Movement {
    Movement {
        land,
        burrow,
        climb,
        fly,
        swim,
        fly_maneuverability,
    }
}

/// Case-insensitive match of a trait against a keyword on its leading words.
///
/// "Poison (Str 1d2)" and "poison" both match the keyword "poison";
/// "Poisonous" does not.
pub fn trait_matches(candidate: &str, keyword: &str) -> bool {
    let candidate = candidate.trim().to_lowercase();
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return false;
    }
    match candidate.strip_prefix(&keyword) {
        Some(rest) => rest.is_empty() || rest.starts_with([' ', '(', ',', ':']),
        None => false,
    }
}

/// Grants for any tier, dispatched on its family.
pub fn get_grants(tier: Tier, element: Option<ElementType>) -> TierGrants {
    match tier.family() {
        TierFamily::BeastShape => get_beast_grants(tier),
        TierFamily::ElementalBody => get_elemental_grants(tier, element),
        TierFamily::PlantShape => get_plant_grants(tier),
    }
}

/// Whether `name` is part of what `tier` confers.
///
/// Elemental tiers need the element to answer; without it nothing is granted.
pub fn is_trait_granted_by_tier(tier: Tier, name: &str, element: Option<ElementType>) -> bool {
    get_grants(tier, element).grants_trait(name)
}

/// Whether `name` names a special ability some tier gates.
///
/// Traits outside this catalog are descriptive and always pass through.
pub fn is_gated_ability(name: &str) -> bool {
    Tier::ALL.into_iter().any(|tier| match tier.family() {
        TierFamily::ElementalBody => ElementType::ALL
            .into_iter()
            .any(|element| get_elemental_grants(tier, Some(element)).grants_trait(name)),
        _ => get_grants(tier, None).grants_trait(name),
    })
}
