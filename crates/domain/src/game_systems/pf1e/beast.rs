//! Beast Shape I-IV grant tables.

use super::grants::{senses, speeds, MovementGrant, SensesGrant, TierGrants};
use super::tier::Tier;
use crate::value_objects::Maneuverability::{Average, Good};

const BEAST_SHAPE_I: TierGrants = TierGrants {
    movement: Some(MovementGrant {
        granted: speeds(0, 0, 0, 0, 0, None),
        limits: speeds(0, 0, 30, 30, 30, Some(Average)),
    }),
    senses: Some(SensesGrant {
        granted: senses(true, true, None, None, None),
        limits: senses(false, false, Some(60), None, None),
    }),
    traits: &[],
    abilities: &[],
};

const BEAST_SHAPE_II: TierGrants = TierGrants {
    movement: Some(MovementGrant {
        granted: speeds(0, 0, 0, 0, 0, None),
        limits: speeds(0, 0, 60, 60, 60, Some(Good)),
    }),
    senses: Some(SensesGrant {
        granted: senses(true, true, None, None, None),
        limits: senses(false, false, Some(60), None, None),
    }),
    traits: &[],
    abilities: &["grab", "pounce", "trip"],
};

const BEAST_SHAPE_III: TierGrants = TierGrants {
    movement: Some(MovementGrant {
        granted: speeds(0, 0, 0, 0, 0, None),
        limits: speeds(0, 30, 90, 90, 90, Some(Good)),
    }),
    senses: Some(SensesGrant {
        granted: senses(true, true, None, None, None),
        limits: senses(false, false, Some(60), Some(30), None),
    }),
    traits: &[],
    abilities: &[
        "constrict", "ferocity", "grab", "jet", "poison", "pounce", "rake", "trample", "trip",
        "web",
    ],
};

const BEAST_SHAPE_IV: TierGrants = TierGrants {
    movement: Some(MovementGrant {
        granted: speeds(0, 0, 0, 0, 0, None),
        limits: speeds(0, 60, 90, 120, 120, Some(Good)),
    }),
    senses: Some(SensesGrant {
        granted: senses(true, true, None, None, None),
        limits: senses(false, false, Some(90), Some(60), Some(60)),
    }),
    traits: &[],
    abilities: &[
        "breath weapon",
        "constrict",
        "ferocity",
        "grab",
        "jet",
        "poison",
        "pounce",
        "rake",
        "rend",
        "roar",
        "spikes",
        "trample",
        "trip",
        "web",
    ],
};

/// Grants for a Beast Shape tier; any other tier yields [`TierGrants::EMPTY`].
pub fn get_beast_grants(tier: Tier) -> TierGrants {
    match tier {
        Tier::BeastShapeI => BEAST_SHAPE_I,
        Tier::BeastShapeII => BEAST_SHAPE_II,
        Tier::BeastShapeIII => BEAST_SHAPE_III,
        Tier::BeastShapeIV => BEAST_SHAPE_IV,
        _ => TierGrants::EMPTY,
    }
}
