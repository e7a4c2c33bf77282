//! Plant Shape I-III grant tables.

use super::grants::{senses, MovementGrant, SensesGrant, TierGrants};
use super::tier::{Tier, TierFamily};

/// Land speed of a plant form that cannot otherwise move.
pub const IMMOBILE_PLANT_SPEED: u32 = 5;

const PLANT_SENSES: SensesGrant = SensesGrant {
    granted: senses(true, false, None, None, None),
    limits: senses(false, false, Some(60), None, None),
};

const PLANT_SHAPE_I: TierGrants = TierGrants {
    movement: Some(MovementGrant::NONE),
    senses: Some(PLANT_SENSES),
    traits: &[],
    abilities: &["constrict", "grab", "poison"],
};

const PLANT_SHAPE_II: TierGrants = TierGrants {
    movement: Some(MovementGrant::NONE),
    senses: Some(PLANT_SENSES),
    traits: &[],
    abilities: &[
        "constrict",
        "grab",
        "poison",
        "resist acid",
        "resist cold",
        "resist electricity",
        "resist fire",
        "resist sonic",
    ],
};

const PLANT_SHAPE_III: TierGrants = TierGrants {
    movement: Some(MovementGrant::NONE),
    senses: Some(PLANT_SENSES),
    traits: &[],
    abilities: &[
        "constrict",
        "grab",
        "poison",
        "resist acid",
        "resist cold",
        "resist electricity",
        "resist fire",
        "resist sonic",
        "DR",
        "damage reduction",
        "regeneration",
        "trample",
    ],
};

/// Grants for a Plant Shape tier; any other tier yields [`TierGrants::EMPTY`].
pub fn get_plant_grants(tier: Tier) -> TierGrants {
    match tier {
        Tier::PlantShapeI => PLANT_SHAPE_I,
        Tier::PlantShapeII => PLANT_SHAPE_II,
        Tier::PlantShapeIII => PLANT_SHAPE_III,
        _ => TierGrants::EMPTY,
    }
}

/// Whether a Plant Shape tier confers `name`. False for every other family.
pub fn is_plant_trait_granted_by_tier(tier: Tier, name: &str) -> bool {
    tier.family() == TierFamily::PlantShape && get_plant_grants(tier).grants_trait(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Movement;

    #[test]
    fn plant_shape_one_keeps_grab_and_poison() {
        assert!(is_plant_trait_granted_by_tier(Tier::PlantShapeI, "Grab"));
        assert!(is_plant_trait_granted_by_tier(Tier::PlantShapeI, "Poison (Con 1d4)"));
        assert!(!is_plant_trait_granted_by_tier(Tier::PlantShapeI, "Regeneration 5"));
    }

    #[test]
    fn resistances_from_plant_shape_two() {
        assert!(!is_plant_trait_granted_by_tier(Tier::PlantShapeI, "Resist Cold 10"));
        assert!(is_plant_trait_granted_by_tier(Tier::PlantShapeII, "Resist Cold 10"));
    }

    #[test]
    fn plant_shape_three_adds_dr_regeneration_and_trample() {
        assert!(is_plant_trait_granted_by_tier(Tier::PlantShapeIII, "DR 10/slashing"));
        assert!(is_plant_trait_granted_by_tier(Tier::PlantShapeIII, "Regeneration 5 (fire)"));
        assert!(is_plant_trait_granted_by_tier(Tier::PlantShapeIII, "trample"));
    }

    #[test]
    fn non_plant_tier_never_grants_plant_traits() {
        assert!(!is_plant_trait_granted_by_tier(Tier::BeastShapeIII, "grab"));
        assert_eq!(get_plant_grants(Tier::ElementalBodyI), TierGrants::EMPTY);
    }

    #[test]
    fn plants_keep_land_speed_only() {
        let grant = get_plant_grants(Tier::PlantShapeII).movement.expect("movement");
        let native = Movement {
            climb: 20,
            ..Movement::land(20)
        };
        let result = grant.apply(&native);
        assert_eq!(result.land, 20);
        assert_eq!(result.climb, 0);
    }

    #[test]
    fn plants_gain_low_light_but_not_scent() {
        let senses = get_plant_grants(Tier::PlantShapeI).senses.expect("senses");
        assert!(senses.granted.low_light);
        assert!(!senses.granted.scent);
        assert_eq!(senses.limits.darkvision, Some(60));
    }
}
