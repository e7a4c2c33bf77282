//! Elemental Body I-IV grant tables.
//!
//! Every elemental tier grants darkvision 60 ft. Movement and traits depend
//! on the element and grow with the tier.

use super::grants::{senses, speeds, MovementGrant, SensesGrant, TierGrants};
use super::tier::{Tier, TierFamily};
use crate::entities::ElementType;
use crate::value_objects::Maneuverability::{Average, Perfect};
use crate::value_objects::Movement;

const ELEMENTAL_SENSES: SensesGrant = SensesGrant {
    granted: senses(false, false, Some(60), None, None),
    limits: senses(false, false, None, None, None),
};

const NO_LIMITS: Movement = speeds(0, 0, 0, 0, 0, None);

const DR: &str = "DR 5/—";
const IMMUNITIES: &str = "Immune to bleed, critical hits, and sneak attacks";

const AIR_I: &[&str] = &[];
const AIR_II: &[&str] = &["Whirlwind"];
const AIR_III: &[&str] = &["Whirlwind", IMMUNITIES];
const AIR_IV: &[&str] = &["Whirlwind", IMMUNITIES, DR];

const EARTH_I: &[&str] = &["Earth Glide"];
const EARTH_III: &[&str] = &["Earth Glide", IMMUNITIES];
const EARTH_IV: &[&str] = &["Earth Glide", IMMUNITIES, DR];

const FIRE_I: &[&str] = &["Burn", "Resist Fire 20", "Vulnerability to Cold"];
const FIRE_III: &[&str] = &["Burn", "Resist Fire 20", "Vulnerability to Cold", IMMUNITIES];
const FIRE_IV: &[&str] = &[
    "Burn",
    "Resist Fire 20",
    "Vulnerability to Cold",
    IMMUNITIES,
    DR,
];

const WATER_I: &[&str] = &["Water Breathing"];
const WATER_II: &[&str] = &["Water Breathing", "Vortex"];
const WATER_III: &[&str] = &["Water Breathing", "Vortex", IMMUNITIES];
const WATER_IV: &[&str] = &["Water Breathing", "Vortex", IMMUNITIES, DR];

// Immunities arrive with Elemental Body III, DR 5/— with IV.
fn elemental_traits(rank: u8, element: ElementType) -> &'static [&'static str] {
    match (element, rank) {
        (ElementType::Air, 1) => AIR_I,
        (ElementType::Air, 2) => AIR_II,
        (ElementType::Air, 3) => AIR_III,
        (ElementType::Air, _) => AIR_IV,
        (ElementType::Earth, 1 | 2) => EARTH_I,
        (ElementType::Earth, 3) => EARTH_III,
        (ElementType::Earth, _) => EARTH_IV,
        (ElementType::Fire, 1 | 2) => FIRE_I,
        (ElementType::Fire, 3) => FIRE_III,
        (ElementType::Fire, _) => FIRE_IV,
        (ElementType::Water, 1) => WATER_I,
        (ElementType::Water, 2) => WATER_II,
        (ElementType::Water, 3) => WATER_III,
        (ElementType::Water, _) => WATER_IV,
    }
}

/// Movement an elemental tier confers outright for one element.
///
/// The form's own burrow/climb/fly/swim speeds are replaced; land speed is
/// kept when faster.
pub fn get_elemental_movement_for_tier(tier: Tier, element: ElementType) -> MovementGrant {
    if tier.family() != TierFamily::ElementalBody {
        return MovementGrant::NONE;
    }
    let rank = tier.rank();
    let granted = match element {
        ElementType::Air => {
            let fly = match rank {
                1 | 2 => 60,
                3 => 90,
                _ => 120,
            };
            speeds(0, 0, 0, fly, 0, Some(Perfect))
        }
        ElementType::Earth => speeds(20, 20, 0, 0, 0, None),
        ElementType::Fire => speeds(50, 0, 0, 50, 0, Some(Average)),
        ElementType::Water => {
            let swim = match rank {
                1 | 2 => 60,
                3 => 90,
                _ => 120,
            };
            speeds(20, 0, 0, 0, swim, None)
        }
    };
    MovementGrant {
        granted,
        limits: NO_LIMITS,
    }
}

/// Grants for an Elemental Body tier and element.
///
/// Non-elemental tiers, or a missing element, yield [`TierGrants::EMPTY`].
pub fn get_elemental_grants(tier: Tier, element: Option<ElementType>) -> TierGrants {
    if tier.family() != TierFamily::ElementalBody {
        return TierGrants::EMPTY;
    }
    let Some(element) = element else {
        tracing::debug!(%tier, "Elemental grants requested without an element");
        return TierGrants::EMPTY;
    };
    TierGrants {
        movement: Some(get_elemental_movement_for_tier(tier, element)),
        senses: Some(ELEMENTAL_SENSES),
        traits: elemental_traits(tier.rank(), element),
        abilities: &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Maneuverability;

    #[test]
    fn air_flies_perfectly_and_faster_with_tier() {
        let one = get_elemental_movement_for_tier(Tier::ElementalBodyI, ElementType::Air);
        let four = get_elemental_movement_for_tier(Tier::ElementalBodyIV, ElementType::Air);
        assert_eq!(one.granted.fly, 60);
        assert_eq!(four.granted.fly, 120);
        assert_eq!(one.granted.fly_maneuverability, Some(Maneuverability::Perfect));
    }

    #[test]
    fn earth_burrows_and_never_flies() {
        for tier in [Tier::ElementalBodyI, Tier::ElementalBodyIV] {
            let grant = get_elemental_movement_for_tier(tier, ElementType::Earth);
            assert_eq!(grant.granted.burrow, 20);
            assert_eq!(grant.granted.fly, 0);
        }
    }

    #[test]
    fn fire_flies_with_average_maneuverability() {
        let grant = get_elemental_movement_for_tier(Tier::ElementalBodyII, ElementType::Fire);
        assert!(grant.granted.fly > 0);
        assert_eq!(grant.granted.fly_maneuverability, Some(Maneuverability::Average));
    }

    #[test]
    fn water_swims() {
        let grant = get_elemental_movement_for_tier(Tier::ElementalBodyIII, ElementType::Water);
        assert_eq!(grant.granted.swim, 90);
        assert_eq!(grant.granted.fly, 0);
    }

    #[test]
    fn native_flight_is_replaced_by_the_element() {
        let grant = get_elemental_movement_for_tier(Tier::ElementalBodyI, ElementType::Earth);
        let native = Movement {
            fly: 100,
            fly_maneuverability: Some(Maneuverability::Perfect),
            ..Movement::land(30)
        };
        let result = grant.apply(&native);
        assert_eq!(result.fly, 0);
        assert_eq!(result.land, 30);
        assert_eq!(result.burrow, 20);
    }

    #[test]
    fn traits_grow_with_tier() {
        let air_one = get_elemental_grants(Tier::ElementalBodyI, Some(ElementType::Air));
        let air_two = get_elemental_grants(Tier::ElementalBodyII, Some(ElementType::Air));
        let air_three = get_elemental_grants(Tier::ElementalBodyIII, Some(ElementType::Air));
        let air_four = get_elemental_grants(Tier::ElementalBodyIV, Some(ElementType::Air));
        assert!(!air_one.grants_trait("Whirlwind"));
        assert!(air_two.grants_trait("Whirlwind"));
        assert!(!air_two.grants_trait(IMMUNITIES));
        assert!(air_three.grants_trait(IMMUNITIES));
        assert!(!air_three.grants_trait("DR 5/—"));
        assert!(air_four.grants_trait("DR 5/—"));
    }

    #[test]
    fn damage_reduction_waits_for_the_fourth_tier() {
        for element in ElementType::ALL {
            let three = get_elemental_grants(Tier::ElementalBodyIII, Some(element));
            let four = get_elemental_grants(Tier::ElementalBodyIV, Some(element));
            assert!(three.grants_trait(IMMUNITIES), "{element}");
            assert!(!three.traits.contains(&DR), "{element}");
            assert!(four.traits.contains(&DR), "{element}");
            assert!(four.traits.contains(&IMMUNITIES), "{element}");
        }
    }

    #[test]
    fn fire_burns_from_the_first_tier() {
        let grants = get_elemental_grants(Tier::ElementalBodyI, Some(ElementType::Fire));
        assert!(grants.grants_trait("Burn"));
        assert!(grants.grants_trait("Vulnerability to Cold"));
    }

    #[test]
    fn every_elemental_has_darkvision() {
        for element in ElementType::ALL {
            let grants = get_elemental_grants(Tier::ElementalBodyI, Some(element));
            let senses = grants.senses.expect("elemental senses");
            assert_eq!(senses.granted.darkvision, Some(60));
        }
    }

    #[test]
    fn missing_element_or_wrong_family_is_empty() {
        assert_eq!(get_elemental_grants(Tier::ElementalBodyII, None), TierGrants::EMPTY);
        assert_eq!(
            get_elemental_grants(Tier::BeastShapeII, Some(ElementType::Air)),
            TierGrants::EMPTY
        );
        assert_eq!(
            get_elemental_movement_for_tier(Tier::PlantShapeI, ElementType::Water),
            MovementGrant::NONE
        );
    }
}
