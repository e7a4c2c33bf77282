//! Armor Class aggregation for a transformed character.

use serde::{Deserialize, Serialize};

use crate::entities::ArmorClassComponents;
use crate::value_objects::CreatureSize;

pub const BASE_ARMOR_CLASS: i32 = 10;

/// Every named component that went into the AC totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcBreakdown {
    pub armor: i32,
    pub shield: i32,
    pub dex: i32,
    pub size: i32,
    pub natural: i32,
    pub deflection: i32,
    pub dodge: i32,
    pub misc: i32,
}

/// Total, touch, and flat-footed AC with the breakdown inlined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorClass {
    pub total: i32,
    pub touch: i32,
    pub flat_footed: i32,
    #[serde(flatten)]
    pub breakdown: AcBreakdown,
}

/// Natural armor while transformed.
///
/// The form's natural armor does not stack with the character's own; the
/// better of the two applies.
pub fn resolve_natural_armor(base_natural: i32, form_natural: i32) -> i32 {
    base_natural.max(form_natural)
}

/// Combine the character's AC components with the assumed size and form.
pub fn aggregate_armor_class(
    components: &ArmorClassComponents,
    dex_mod: i32,
    size: CreatureSize,
    form_natural_armor: i32,
) -> ArmorClass {
    let breakdown = AcBreakdown {
        armor: components.armor,
        shield: components.shield,
        dex: dex_mod,
        size: size.to_hit_ac_modifier(),
        natural: resolve_natural_armor(components.natural, form_natural_armor),
        deflection: components.deflection,
        dodge: components.dodge,
        misc: components.misc,
    };
    ArmorClass {
        total: total(&breakdown),
        touch: touch(&breakdown),
        flat_footed: flat_footed(&breakdown),
        breakdown,
    }
}

fn total(b: &AcBreakdown) -> i32 {
    BASE_ARMOR_CLASS
        + b.armor
        + b.shield
        + b.dex
        + b.size
        + b.natural
        + b.deflection
        + b.dodge
        + b.misc
}

// Touch ignores armor, shield, and natural armor
fn touch(b: &AcBreakdown) -> i32 {
    BASE_ARMOR_CLASS + b.dex + b.size + b.deflection + b.dodge + b.misc
}

// Flat-footed ignores Dexterity and dodge
fn flat_footed(b: &AcBreakdown) -> i32 {
    BASE_ARMOR_CLASS + b.armor + b.shield + b.size + b.natural + b.deflection + b.misc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components() -> ArmorClassComponents {
        ArmorClassComponents {
            armor: 2,
            shield: 1,
            natural: 1,
            deflection: 1,
            dodge: 1,
            misc: 0,
        }
    }

    #[test]
    fn totals_for_a_large_form() {
        let ac = aggregate_armor_class(&components(), 1, CreatureSize::Large, 4);
        assert_eq!(ac.breakdown.natural, 4);
        assert_eq!(ac.breakdown.size, -1);
        assert_eq!(ac.total, 10 + 2 + 1 + 1 - 1 + 4 + 1 + 1);
        assert_eq!(ac.touch, 10 + 1 - 1 + 1 + 1);
        assert_eq!(ac.flat_footed, 10 + 2 + 1 - 1 + 4 + 1);
    }

    #[test]
    fn natural_armor_takes_the_better_source() {
        assert_eq!(resolve_natural_armor(3, 1), 3);
        assert_eq!(resolve_natural_armor(0, 6), 6);
        assert_eq!(resolve_natural_armor(2, 2), 2);
    }

    #[test]
    fn small_size_helps_every_total() {
        let components = ArmorClassComponents::default();
        let base = aggregate_armor_class(&components, 0, CreatureSize::Medium, 0);
        let small = aggregate_armor_class(&components, 0, CreatureSize::Small, 0);
        assert_eq!(small.total, base.total + 1);
        assert_eq!(small.touch, base.touch + 1);
        assert_eq!(small.flat_footed, base.flat_footed + 1);
    }

    #[test]
    fn breakdown_is_inlined_when_serialized() {
        let ac = aggregate_armor_class(&components(), 2, CreatureSize::Huge, 6);
        let json = serde_json::to_value(ac).expect("serialize");
        assert_eq!(json["size"], -2);
        assert_eq!(json["flatFooted"], ac.flat_footed);
        assert!(json.get("breakdown").is_none());
    }
}
