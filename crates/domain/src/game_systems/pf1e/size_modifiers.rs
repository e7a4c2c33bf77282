//! Size modifier tables for the three transformation families.
//!
//! Each row is the published ability-score and natural-armor adjustment for
//! assuming a form of one size. A higher tier reuses the rows of the tiers
//! below it, so rows are keyed by size and gated by the tier's size range.
//! Combinations with no row yield an all-zero modifier set.

use serde::{Deserialize, Serialize};

use super::tier::{Tier, TierFamily};
use crate::entities::ElementType;
use crate::value_objects::CreatureSize;

/// Ability-score and natural-armor deltas for one tier/size pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeModifiers {
    pub str: i32,
    pub dex: i32,
    pub con: i32,
    pub natural_armor: i32,
}

impl SizeModifiers {
    pub const NONE: SizeModifiers = SizeModifiers::new(0, 0, 0, 0);

    pub const fn new(str: i32, dex: i32, con: i32, natural_armor: i32) -> Self {
        Self {
            str,
            dex,
            con,
            natural_armor,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

use CreatureSize::{Diminutive, Huge, Large, Medium, Small, Tiny};

/// Animal forms (Beast Shape I-IV).
const BEAST_ROWS: [(CreatureSize, SizeModifiers); 6] = [
    (Diminutive, SizeModifiers::new(-4, 6, 0, 1)),
    (Tiny, SizeModifiers::new(-2, 4, 0, 1)),
    (Small, SizeModifiers::new(0, 2, 0, 1)),
    (Medium, SizeModifiers::new(2, 0, 0, 2)),
    (Large, SizeModifiers::new(4, -2, 4, 4)),
    (Huge, SizeModifiers::new(6, -4, 0, 6)),
];

/// Magical beast forms (Beast Shape III-IV).
const MAGICAL_BEAST_ROWS: [(CreatureSize, SizeModifiers); 4] = [
    (Tiny, SizeModifiers::new(-2, 8, 0, 3)),
    (Small, SizeModifiers::new(0, 4, 0, 2)),
    (Medium, SizeModifiers::new(4, 0, 0, 4)),
    (Large, SizeModifiers::new(6, -2, 2, 6)),
];

/// Plant forms (Plant Shape I-III).
const PLANT_ROWS: [(CreatureSize, SizeModifiers); 4] = [
    (Small, SizeModifiers::new(0, 0, 2, 2)),
    (Medium, SizeModifiers::new(2, 0, 2, 2)),
    (Large, SizeModifiers::new(4, 0, 2, 4)),
    (Huge, SizeModifiers::new(8, -2, 4, 6)),
];

/// Elemental forms (Elemental Body I-IV), one row per size and element.
const ELEMENTAL_ROWS: [(CreatureSize, ElementType, SizeModifiers); 16] = [
    (Small, ElementType::Air, SizeModifiers::new(0, 2, 0, 2)),
    (Small, ElementType::Earth, SizeModifiers::new(2, 0, 0, 4)),
    (Small, ElementType::Fire, SizeModifiers::new(0, 2, 0, 2)),
    (Small, ElementType::Water, SizeModifiers::new(0, 0, 2, 4)),
    (Medium, ElementType::Air, SizeModifiers::new(0, 4, 0, 3)),
    (Medium, ElementType::Earth, SizeModifiers::new(4, 0, 0, 5)),
    (Medium, ElementType::Fire, SizeModifiers::new(0, 4, 0, 3)),
    (Medium, ElementType::Water, SizeModifiers::new(0, 0, 4, 5)),
    (Large, ElementType::Air, SizeModifiers::new(2, 4, 0, 4)),
    (Large, ElementType::Earth, SizeModifiers::new(6, -2, 2, 6)),
    (Large, ElementType::Fire, SizeModifiers::new(0, 4, 2, 4)),
    (Large, ElementType::Water, SizeModifiers::new(2, -2, 6, 6)),
    (Huge, ElementType::Air, SizeModifiers::new(4, 6, 0, 4)),
    (Huge, ElementType::Earth, SizeModifiers::new(8, -2, 4, 6)),
    (Huge, ElementType::Fire, SizeModifiers::new(0, 6, 4, 4)),
    (Huge, ElementType::Water, SizeModifiers::new(4, -2, 8, 6)),
];

fn size_row(rows: &[(CreatureSize, SizeModifiers)], size: CreatureSize) -> Option<SizeModifiers> {
    rows.iter()
        .find(|(row_size, _)| *row_size == size)
        .map(|(_, mods)| *mods)
}

fn elemental_row(size: CreatureSize, element: ElementType) -> Option<SizeModifiers> {
    ELEMENTAL_ROWS
        .iter()
        .find(|(row_size, row_element, _)| *row_size == size && *row_element == element)
        .map(|(_, _, mods)| *mods)
}

/// Ability and natural-armor deltas for assuming a `target_size` form at `tier`.
///
/// Elemental Body tiers also need `element`; without it, or for any size the
/// tier does not reach, the result is [`SizeModifiers::NONE`].
pub fn get_size_modifiers(
    tier: Tier,
    target_size: CreatureSize,
    element: Option<ElementType>,
) -> SizeModifiers {
    let row = if !tier.allowed_sizes().contains(&target_size) {
        None
    } else {
        match tier.family() {
            TierFamily::BeastShape => size_row(&BEAST_ROWS, target_size),
            TierFamily::PlantShape => size_row(&PLANT_ROWS, target_size),
            TierFamily::ElementalBody => match element {
                Some(element) => elemental_row(target_size, element),
                None => {
                    tracing::debug!(%tier, "Elemental tier requested without an element");
                    None
                }
            },
        }
    };

    row.unwrap_or_else(|| {
        tracing::debug!(%tier, size = %target_size, "No size modifier row; using zero modifiers");
        SizeModifiers::NONE
    })
}

/// Ability and natural-armor deltas for a magical beast form.
///
/// Only Beast Shape III and IV reach magical beasts.
pub fn get_magical_beast_size_modifiers(tier: Tier, target_size: CreatureSize) -> SizeModifiers {
    if !tier.magical_beast_sizes().contains(&target_size) {
        tracing::debug!(%tier, size = %target_size, "No magical beast row; using zero modifiers");
        return SizeModifiers::NONE;
    }
    size_row(&MAGICAL_BEAST_ROWS, target_size).unwrap_or(SizeModifiers::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mods(str: i32, dex: i32, con: i32, na: i32) -> SizeModifiers {
        SizeModifiers::new(str, dex, con, na)
    }

    #[test]
    fn beast_shape_golden_values() {
        use Tier::*;
        let cases = [
            (BeastShapeI, Small, mods(0, 2, 0, 1)),
            (BeastShapeI, Medium, mods(2, 0, 0, 2)),
            (BeastShapeII, Tiny, mods(-2, 4, 0, 1)),
            (BeastShapeII, Small, mods(0, 2, 0, 1)),
            (BeastShapeII, Medium, mods(2, 0, 0, 2)),
            (BeastShapeII, Large, mods(4, -2, 4, 4)),
            (BeastShapeIII, Diminutive, mods(-4, 6, 0, 1)),
            (BeastShapeIII, Huge, mods(6, -4, 0, 6)),
            (BeastShapeIV, Huge, mods(6, -4, 0, 6)),
        ];
        for (tier, size, expected) in cases {
            assert_eq!(get_size_modifiers(tier, size, None), expected, "{tier} {size}");
        }
    }

    #[test]
    fn elemental_golden_values() {
        use ElementType::*;
        use Tier::*;
        let cases = [
            (ElementalBodyI, Small, Air, mods(0, 2, 0, 2)),
            (ElementalBodyI, Small, Earth, mods(2, 0, 0, 4)),
            (ElementalBodyII, Medium, Fire, mods(0, 4, 0, 3)),
            (ElementalBodyII, Medium, Water, mods(0, 0, 4, 5)),
            (ElementalBodyIII, Large, Earth, mods(6, -2, 2, 6)),
            (ElementalBodyIII, Small, Water, mods(0, 0, 2, 4)),
            (ElementalBodyIV, Huge, Air, mods(4, 6, 0, 4)),
            (ElementalBodyIV, Huge, Water, mods(4, -2, 8, 6)),
        ];
        for (tier, size, element, expected) in cases {
            assert_eq!(
                get_size_modifiers(tier, size, Some(element)),
                expected,
                "{tier} {size} {element}"
            );
        }
    }

    #[test]
    fn plant_golden_values() {
        use Tier::*;
        assert_eq!(get_size_modifiers(PlantShapeI, Small, None), mods(0, 0, 2, 2));
        assert_eq!(get_size_modifiers(PlantShapeI, Medium, None), mods(2, 0, 2, 2));
        assert_eq!(get_size_modifiers(PlantShapeII, Large, None), mods(4, 0, 2, 4));
        assert_eq!(get_size_modifiers(PlantShapeIII, Huge, None), mods(8, -2, 4, 6));
    }

    #[test]
    fn every_legal_pair_has_a_row() {
        for tier in Tier::ALL {
            for size in tier.allowed_sizes() {
                let result = match tier.family() {
                    TierFamily::ElementalBody => ElementType::ALL
                        .iter()
                        .map(|e| get_size_modifiers(tier, *size, Some(*e)))
                        .collect::<Vec<_>>(),
                    _ => vec![get_size_modifiers(tier, *size, None)],
                };
                assert!(result.iter().all(|m| !m.is_none()), "{tier} {size}");
            }
        }
    }

    #[test]
    fn out_of_range_sizes_are_silently_zero() {
        assert_eq!(get_size_modifiers(Tier::BeastShapeI, Huge, None), SizeModifiers::NONE);
        assert_eq!(
            get_size_modifiers(Tier::ElementalBodyI, Large, Some(ElementType::Fire)),
            SizeModifiers::NONE
        );
        assert_eq!(
            get_size_modifiers(Tier::BeastShapeIII, CreatureSize::Colossal, None),
            SizeModifiers::NONE
        );
    }

    #[test]
    fn elemental_without_element_is_zero() {
        assert_eq!(get_size_modifiers(Tier::ElementalBodyII, Medium, None), SizeModifiers::NONE);
    }

    #[test]
    fn magical_beast_rows() {
        assert_eq!(
            get_magical_beast_size_modifiers(Tier::BeastShapeIII, Medium),
            mods(4, 0, 0, 4)
        );
        assert_eq!(
            get_magical_beast_size_modifiers(Tier::BeastShapeIV, Large),
            mods(6, -2, 2, 6)
        );
        assert_eq!(
            get_magical_beast_size_modifiers(Tier::BeastShapeIII, Large),
            SizeModifiers::NONE
        );
        assert_eq!(
            get_magical_beast_size_modifiers(Tier::BeastShapeII, Small),
            SizeModifiers::NONE
        );
    }
}
