//! Property-based tests for the wild shape rules.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use wildshape_domain::game_systems::pf1e::aggregate_armor_class;
use wildshape_domain::{
    compute_pf1e, scale_damage_for_size, AbilityScores, ArmorClassComponents, BaseCharacter,
    ComputeInput, CreatureSize, Form, FormKind, Movement, NaturalAttack, NaturalAttackType,
    Tier,
};

fn any_size() -> impl Strategy<Value = CreatureSize> {
    (0usize..CreatureSize::ALL.len()).prop_map(|i| CreatureSize::ALL[i])
}

fn any_tier() -> impl Strategy<Value = Tier> {
    (0usize..Tier::ALL.len()).prop_map(|i| Tier::ALL[i])
}

/// Every entry below the top of its progression.
const GROWABLE_DICE: &[&str] = &[
    "1d2", "1d3", "1d4", "1d6", "1d8", "2d6", "3d6", "4d6", "6d6", "8d6", "12d6", "16d6", "1d10",
    "2d8", "3d8", "4d8", "6d8", "8d8", "12d8",
];

/// Every entry above the bottom of its progression. 1d10 is left out: it
/// shrinks to 1d8, which grows along the standard progression to 2d6.
const SHRINKABLE_DICE: &[&str] = &[
    "1d3", "1d4", "1d6", "1d8", "2d6", "3d6", "4d6", "6d6", "8d6", "12d6", "16d6", "24d6", "2d8",
    "3d8", "4d8", "6d8", "8d8", "12d8", "16d8",
];

/// A size with a larger neighbour, paired with that neighbour.
fn adjacent_sizes() -> impl Strategy<Value = (CreatureSize, CreatureSize)> {
    (0usize..CreatureSize::ALL.len() - 1)
        .prop_map(|i| (CreatureSize::ALL[i], CreatureSize::ALL[i + 1]))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// The engine is a pure function of its input.
    #[test]
    fn prop_compute_is_idempotent(
        str in 1i32..30,
        dex in 1i32..30,
        con in 1i32..30,
        bab in 0i32..15,
        tier in any_tier(),
        size in any_size(),
        native in any_size(),
    ) {
        let base = BaseCharacter::new("Druid", 12)
            .with_abilities(AbilityScores::new(str, dex, con, 10, 16, 10))
            .with_base_attack_bonus(bab);
        let form = Form::new("beast", "Beast", FormKind::Animal, native)
            .with_attack(NaturalAttack::new(NaturalAttackType::Bite, "1d6").with_trait("grab"))
            .with_attack(NaturalAttack::new(NaturalAttackType::Claw, "1d4").with_count(2))
            .with_movement(Movement::land(30))
            .with_trait("pounce");
        let input = ComputeInput::new(base, form, tier, size);

        prop_assert_eq!(compute_pf1e(&input), compute_pf1e(&input));
    }

    /// Touch and flat-footed never exceed the full AC when nothing is negative.
    #[test]
    fn prop_partial_ac_never_exceeds_total(
        armor in 0i32..12,
        shield in 0i32..6,
        natural in 0i32..10,
        deflection in 0i32..6,
        dodge in 0i32..4,
        misc in 0i32..4,
        dex_mod in 0i32..10,
        form_natural in 0i32..10,
        size in any_size(),
    ) {
        let components = ArmorClassComponents {
            armor,
            shield,
            natural,
            deflection,
            dodge,
            misc,
        };
        let ac = aggregate_armor_class(&components, dex_mod, size, form_natural);

        prop_assert!(ac.touch <= ac.total);
        prop_assert!(ac.flat_footed <= ac.total);
        prop_assert_eq!(ac.breakdown.natural, natural.max(form_natural));
    }

    /// One size up then one size down lands on the starting dice.
    #[test]
    fn prop_growing_then_shrinking_round_trips(
        index in 0usize..GROWABLE_DICE.len(),
        (small, large) in adjacent_sizes(),
    ) {
        let dice = GROWABLE_DICE[index];
        let up = scale_damage_for_size(dice, small, large);
        let back = scale_damage_for_size(&up, large, small);

        prop_assert_ne!(&up, dice);
        prop_assert_eq!(back, dice);
    }

    /// One size down then one size up lands on the starting dice.
    #[test]
    fn prop_shrinking_then_growing_round_trips(
        index in 0usize..SHRINKABLE_DICE.len(),
        (small, large) in adjacent_sizes(),
    ) {
        let dice = SHRINKABLE_DICE[index];
        let down = scale_damage_for_size(dice, large, small);
        let back = scale_damage_for_size(&down, small, large);

        prop_assert_ne!(&down, dice);
        prop_assert_eq!(back, dice);
    }

    /// Same-size scaling never touches the expression.
    #[test]
    fn prop_same_size_scaling_is_identity(count in 1u32..10, die in 2u32..13, size in any_size()) {
        let dice = format!("{count}d{die}");
        prop_assert_eq!(scale_damage_for_size(&dice, size, size), dice);
    }
}
