//! Natural attack scaling.
//!
//! Rescales each attack's damage to the assumed size and works out its
//! attack and damage bonuses from BAB, size, and the transformed Strength.

use serde::{Deserialize, Serialize};

use crate::entities::NaturalAttack;
use crate::value_objects::{scale_damage_for_size, Ability, AbilityScores, CreatureSize};

/// Attack roll penalty for secondary natural attacks.
pub const SECONDARY_ATTACK_PENALTY: i32 = 5;

/// One natural attack as it appears on the transformed playsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedAttack {
    pub name: String,
    /// Identical attacks in this entry (2 claws is one entry with count 2)
    pub count: u8,
    pub attack_bonus: i32,
    /// Damage dice at the assumed size
    pub damage_dice: String,
    /// Strength-derived damage added to each hit
    pub damage_bonus: i32,
    pub primary: bool,
    pub traits: Vec<String>,
}

/// Attack bonus: BAB + size modifier + STR modifier, -5 when secondary.
pub fn natural_attack_bonus(bab: i32, size: CreatureSize, str_mod: i32, primary: bool) -> i32 {
    let penalty = if primary { 0 } else { SECONDARY_ATTACK_PENALTY };
    bab + size.to_hit_ac_modifier() + str_mod - penalty
}

/// Strength to damage for one natural attack.
///
/// A sole primary attack adds 1-1/2 times the bonus, other primaries add it
/// once, secondaries add half. Penalties always apply in full.
pub fn natural_damage_bonus(str_mod: i32, primary: bool, sole_attack: bool) -> i32 {
    if str_mod <= 0 {
        return str_mod;
    }
    match (primary, sole_attack) {
        (true, true) => str_mod * 3 / 2,
        (true, false) => str_mod,
        (false, _) => str_mod / 2,
    }
}

/// Scale one attack from `native_size` to `target_size`.
pub fn scale_attack(
    attack: &NaturalAttack,
    native_size: CreatureSize,
    target_size: CreatureSize,
    bab: i32,
    str_mod: i32,
    sole_attack: bool,
) -> ComputedAttack {
    let primary = attack.is_primary();
    ComputedAttack {
        name: attack.display_name(),
        count: attack.count(),
        attack_bonus: natural_attack_bonus(bab, target_size, str_mod, primary),
        damage_dice: scale_damage_for_size(&attack.damage, native_size, target_size),
        damage_bonus: natural_damage_bonus(str_mod, primary, sole_attack),
        primary,
        traits: attack.traits.clone(),
    }
}

/// Scale every natural attack of a form. No attacks means an empty list.
///
/// `abilities` must already carry the size adjustments.
pub fn compute_attacks(
    attacks: &[NaturalAttack],
    native_size: CreatureSize,
    target_size: CreatureSize,
    bab: i32,
    abilities: &AbilityScores,
) -> Vec<ComputedAttack> {
    let str_mod = abilities.modifier(Ability::Str);
    let sole_attack = attacks.len() == 1 && attacks[0].count() == 1;
    attacks
        .iter()
        .map(|attack| scale_attack(attack, native_size, target_size, bab, str_mod, sole_attack))
        .collect()
}
