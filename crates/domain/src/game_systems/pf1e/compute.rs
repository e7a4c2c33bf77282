//! The wild shape computation engine.
//!
//! `compute_pf1e` runs five stages in order, each consuming the previous:
//! resolve size modifiers, resolve grants, scale attacks, aggregate AC, and
//! assemble the playsheet. It is a total function: combinations the rules do
//! not model fall back to zero modifiers and empty grants instead of failing.
//! Legality checks belong to [`super::validate_compute_input`], run by the
//! caller beforehand.

use serde::{Deserialize, Serialize};

use super::armor_class::{aggregate_armor_class, ArmorClass};
use super::attacks::{compute_attacks, ComputedAttack};
use super::grants::{get_grants, is_gated_ability, is_trait_granted_by_tier, TierGrants};
use super::plant::{is_plant_trait_granted_by_tier, IMMOBILE_PLANT_SPEED};
use super::size_modifiers::{get_magical_beast_size_modifiers, get_size_modifiers, SizeModifiers};
use super::tier::{Tier, TierFamily};
use crate::entities::{BaseCharacter, ElementType, Form, FormKind, HitPoints, SavingThrows};
use crate::value_objects::{Ability, AbilityScores, CreatureSize, Movement, Senses};

/// A single computation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeInput {
    pub base: BaseCharacter,
    pub form: Form,
    pub tier: Tier,
    pub chosen_size: CreatureSize,
    /// Required for elemental forms; falls back to the form's own element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<ElementType>,
}

impl ComputeInput {
    pub fn new(base: BaseCharacter, form: Form, tier: Tier, chosen_size: CreatureSize) -> Self {
        Self {
            base,
            form,
            tier,
            chosen_size,
            element: None,
        }
    }

    pub fn with_element(mut self, element: ElementType) -> Self {
        self.element = Some(element);
        self
    }

    /// Element used for lookups: the explicit one, else the form's.
    pub fn resolved_element(&self) -> Option<ElementType> {
        self.element.or(self.form.element)
    }
}

/// The transformed character's combat statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedPlaysheet {
    pub form_id: String,
    pub form_name: String,
    pub tier: Tier,
    pub size: CreatureSize,
    pub ability: AbilityScores,
    /// Carried over from the base character unchanged
    pub hp: HitPoints,
    pub ac: ArmorClass,
    pub saves: SavingThrows,
    pub base_attack_bonus: i32,
    pub cmb: i32,
    pub cmd: i32,
    pub movement: Movement,
    pub senses: Senses,
    pub attacks: Vec<ComputedAttack>,
    /// Native form traits plus everything the tier grants outright
    pub traits: Vec<String>,
    /// Native abilities, on the form or its attacks, the tier does not confer
    pub inactive_traits: Vec<String>,
}

/// Stage 1: ability and natural-armor deltas for the chosen size.
fn resolve_size_modifiers(input: &ComputeInput) -> SizeModifiers {
    match input.form.kind {
        FormKind::MagicalBeast => get_magical_beast_size_modifiers(input.tier, input.chosen_size),
        _ => get_size_modifiers(input.tier, input.chosen_size, input.resolved_element()),
    }
}

/// Stage 2a: movement under the tier's grant.
fn resolve_movement(input: &ComputeInput, grants: &TierGrants) -> Movement {
    let movement = match &grants.movement {
        Some(grant) => grant.apply(&input.form.movement),
        None => input.form.movement,
    };
    if input.tier.family() == TierFamily::PlantShape && movement.is_immobile() {
        return Movement::land(IMMOBILE_PLANT_SPEED);
    }
    movement
}

/// Stage 2b: the character keeps its own senses and gains the tier's.
fn resolve_senses(input: &ComputeInput, grants: &TierGrants) -> Senses {
    let from_form = grants
        .senses
        .map(|grant| grant.apply(&input.form.senses))
        .unwrap_or_default();
    input.base.senses.union(&from_form)
}

fn tier_grants_trait(input: &ComputeInput, name: &str) -> bool {
    match input.tier.family() {
        TierFamily::PlantShape => is_plant_trait_granted_by_tier(input.tier, name),
        _ => is_trait_granted_by_tier(input.tier, name, input.resolved_element()),
    }
}

/// Descriptive tags always pass; gated abilities need the tier to confer them.
fn is_trait_active(input: &ComputeInput, name: &str) -> bool {
    !is_gated_ability(name) || tier_grants_trait(input, name)
}

fn push_unique(list: &mut Vec<String>, name: &str) {
    let name = name.trim();
    if name.is_empty() {
        return;
    }
    if !list.iter().any(|existing| existing.eq_ignore_ascii_case(name)) {
        list.push(name.to_string());
    }
}

/// Stage 3 trait pass: note attack riders the tier does not confer.
///
/// The attacks keep every rider; this only annotates.
fn note_inactive_attack_traits(
    input: &ComputeInput,
    attacks: &[ComputedAttack],
    inactive: &mut Vec<String>,
) {
    for name in attacks.iter().flat_map(|attack| &attack.traits) {
        if !is_trait_active(input, name) {
            push_unique(inactive, name);
        }
    }
}

/// Stage 5 trait pass: native traits then the tier's own, without duplicates.
///
/// Native traits the tier does not confer stay in the list and are also
/// noted in `inactive`.
fn merge_traits(
    input: &ComputeInput,
    grants: &TierGrants,
    inactive: &mut Vec<String>,
) -> Vec<String> {
    let mut traits = Vec::new();
    for name in &input.form.traits {
        push_unique(&mut traits, name);
        if !is_trait_active(input, name) {
            push_unique(inactive, name);
        }
    }
    for name in grants.traits {
        push_unique(&mut traits, name);
    }
    traits
}

/// Fortitude follows the CON modifier, Reflex the DEX modifier.
fn adjust_saves(base: &BaseCharacter, ability: &AbilityScores) -> SavingThrows {
    let con_delta = ability.modifier(Ability::Con) - base.modifier(Ability::Con);
    let dex_delta = ability.modifier(Ability::Dex) - base.modifier(Ability::Dex);
    SavingThrows {
        fortitude: base.saves.fortitude + con_delta,
        reflex: base.saves.reflex + dex_delta,
        will: base.saves.will,
    }
}

/// Compute the transformed playsheet for one request.
pub fn compute_pf1e(input: &ComputeInput) -> ComputedPlaysheet {
    let base = &input.base;
    let size = input.chosen_size;

    // 1. Size modifiers
    let size_mods = resolve_size_modifiers(input);
    let ability = base
        .abilities
        .with_physical_deltas(size_mods.str, size_mods.dex, size_mods.con);

    // 2. Grants
    let grants = get_grants(input.tier, input.resolved_element());
    let movement = resolve_movement(input, &grants);
    let senses = resolve_senses(input, &grants);

    // 3. Attacks
    let mut inactive_traits = Vec::new();
    let attacks = compute_attacks(
        &input.form.attacks,
        input.form.size,
        size,
        base.base_attack_bonus,
        &ability,
    );
    note_inactive_attack_traits(input, &attacks, &mut inactive_traits);

    // 4. Armor Class
    let dex_mod = ability.modifier(Ability::Dex);
    let ac = aggregate_armor_class(&base.ac, dex_mod, size, size_mods.natural_armor);

    // 5. Assemble
    let str_mod = ability.modifier(Ability::Str);
    let cmb = base.base_attack_bonus + str_mod + size.special_size_modifier();
    let cmd = 10
        + base.base_attack_bonus
        + str_mod
        + dex_mod
        + size.special_size_modifier()
        + base.ac.deflection
        + base.ac.dodge;
    let traits = merge_traits(input, &grants, &mut inactive_traits);

    ComputedPlaysheet {
        form_id: input.form.id.clone(),
        form_name: input.form.name.clone(),
        tier: input.tier,
        size,
        ability,
        hp: base.hp,
        ac,
        saves: adjust_saves(base, &ability),
        base_attack_bonus: base.base_attack_bonus,
        cmb,
        cmd,
        movement,
        senses,
        attacks,
        traits,
        inactive_traits,
    }
}
