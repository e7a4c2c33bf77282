//! Pathfinder 1st Edition wild shape.
//!
//! Rule tables (size modifiers, tier grants, size gates) are frozen data in
//! their own modules. `compute_pf1e` orchestrates them; `validate_compute_input`
//! is the optional rules gate in front of it.

mod armor_class;
mod attacks;
mod beast;
mod compute;
mod elemental;
mod grants;
mod plant;
mod size_modifiers;
mod tier;
mod validation;

pub use armor_class::{
    aggregate_armor_class, resolve_natural_armor, AcBreakdown, ArmorClass, BASE_ARMOR_CLASS,
};
pub use attacks::{
    compute_attacks, natural_attack_bonus, natural_damage_bonus, scale_attack, ComputedAttack,
    SECONDARY_ATTACK_PENALTY,
};
pub use beast::get_beast_grants;
pub use compute::{compute_pf1e, ComputeInput, ComputedPlaysheet};
pub use elemental::{get_elemental_grants, get_elemental_movement_for_tier};
pub use grants::{
    get_grants, is_gated_ability, is_trait_granted_by_tier, trait_matches, MovementGrant,
    SensesGrant, TierGrants,
};
pub use plant::{get_plant_grants, is_plant_trait_granted_by_tier, IMMOBILE_PLANT_SPEED};
pub use size_modifiers::{get_magical_beast_size_modifiers, get_size_modifiers, SizeModifiers};
pub use tier::{
    get_tier_for_edl, is_size_allowed_for_form, is_size_allowed_for_tier, is_tier_available, Tier,
    TierFamily,
};
pub use validation::validate_compute_input;
