//! Wild shape domain: character and form records, value objects, and the
//! Pathfinder 1st Edition transformation rules.
//!
//! Everything here is pure. Loading forms, reading characters, and printing
//! playsheets live in the engine crate.

pub mod entities;
pub mod error;
pub mod game_systems;
pub mod value_objects;

pub use entities::{
    ArmorClassComponents, BaseCharacter, ElementType, Form, FormKind, HitPoints, NaturalAttack,
    NaturalAttackType, SavingThrows,
};

pub use error::DomainError;

pub use game_systems::pf1e::{
    compute_pf1e, get_tier_for_edl, is_size_allowed_for_form, is_size_allowed_for_tier,
    validate_compute_input, ArmorClass, ComputeInput, ComputedAttack, ComputedPlaysheet, Tier,
    TierFamily,
};
pub use game_systems::FormProvider;

pub use value_objects::{
    ability_modifier, scale_damage_for_size, Ability, AbilityScores, CreatureSize, DamageDice,
    DiceParseError, Maneuverability, Movement, Senses, SIZE_TO_HIT_AC,
};
