//! Value objects - Immutable objects defined by their attributes

mod ability;
mod dice;
mod movement;
mod senses;
mod size;

pub use ability::{ability_modifier, Ability, AbilityScores};

// Damage expressions and the size progression
pub use dice::{scale_damage_for_size, DamageDice, DiceParseError};

pub use movement::{Maneuverability, Movement};
pub use senses::Senses;
pub use size::{CreatureSize, SIZE_TO_HIT_AC};
