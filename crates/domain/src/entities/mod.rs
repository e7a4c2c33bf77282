//! Domain entities - Character and creature-form records supplied by the storage layer

mod character;
mod form;

pub use character::{ArmorClassComponents, BaseCharacter, HitPoints, SavingThrows};
pub use form::{ElementType, Form, FormKind, NaturalAttack, NaturalAttackType};
