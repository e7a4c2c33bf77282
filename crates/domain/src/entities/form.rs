//! Form entity - an immutable creature shape a druid can assume
//!
//! Forms come from the template library or from user-authored custom forms.
//! Every stat on a form is expressed at the form's native size.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::{CreatureSize, Movement, Senses};

/// Creature type of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormKind {
    Animal,
    Elemental,
    Plant,
    #[serde(rename = "Magical Beast")]
    MagicalBeast,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Animal => "Animal",
            Self::Elemental => "Elemental",
            Self::Plant => "Plant",
            Self::MagicalBeast => "Magical Beast",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "animal" => Ok(Self::Animal),
            "elemental" => Ok(Self::Elemental),
            "plant" => Ok(Self::Plant),
            "magical beast" | "magicalbeast" => Ok(Self::MagicalBeast),
            _ => Err(DomainError::parse(format!("Unknown form kind: {}", s))),
        }
    }
}

/// Element of an elemental form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Air,
    Earth,
    Fire,
    Water,
}

impl ElementType {
    pub const ALL: [ElementType; 4] = [Self::Air, Self::Earth, Self::Fire, Self::Water];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Air => "Air",
            Self::Earth => "Earth",
            Self::Fire => "Fire",
            Self::Water => "Water",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|element| element.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::parse(format!("Unknown element: {}", s)))
    }
}

/// Kind of natural attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NaturalAttackType {
    Bite,
    Claw,
    Gore,
    Hoof,
    Pincer,
    Slam,
    Sting,
    Talon,
    TailSlap,
    Tentacle,
    Wing,
    /// Anything else a custom form defines
    #[serde(other)]
    Other,
}

impl NaturalAttackType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bite => "Bite",
            Self::Claw => "Claw",
            Self::Gore => "Gore",
            Self::Hoof => "Hoof",
            Self::Pincer => "Pincer",
            Self::Slam => "Slam",
            Self::Sting => "Sting",
            Self::Talon => "Talon",
            Self::TailSlap => "Tail Slap",
            Self::Tentacle => "Tentacle",
            Self::Wing => "Wing",
            Self::Other => "Natural Attack",
        }
    }

    /// Whether this attack type is primary unless the form says otherwise.
    pub fn is_primary_by_default(&self) -> bool {
        !matches!(
            self,
            Self::Hoof | Self::TailSlap | Self::Tentacle | Self::Wing
        )
    }
}

/// One natural attack entry, stated at the form's native size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NaturalAttack {
    #[serde(rename = "type")]
    pub attack_type: NaturalAttackType,
    /// Display name override (e.g. "Vine" for a custom attack)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Damage dice at native size (e.g. "1d6")
    pub damage: String,
    /// Number of identical attacks (2 claws); absent means one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u8>,
    /// Primary/secondary override; absent means the attack type's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    /// Attack riders such as grab, trip, or poison
    #[serde(default)]
    pub traits: Vec<String>,
}

impl NaturalAttack {
    pub fn new(attack_type: NaturalAttackType, damage: impl Into<String>) -> Self {
        Self {
            attack_type,
            name: None,
            damage: damage.into(),
            count: None,
            primary: None,
            traits: Vec::new(),
        }
    }

    pub fn with_count(mut self, count: u8) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_trait(mut self, name: impl Into<String>) -> Self {
        self.traits.push(name.into());
        self
    }

    pub fn secondary(mut self) -> Self {
        self.primary = Some(false);
        self
    }

    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.attack_type.display_name().to_string())
    }

    pub fn count(&self) -> u8 {
        self.count.unwrap_or(1).max(1)
    }

    pub fn is_primary(&self) -> bool {
        self.primary
            .unwrap_or_else(|| self.attack_type.is_primary_by_default())
    }
}

/// A creature shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: String,
    pub name: String,
    pub kind: FormKind,
    /// Native size category
    pub size: CreatureSize,
    #[serde(default)]
    pub attacks: Vec<NaturalAttack>,
    #[serde(default)]
    pub movement: Movement,
    #[serde(default)]
    pub senses: Senses,
    /// Descriptive tags and special abilities
    #[serde(default)]
    pub traits: Vec<String>,
    /// Only meaningful for elemental forms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<ElementType>,
}

impl Form {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: FormKind,
        size: CreatureSize,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            size,
            attacks: Vec::new(),
            movement: Movement::default(),
            senses: Senses::default(),
            traits: Vec::new(),
            element: None,
        }
    }

    pub fn with_attack(mut self, attack: NaturalAttack) -> Self {
        self.attacks.push(attack);
        self
    }

    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    pub fn with_senses(mut self, senses: Senses) -> Self {
        self.senses = senses;
        self
    }

    pub fn with_trait(mut self, name: impl Into<String>) -> Self {
        self.traits.push(name.into());
        self
    }

    pub fn with_element(mut self, element: ElementType) -> Self {
        self.element = Some(element);
        self
    }
}
