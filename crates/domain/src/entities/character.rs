//! Base character entity - the druid's own, untransformed statistics
//!
//! The character is owned by the storage layer; the engine only reads it.

use crate::value_objects::{Ability, AbilityScores, Movement, Senses};
use serde::{Deserialize, Serialize};

/// Current and maximum hit points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitPoints {
    pub current: i32,
    pub max: i32,
}

impl HitPoints {
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }
}

/// Armor Class components other than the base 10, Dexterity, and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorClassComponents {
    #[serde(default)]
    pub armor: i32,
    #[serde(default)]
    pub shield: i32,
    #[serde(default)]
    pub natural: i32,
    #[serde(default)]
    pub deflection: i32,
    #[serde(default)]
    pub dodge: i32,
    #[serde(default)]
    pub misc: i32,
}

/// Saving throw totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingThrows {
    pub fortitude: i32,
    pub reflex: i32,
    pub will: i32,
}

/// The druid before any transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseCharacter {
    #[serde(default)]
    pub name: String,
    /// Total character level
    pub level: u8,
    /// Druid level for wild shape purposes; drives which tiers are unlocked
    pub effective_druid_level: u8,
    pub abilities: AbilityScores,
    pub hp: HitPoints,
    pub base_attack_bonus: i32,
    #[serde(default)]
    pub ac: ArmorClassComponents,
    #[serde(default)]
    pub saves: SavingThrows,
    #[serde(default)]
    pub movement: Movement,
    #[serde(default)]
    pub senses: Senses,
}

impl BaseCharacter {
    /// A druid of the given level with average scores and a 30 ft. land speed.
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level,
            effective_druid_level: level,
            abilities: AbilityScores::default(),
            hp: HitPoints::full(level as i32 * 8),
            base_attack_bonus: (level as i32 * 3) / 4,
            ac: ArmorClassComponents::default(),
            saves: SavingThrows::default(),
            movement: Movement::land(30),
            senses: Senses::default(),
        }
    }

    pub fn with_abilities(mut self, abilities: AbilityScores) -> Self {
        self.abilities = abilities;
        self
    }

    pub fn with_effective_druid_level(mut self, edl: u8) -> Self {
        self.effective_druid_level = edl;
        self
    }

    pub fn with_base_attack_bonus(mut self, bab: i32) -> Self {
        self.base_attack_bonus = bab;
        self
    }

    pub fn with_hp(mut self, current: i32, max: i32) -> Self {
        self.hp = HitPoints { current, max };
        self
    }

    pub fn with_ac(mut self, ac: ArmorClassComponents) -> Self {
        self.ac = ac;
        self
    }

    pub fn with_saves(mut self, saves: SavingThrows) -> Self {
        self.saves = saves;
        self
    }

    pub fn with_senses(mut self, senses: Senses) -> Self {
        self.senses = senses;
        self
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        self.abilities.modifier(ability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_optional_blocks_missing() {
        let json = r#"{
            "level": 6,
            "effectiveDruidLevel": 6,
            "abilities": {"str": 10, "dex": 14, "con": 12, "int": 10, "wis": 16, "cha": 8},
            "hp": {"current": 30, "max": 38},
            "baseAttackBonus": 4
        }"#;
        let character: BaseCharacter = serde_json::from_str(json).expect("valid character");
        assert_eq!(character.effective_druid_level, 6);
        assert_eq!(character.hp.current, 30);
        assert_eq!(character.ac, ArmorClassComponents::default());
        assert_eq!(character.movement.land, 0);
        assert!(character.name.is_empty());
    }

    #[test]
    fn builder_sets_fields() {
        let character = BaseCharacter::new("Ysolde", 8)
            .with_base_attack_bonus(6)
            .with_effective_druid_level(7);
        assert_eq!(character.base_attack_bonus, 6);
        assert_eq!(character.effective_druid_level, 7);
        assert_eq!(character.level, 8);
        assert_eq!(character.hp, HitPoints::full(64));
    }
}
