//! Damage dice value objects, parsing, and size scaling
//!
//! Supports damage expressions like "1d6", "2d8+1", "d4".
//! Scaling walks the PF1e damage progression one step per size category.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::CreatureSize;

/// Error when parsing a damage expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    /// The formula string is empty
    #[error("Empty dice formula")]
    Empty,
    /// Invalid format - expected XdY or XdY+Z
    #[error("Invalid dice format: {0}")]
    InvalidFormat(String),
    /// Dice count must be at least 1
    #[error("Dice count must be at least 1")]
    InvalidDiceCount,
    /// Die size must be at least 2
    #[error("Die size must be at least 2")]
    InvalidDieSize,
}

/// A parsed damage expression like "2d6+3"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageDice {
    /// Number of dice to roll (X in XdY)
    pub dice_count: u8,
    /// Size of each die (Y in XdY)
    pub die_size: u8,
    /// Flat modifier carried through scaling (+Z or -Z)
    pub modifier: i32,
}

/// Standard progression: each entry is one size category above the previous.
const D6_LADDER: [(u8, u8); 13] = [
    (1, 2),
    (1, 3),
    (1, 4),
    (1, 6),
    (1, 8),
    (2, 6),
    (3, 6),
    (4, 6),
    (6, 6),
    (8, 6),
    (12, 6),
    (16, 6),
    (24, 6),
];

/// Progression for d10-based and d8-pool damage. Below 1d10 it rejoins the
/// standard progression, so shrinking 1d10 gives 1d8.
const D8_LADDER: [(u8, u8); 13] = [
    (1, 2),
    (1, 3),
    (1, 4),
    (1, 6),
    (1, 8),
    (1, 10),
    (2, 8),
    (3, 8),
    (4, 8),
    (6, 8),
    (8, 8),
    (12, 8),
    (16, 8),
];

const LADDERS: [&[(u8, u8)]; 2] = [&D6_LADDER, &D8_LADDER];

impl DamageDice {
    /// Create a new damage expression
    pub fn new(dice_count: u8, die_size: u8, modifier: i32) -> Result<Self, DiceParseError> {
        if dice_count == 0 {
            return Err(DiceParseError::InvalidDiceCount);
        }
        if die_size < 2 {
            return Err(DiceParseError::InvalidDieSize);
        }
        Ok(Self {
            dice_count,
            die_size,
            modifier,
        })
    }

    /// Parse a damage expression like "1d6", "2d8+1", "1d4-1", "d3"
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Err(DiceParseError::Empty);
        }

        let d_pos = input.find('d').ok_or_else(|| {
            DiceParseError::InvalidFormat(format!("Missing 'd' separator in '{}'", input))
        })?;

        let dice_count_str = &input[..d_pos];
        let dice_count: u8 = if dice_count_str.is_empty() {
            1 // "d6" means "1d6"
        } else {
            dice_count_str.parse().map_err(|_| {
                DiceParseError::InvalidFormat(format!("Invalid dice count: '{}'", dice_count_str))
            })?
        };

        let after_d = &input[d_pos + 1..];

        let (die_size_str, modifier) = if let Some(plus_pos) = after_d.find('+') {
            let mod_str = &after_d[plus_pos + 1..];
            let modifier: i32 = mod_str.parse().map_err(|_| {
                DiceParseError::InvalidFormat(format!("Invalid modifier: '+{}'", mod_str))
            })?;
            (&after_d[..plus_pos], modifier)
        } else if let Some(minus_pos) = after_d.rfind('-') {
            if minus_pos == 0 {
                return Err(DiceParseError::InvalidFormat(format!(
                    "Invalid die size: '{}'",
                    after_d
                )));
            }
            let mod_str = &after_d[minus_pos + 1..];
            let modifier: i32 = mod_str.parse().map_err(|_| {
                DiceParseError::InvalidFormat(format!("Invalid modifier: '-{}'", mod_str))
            })?;
            (&after_d[..minus_pos], -modifier)
        } else {
            (after_d, 0)
        };

        let die_size: u8 = die_size_str.trim().parse().map_err(|_| {
            DiceParseError::InvalidFormat(format!("Invalid die size: '{}'", die_size_str))
        })?;

        Self::new(dice_count, die_size, modifier)
    }

    /// Average roll, doubled to stay in integers.
    fn doubled_average(dice_count: u8, die_size: u8) -> u32 {
        dice_count as u32 * (die_size as u32 + 1)
    }

    /// Locate this expression on a progression ladder as (ladder, position).
    ///
    /// Expressions that sit on no ladder (2d4, 1d12) are placed at the entry
    /// with the nearest average; ties go to the standard progression.
    fn ladder_position(&self) -> (&'static [(u8, u8)], usize) {
        let key = (self.dice_count, self.die_size);
        for ladder in LADDERS {
            if let Some(pos) = ladder.iter().position(|entry| *entry == key) {
                return (ladder, pos);
            }
        }

        let target = Self::doubled_average(self.dice_count, self.die_size);
        let mut best: (&'static [(u8, u8)], usize, u32) = (&D6_LADDER[..], 0, u32::MAX);
        for ladder in LADDERS {
            for (pos, (count, size)) in ladder.iter().enumerate() {
                let distance = Self::doubled_average(*count, *size).abs_diff(target);
                if distance < best.2 {
                    best = (ladder, pos, distance);
                }
            }
        }
        tracing::debug!(
            dice = %self,
            "Damage expression is off the progression; scaling from nearest average"
        );
        (best.0, best.1)
    }

    /// Move this expression `steps` size categories along its progression.
    ///
    /// Steps beyond either end of the progression clamp to that end.
    pub fn step(&self, steps: i32) -> Self {
        if steps == 0 {
            return *self;
        }
        let (ladder, pos) = self.ladder_position();
        let last = ladder.len() as i32 - 1;
        let target = pos as i32 + steps;
        if target < 0 || target > last {
            tracing::debug!(dice = %self, steps, "Damage progression clamped at ladder end");
        }
        let (dice_count, die_size) = ladder[target.clamp(0, last) as usize];
        Self {
            dice_count,
            die_size,
            modifier: self.modifier,
        }
    }

    /// Rescale from a creature's native size to a new size.
    pub fn scale(&self, from: CreatureSize, to: CreatureSize) -> Self {
        self.step(from.steps_to(to))
    }
}

impl fmt::Display for DamageDice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.dice_count, self.die_size)?;
        if self.modifier > 0 {
            write!(f, "+{}", self.modifier)?;
        } else if self.modifier < 0 {
            write!(f, "{}", self.modifier)?;
        }
        Ok(())
    }
}

/// Rescale a damage expression from one size category to another.
///
/// Unparseable expressions are returned unchanged, as are same-size requests.
pub fn scale_damage_for_size(dice: &str, from: CreatureSize, to: CreatureSize) -> String {
    if from == to {
        return dice.to_string();
    }
    match DamageDice::parse(dice) {
        Ok(parsed) => parsed.scale(from, to).to_string(),
        Err(e) => {
            tracing::debug!(dice, error = %e, "Leaving unparseable damage expression unscaled");
            dice.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let dice = DamageDice::parse("1d6").expect("valid");
        assert_eq!(dice.dice_count, 1);
        assert_eq!(dice.die_size, 6);
        assert_eq!(dice.modifier, 0);
    }

    #[test]
    fn test_parse_with_modifiers() {
        assert_eq!(DamageDice::parse("2d8+1").expect("valid").modifier, 1);
        assert_eq!(DamageDice::parse("1d4-1").expect("valid").modifier, -1);
        assert_eq!(DamageDice::parse("D3").expect("valid").die_size, 3);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(DamageDice::parse(""), Err(DiceParseError::Empty));
        assert_eq!(DamageDice::parse("0d6"), Err(DiceParseError::InvalidDiceCount));
        assert_eq!(DamageDice::parse("1d1"), Err(DiceParseError::InvalidDieSize));
        assert!(matches!(
            DamageDice::parse("bite"),
            Err(DiceParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(DamageDice::new(2, 6, 0).expect("valid").to_string(), "2d6");
        assert_eq!(DamageDice::new(1, 8, 2).expect("valid").to_string(), "1d8+2");
        assert_eq!(DamageDice::new(1, 4, -1).expect("valid").to_string(), "1d4-1");
    }

    #[test]
    fn medium_to_large_to_huge() {
        use CreatureSize::*;
        assert_eq!(scale_damage_for_size("1d6", Medium, Large), "1d8");
        assert_eq!(scale_damage_for_size("1d6", Medium, Huge), "2d6");
        assert_eq!(scale_damage_for_size("1d3", Medium, Huge), "1d6");
        assert_eq!(scale_damage_for_size("1d8", Large, Medium), "1d6");
    }

    #[test]
    fn d10_uses_d8_progression() {
        use CreatureSize::*;
        assert_eq!(scale_damage_for_size("1d10", Medium, Large), "2d8");
        assert_eq!(scale_damage_for_size("2d8", Large, Huge), "3d8");
    }

    #[test]
    fn d8_progression_shrinks_below_d10() {
        use CreatureSize::*;
        assert_eq!(scale_damage_for_size("1d10", Large, Medium), "1d8");
        assert_eq!(scale_damage_for_size("2d8", Large, Medium), "1d10");
        assert_eq!(scale_damage_for_size("2d8", Huge, Medium), "1d8");
        assert_eq!(scale_damage_for_size("1d10", Medium, Tiny), "1d6");
    }

    #[test]
    fn d8_shrinking_keeps_d6_growth() {
        use CreatureSize::*;
        assert_eq!(scale_damage_for_size("1d8", Medium, Large), "2d6");
        assert_eq!(scale_damage_for_size("1d8", Medium, Small), "1d6");
    }

    #[test]
    fn modifier_survives_scaling() {
        assert_eq!(
            scale_damage_for_size("1d6+1", CreatureSize::Medium, CreatureSize::Small),
            "1d4+1"
        );
    }

    #[test]
    fn off_ladder_expression_snaps_to_nearest_average() {
        // 2d4 averages 5, closest to 1d8 (4.5), one step up is 2d6
        assert_eq!(
            scale_damage_for_size("2d4", CreatureSize::Medium, CreatureSize::Large),
            "2d6"
        );
    }

    #[test]
    fn clamps_at_ladder_ends() {
        use CreatureSize::*;
        assert_eq!(scale_damage_for_size("1d2", Small, Fine), "1d2");
        assert_eq!(scale_damage_for_size("24d6", Large, Colossal), "24d6");
    }

    #[test]
    fn unparseable_passes_through() {
        assert_eq!(
            scale_damage_for_size("special", CreatureSize::Medium, CreatureSize::Huge),
            "special"
        );
    }
}
