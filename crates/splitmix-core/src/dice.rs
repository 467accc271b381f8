//! Tabletop dice.
//!
//! Two die types keep the quirks of the original game binding, since saved games replay against
//! them: a d10 rolls `0..=9`, and a d100 rolls a tens digit only (`0, 10, ..., 90`).

use std::fmt;

use crate::error::{Result, RngError};
use crate::rng::DeterministicRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiceType {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl DiceType {
    pub const ALL: [DiceType; 7] = [
        DiceType::D4,
        DiceType::D6,
        DiceType::D8,
        DiceType::D10,
        DiceType::D12,
        DiceType::D20,
        DiceType::D100,
    ];

    pub const fn sides(self) -> i64 {
        match self {
            DiceType::D4 => 4,
            DiceType::D6 => 6,
            DiceType::D8 => 8,
            DiceType::D10 => 10,
            DiceType::D12 => 12,
            DiceType::D20 => 20,
            DiceType::D100 => 100,
        }
    }

    /// Constant name used by script bindings (`"D6"`).
    pub const fn name(self) -> &'static str {
        match self {
            DiceType::D4 => "D4",
            DiceType::D6 => "D6",
            DiceType::D8 => "D8",
            DiceType::D10 => "D10",
            DiceType::D12 => "D12",
            DiceType::D20 => "D20",
            DiceType::D100 => "D100",
        }
    }

    /// One roll; always a single raw draw.
    pub fn roll<R: DeterministicRng + ?Sized>(self, rng: &mut R) -> i64 {
        let raw = rng.next_u64();
        match self {
            DiceType::D100 => (raw % 10) as i64 * 10,
            DiceType::D10 => (raw % 10) as i64,
            other => (raw % other.sides() as u64) as i64 + 1,
        }
    }
}

impl TryFrom<i64> for DiceType {
    type Error = RngError;

    fn try_from(sides: i64) -> Result<Self> {
        DiceType::ALL
            .into_iter()
            .find(|d| d.sides() == sides)
            .ok_or_else(|| {
                RngError::invalid(
                    "sides",
                    format!("invalid dice type: {sides} (use D4, D6, D8, D10, D12, D20, D100)"),
                )
            })
    }
}

impl fmt::Display for DiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Individual rolls in order, plus their sum.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceRoll {
    pub rolls: Vec<i64>,
    pub total: i64,
}

/// Rolls `count` dice with `sides` faces. Both arguments are validated before any draw.
pub fn roll<R: DeterministicRng + ?Sized>(rng: &mut R, count: i64, sides: i64) -> Result<DiceRoll> {
    if count <= 0 {
        return Err(RngError::invalid("count", "roll must be bigger than 0"));
    }
    let die = DiceType::try_from(sides)?;

    let mut rolls = Vec::with_capacity(count.min(1024) as usize);
    let mut total = 0_i64;
    for _ in 0..count {
        let value = die.roll(rng);
        total += value;
        rolls.push(value);
    }
    Ok(DiceRoll { rolls, total })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(u64);

    impl DeterministicRng for Counter {
        fn next_u64(&mut self) -> u64 {
            let v = self.0;
            self.0 += 1;
            v
        }
    }

    #[test]
    fn quirky_dice_map_raw_values() {
        let mut rng = Counter(7);
        assert_eq!(DiceType::D10.roll(&mut rng), 7);
        assert_eq!(DiceType::D100.roll(&mut rng), 80);
        assert_eq!(DiceType::D6.roll(&mut rng), 4);
        assert_eq!(rng.0, 10);
    }

    #[test]
    fn parses_supported_sides_only() {
        for die in DiceType::ALL {
            assert_eq!(DiceType::try_from(die.sides()), Ok(die));
        }
        let err = DiceType::try_from(7_i64).unwrap_err();
        assert_eq!(err.argument(), "sides");
        assert_eq!(
            err.reason(),
            "invalid dice type: 7 (use D4, D6, D8, D10, D12, D20, D100)"
        );
    }

    #[test]
    fn display_is_d_notation() {
        assert_eq!(DiceType::D20.to_string(), "D20");
        assert_eq!(DiceType::D100.to_string(), "D100");
    }

    #[test]
    fn invalid_roll_consumes_nothing() {
        let mut rng = Counter(0);
        assert_eq!(roll(&mut rng, 0, 6).unwrap_err().argument(), "count");
        assert_eq!(roll(&mut rng, 3, 3).unwrap_err().argument(), "sides");
        assert_eq!(rng.0, 0);
    }

    #[test]
    fn total_is_sum_of_rolls() {
        let mut rng = Counter(0);
        let result = roll(&mut rng, 4, 4).unwrap();
        assert_eq!(result.rolls, vec![1, 2, 3, 4]);
        assert_eq!(result.total, 10);
    }
}
