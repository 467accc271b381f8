//! Text form of the state word, for human-readable save files.
//!
//! The encoding is the plain base-10 digits of the unsigned value.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RngError};
use crate::rng::SplitMix64;

const INVALID_SEED: &str = "invalid seed string: expected decimal number";

/// Parses a decimal state word. Only ASCII digits are accepted: no sign, whitespace or radix
/// prefix, and values past `u64::MAX` are rejected rather than clamped.
pub fn parse_state(text: &str) -> Result<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RngError::invalid("seed", INVALID_SEED));
    }
    text.parse::<u64>()
        .map_err(|_| RngError::invalid("seed", "seed does not fit in 64 bits"))
}

impl FromStr for SplitMix64 {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self> {
        parse_state(s).map(SplitMix64::new)
    }
}

impl fmt::Display for SplitMix64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeterministicRng;

    #[test]
    fn parses_plain_digits() {
        assert_eq!(parse_state("0"), Ok(0));
        assert_eq!(parse_state("007"), Ok(7));
        assert_eq!(parse_state("18446744073709551615"), Ok(u64::MAX));
    }

    #[test]
    fn rejects_non_numeric_input() {
        for bad in ["", "abc", "12a", " 12", "+1", "-1", "0x10", "1.5"] {
            let err = parse_state(bad).unwrap_err();
            assert_eq!(err.reason(), INVALID_SEED, "input {bad:?}");
        }
    }

    #[test]
    fn rejects_overflow() {
        let err = parse_state("18446744073709551616").unwrap_err();
        assert_eq!(err.reason(), "seed does not fit in 64 bits");
    }

    #[test]
    fn text_round_trip_resumes_stream() {
        let mut rng = SplitMix64::new(2024);
        rng.next_u64();
        let saved = rng.to_string();

        let mut restored: SplitMix64 = saved.parse().unwrap();
        assert_eq!(restored, rng);
        assert_eq!(restored.next_u64(), rng.next_u64());
    }
}
