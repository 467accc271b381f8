//! Subcommands and their results.

use anyhow::{Context, Result};
use clap::Subcommand;
use serde_json::{json, Value as Json};
use splitmix_core::{DeterministicRng, DiceRoll, SplitMix64};

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Raw 64-bit outputs
    Next {
        /// Number of outputs
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Doubles in [0, 1)
    Double {
        /// Number of outputs
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Value in [0, N) (modulo reduction)
    Range {
        n: u64,

        /// Use rejection sampling instead of the modulo reduction
        #[arg(long)]
        unbiased: bool,
    },

    /// Integer in [LOW, HIGH]
    Int {
        #[arg(allow_negative_numbers = true)]
        low: i64,
        #[arg(allow_negative_numbers = true)]
        high: i64,
    },

    /// Coin toss (0 or 1)
    Toss,

    /// Roll COUNT dice with SIDES faces (4, 6, 8, 10, 12, 20 or 100)
    Dice {
        #[arg(allow_negative_numbers = true)]
        count: i64,
        sides: i64,
    },

    /// Pick one of ITEMS
    Choice {
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Pick one of ITEM=WEIGHT pairs
    Weighted {
        #[arg(required = true, value_parser = parse_weighted)]
        items: Vec<(String, f64)>,
    },

    /// Print the state word without drawing
    State,
}

fn parse_weighted(s: &str) -> std::result::Result<(String, f64), String> {
    let (item, weight) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected ITEM=WEIGHT, got '{s}'"))?;
    let weight = weight
        .parse::<f64>()
        .map_err(|err| format!("invalid weight '{weight}': {err}"))?;
    Ok((item.to_owned(), weight))
}

#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Raw(Vec<u64>),
    Doubles(Vec<f64>),
    Unsigned(u64),
    Signed(i64),
    Dice(DiceRoll),
    Item(String),
    State(u64),
}

pub fn execute(command: &Commands, rng: &mut SplitMix64) -> Result<Output> {
    let output = match command {
        Commands::Next { count } => Output::Raw((0..*count).map(|_| rng.next_u64()).collect()),
        Commands::Double { count } => {
            Output::Doubles((0..*count).map(|_| rng.next_double()).collect())
        }
        Commands::Range { n, unbiased } => {
            let value = if *unbiased {
                rng.random_range_unbiased(*n)
            } else {
                rng.random_range(*n)
            };
            Output::Unsigned(value.context("range")?)
        }
        Commands::Int { low, high } => Output::Signed(rng.random_int(*low, *high).context("int")?),
        Commands::Toss => Output::Unsigned(u64::from(rng.toss())),
        Commands::Dice { count, sides } => Output::Dice(rng.dice(*count, *sides).context("dice")?),
        Commands::Choice { items } => {
            Output::Item(rng.random_choice(items).context("choice")?.clone())
        }
        Commands::Weighted { items } => {
            Output::Item(rng.weighted_choice(items).context("weighted")?.clone())
        }
        Commands::State => Output::State(rng.get_state()),
    };
    Ok(output)
}

impl Output {
    pub fn to_text(&self) -> String {
        match self {
            Output::Raw(values) => join_lines(values),
            Output::Doubles(values) => join_lines(values),
            Output::Unsigned(v) | Output::State(v) => v.to_string(),
            Output::Signed(v) => v.to_string(),
            Output::Dice(roll) => {
                let rolls: Vec<String> = roll.rolls.iter().map(i64::to_string).collect();
                format!("rolls: {}\ntotal: {}", rolls.join(" "), roll.total)
            }
            Output::Item(item) => item.clone(),
        }
    }

    /// JSON document with the result and the state after the command. The state is a string
    /// because JSON numbers past 2^53 are not portable.
    pub fn to_json(&self, rng: &SplitMix64) -> Json {
        let result = match self {
            Output::Raw(values) => json!(values),
            Output::Doubles(values) => json!(values),
            Output::Unsigned(v) => json!(v),
            Output::Signed(v) => json!(v),
            Output::Dice(roll) => json!(roll),
            Output::Item(item) => json!(item),
            Output::State(v) => json!(v.to_string()),
        };
        json!({ "result": result, "state": rng.to_string() })
    }
}

fn join_lines<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_prints_known_answers() {
        let mut rng = SplitMix64::new(0);
        let out = execute(&Commands::Next { count: 2 }, &mut rng).unwrap();
        assert_eq!(out.to_text(), "16294208416658607535\n7960286522194355700");
    }

    #[test]
    fn state_does_not_draw() {
        let mut rng = SplitMix64::new(77);
        let out = execute(&Commands::State, &mut rng).unwrap();
        assert_eq!(out, Output::State(77));
        assert_eq!(rng.get_state(), 77);
    }

    #[test]
    fn dice_text_lists_rolls_and_total() {
        let out = Output::Dice(DiceRoll {
            rolls: vec![3, 5, 1],
            total: 9,
        });
        assert_eq!(out.to_text(), "rolls: 3 5 1\ntotal: 9");
    }

    #[test]
    fn json_carries_state_as_string() {
        let mut rng = SplitMix64::new(u64::MAX);
        let out = execute(&Commands::Toss, &mut rng).unwrap();
        let doc = out.to_json(&rng);
        assert_eq!(doc["state"], json!(rng.get_state().to_string()));
        assert!(doc["result"] == json!(0) || doc["result"] == json!(1));
    }

    #[test]
    fn invalid_arguments_surface_core_reason() {
        let mut rng = SplitMix64::new(0);
        let err = execute(&Commands::Int { low: 3, high: 1 }, &mut rng).unwrap_err();
        assert_eq!(format!("{err:#}"), "int: bad argument 'low': interval is empty");

        let err = execute(&Commands::Dice { count: 2, sides: 3 }, &mut rng).unwrap_err();
        assert!(format!("{err:#}").contains("invalid dice type: 3"));
        assert_eq!(rng.get_state(), 0);
    }

    #[test]
    fn weighted_pairs_parse() {
        assert_eq!(parse_weighted("gold=2.5"), Ok(("gold".to_owned(), 2.5)));
        assert_eq!(parse_weighted("a=b=1"), Ok(("a=b".to_owned(), 1.0)));
        assert!(parse_weighted("gold").is_err());
        assert!(parse_weighted("gold=lots").is_err());
    }

    #[test]
    fn weighted_picks_only_positive_entry() {
        let mut rng = SplitMix64::new(4);
        let items = vec![("never".to_owned(), 0.0), ("always".to_owned(), 1.0)];
        for _ in 0..20 {
            let out = execute(&Commands::Weighted { items: items.clone() }, &mut rng).unwrap();
            assert_eq!(out, Output::Item("always".into()));
        }
    }
}
