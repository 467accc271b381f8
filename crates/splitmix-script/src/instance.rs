//! One script-visible generator and its method table.

use splitmix_core::{DeterministicRng, SplitMix64};

use crate::args::Args;
use crate::error::{Result, ScriptError};
use crate::value::{Key, Table, Value};

/// Values returned by a script call (scripts may receive several results).
pub type Returns = Vec<Value>;

/// A generator wrapped with dynamically typed entry points.
///
/// Every method validates its arguments before touching the generator, so a rejected call never
/// advances the stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptRng {
    rng: SplitMix64,
}

impl ScriptRng {
    /// Names accepted by [`ScriptRng::call`].
    pub const METHODS: [&'static str; 7] = [
        "random",
        "randomseed",
        "state",
        "randomchoice",
        "weightedchoice",
        "toss",
        "dice",
    ];

    pub fn new(seed: u64) -> Self {
        Self::from_rng(SplitMix64::new(seed))
    }

    pub fn from_rng(rng: SplitMix64) -> Self {
        Self { rng }
    }

    pub fn generator(&self) -> &SplitMix64 {
        &self.rng
    }

    pub fn generator_mut(&mut self) -> &mut SplitMix64 {
        &mut self.rng
    }

    /// Dispatches a call by method name.
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Returns> {
        let result = match name {
            "random" => self.random(args),
            "randomseed" => self.randomseed(args),
            "state" => self.state(args),
            "randomchoice" => self.randomchoice(args),
            "weightedchoice" => self.weightedchoice(args),
            "toss" => self.toss(args),
            "dice" => self.dice(args),
            _ => Err(ScriptError::UnknownFunction(name.to_owned())),
        };
        if let Err(err) = &result {
            tracing::debug!(function = name, error = %err, "script call rejected");
        }
        result
    }

    /// `random()` gives a number in `[0, 1)`, `random(m)` an integer in `[1, m]` and
    /// `random(m, n)` an integer in `[m, n]`.
    pub fn random(&mut self, args: &[Value]) -> Result<Returns> {
        let args = Args::new("random", args);
        let (low, high) = match args.len() {
            0 => return Ok(vec![Value::Number(self.rng.next_double())]),
            1 => (1, args.integer(1)?),
            2 => (args.integer(1)?, args.integer(2)?),
            _ => return Err(ScriptError::Runtime("wrong number of arguments".into())),
        };
        if low > high {
            return Err(args.bad(1, "interval is empty"));
        }
        let value = self.rng.random_int(low, high)?;
        Ok(vec![Value::Integer(value)])
    }

    pub fn randomseed(&mut self, args: &[Value]) -> Result<Returns> {
        let seed = Args::new("randomseed", args).seed(1)?;
        self.rng.seed(seed);
        tracing::trace!(seed, "generator reseeded");
        Ok(Vec::new())
    }

    /// Current state word as a decimal string, which `randomseed` accepts back.
    pub fn state(&self, _args: &[Value]) -> Result<Returns> {
        Ok(vec![Value::Str(self.rng.get_state().to_string())])
    }

    /// Uniform pick from the table's sequence part.
    pub fn randomchoice(&mut self, args: &[Value]) -> Result<Returns> {
        let table = Args::new("randomchoice", args).table(1)?;
        let items: Vec<&Value> = table.sequence().collect();
        let picked = self.rng.random_choice(&items)?;
        Ok(vec![(*picked).clone()])
    }

    /// Picks a key of a `key -> weight` table. Keys are walked in [`Key`] order.
    pub fn weightedchoice(&mut self, args: &[Value]) -> Result<Returns> {
        let args = Args::new("weightedchoice", args);
        let table = args.table(1)?;
        let weights = table
            .iter()
            .map(|(key, value)| match value.as_f64() {
                Some(w) => Ok((key, w)),
                None => Err(args.bad(
                    1,
                    format!(
                        "number expected for weight of '{key}', got {}",
                        value.type_name()
                    ),
                )),
            })
            .collect::<Result<Vec<(&Key, f64)>>>()?;
        let picked = self.rng.weighted_choice(&weights)?;
        Ok(vec![Value::from((*picked).clone())])
    }

    pub fn toss(&mut self, _args: &[Value]) -> Result<Returns> {
        Ok(vec![Value::Integer(i64::from(self.rng.toss()))])
    }

    /// `dice(count, sides)` returns the table of rolls and their total.
    pub fn dice(&mut self, args: &[Value]) -> Result<Returns> {
        let args = Args::new("dice", args);
        let count = args.integer(1)?;
        let sides = args.integer(2)?;
        let roll = self.rng.dice(count, sides)?;
        Ok(vec![
            Value::Table(Table::from_sequence(roll.rolls)),
            Value::Integer(roll.total),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_arity_selects_interval() {
        let mut script = ScriptRng::new(10);
        let mut reference = SplitMix64::new(10);

        assert_eq!(
            script.random(&[]).unwrap(),
            vec![Value::Number(reference.next_double())]
        );
        assert_eq!(
            script.random(&[Value::Integer(6)]).unwrap(),
            vec![Value::Integer(reference.random_int(1, 6).unwrap())]
        );
        assert_eq!(
            script.random(&[Value::Integer(-2), Value::Integer(2)]).unwrap(),
            vec![Value::Integer(reference.random_int(-2, 2).unwrap())]
        );
        assert_eq!(script.generator(), &reference);
    }

    #[test]
    fn random_rejects_empty_interval_and_extra_args() {
        let mut script = ScriptRng::new(1);
        assert_eq!(
            script.random(&[Value::Integer(0)]).unwrap_err().to_string(),
            "bad argument #1 to 'random' (interval is empty)"
        );
        assert_eq!(
            script
                .random(&[Value::Integer(1), Value::Integer(2), Value::Integer(3)])
                .unwrap_err(),
            ScriptError::Runtime("wrong number of arguments".into())
        );
        assert_eq!(script.generator().get_state(), 1);
    }

    #[test]
    fn state_string_reseeds_exactly() {
        let mut script = ScriptRng::new(u64::MAX - 3);
        script.random(&[]).unwrap();
        let saved = script.state(&[]).unwrap();

        let mut restored = ScriptRng::default();
        restored.randomseed(&saved).unwrap();
        assert_eq!(restored, script);
    }

    #[test]
    fn weighted_choice_returns_key() {
        let mut table = Table::new();
        table.set("sword", 0.0);
        table.set("shield", 5_i64);
        let mut script = ScriptRng::new(2);
        assert_eq!(
            script.weightedchoice(&[Value::Table(table)]).unwrap(),
            vec![Value::from("shield")]
        );
    }

    #[test]
    fn weighted_choice_requires_numeric_weights() {
        let mut table = Table::new();
        table.set("a", "heavy");
        let mut script = ScriptRng::new(2);
        assert_eq!(
            script
                .weightedchoice(&[Value::Table(table)])
                .unwrap_err()
                .to_string(),
            "bad argument #1 to 'weightedchoice' (number expected for weight of 'a', got string)"
        );
    }

    #[test]
    fn core_errors_keep_their_wording() {
        let mut script = ScriptRng::new(0);
        let err = script
            .dice(&[Value::Integer(2), Value::Integer(7)])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid dice type: 7 (use D4, D6, D8, D10, D12, D20, D100)"
        );
        let err = script.dice(&[Value::Integer(0), Value::Integer(6)]).unwrap_err();
        assert_eq!(err.to_string(), "roll must be bigger than 0");
        let err = script.randomchoice(&[Value::Table(Table::new())]).unwrap_err();
        assert_eq!(err.to_string(), "table is empty");
    }

    #[test]
    fn unknown_method_is_reported() {
        let mut script = ScriptRng::new(0);
        assert_eq!(
            script.call("shuffle", &[]),
            Err(ScriptError::UnknownFunction("shuffle".into()))
        );
    }
}
