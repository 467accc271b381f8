//! Positional argument checks for script calls.

use splitmix_core::parse_state;

use crate::error::{Result, ScriptError};
use crate::value::{Table, Value};

pub(crate) struct Args<'a> {
    function: &'static str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    pub(crate) fn new(function: &'static str, values: &'a [Value]) -> Self {
        Self { function, values }
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// `position` is 1-based.
    pub(crate) fn get(&self, position: usize) -> Option<&'a Value> {
        position.checked_sub(1).and_then(|i| self.values.get(i))
    }

    pub(crate) fn bad(&self, position: usize, reason: impl Into<String>) -> ScriptError {
        ScriptError::BadArgument {
            function: self.function,
            position,
            reason: reason.into(),
        }
    }

    fn expected(&self, position: usize, expected: &str) -> ScriptError {
        let got = self.get(position).map_or("no value", Value::type_name);
        self.bad(position, format!("{expected} expected, got {got}"))
    }

    /// Integers pass through; numbers are truncated toward zero and must land inside `i64`.
    pub(crate) fn integer(&self, position: usize) -> Result<i64> {
        const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63

        match self.get(position) {
            Some(Value::Integer(i)) => Ok(*i),
            Some(Value::Number(n)) if (-LIMIT..LIMIT).contains(&n.trunc()) => Ok(*n as i64),
            Some(Value::Number(_)) => {
                Err(self.bad(position, "number has no integer representation"))
            }
            _ => Err(self.expected(position, "number")),
        }
    }

    pub(crate) fn table(&self, position: usize) -> Result<&'a Table> {
        match self.get(position) {
            Some(Value::Table(t)) => Ok(t),
            _ => Err(self.expected(position, "table")),
        }
    }

    /// Seed argument: a decimal string, or a number floored to an unsigned word.
    ///
    /// Numbers below zero (and NaN) seed 0; numbers past `u64::MAX` seed `u64::MAX`. Seeds that do
    /// not fit a double exactly should be passed as strings.
    pub(crate) fn seed(&self, position: usize) -> Result<u64> {
        match self.get(position) {
            Some(Value::Str(s)) => {
                parse_state(s).map_err(|err| ScriptError::Runtime(err.reason().to_owned()))
            }
            Some(Value::Integer(i)) => Ok((*i).max(0) as u64),
            Some(Value::Number(n)) => Ok(n.floor() as u64),
            _ => Err(self.bad(position, "expected number or string")),
        }
    }
}
