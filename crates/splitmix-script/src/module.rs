//! Module-level surface: the default generator, dice constants, and instance creation.

use splitmix_core::DiceType;

use crate::args::Args;
use crate::error::{Result, ScriptError};
use crate::instance::{Returns, ScriptRng};
use crate::value::Value;

/// What a host registers under the module name.
///
/// Module-level calls go to the module's own generator. It belongs to this value; hosts that run
/// several script contexts create one module per context, or hand out separate generators with
/// [`ScriptModule::new_instance`].
#[derive(Debug, Clone, Default)]
pub struct ScriptModule {
    default: ScriptRng,
}

impl ScriptModule {
    /// Module starting from seed 0.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            default: ScriptRng::new(seed),
        }
    }

    /// Dice constants exported alongside the functions (`D4 = 4`, ..., `D100 = 100`).
    pub fn constants() -> impl Iterator<Item = (&'static str, Value)> {
        DiceType::ALL
            .into_iter()
            .map(|d| (d.name(), Value::Integer(d.sides())))
    }

    pub fn constant(name: &str) -> Option<Value> {
        Self::constants().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn default_rng(&self) -> &ScriptRng {
        &self.default
    }

    pub fn default_rng_mut(&mut self) -> &mut ScriptRng {
        &mut self.default
    }

    /// Calls a module function against the default generator.
    ///
    /// `new_instance` returns a generator rather than values, so it is only reachable through
    /// [`ScriptModule::new_instance`]; naming it here is an error that says so.
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Returns> {
        if name == "new_instance" {
            return Err(ScriptError::Runtime(
                "new_instance returns a generator; call ScriptModule::new_instance".into(),
            ));
        }
        self.default.call(name, args)
    }

    /// `new_instance([seed])`: an independent generator, seeded like `randomseed` (0 when no
    /// seed is given). It does not share or advance the module's generator.
    pub fn new_instance(&self, args: &[Value]) -> Result<ScriptRng> {
        let args = Args::new("new_instance", args);
        let seed = if args.len() == 0 { 0 } else { args.seed(1)? };
        tracing::debug!(seed, "created script generator instance");
        Ok(ScriptRng::new(seed))
    }
}
