use splitmix_core::RngError;
use thiserror::Error;

/// Errors surfaced to script code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScriptError {
    /// A positional argument failed validation. Positions are 1-based.
    #[error("bad argument #{position} to '{function}' ({reason})")]
    BadArgument {
        function: &'static str,
        position: usize,
        reason: String,
    },

    #[error("{0}")]
    Runtime(String),

    #[error("attempt to call unknown function '{0}'")]
    UnknownFunction(String),
}

impl From<RngError> for ScriptError {
    fn from(err: RngError) -> Self {
        ScriptError::Runtime(err.reason().to_owned())
    }
}

pub type Result<T> = std::result::Result<T, ScriptError>;
