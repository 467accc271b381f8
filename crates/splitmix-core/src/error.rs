use thiserror::Error;

/// Errors raised by the generator's derived draws.
///
/// The mixing function itself is total, so the only failure mode is a caller passing an argument
/// outside an operation's domain. The reason strings are stable: script bindings surface them to
/// end users verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RngError {
    #[error("bad argument '{argument}': {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },
}

impl RngError {
    pub fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Name of the offending argument.
    pub fn argument(&self) -> &'static str {
        match self {
            Self::InvalidArgument { argument, .. } => argument,
        }
    }

    /// Human readable reason, without the argument prefix.
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidArgument { reason, .. } => reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, RngError>;
