//! Script-facing adapter for `splitmix-core`.
//!
//! Script hosts hand over loosely typed arguments. This crate converts them into the typed draws
//! of [`splitmix_core`], reports misuse the way script authors expect (`bad argument #1 to
//! 'random' (interval is empty)`), and converts results back into [`Value`]s. Binding a concrete
//! VM is left to the host: it only has to translate its own values to and from [`Value`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod args;
pub mod error;
pub mod instance;
pub mod module;
pub mod value;

pub use error::{Result, ScriptError};
pub use instance::{Returns, ScriptRng};
pub use module::ScriptModule;
pub use value::{Key, Table, Value};
