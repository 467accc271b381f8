//! State word persistence between CLI runs.
//!
//! The file holds the decimal state word followed by a newline, so it can be read or edited by
//! hand and passed straight back to `--seed`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use splitmix_core::{parse_state, SplitMix64};

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved state word, or `None` when the file does not exist yet.
    pub fn load(&self) -> Result<Option<u64>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read state from {}", self.path.display()))
            }
        };
        let state = parse_state(content.trim())
            .with_context(|| format!("Corrupt state file {}", self.path.display()))?;
        Ok(Some(state))
    }

    pub fn save(&self, rng: &SplitMix64) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, format!("{rng}\n"))
            .with_context(|| format!("Failed to write state to {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), state = rng.get_state(), "State saved");
        Ok(())
    }
}
