//! Shell options, loadable from a TOML file.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ErrorKind, ShellError, ShellResult};

/// Default upper bound on commands per sequential or parallel group.
pub const DEFAULT_MAX_FANOUT: usize = 4;

/// Default string appended to the working directory in the prompt.
pub const DEFAULT_PROMPT_SUFFIX: &str = "$";

/// Tunable behaviour of one shell session.
///
/// Every field has a default, so a partial (or absent) options file is
/// always acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellOptions {
    /// How many commands a `##` or `&&` group may carry; parsed input
    /// beyond the bound is discarded.
    pub max_fanout: usize,
    /// Appended to the working directory when rendering the prompt.
    pub prompt_suffix: String,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            max_fanout: DEFAULT_MAX_FANOUT,
            prompt_suffix: DEFAULT_PROMPT_SUFFIX.to_string(),
        }
    }
}

impl ShellOptions {
    /// Load options from a TOML file.
    pub fn load(path: &Path) -> ShellResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ShellError::new(ErrorKind::Config, format!("{}: {e}", path.display()))
        })?;
        Self::from_toml(&text)
    }

    /// Parse options from TOML text.
    pub fn from_toml(text: &str) -> ShellResult<Self> {
        let options: Self = toml::from_str(text)
            .map_err(|e| ShellError::new(ErrorKind::Config, e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    fn validate(&self) -> ShellResult<()> {
        if self.max_fanout == 0 {
            return Err(ShellError::new(
                ErrorKind::Config,
                "max_fanout must be at least 1",
            ));
        }
        Ok(())
    }
}
