//! Session state for one interpreter process.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ErrorKind, ShellError, ShellResult};
use crate::options::ShellOptions;

/// State that outlives individual commands: the working directory and the
/// loaded options.
///
/// Only the interpreter process ever mutates this. Builtins apply here, in
/// the parent; children inherit the directory at fork time and cannot
/// change it behind the session's back, so the cached path stays accurate
/// for the lifetime of the session.
#[derive(Debug)]
pub struct ShellContext {
    cwd: PathBuf,
    options: ShellOptions,
}

impl ShellContext {
    /// Create a context for the current process, capturing its working
    /// directory.
    pub fn new(options: ShellOptions) -> ShellResult<Self> {
        let cwd = env::current_dir().map_err(|e| {
            ShellError::new(ErrorKind::Io, format!("cannot determine working directory: {e}"))
        })?;
        Ok(Self { cwd, options })
    }

    /// The working directory as last observed.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn options(&self) -> &ShellOptions {
        &self.options
    }

    /// Group size bound handed to the parser.
    pub fn max_fanout(&self) -> usize {
        self.options.max_fanout
    }

    /// Change the interpreter's working directory. On failure the process
    /// directory and the cached path are both left untouched.
    pub fn change_directory(&mut self, path: &str) -> ShellResult<()> {
        env::set_current_dir(path)
            .map_err(|e| ShellError::new(ErrorKind::Io, format!("cd: {path}: {e}")))?;
        self.cwd = env::current_dir().map_err(|e| {
            ShellError::new(ErrorKind::Io, format!("cannot determine working directory: {e}"))
        })?;
        debug!(cwd = %self.cwd.display(), "working directory changed");
        Ok(())
    }
}
