//! Parashell core: session state, options and the four execution modes.
//!
//! The crate is deliberately small. [`ShellContext`] holds what outlives a
//! command (working directory, options); [`Executor`] runs one parsed
//! operation at a time against it; the `process` module keeps the raw
//! fork/exec/wait plumbing in one place. Everything an embedder needs is
//! re-exported from the root.

pub mod context;
pub mod error;
pub mod executor;
pub mod options;
mod process;
pub mod signals;

pub use context::ShellContext;
pub use error::{ErrorKind, ShellError, ShellResult};
pub use executor::{Executor, Outcome, EXIT_NOTICE, INCORRECT_COMMAND};
pub use options::{ShellOptions, DEFAULT_MAX_FANOUT, DEFAULT_PROMPT_SUFFIX};

// Parsed representation, re-exported so embedders and tests need only
// this crate in scope.
pub use pash_parser::ast::{Builtin, Command, CommandGroup, Operation};
pub use pash_parser::parse;
