//! Error types for Parashell core operations.
//!
//! Nothing in here is fatal to the interpreter: every error is reported at
//! the point it occurs and the prompt loop carries on. The kind taxonomy
//! exists so call sites can log precisely and tests can assert on the
//! failure class rather than on message text.

use std::fmt;
use std::io;

/// Result type used throughout the core.
pub type ShellResult<T> = Result<T, ShellError>;

/// An error raised by session state, parsing glue or process plumbing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Failure classes for core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required operand is missing or unusable (redirect target, cd path).
    Argument,
    /// `fork(2)` failed; the command's effect is skipped entirely.
    ProcessCreation,
    /// The program image could not be substituted (unknown program name).
    ProgramResolution,
    /// An underlying I/O call failed (open, chdir, getcwd).
    Io,
    /// `waitpid(2)` failed while collecting a child.
    Wait,
    /// The options file could not be read or did not parse.
    Config,
    /// A state the interpreter should never reach.
    Internal,
}

impl ShellError {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Argument => "argument error",
            Self::ProcessCreation => "process creation failed",
            Self::ProgramResolution => "program resolution failed",
            Self::Io => "i/o error",
            Self::Wait => "wait failed",
            Self::Config => "configuration error",
            Self::Internal => "internal error",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ShellError {}

impl From<io::Error> for ShellError {
    fn from(error: io::Error) -> Self {
        Self::new(ErrorKind::Io, error.to_string())
    }
}
