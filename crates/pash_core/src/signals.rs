//! Signal dispositions for the interpreter and its children.
//!
//! The interpreter ignores the keystroke signals so `Ctrl+C` and `Ctrl+Z`
//! at the prompt never kill or stop the session. Children that run a
//! program of their own get the default dispositions back between fork and
//! exec, so each one is individually interruptible. A redirected child is
//! the exception: it keeps the inherited ignore dispositions and rides out
//! keystroke signals together with the interpreter.

use nix::sys::signal::{signal, SigHandler, Signal};
use tracing::debug;

use crate::error::{ErrorKind, ShellError, ShellResult};

const KEYSTROKE_SIGNALS: [Signal; 2] = [Signal::SIGINT, Signal::SIGTSTP];

/// Make the calling process immune to `SIGINT` and `SIGTSTP`. Called once
/// at session start, in the interpreter.
pub fn ignore_keystroke_signals() -> ShellResult<()> {
    for sig in KEYSTROKE_SIGNALS {
        // SAFETY: SigIgn installs no handler function, so no signal-safety
        // obligations arise.
        unsafe { signal(sig, SigHandler::SigIgn) }
            .map_err(|e| ShellError::new(ErrorKind::Internal, format!("cannot ignore {sig}: {e}")))?;
    }
    debug!("keystroke signals ignored");
    Ok(())
}

/// Restore the default dispositions for the keystroke signals. Called in a
/// forked child before exec; failures are unreportable there and the exec
/// proceeds regardless.
pub fn restore_default_dispositions() {
    for sig in KEYSTROKE_SIGNALS {
        // SAFETY: SigDfl installs no handler function.
        let _ = unsafe { signal(sig, SigHandler::SigDfl) };
    }
}
