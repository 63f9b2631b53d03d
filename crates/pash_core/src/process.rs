//! Low-level process plumbing: fork, exec, wait and stdout rewiring.
//!
//! This module is pure mechanism. Policy - what to print, when to give up,
//! which children to join - lives in the executor.

use std::ffi::CString;

use nix::fcntl::{self, OFlag};
use nix::sys::stat::Mode;
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::{self, Pid};
use tracing::debug;

use crate::error::{ErrorKind, ShellError, ShellResult};

pub(crate) use nix::unistd::ForkResult;

/// Fork the interpreter.
pub(crate) fn fork_child() -> ShellResult<ForkResult> {
    // SAFETY: the interpreter runs single-threaded; between fork and exec
    // the child only resets signal dispositions and rewires stdout.
    unsafe { unistd::fork() }
        .map_err(|e| ShellError::new(ErrorKind::ProcessCreation, format!("fork: {e}")))
}

/// Build the C argument vector for a command. Called in the parent,
/// before forking, so the child allocates nothing on its way to exec.
pub(crate) fn build_argv(tokens: &[String]) -> ShellResult<Vec<CString>> {
    debug_assert!(!tokens.is_empty(), "commands always carry a program name");
    tokens
        .iter()
        .map(|token| {
            CString::new(token.as_str()).map_err(|_| {
                ShellError::new(ErrorKind::Internal, format!("token {token:?} contains NUL"))
            })
        })
        .collect()
}

/// Replace the current process image with `argv[0]`, resolved through
/// `PATH`. Returns only on failure.
pub(crate) fn exec_argv(argv: &[CString]) -> ShellError {
    match unistd::execvp(&argv[0], argv) {
        Ok(never) => match never {},
        Err(e) => ShellError::new(
            ErrorKind::ProgramResolution,
            format!("{}: {e}", argv[0].to_string_lossy()),
        ),
    }
}

/// Block until `child` has truly exited, waiting through stop and
/// continue transitions. A suspended child is held onto, not abandoned.
pub(crate) fn wait_until_exited(child: Pid) -> ShellResult<WaitStatus> {
    let flags = WaitPidFlag::WUNTRACED | WaitPidFlag::WCONTINUED;
    loop {
        match waitpid(child, Some(flags)) {
            Ok(status @ (WaitStatus::Exited(..) | WaitStatus::Signaled(..))) => return Ok(status),
            Ok(transition) => debug!(?transition, "child changed state, still waiting"),
            Err(e) => {
                return Err(ShellError::new(ErrorKind::Wait, format!("waitpid({child}): {e}")));
            }
        }
    }
}

/// Plain blocking wait: the join barrier for parallel and redirected
/// children.
pub(crate) fn reap(child: Pid) -> ShellResult<WaitStatus> {
    waitpid(child, None)
        .map_err(|e| ShellError::new(ErrorKind::Wait, format!("waitpid({child}): {e}")))
}

/// Bind stdout to `path`, creating the file if needed and truncating it
/// otherwise, with owner-only permissions. Opens first and rewires
/// second, so a failed open leaves the original stdout usable for error
/// reporting.
pub(crate) fn bind_stdout(path: &str) -> ShellResult<()> {
    let fd = fcntl::open(path, OFlag::O_CREAT | OFlag::O_RDWR | OFlag::O_TRUNC, Mode::S_IRWXU)
        .map_err(|e| ShellError::new(ErrorKind::Io, format!("{path}: {e}")))?;
    // SAFETY: plain descriptor duplication; no Rust-held handle aliases
    // descriptor 1 at this point.
    if unsafe { libc::dup2(fd, libc::STDOUT_FILENO) } < 0 {
        let error = std::io::Error::last_os_error();
        let _ = unistd::close(fd);
        return Err(ShellError::new(ErrorKind::Io, format!("dup2: {error}")));
    }
    if fd != libc::STDOUT_FILENO {
        let _ = unistd::close(fd);
    }
    Ok(())
}
