//! The four execution modes of the interpreter.
//!
//! One [`Executor`] call runs one parsed [`Operation`] to completion:
//!
//! - a single command forks, execs and waits the child out;
//! - a sequential group does that once per command, in order;
//! - a parallel group forks every slot first and joins the whole group
//!   afterwards;
//! - a redirection runs one child with stdout rebound to a file.
//!
//! Failures here are never fatal to the session. Each one is reported as
//! the fixed incorrect-command notice on stdout (with detail on the log)
//! and the prompt loop carries on; only `exit` ends the session, by
//! returning [`Outcome::Exit`].

use nix::unistd::Pid;
use tracing::{debug, warn};

use pash_parser::ast::{Builtin, Command, CommandGroup, Operation};

use crate::context::ShellContext;
use crate::error::{ErrorKind, ShellError, ShellResult};
use crate::process::{self, ForkResult};
use crate::signals;

/// Notice printed on stdout for every recoverable failure.
pub const INCORRECT_COMMAND: &str = "Shell: Incorrect command";

/// Notice printed on stdout when the session ends via `exit`.
pub const EXIT_NOTICE: &str = "Exiting shell...";

/// What the prompt loop should do once an operation has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading input.
    Continue,
    /// The session is over. In-flight children have already been joined.
    Exit,
}

/// Executes parsed operations against one session's state.
pub struct Executor<'ctx> {
    context: &'ctx mut ShellContext,
}

impl<'ctx> Executor<'ctx> {
    pub fn new(context: &'ctx mut ShellContext) -> Self {
        Self { context }
    }

    /// Parse and execute one raw input line. Blank lines are a no-op.
    pub fn run(&mut self, line: &str) -> Outcome {
        match pash_parser::parse(line, self.context.max_fanout()) {
            Some(operation) => self.execute(&operation),
            None => Outcome::Continue,
        }
    }

    /// Run one parsed operation to completion.
    pub fn execute(&mut self, operation: &Operation) -> Outcome {
        match operation {
            Operation::Sequential(group) => self.execute_sequential(group),
            Operation::Parallel(group) => self.execute_parallel(group),
            Operation::Redirect { command, target } => {
                self.execute_redirect(command, target.as_deref())
            }
            Operation::ChangeDirectory(command)
            | Operation::Exit(command)
            | Operation::Execute(command) => self.execute_single(command),
        }
    }

    /// Run one command to completion: builtins apply in this process,
    /// anything else forks, execs and waits the child out.
    fn execute_single(&mut self, command: &Command) -> Outcome {
        match command.builtin() {
            Some(Builtin::Cd) => {
                self.apply_cd(command);
                Outcome::Continue
            }
            Some(Builtin::Exit) => {
                println!("{EXIT_NOTICE}");
                Outcome::Exit
            }
            None => {
                self.run_external(command);
                Outcome::Continue
            }
        }
    }

    /// Run the group's commands strictly in order, each to completion. An
    /// `exit` stops the chain; commands after it never run.
    fn execute_sequential(&mut self, group: &CommandGroup) -> Outcome {
        for command in &group.commands {
            if self.execute_single(command) == Outcome::Exit {
                return Outcome::Exit;
            }
        }
        Outcome::Continue
    }

    /// Fork one child per slot, in order, then join the whole group.
    ///
    /// Builtin slots fork too: their child exits neutrally at once,
    /// keeping slot and child counts aligned, while the builtin itself
    /// applies in the parent. An `exit` slot joins the children of
    /// strictly earlier slots, prints the exit notice and ends the
    /// session; later slots are never spawned and its own vacated child
    /// is left to the operating system.
    fn execute_parallel(&mut self, group: &CommandGroup) -> Outcome {
        let mut children: Vec<Pid> = Vec::with_capacity(group.len());
        for (slot, command) in group.commands.iter().enumerate() {
            let spawned_before = children.len();
            match self.spawn_slot(command) {
                Ok(child) => {
                    debug!(slot, pid = %child, program = %command.program(), "parallel slot spawned");
                    children.push(child);
                }
                Err(error) => {
                    // The slot is skipped; the rest of the group still runs.
                    warn!(slot, %error, "parallel slot not spawned");
                    println!("{INCORRECT_COMMAND}");
                }
            }
            match command.builtin() {
                Some(Builtin::Cd) => self.apply_cd(command),
                Some(Builtin::Exit) => {
                    self.join(&children[..spawned_before]);
                    println!("{EXIT_NOTICE}");
                    return Outcome::Exit;
                }
                None => {}
            }
        }
        self.join(&children);
        Outcome::Continue
    }

    /// Fork one parallel slot. The child never returns: a builtin slot's
    /// child vacates at once, an external slot's child execs or reports
    /// failure and exits neutrally.
    fn spawn_slot(&self, command: &Command) -> ShellResult<Pid> {
        let argv = match command.builtin() {
            None => Some(process::build_argv(&command.tokens)?),
            Some(_) => None,
        };
        match process::fork_child()? {
            ForkResult::Child => {
                signals::restore_default_dispositions();
                if let Some(argv) = argv {
                    let error = process::exec_argv(&argv);
                    debug!(%error, "exec failed in parallel child");
                    println!("{INCORRECT_COMMAND}");
                }
                std::process::exit(0);
            }
            ForkResult::Parent { child } => Ok(child),
        }
    }

    /// Run one command with stdout bound to the target file. The child
    /// keeps the interpreter's ignore dispositions for keystroke signals.
    fn execute_redirect(&mut self, command: &Command, target: Option<&str>) -> Outcome {
        let Some(target) = target else {
            let error = ShellError::new(ErrorKind::Argument, "redirection without a target file");
            warn!(%error, program = %command.program(), "redirect rejected");
            println!("{INCORRECT_COMMAND}");
            return Outcome::Continue;
        };
        let argv = match process::build_argv(&command.tokens) {
            Ok(argv) => argv,
            Err(error) => {
                warn!(%error, "redirect rejected");
                println!("{INCORRECT_COMMAND}");
                return Outcome::Continue;
            }
        };
        match process::fork_child() {
            Ok(ForkResult::Child) => {
                if let Err(error) = process::bind_stdout(target) {
                    debug!(%error, "stdout rebind failed");
                    println!("{INCORRECT_COMMAND}");
                    std::process::exit(0);
                }
                let error = process::exec_argv(&argv);
                debug!(%error, "exec failed in redirected child");
                println!("{INCORRECT_COMMAND}");
                std::process::exit(0);
            }
            Ok(ForkResult::Parent { child }) => match process::reap(child) {
                Ok(status) => debug!(pid = %child, ?status, "redirected child finished"),
                Err(error) => warn!(pid = %child, %error, "wait for redirected child failed"),
            },
            Err(error) => {
                warn!(%error, "redirect not spawned");
                println!("{INCORRECT_COMMAND}");
            }
        }
        Outcome::Continue
    }

    /// Change the interpreter's working directory, reporting a missing
    /// operand or a failed chdir without disturbing the session.
    fn apply_cd(&mut self, command: &Command) {
        let result = match command.tokens.get(1) {
            Some(path) => self.context.change_directory(path),
            None => Err(ShellError::new(ErrorKind::Argument, "cd: missing operand")),
        };
        if let Err(error) = result {
            warn!(%error, "cd rejected");
            println!("{INCORRECT_COMMAND}");
        }
    }

    /// Fork, exec and wait one foreground child all the way to exit. A
    /// stopped child is waited through, so the prompt never returns while
    /// the command is merely suspended.
    fn run_external(&mut self, command: &Command) {
        let argv = match process::build_argv(&command.tokens) {
            Ok(argv) => argv,
            Err(error) => {
                warn!(%error, "command rejected");
                println!("{INCORRECT_COMMAND}");
                return;
            }
        };
        match process::fork_child() {
            Ok(ForkResult::Child) => {
                signals::restore_default_dispositions();
                let error = process::exec_argv(&argv);
                debug!(%error, "exec failed in child");
                println!("{INCORRECT_COMMAND}");
                std::process::exit(0);
            }
            Ok(ForkResult::Parent { child }) => {
                match process::wait_until_exited(child) {
                    Ok(status) => debug!(pid = %child, ?status, "foreground child finished"),
                    Err(error) => warn!(pid = %child, %error, "wait for foreground child failed"),
                }
            }
            Err(error) => {
                warn!(%error, "command not spawned");
                println!("{INCORRECT_COMMAND}");
            }
        }
    }

    /// Join barrier: block on each child, in spawn order.
    fn join(&self, children: &[Pid]) {
        for &child in children {
            match process::reap(child) {
                Ok(status) => debug!(pid = %child, ?status, "parallel child finished"),
                Err(error) => warn!(pid = %child, %error, "wait for parallel child failed"),
            }
        }
    }
}
