//! Parashell's parser: turns one raw input line into one [`Operation`].
//!
//! Classification runs a fixed priority cascade over the composition
//! delimiters:
//!
//! 1. `##` - sequential group
//! 2. `&&` - parallel group
//! 3. `>`  - output redirection
//! 4. otherwise a single command (`cd`, `exit`, or an external program)
//!
//! A delimiter only wins when it actually separates content: a group needs
//! at least two non-blank segments, a redirection a non-blank command on
//! its left. Anything else falls through to the next stage, so a stray
//! `##` inside an otherwise single command reaches the program as an
//! ordinary token.

pub mod ast;
pub mod splitter;

use ast::{Builtin, Command, CommandGroup, Operation};
use splitter::split_fields;

/// Joins the commands of a sequential group.
pub const SEQUENTIAL_DELIMITER: &str = "##";
/// Joins the commands of a parallel group.
pub const PARALLEL_DELIMITER: &str = "&&";
/// Separates a command from its redirection target.
pub const REDIRECT_DELIMITER: &str = ">";
/// Separates the tokens of a single command.
pub const WORD_DELIMITER: &str = " ";

/// Parse one input line. `max_fanout` bounds how many commands a
/// sequential or parallel group may carry; text beyond the bound is
/// silently dropped.
///
/// Returns `None` for a blank line.
pub fn parse(line: &str, max_fanout: usize) -> Option<Operation> {
    if let Some(group) = split_group(line, SEQUENTIAL_DELIMITER, max_fanout) {
        return Some(Operation::Sequential(group));
    }
    if let Some(group) = split_group(line, PARALLEL_DELIMITER, max_fanout) {
        return Some(Operation::Parallel(group));
    }
    if let Some(operation) = split_redirect(line) {
        return Some(operation);
    }
    let command = Command::from_segment(line)?;
    Some(match command.builtin() {
        Some(Builtin::Cd) => Operation::ChangeDirectory(command),
        Some(Builtin::Exit) => Operation::Exit(command),
        None => Operation::Execute(command),
    })
}

/// Try to read `line` as a group joined by `delimiter`. A group needs at
/// least two non-blank segments; with fewer, the delimiter did not
/// separate anything and the line is left for the next stage.
fn split_group(line: &str, delimiter: &str, max_fanout: usize) -> Option<CommandGroup> {
    let commands: Vec<Command> = split_fields(line, delimiter, max_fanout)
        .into_iter()
        .filter_map(Command::from_segment)
        .collect();
    if commands.len() >= 2 {
        Some(CommandGroup { commands })
    } else {
        None
    }
}

/// Try to read `line` as a redirection. The command on the left must be
/// non-blank. The target is the first token after the delimiter; its
/// absence still classifies as a redirection so the executor can reject
/// the missing operand instead of running the command bare.
fn split_redirect(line: &str) -> Option<Operation> {
    let (left, rest) = line.split_once(REDIRECT_DELIMITER)?;
    let command = Command::from_segment(left)?;
    let target = split_fields(rest, REDIRECT_DELIMITER, 1)
        .into_iter()
        .next()
        .and_then(|field| split_fields(field, WORD_DELIMITER, 1).into_iter().next())
        .map(str::to_owned);
    Some(Operation::Redirect { command, target })
}

#[cfg(test)]
mod tests;
