//! Parsed representation of one input line.
//!
//! A line always parses to exactly one [`Operation`]; composition does not
//! nest. Groups hold plain commands, and a command is nothing more than its
//! whitespace-separated tokens.

use crate::splitter::split_fields;
use crate::WORD_DELIMITER;

/// One command: an ordered list of tokens, never empty.
///
/// `tokens[0]` is the program name (or builtin keyword); the rest are
/// arguments, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub tokens: Vec<String>,
}

impl Command {
    /// Tokenize one segment of a line. Returns `None` when the segment is
    /// blank, which callers treat as "no command here".
    pub fn from_segment(segment: &str) -> Option<Self> {
        let tokens: Vec<String> = split_fields(segment, WORD_DELIMITER, usize::MAX)
            .into_iter()
            .map(str::to_owned)
            .collect();
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    /// The program name, i.e. the first token.
    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    /// The builtin this command names, if any.
    pub fn builtin(&self) -> Option<Builtin> {
        Builtin::recognize(self.program())
    }
}

/// Commands named by a session-level builtin rather than a program image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `cd` - change the interpreter's working directory.
    Cd,
    /// `exit` - end the session.
    Exit,
}

impl Builtin {
    /// Match a program name against the builtin table. Exact and
    /// case-sensitive; `cd`-with-a-suffix is just an external program.
    pub fn recognize(name: &str) -> Option<Self> {
        match name {
            "cd" => Some(Self::Cd),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Two or more commands joined by one composition delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGroup {
    pub commands: Vec<Command>,
}

impl CommandGroup {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// What one input line asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// `a ## b ## c` - run each command to completion, in order.
    Sequential(CommandGroup),
    /// `a && b` - launch every command, then wait for the whole group.
    Parallel(CommandGroup),
    /// `cmd > file` - run one command with stdout bound to a file. A line
    /// like `ls >` still classifies as a redirection; the missing target is
    /// an execution-time error, not a parse failure.
    Redirect {
        command: Command,
        target: Option<String>,
    },
    /// A lone `cd`, applied to the interpreter itself.
    ChangeDirectory(Command),
    /// A lone `exit`, ending the session.
    Exit(Command),
    /// A single external command.
    Execute(Command),
}
