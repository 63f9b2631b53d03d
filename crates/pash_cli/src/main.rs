//! Parashell: a small interactive shell.
//!
//! The binary is a thin loop: render the prompt, read one line, hand it
//! to the core executor, repeat until `exit` or end of input.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pash_core::{signals, Executor, Outcome, ShellContext, ShellOptions};

/// A small shell: sequential (`##`) and parallel (`&&`) command groups,
/// output redirection (`>`), `cd` and `exit`.
#[derive(Parser, Debug)]
#[command(name = "pash", version, about = "Parashell - a small interactive shell")]
struct Args {
    /// Run a single command line and exit instead of going interactive.
    command: Option<String>,

    /// Path to a TOML options file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let options = match &args.config {
        Some(path) => ShellOptions::load(path)?,
        None => ShellOptions::default(),
    };
    debug!(?options, "session options");

    let mut context = ShellContext::new(options)?;
    signals::ignore_keystroke_signals()?;

    match args.command {
        Some(line) => {
            Executor::new(&mut context).run(&line);
            Ok(())
        }
        None => run_interactive(&mut context),
    }
}

/// The prompt loop. `Ctrl+C` clears the line and re-prompts; `Ctrl+D` on
/// an empty line ends the session like `exit` does, minus the notice.
fn run_interactive(context: &mut ShellContext) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    loop {
        let prompt = format!(
            "{}{}",
            context.cwd().display(),
            context.options().prompt_suffix
        );
        match editor.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(&line);
                }
                if Executor::new(context).run(&line) == Outcome::Exit {
                    return Ok(());
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return Ok(()),
            Err(error) => return Err(error.into()),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
