//! Classification tests for the parser cascade.

use proptest::prelude::*;

use super::*;

const FANOUT: usize = 4;

fn command_tokens(command: &Command) -> Vec<&str> {
    command.tokens.iter().map(String::as_str).collect()
}

fn group_tokens(group: &CommandGroup) -> Vec<Vec<&str>> {
    group.commands.iter().map(command_tokens).collect()
}

#[test]
fn test_sequential_classification() {
    match parse("a ## b ## c", FANOUT) {
        Some(Operation::Sequential(group)) => {
            assert_eq!(group_tokens(&group), vec![vec!["a"], vec!["b"], vec!["c"]]);
        }
        other => panic!("expected a sequential group, got {other:?}"),
    }
}

#[test]
fn test_parallel_classification() {
    match parse("ls -l && pwd", FANOUT) {
        Some(Operation::Parallel(group)) => {
            assert_eq!(group_tokens(&group), vec![vec!["ls", "-l"], vec!["pwd"]]);
        }
        other => panic!("expected a parallel group, got {other:?}"),
    }
}

#[test]
fn test_redirect_classification() {
    match parse("ls -l > out.txt", FANOUT) {
        Some(Operation::Redirect { command, target }) => {
            assert_eq!(command_tokens(&command), vec!["ls", "-l"]);
            assert_eq!(target.as_deref(), Some("out.txt"));
        }
        other => panic!("expected a redirection, got {other:?}"),
    }
}

#[test]
fn test_redirect_without_target_still_classifies() {
    match parse("ls >", FANOUT) {
        Some(Operation::Redirect { command, target }) => {
            assert_eq!(command_tokens(&command), vec!["ls"]);
            assert_eq!(target, None);
        }
        other => panic!("expected a redirection, got {other:?}"),
    }
}

#[test]
fn test_redirect_blank_target_is_missing() {
    match parse("ls >   ", FANOUT) {
        Some(Operation::Redirect { target, .. }) => assert_eq!(target, None),
        other => panic!("expected a redirection, got {other:?}"),
    }
}

#[test]
fn test_redirect_takes_first_target_token() {
    match parse("ls > out.txt extra", FANOUT) {
        Some(Operation::Redirect { target, .. }) => {
            assert_eq!(target.as_deref(), Some("out.txt"));
        }
        other => panic!("expected a redirection, got {other:?}"),
    }
    match parse("a > b > c", FANOUT) {
        Some(Operation::Redirect { command, target }) => {
            assert_eq!(command_tokens(&command), vec!["a"]);
            assert_eq!(target.as_deref(), Some("b"));
        }
        other => panic!("expected a redirection, got {other:?}"),
    }
}

#[test]
fn test_redirect_with_blank_command_falls_through() {
    match parse("> out.txt", FANOUT) {
        Some(Operation::Execute(command)) => {
            assert_eq!(command_tokens(&command), vec![">", "out.txt"]);
        }
        other => panic!("expected a single command, got {other:?}"),
    }
}

#[test]
fn test_single_command_classification() {
    match parse("ls -l", FANOUT) {
        Some(Operation::Execute(command)) => {
            assert_eq!(command_tokens(&command), vec!["ls", "-l"]);
        }
        other => panic!("expected a single command, got {other:?}"),
    }
}

#[test]
fn test_cd_classification() {
    match parse("cd /tmp", FANOUT) {
        Some(Operation::ChangeDirectory(command)) => {
            assert_eq!(command_tokens(&command), vec!["cd", "/tmp"]);
        }
        other => panic!("expected cd, got {other:?}"),
    }
}

#[test]
fn test_exit_classification() {
    assert!(matches!(parse("exit", FANOUT), Some(Operation::Exit(_))));
    assert!(matches!(parse("exit now", FANOUT), Some(Operation::Exit(_))));
}

#[test]
fn test_blank_line_parses_to_nothing() {
    assert_eq!(parse("", FANOUT), None);
    assert_eq!(parse("   ", FANOUT), None);
}

#[test]
fn test_duplicate_delimiters_are_equivalent() {
    assert_eq!(parse("a ## ## b", FANOUT), parse("a ## b", FANOUT));
    assert_eq!(parse("a && && b", FANOUT), parse("a && b", FANOUT));
}

#[test]
fn test_blank_group_slots_are_dropped() {
    match parse(" ## a ## b", FANOUT) {
        Some(Operation::Sequential(group)) => {
            assert_eq!(group_tokens(&group), vec![vec!["a"], vec!["b"]]);
        }
        other => panic!("expected a sequential group, got {other:?}"),
    }
}

#[test]
fn test_sequential_beats_parallel() {
    match parse("a && b ## c", FANOUT) {
        Some(Operation::Sequential(group)) => {
            assert_eq!(group_tokens(&group), vec![vec!["a", "&&", "b"], vec!["c"]]);
        }
        other => panic!("expected a sequential group, got {other:?}"),
    }
}

#[test]
fn test_parallel_beats_redirect() {
    match parse("a > b && c", FANOUT) {
        Some(Operation::Parallel(group)) => {
            assert_eq!(group_tokens(&group), vec![vec!["a", ">", "b"], vec!["c"]]);
        }
        other => panic!("expected a parallel group, got {other:?}"),
    }
}

#[test]
fn test_delimiter_that_separates_nothing_is_a_token() {
    match parse("echo ##", FANOUT) {
        Some(Operation::Execute(command)) => {
            assert_eq!(command_tokens(&command), vec!["echo", "##"]);
        }
        other => panic!("expected a single command, got {other:?}"),
    }
}

#[test]
fn test_fanout_cap_discards_excess_commands() {
    match parse("a ## b ## c ## d ## e", FANOUT) {
        Some(Operation::Sequential(group)) => {
            assert_eq!(
                group_tokens(&group),
                vec![vec!["a"], vec!["b"], vec!["c"], vec!["d"]]
            );
        }
        other => panic!("expected a sequential group, got {other:?}"),
    }
}

#[test]
fn test_fanout_cap_is_configurable() {
    match parse("a ## b ## c", 2) {
        Some(Operation::Sequential(group)) => {
            assert_eq!(group_tokens(&group), vec![vec!["a"], vec!["b"]]);
        }
        other => panic!("expected a sequential group, got {other:?}"),
    }
}

#[test]
fn test_token_lists_are_not_capped() {
    match parse("echo a b c d e f g h", FANOUT) {
        Some(Operation::Execute(command)) => {
            assert_eq!(command.tokens.len(), 9);
        }
        other => panic!("expected a single command, got {other:?}"),
    }
}

proptest! {
    /// The cascade classifies every line without panicking, and a parsed
    /// line never carries an empty token list anywhere.
    #[test]
    fn prop_parse_total(line in "[a-z#&> ]{0,32}", fanout in 1usize..6) {
        if let Some(operation) = parse(&line, fanout) {
            let commands: Vec<&Command> = match &operation {
                Operation::Sequential(group) | Operation::Parallel(group) => {
                    group.commands.iter().collect()
                }
                Operation::Redirect { command, .. }
                | Operation::ChangeDirectory(command)
                | Operation::Exit(command)
                | Operation::Execute(command) => vec![command],
            };
            prop_assert!(!commands.is_empty());
            for command in commands {
                prop_assert!(!command.tokens.is_empty());
                prop_assert!(command.tokens.iter().all(|t| !t.is_empty()));
            }
        }
    }
}
