use std::env;

use console::style;

use crate::ai::AiService;
use crate::git::{CommandRunner, GitRunner};
use crate::prompt::{DialoguerConfirmPrompter, DialoguerStringPrompter};
use crate::{actions, commit, help, history, log, panel, profile};

/// The single workflow an invocation dispatches to. Exactly one is chosen
/// per run; when several flags are supplied, the first matching flag wins
/// and the rest are ignored.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    Help,
    Version,
    Commit(Option<String>),
    AiCommit,
    Log,
    Reflog,
    Reset(Option<String>),
    Switch(Option<String>),
    ChangeTime(Option<String>),
    ChangeAuthor,
    ChangeMessage,
    Profile(Option<String>),
}

/// Reports whether any of the aliases appears in the argument list.
fn has_flag(args: &[String], aliases: &[&str]) -> bool {
    args.iter().any(|a| aliases.contains(&a.as_str()))
}

/// Returns the position of the first alias match, if any.
fn flag_position(args: &[String], aliases: &[&str]) -> Option<usize> {
    args.iter().position(|a| aliases.contains(&a.as_str()))
}

/// Returns the token following position `index`, unless it is the hook-skip
/// modifier (which is never a value).
fn value_after(args: &[String], index: usize) -> Option<String> {
    match args.get(index + 1) {
        Some(next) if next != "-nv" && next != "--no-verify" => Some(next.clone()),
        _ => None,
    }
}

/// Maps the raw argument list to the selected [`Action`] plus the hook-skip
/// modifier.
///
/// The surface uses multi-character single-dash flags (`-ac`, `-rl`, ...),
/// so parsing is a hand-rolled scan in the table's priority order rather
/// than a short/long option parser. `-nv/--no-verify` is a modifier, not a
/// dispatching flag: it is extracted up front and only affects the commit
/// workflows.
pub(crate) fn parse_args(args: &[String]) -> (Action, bool) {
    let no_verify = has_flag(args, &["-nv", "--no-verify"]);

    if has_flag(args, &["-h", "--help"]) {
        return (Action::Help, no_verify);
    }
    if has_flag(args, &["-V", "--version"]) {
        return (Action::Version, no_verify);
    }

    if let Some(i) = flag_position(args, &["-c", "--commit"]) {
        return (Action::Commit(value_after(args, i)), no_verify);
    }
    if has_flag(args, &["-ac", "--ai-commit"]) {
        return (Action::AiCommit, no_verify);
    }
    if has_flag(args, &["-l", "--log"]) {
        return (Action::Log, no_verify);
    }
    if has_flag(args, &["-rl", "--reflog"]) {
        return (Action::Reflog, no_verify);
    }
    if let Some(i) = flag_position(args, &["-rs", "--reset"]) {
        return (Action::Reset(value_after(args, i)), no_verify);
    }
    if let Some(i) = flag_position(args, &["-s", "--switch"]) {
        return (Action::Switch(value_after(args, i)), no_verify);
    }
    if let Some(i) = flag_position(args, &["-ct", "--changeTime"]) {
        return (Action::ChangeTime(value_after(args, i)), no_verify);
    }
    if has_flag(args, &["-ca", "--changeAuthor"]) {
        return (Action::ChangeAuthor, no_verify);
    }
    if has_flag(args, &["-cm", "--changeMessage"]) {
        return (Action::ChangeMessage, no_verify);
    }

    if let Some(i) = args.iter().position(|a| a == "profile") {
        return (Action::Profile(value_after(args, i)), no_verify);
    }
    if args.iter().any(|a| a == "me") {
        return (Action::Profile(None), no_verify);
    }

    (Action::Help, no_verify)
}

/// Verifies git is available and the working directory is a repository.
fn verify_environment<R: CommandRunner>(runner: &mut R) -> Result<(), ()> {
    match which::which("git") {
        Ok(_) => {}
        Err(_) => {
            eprintln!("{}", style("Error: `git` not found in PATH.").red().bold());
            return Err(());
        }
    }

    let res = runner.run(&["rev-parse", "--show-toplevel"], None);
    if !res.succeeded {
        eprintln!(
            "{}",
            style(format!("Error: not inside a git repo ({})", res.stderr))
                .red()
                .bold()
        );
        return Err(());
    }

    Ok(())
}

/// Main CLI entry point for `gli`.
///
/// Parses flags, dispatches to exactly one workflow, and returns the exit
/// code. Workflow-level git failures have already printed their single
/// error line and still exit `0`; only a broken environment (git missing
/// from PATH, not a repository) produces a non-zero exit.
pub fn entry() -> Result<i32, ()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (action, no_verify) = parse_args(&args);

    let mut runner = GitRunner;
    let mut prompter = DialoguerStringPrompter;
    let mut confirmer = DialoguerConfirmPrompter;

    match action {
        Action::Help => help::render(),
        Action::Version => println!("gli {}", env!("CARGO_PKG_VERSION")),
        Action::Profile(username) => profile::show_profile(&mut runner, username.as_deref()),
        Action::Commit(message) => {
            verify_environment(&mut runner)?;
            match message {
                Some(msg) => {
                    commit::commit_and_push(&mut runner, &msg, ".", no_verify);
                }
                None => {
                    commit::manual_commit(&mut runner, &mut prompter, no_verify);
                }
            }
        }
        Action::AiCommit => {
            verify_environment(&mut runner)?;
            let mut generator = AiService;
            commit::ai_commit(&mut runner, &mut prompter, &mut generator, no_verify);
        }
        Action::Log => {
            verify_environment(&mut runner)?;
            log::show_log(&mut runner, log::DEFAULT_COUNT);
        }
        Action::Reflog => {
            verify_environment(&mut runner)?;
            log::show_reflog(&mut runner, log::DEFAULT_COUNT);
        }
        Action::Reset(mode) => {
            verify_environment(&mut runner)?;
            match mode.as_deref().and_then(actions::ResetMode::parse) {
                Some(parsed) => {
                    actions::reset_commit(&mut runner, parsed);
                }
                None => panel::print_error("Invalid mode. Use 'soft' or 'hard'."),
            }
        }
        Action::Switch(name) => {
            verify_environment(&mut runner)?;
            match name {
                Some(branch) if !branch.trim().is_empty() => {
                    actions::switch_branch(&mut runner, branch.trim());
                }
                _ => panel::print_error("Branch name is required."),
            }
        }
        Action::ChangeTime(date) => {
            verify_environment(&mut runner)?;
            history::change_commit_time(&mut runner, &mut prompter, &mut confirmer, date);
        }
        Action::ChangeAuthor => {
            verify_environment(&mut runner)?;
            history::change_commit_author(&mut runner, &mut prompter, &mut confirmer);
        }
        Action::ChangeMessage => {
            verify_environment(&mut runner)?;
            history::change_commit_message(&mut runner, &mut prompter);
        }
    }

    Ok(0)
}
