use console::Style;

use crate::git::CommandRunner;
use crate::panel;

/// How far a reset unwinds the working tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResetMode {
    /// Keep the undone changes staged.
    Soft,
    /// Discard the undone changes entirely.
    Hard,
}

impl ResetMode {
    /// Parses the CLI argument into a mode; anything other than `soft` or
    /// `hard` is rejected.
    pub fn parse(raw: &str) -> Option<ResetMode> {
        match raw {
            "soft" => Some(ResetMode::Soft),
            "hard" => Some(ResetMode::Hard),
            _ => None,
        }
    }

    fn flag(&self) -> &'static str {
        match self {
            ResetMode::Soft => "--soft",
            ResetMode::Hard => "--hard",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ResetMode::Soft => "soft",
            ResetMode::Hard => "hard",
        }
    }
}

/// Resets the current branch head to the previous commit (`HEAD~1`).
///
/// # Returns
///
/// `true` on success; `false` after printing the captured git error.
pub fn reset_commit<R: CommandRunner>(runner: &mut R, mode: ResetMode) -> bool {
    panel::print_status(&format!("Resetting: {}", mode.label()));
    let res = runner.run(&["reset", mode.flag(), "HEAD~1"], None);
    if !res.succeeded {
        panel::print_error(&res.stderr);
        return false;
    }

    panel::print_panel(
        "Git Reset",
        &format!("Reset to HEAD~1 using {} mode.", mode.label()),
        &Style::new().red(),
    );
    true
}

/// Creates a new branch, switches to it, and pushes it with upstream
/// tracking.
///
/// Exactly two git invocations: `checkout -b <name>` then
/// `push -u origin <name>`. The first failure aborts the workflow with the
/// captured stderr; partial state (branch created but not pushed) is left
/// as-is.
pub fn switch_branch<R: CommandRunner>(runner: &mut R, name: &str) -> bool {
    panel::print_status(&format!("Switching to {}", name));
    let created = runner.run(&["checkout", "-b", name], None);
    if !created.succeeded {
        panel::print_error(&created.stderr);
        return false;
    }

    let pushed = runner.run(&["push", "-u", "origin", name], None);
    if !pushed.succeeded {
        panel::print_error(&pushed.stderr);
        return false;
    }

    panel::print_panel(
        "Branch Switch",
        &format!("Active Branch: {}\nTracking origin.", name),
        &Style::new().blue(),
    );
    true
}
