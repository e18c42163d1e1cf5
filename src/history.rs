use console::{Style, style};

use crate::git::{CommandResult, CommandRunner};
use crate::panel;
use crate::prompt::{self, ConfirmPrompter, StringPrompter};

/// Which commit(s) a history rewrite touches.
///
/// The scope determines the *mechanism*, not just the target: the last
/// commit alone is amended in place, while a specific commit or the whole
/// branch goes through an environment-filter rewrite that replays every
/// commit on the branch.
#[derive(Debug, Clone, PartialEq)]
pub enum ModificationScope {
    /// Only the most recent commit (amend; fast and safe).
    SingleLast,
    /// Every commit whose hash starts with the stored fragment
    /// (filter-branch with a match guard).
    SpecificHash(String),
    /// Every commit in the branch (filter-branch, unconditional).
    AllInBranch,
}

impl ModificationScope {
    /// `true` for the scopes that rewrite the whole branch.
    fn is_history_wide(&self) -> bool {
        !matches!(self, ModificationScope::SingleLast)
    }

    /// Label shown in the report panel: the hash fragment for a specific
    /// commit, otherwise the scope name.
    fn target_label(&self) -> String {
        match self {
            ModificationScope::SingleLast => String::from("Single"),
            ModificationScope::SpecificHash(hash) => hash.clone(),
            ModificationScope::AllInBranch => String::from("All"),
        }
    }
}

/// A fully prepared rewrite invocation: the git argument vector plus any
/// environment overrides. Built by the pure plan constructors below and
/// executed exactly once.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RewritePlan {
    pub args: Vec<String>,
    pub env: Option<Vec<(String, String)>>,
}

impl RewritePlan {
    fn execute<R: CommandRunner>(&self, runner: &mut R) -> CommandResult {
        let args: Vec<&str> = self.args.iter().map(|a| a.as_str()).collect();
        runner.run(&args, self.env.as_deref())
    }
}

/// Wraps an env-filter export block in the scope's match guard.
///
/// For [`ModificationScope::SpecificHash`] the exports only fire for
/// commits whose hash has the fragment as a prefix; a non-matching fragment
/// makes the whole rewrite a no-op, which git reports as success. For every
/// other scope the exports apply unconditionally.
pub(crate) fn env_filter_script(exports: &str, scope: &ModificationScope) -> String {
    match scope {
        ModificationScope::SpecificHash(hash) => {
            format!("case \"$GIT_COMMIT\" in {}*) {} ;; esac", hash, exports)
        }
        _ => exports.to_string(),
    }
}

/// Builds the invocation for a timestamp rewrite.
///
/// * `SingleLast` amends HEAD, passing the date both as `--date` and as the
///   author/committer date environment pair so both timestamps move.
/// * History-wide scopes run `filter-branch -f --env-filter` over HEAD with
///   the date exports (guarded for a specific hash).
pub(crate) fn timestamp_plan(scope: &ModificationScope, date_str: &str) -> RewritePlan {
    if scope.is_history_wide() {
        let exports = format!(
            "export GIT_AUTHOR_DATE='{d}'; export GIT_COMMITTER_DATE='{d}'",
            d = date_str
        );
        return RewritePlan {
            args: filter_branch_args(&env_filter_script(&exports, scope)),
            env: None,
        };
    }

    RewritePlan {
        args: vec![
            String::from("commit"),
            String::from("--amend"),
            String::from("--no-edit"),
            String::from("--date"),
            date_str.to_string(),
        ],
        env: Some(vec![
            (String::from("GIT_AUTHOR_DATE"), date_str.to_string()),
            (String::from("GIT_COMMITTER_DATE"), date_str.to_string()),
        ]),
    }
}

/// Builds the invocation for an author rewrite.
///
/// `SingleLast` amends HEAD with `--author`; history-wide scopes export all
/// four author/committer identity variables through the env filter.
pub(crate) fn author_plan(scope: &ModificationScope, name: &str, email: &str) -> RewritePlan {
    if scope.is_history_wide() {
        let exports = format!(
            "export GIT_AUTHOR_NAME='{n}'; export GIT_AUTHOR_EMAIL='{e}'; \
             export GIT_COMMITTER_NAME='{n}'; export GIT_COMMITTER_EMAIL='{e}'",
            n = name,
            e = email
        );
        return RewritePlan {
            args: filter_branch_args(&env_filter_script(&exports, scope)),
            env: None,
        };
    }

    RewritePlan {
        args: vec![
            String::from("commit"),
            String::from("--amend"),
            String::from("--no-edit"),
            format!("--author={} <{}>", name, email),
        ],
        env: None,
    }
}

/// Builds the invocation replacing the last commit's message. Message
/// rewrites only ever operate on HEAD, so no scope is involved.
pub(crate) fn message_plan(new_message: &str) -> RewritePlan {
    RewritePlan {
        args: vec![
            String::from("commit"),
            String::from("--amend"),
            String::from("-m"),
            new_message.to_string(),
        ],
        env: None,
    }
}

fn filter_branch_args(script: &str) -> Vec<String> {
    vec![
        String::from("filter-branch"),
        String::from("-f"),
        String::from("--env-filter"),
        script.to_string(),
        String::from("--"),
        String::from("HEAD"),
    ]
}

/// Presents the scope menu and maps the operator's answer.
///
/// `"1"` and any unrecognized input select [`ModificationScope::SingleLast`]
/// (the safest, most limited option is the fallback, not an error); `"2"`
/// immediately collects the hash fragment; `"3"` selects the whole branch.
fn select_scope<P: StringPrompter>(
    prompter: &mut P,
    title: &str,
) -> Result<ModificationScope, String> {
    panel::print_panel(
        title,
        "[1] Last Commit Only\n[2] Specific Commit (by Hash)\n[3] All Commits in Branch",
        &Style::new().green(),
    );

    let choice = prompt::ask_choice(prompter, "Select scope (1/2/3)")?;
    match choice.trim() {
        "2" => {
            let hash = prompt::ask_choice(prompter, "Enter commit hash")?;
            Ok(ModificationScope::SpecificHash(hash.trim().to_string()))
        }
        "3" => Ok(ModificationScope::AllInBranch),
        _ => Ok(ModificationScope::SingleLast),
    }
}

/// Collects the new timestamp, either pre-supplied from the CLI or gathered
/// interactively as a date plus a 24-hour time, concatenated to
/// `YYYY-MM-DD HH:MM:00`. No timezone handling: the operator's local
/// git/environment interpretation applies.
fn collect_timestamp<P: StringPrompter>(
    prompter: &mut P,
    pre_supplied: Option<String>,
) -> Result<String, String> {
    match pre_supplied {
        Some(date_str) => Ok(date_str),
        None => {
            let date = prompt::ask_choice(prompter, "Select commit date (YYYY-MM-DD)")?;
            let time = prompt::ask_choice(prompter, "Select commit time (HH:MM, 24h)")?;
            Ok(format!("{} {}:00", date.trim(), time.trim()))
        }
    }
}

/// Confirms a branch-wide rewrite when the scope requires one.
///
/// Returns `false` (after a notice) when the operator declines or cancels;
/// single-commit amends skip the question entirely.
fn confirm_if_destructive<C: ConfirmPrompter>(confirmer: &mut C, scope: &ModificationScope) -> bool {
    if !scope.is_history_wide() {
        return true;
    }
    match prompt::confirm_rewrite(confirmer) {
        Ok(true) => true,
        Ok(false) => {
            panel::print_warning("Canceled by user. No changes made.");
            false
        }
        Err(_) => {
            panel::print_warning("Aborted.");
            false
        }
    }
}

/// Validates a selected scope; an empty hash fragment would turn the match
/// guard into a catch-all, so it is rejected before anything runs.
fn scope_is_valid(scope: &ModificationScope) -> bool {
    match scope {
        ModificationScope::SpecificHash(hash) if hash.is_empty() => {
            panel::print_error("Commit hash cannot be empty.");
            false
        }
        _ => true,
    }
}

/// Interactive workflow rewriting commit timestamps.
///
/// Walks ScopeSelection, DetailCollection, Execution, Report. Never pushes;
/// after a branch-wide rewrite, force-pushing is left to the operator.
///
/// # Returns
///
/// `true` if the rewrite ran and succeeded; `false` on git failure or a
/// benign operator abort (both already reported).
pub fn change_commit_time<R, P, C>(
    runner: &mut R,
    prompter: &mut P,
    confirmer: &mut C,
    pre_supplied_date: Option<String>,
) -> bool
where
    R: CommandRunner,
    P: StringPrompter,
    C: ConfirmPrompter,
{
    let scope = match select_scope(prompter, "Time Warp Controller") {
        Ok(s) => s,
        Err(_) => {
            panel::print_warning("Aborted.");
            return false;
        }
    };
    if !scope_is_valid(&scope) {
        return false;
    }

    let date_str = match collect_timestamp(prompter, pre_supplied_date) {
        Ok(d) => d,
        Err(_) => {
            panel::print_warning("Aborted.");
            return false;
        }
    };

    if !confirm_if_destructive(confirmer, &scope) {
        return false;
    }

    if scope.is_history_wide() {
        panel::print_status("Rewriting history");
    } else {
        panel::print_status(&format!("Updating last commit to {}", date_str));
    }

    let res = timestamp_plan(&scope, &date_str).execute(runner);
    if !res.succeeded {
        panel::print_error(&res.stderr);
        return false;
    }

    panel::print_panel(
        "Time Warp",
        &format!(
            "Target: {}\nNew Timestamp: {}",
            scope.target_label(),
            date_str
        ),
        &Style::new().yellow(),
    );
    true
}

/// Interactive workflow rewriting the commit author identity.
///
/// Collects a display name and an email address, composed into a single
/// `Name <email>` identity applied to both author and committer.
pub fn change_commit_author<R, P, C>(runner: &mut R, prompter: &mut P, confirmer: &mut C) -> bool
where
    R: CommandRunner,
    P: StringPrompter,
    C: ConfirmPrompter,
{
    let scope = match select_scope(prompter, "Identity Swapper") {
        Ok(s) => s,
        Err(_) => {
            panel::print_warning("Aborted.");
            return false;
        }
    };
    if !scope_is_valid(&scope) {
        return false;
    }

    let (name, email) = match collect_identity(prompter) {
        Ok(pair) => pair,
        Err(_) => {
            panel::print_warning("Aborted.");
            return false;
        }
    };

    if !confirm_if_destructive(confirmer, &scope) {
        return false;
    }

    if scope.is_history_wide() {
        panel::print_status("Rewriting author in history");
    } else {
        panel::print_status("Changing last commit identity");
    }

    let res = author_plan(&scope, &name, &email).execute(runner);
    if !res.succeeded {
        panel::print_error(&res.stderr);
        return false;
    }

    panel::print_panel(
        "Identity Swapped",
        &format!(
            "Target: {}\nNew Author: {} <{}>",
            scope.target_label(),
            name,
            email
        ),
        &Style::new().green(),
    );
    true
}

fn collect_identity<P: StringPrompter>(prompter: &mut P) -> Result<(String, String), String> {
    let name = prompt::ask_choice(prompter, "Enter author name")?;
    let email = prompt::ask_choice(prompter, "Enter author email")?;
    Ok((name.trim().to_string(), email.trim().to_string()))
}

/// Interactive workflow replacing the most recent commit's message. Always
/// targets HEAD alone; no scope selection is offered. Amending with the same
/// message twice is idempotent.
pub fn change_commit_message<R, P>(runner: &mut R, prompter: &mut P) -> bool
where
    R: CommandRunner,
    P: StringPrompter,
{
    println!("{}", style("Message Rewriter").green().bold());
    let new_message = match prompt::ask_choice(prompter, "Enter new commit message") {
        Ok(m) => m.trim().to_string(),
        Err(_) => {
            panel::print_warning("Aborted.");
            return false;
        }
    };
    if new_message.is_empty() {
        panel::print_error("Commit message cannot be empty.");
        return false;
    }

    panel::print_status("Updating message");
    let res = message_plan(&new_message).execute(runner);
    if !res.succeeded {
        panel::print_error(&res.stderr);
        return false;
    }

    panel::print_panel(
        "Message Updated",
        &format!("New Message: {}", new_message),
        &Style::new().green(),
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Prompter answering from a scripted queue, front first.
    struct SeqPrompter {
        responses: Vec<String>,
    }

    impl SeqPrompter {
        fn new(responses: &[&str]) -> Self {
            SeqPrompter {
                responses: responses.iter().rev().map(|r| r.to_string()).collect(),
            }
        }
    }

    impl StringPrompter for SeqPrompter {
        fn prompt(&mut self, _prompt: &str, _default: &str) -> Result<String, String> {
            match self.responses.pop() {
                Some(r) => Ok(r),
                None => Err(String::from("no scripted response left")),
            }
        }

        fn prompt_with_initial(&mut self, prompt: &str, _initial: &str) -> Result<String, String> {
            self.prompt(prompt, "")
        }
    }

    struct FixedConfirm {
        answer: bool,
    }

    impl ConfirmPrompter for FixedConfirm {
        fn confirm(&mut self, _prompt: &str, _default: bool) -> Result<bool, String> {
            Ok(self.answer)
        }
    }

    struct RecordingRunner {
        calls: Vec<Vec<String>>,
        envs: Vec<Option<Vec<(String, String)>>>,
    }

    impl RecordingRunner {
        fn new() -> Self {
            RecordingRunner {
                calls: Vec::new(),
                envs: Vec::new(),
            }
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&mut self, args: &[&str], env: Option<&[(String, String)]>) -> CommandResult {
            self.calls.push(args.iter().map(|a| a.to_string()).collect());
            self.envs.push(env.map(|e| e.to_vec()));
            CommandResult {
                succeeded: true,
                stdout: String::new(),
                stderr: String::new(),
            }
        }
    }

    #[test]
    fn single_scope_produces_exactly_one_amend() {
        let mut runner = RecordingRunner::new();
        let mut prompter = SeqPrompter::new(&["1"]);
        let mut confirmer = FixedConfirm { answer: true };

        let ok = change_commit_time(
            &mut runner,
            &mut prompter,
            &mut confirmer,
            Some(String::from("2024-01-01 10:00:00")),
        );

        assert_eq!(ok, true);
        assert_eq!(runner.calls.len(), 1);
        assert_eq!(runner.calls[0][0], "commit");
        assert_eq!(runner.calls[0][1], "--amend");
        assert!(runner.calls.iter().all(|c| c[0] != "filter-branch"));
    }

    #[test]
    fn unrecognized_scope_input_falls_back_to_single() {
        let mut runner = RecordingRunner::new();
        let mut prompter = SeqPrompter::new(&["bananas"]);
        let mut confirmer = FixedConfirm { answer: true };

        change_commit_time(
            &mut runner,
            &mut prompter,
            &mut confirmer,
            Some(String::from("2024-01-01 10:00:00")),
        );

        assert_eq!(runner.calls.len(), 1);
        assert_eq!(runner.calls[0][0], "commit");
    }

    #[test]
    fn all_scope_routes_to_filter_branch() {
        let mut runner = RecordingRunner::new();
        let mut prompter = SeqPrompter::new(&["3", "Jane", "jane@example.com"]);
        let mut confirmer = FixedConfirm { answer: true };

        let ok = change_commit_author(&mut runner, &mut prompter, &mut confirmer);

        assert_eq!(ok, true);
        assert_eq!(runner.calls.len(), 1);
        assert_eq!(runner.calls[0][0], "filter-branch");
        assert_eq!(runner.calls[0][1], "-f");
        assert_eq!(runner.calls[0][2], "--env-filter");
    }

    #[test]
    fn declined_confirmation_runs_nothing() {
        let mut runner = RecordingRunner::new();
        let mut prompter = SeqPrompter::new(&["3", "Jane", "jane@example.com"]);
        let mut confirmer = FixedConfirm { answer: false };

        let ok = change_commit_author(&mut runner, &mut prompter, &mut confirmer);

        assert_eq!(ok, false);
        assert_eq!(runner.calls.len(), 0);
    }

    #[test]
    fn empty_hash_runs_nothing() {
        let mut runner = RecordingRunner::new();
        let mut prompter = SeqPrompter::new(&["2", ""]);
        let mut confirmer = FixedConfirm { answer: true };

        let ok = change_commit_time(
            &mut runner,
            &mut prompter,
            &mut confirmer,
            Some(String::from("2024-01-01 10:00:00")),
        );

        assert_eq!(ok, false);
        assert_eq!(runner.calls.len(), 0);
    }

    #[test]
    fn specific_hash_script_is_guarded() {
        let scope = ModificationScope::SpecificHash(String::from("abc123"));
        let script = env_filter_script("export GIT_AUTHOR_NAME='x'", &scope);
        assert!(script.starts_with("case \"$GIT_COMMIT\" in abc123*)"));
        assert!(script.ends_with(";; esac"));
    }

    #[test]
    fn all_in_branch_script_has_no_guard() {
        let scope = ModificationScope::AllInBranch;
        let script = env_filter_script("export GIT_AUTHOR_NAME='x'", &scope);
        assert_eq!(script, "export GIT_AUTHOR_NAME='x'");
        assert!(!script.contains("case"));
    }

    #[test]
    fn single_timestamp_plan_sets_both_dates() {
        let plan = timestamp_plan(&ModificationScope::SingleLast, "2024-01-01 10:00:00");
        assert_eq!(plan.args[0], "commit");
        let env = plan.env.expect("amend plan should carry env overrides");
        let keys: Vec<&str> = env.iter().map(|(k, _)| k.as_str()).collect();
        assert!(keys.contains(&"GIT_AUTHOR_DATE"));
        assert!(keys.contains(&"GIT_COMMITTER_DATE"));
    }

    #[test]
    fn wide_timestamp_plan_exports_dates_in_script() {
        let plan = timestamp_plan(&ModificationScope::AllInBranch, "2024-01-01 10:00:00");
        assert_eq!(plan.args[0], "filter-branch");
        assert_eq!(plan.env, None);
        let script = &plan.args[3];
        assert!(script.contains("export GIT_AUTHOR_DATE='2024-01-01 10:00:00'"));
        assert!(script.contains("export GIT_COMMITTER_DATE='2024-01-01 10:00:00'"));
        assert_eq!(plan.args[4], "--");
        assert_eq!(plan.args[5], "HEAD");
    }

    #[test]
    fn author_amend_plan_formats_identity() {
        let plan = author_plan(&ModificationScope::SingleLast, "Jane", "jane@example.com");
        assert!(plan.args.contains(&String::from("--author=Jane <jane@example.com>")));
        assert_eq!(plan.env, None);
    }

    #[test]
    fn guarded_author_plan_exports_all_four_variables() {
        let scope = ModificationScope::SpecificHash(String::from("deadbee"));
        let plan = author_plan(&scope, "Jane", "jane@example.com");
        let script = &plan.args[3];
        assert!(script.contains("in deadbee*)"));
        assert!(script.contains("GIT_AUTHOR_NAME"));
        assert!(script.contains("GIT_AUTHOR_EMAIL"));
        assert!(script.contains("GIT_COMMITTER_NAME"));
        assert!(script.contains("GIT_COMMITTER_EMAIL"));
    }

    #[test]
    fn message_plan_is_idempotent_for_same_message() {
        let first = message_plan("fix: final wording");
        let second = message_plan("fix: final wording");
        assert_eq!(first, second);
    }

    #[test]
    fn empty_message_runs_nothing() {
        let mut runner = RecordingRunner::new();
        let mut prompter = SeqPrompter::new(&["   "]);
        let ok = change_commit_message(&mut runner, &mut prompter);
        assert_eq!(ok, false);
        assert_eq!(runner.calls.len(), 0);
    }

    #[test]
    fn message_rewrite_amends_head() {
        let mut runner = RecordingRunner::new();
        let mut prompter = SeqPrompter::new(&["docs: clarify readme"]);
        let ok = change_commit_message(&mut runner, &mut prompter);
        assert_eq!(ok, true);
        assert_eq!(runner.calls.len(), 1);
        assert_eq!(
            runner.calls[0],
            vec!["commit", "--amend", "-m", "docs: clarify readme"]
        );
    }
}
