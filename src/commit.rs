use console::{Style, style};

use crate::ai::MessageGenerator;
use crate::git::{self, CommandRunner};
use crate::panel;
use crate::prompt::{self, StringPrompter};

/// Stages `path`, commits with `message`, and pushes, establishing upstream
/// tracking on a branch's first push.
///
/// Steps run strictly in order, each gated on the previous succeeding:
///
/// 1. `add <path>`
/// 2. `commit -m <message>` (plus `--no-verify` when hooks are skipped)
/// 3. Query the current branch and its upstream status, fresh.
/// 4. Plain `push` when an upstream exists, otherwise
///    `push --set-upstream origin <branch>`.
///
/// The branch-aware push is essential: a naive unconditional `push` fails on
/// the very first push of a new branch, while always passing
/// `--set-upstream` is wasteful on every subsequent one.
///
/// On failure the accumulated partial state (staged or committed but not
/// pushed) is deliberately left as-is, mirroring git's own no-auto-revert
/// philosophy; the failing step's stderr is printed and the remaining steps
/// never run.
///
/// # Returns
///
/// `true` when every step succeeded and the confirmation panel was shown.
pub fn commit_and_push<R: CommandRunner>(
    runner: &mut R,
    message: &str,
    path: &str,
    no_verify: bool,
) -> bool {
    panel::print_status("Working on your commit");

    let staged = runner.run(&["add", path], None);
    if !staged.succeeded {
        panel::print_error(&staged.stderr);
        return false;
    }

    let mut commit_args = vec!["commit", "-m", message];
    if no_verify {
        commit_args.push("--no-verify");
    }
    let committed = runner.run(&commit_args, None);
    if !committed.succeeded {
        panel::print_error(&committed.stderr);
        return false;
    }

    let branch = git::current_branch(runner);
    let pushed = match branch {
        Some(ref name) if !git::has_upstream(runner) => {
            runner.run(&["push", "--set-upstream", "origin", name.as_str()], None)
        }
        _ => runner.run(&["push"], None),
    };
    if !pushed.succeeded {
        panel::print_error(&pushed.stderr);
        return false;
    }

    panel::print_panel(
        "Commit & Push",
        &format!("Message: {}\nStatus: Pushed to Remote", message),
        &Style::new().green(),
    );
    true
}

/// Prompts for a commit message, then stages everything and pushes.
///
/// An empty message is reported as an error before any git command runs; a
/// cancelled prompt is a benign abort.
pub fn manual_commit<R, P>(runner: &mut R, prompter: &mut P, no_verify: bool) -> bool
where
    R: CommandRunner,
    P: StringPrompter,
{
    println!("{}", style("Manual Commit").cyan().bold());
    let message = match prompt::ask(prompter, "Enter commit message", "") {
        Ok(m) => m.trim().to_string(),
        Err(_) => {
            panel::print_warning("Aborted.");
            return false;
        }
    };

    if message.is_empty() {
        panel::print_error("Commit message cannot be empty.");
        return false;
    }

    commit_and_push(runner, &message, ".", no_verify)
}

/// Orchestrates the AI-drafted commit workflow.
///
/// Stages everything, short-circuits cleanly when nothing is staged, then
/// loops over proposals from the generator:
///
/// * `1` commits and pushes the proposal as-is,
/// * `2` asks the generator for a fresh draft,
/// * `3` opens an editable input pre-filled with the draft; an empty or
///   cancelled edit returns to the proposal,
/// * anything else aborts.
pub fn ai_commit<R, P, G>(runner: &mut R, prompter: &mut P, generator: &mut G, no_verify: bool) -> bool
where
    R: CommandRunner,
    P: StringPrompter,
    G: MessageGenerator,
{
    let staged = runner.run(&["add", "."], None);
    if !staged.succeeded {
        panel::print_error(&staged.stderr);
        return false;
    }

    let diff = match git::staged_diff(runner) {
        Ok(Some(diff)) => diff,
        Ok(None) => {
            panel::print_warning("No changes detected in the repository.");
            return true;
        }
        Err(stderr) => {
            panel::print_error(&stderr);
            return false;
        }
    };

    let username = git::resolve_username(runner);
    let repo_name = git::resolve_repo_name(runner);

    loop {
        panel::print_status("Analyzing changes with AI");
        let message = match generator.generate(&diff, &username, &repo_name, "") {
            Some(m) => m,
            None => {
                panel::print_error("Failed to generate message from AI.");
                return false;
            }
        };

        println!();
        println!(
            "{} {}",
            style("AI Proposal:").cyan().bold(),
            style(&message).white().bold()
        );
        println!();
        println!("{} Commit & Push", style("[1]").cyan().bold());
        println!("{} Regenerate", style("[2]").yellow().bold());
        println!("{} Edit message manually", style("[3]").blue().bold());
        println!("{} Cancel", style("[4]").red().bold());

        let choice = match prompt::ask_choice(prompter, "Select action (1/2/3/4)") {
            Ok(c) => c,
            Err(_) => {
                panel::print_warning("Aborted.");
                return false;
            }
        };

        match choice.trim() {
            "1" => return commit_and_push(runner, &message, ".", no_verify),
            "2" => continue,
            "3" => {
                // An interrupt inside the editor counts as "no value
                // supplied" for this prompt alone, not a workflow abort.
                let edited = prompter
                    .prompt_with_initial("Edit message", &message)
                    .unwrap_or_default();
                let edited = edited.trim().to_string();
                if edited.is_empty() {
                    panel::print_warning("Message was empty or cancelled. Returning to proposal.");
                    continue;
                }
                return commit_and_push(runner, &edited, ".", no_verify);
            }
            _ => {
                println!("{}", style("Aborted.").yellow().bold());
                return true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::CommandResult;

    /// Runner that answers each expected argument vector from a script, in
    /// order, and records what actually ran.
    struct ScriptedRunner {
        calls: Vec<Vec<String>>,
        responses: Vec<CommandResult>,
    }

    impl ScriptedRunner {
        fn new(mut responses: Vec<CommandResult>) -> Self {
            responses.reverse();
            ScriptedRunner {
                calls: Vec::new(),
                responses,
            }
        }

        fn count_starting_with(&self, first: &str) -> usize {
            self.calls.iter().filter(|c| c[0] == first).count()
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&mut self, args: &[&str], _env: Option<&[(String, String)]>) -> CommandResult {
            self.calls.push(args.iter().map(|a| a.to_string()).collect());
            match self.responses.pop() {
                Some(r) => r,
                None => panic!("unexpected git invocation: {:?}", args),
            }
        }
    }

    fn ok(stdout: &str) -> CommandResult {
        CommandResult {
            succeeded: true,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    fn fail(stderr: &str) -> CommandResult {
        CommandResult {
            succeeded: false,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

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

    struct CannedGenerator {
        drafts: Vec<Option<String>>,
        requests: usize,
    }

    impl CannedGenerator {
        fn always(draft: &str) -> Self {
            CannedGenerator {
                drafts: vec![Some(draft.to_string())],
                requests: 0,
            }
        }
    }

    impl MessageGenerator for CannedGenerator {
        fn generate(
            &mut self,
            _diff: &str,
            _username: &str,
            _repo_name: &str,
            _custom: &str,
        ) -> Option<String> {
            self.requests += 1;
            match self.drafts.len() {
                1 => self.drafts[0].clone(),
                _ => self.drafts.remove(0),
            }
        }
    }

    #[test]
    fn steps_run_in_order_with_existing_upstream() {
        let mut runner = ScriptedRunner::new(vec![
            ok(""),                          // add
            ok(""),                          // commit
            ok("main"),                      // current branch
            ok("refs/remotes/origin/main"),  // upstream resolves
            ok(""),                          // push
        ]);

        let result = commit_and_push(&mut runner, "feat: add login", ".", false);

        assert_eq!(result, true);
        assert_eq!(runner.calls[0], vec!["add", "."]);
        assert_eq!(runner.calls[1], vec!["commit", "-m", "feat: add login"]);
        assert_eq!(runner.calls[4], vec!["push"]);
        assert_eq!(runner.count_starting_with("push"), 1);
    }

    #[test]
    fn missing_upstream_routes_to_set_upstream_push() {
        let mut runner = ScriptedRunner::new(vec![
            ok(""),        // add
            ok(""),        // commit
            ok("feature"), // current branch
            fail(""),      // no upstream
            ok(""),        // push --set-upstream
        ]);

        let result = commit_and_push(&mut runner, "feat: x", ".", false);

        assert_eq!(result, true);
        assert_eq!(
            runner.calls[4],
            vec!["push", "--set-upstream", "origin", "feature"]
        );
        assert_eq!(runner.count_starting_with("push"), 1);
    }

    #[test]
    fn failed_commit_prevents_push() {
        let mut runner = ScriptedRunner::new(vec![
            ok(""),                  // add
            fail("hook rejected"),   // commit
        ]);

        let result = commit_and_push(&mut runner, "feat: x", ".", false);

        assert_eq!(result, false);
        assert_eq!(runner.calls.len(), 2);
        assert_eq!(runner.count_starting_with("push"), 0);
    }

    #[test]
    fn failed_add_prevents_commit() {
        let mut runner = ScriptedRunner::new(vec![fail("pathspec error")]);

        let result = commit_and_push(&mut runner, "feat: x", ".", false);

        assert_eq!(result, false);
        assert_eq!(runner.calls.len(), 1);
    }

    #[test]
    fn no_verify_flag_is_passed_through() {
        let mut runner = ScriptedRunner::new(vec![
            ok(""),
            ok(""),
            ok("main"),
            ok("refs/remotes/origin/main"),
            ok(""),
        ]);

        commit_and_push(&mut runner, "feat: x", ".", true);

        assert_eq!(
            runner.calls[1],
            vec!["commit", "-m", "feat: x", "--no-verify"]
        );
    }

    #[test]
    fn empty_manual_message_performs_zero_git_calls() {
        let mut runner = ScriptedRunner::new(vec![]);
        let mut prompter = SeqPrompter::new(&["   "]);

        let result = manual_commit(&mut runner, &mut prompter, false);

        assert_eq!(result, false);
        assert_eq!(runner.calls.len(), 0);
    }

    #[test]
    fn absent_staged_diff_short_circuits_ai_commit() {
        let mut runner = ScriptedRunner::new(vec![
            ok(""), // add
            ok(""), // diff --staged, empty
        ]);
        let mut prompter = SeqPrompter::new(&[]);
        let mut generator = CannedGenerator::always("feat: never used");

        let result = ai_commit(&mut runner, &mut prompter, &mut generator, false);

        assert_eq!(result, true);
        assert_eq!(generator.requests, 0);
        assert_eq!(runner.count_starting_with("commit"), 0);
        assert_eq!(runner.count_starting_with("push"), 0);
    }

    #[test]
    fn accepted_proposal_is_committed_verbatim() {
        let mut runner = ScriptedRunner::new(vec![
            ok(""),                          // add .
            ok("diff --git a/x b/x"),        // staged diff
            ok("octocat"),                   // github.user
            ok("git@github.com:o/r.git"),    // remote url
            ok(""),                          // add . (commit_and_push)
            ok(""),                          // commit
            ok("main"),                      // branch
            ok("refs/remotes/origin/main"),  // upstream
            ok(""),                          // push
        ]);
        let mut prompter = SeqPrompter::new(&["1"]);
        let mut generator = CannedGenerator::always("feat: generated message");

        let result = ai_commit(&mut runner, &mut prompter, &mut generator, false);

        assert_eq!(result, true);
        assert_eq!(generator.requests, 1);
        assert!(
            runner
                .calls
                .iter()
                .any(|c| c == &vec!["commit", "-m", "feat: generated message"])
        );
    }

    #[test]
    fn edited_proposal_replaces_draft() {
        let mut runner = ScriptedRunner::new(vec![
            ok(""),
            ok("diff --git a/x b/x"),
            ok("octocat"),
            ok("git@github.com:o/r.git"),
            ok(""),
            ok(""),
            ok("main"),
            ok("refs/remotes/origin/main"),
            ok(""),
        ]);
        let mut prompter = SeqPrompter::new(&["3", "feat: hand-tuned message"]);
        let mut generator = CannedGenerator::always("feat: draft");

        let result = ai_commit(&mut runner, &mut prompter, &mut generator, false);

        assert_eq!(result, true);
        assert!(
            runner
                .calls
                .iter()
                .any(|c| c == &vec!["commit", "-m", "feat: hand-tuned message"])
        );
    }

    #[test]
    fn failed_generation_stops_without_committing() {
        let mut runner = ScriptedRunner::new(vec![
            ok(""),
            ok("diff --git a/x b/x"),
            ok("octocat"),
            ok("git@github.com:o/r.git"),
        ]);
        let mut prompter = SeqPrompter::new(&[]);
        let mut generator = CannedGenerator {
            drafts: vec![None],
            requests: 0,
        };

        let result = ai_commit(&mut runner, &mut prompter, &mut generator, false);

        assert_eq!(result, false);
        assert_eq!(runner.count_starting_with("commit"), 0);
    }

    #[test]
    fn cancel_choice_aborts_cleanly() {
        let mut runner = ScriptedRunner::new(vec![
            ok(""),
            ok("diff --git a/x b/x"),
            ok("octocat"),
            ok("git@github.com:o/r.git"),
        ]);
        let mut prompter = SeqPrompter::new(&["4"]);
        let mut generator = CannedGenerator::always("feat: draft");

        let result = ai_commit(&mut runner, &mut prompter, &mut generator, false);

        assert_eq!(result, true);
        assert_eq!(runner.count_starting_with("commit"), 0);
        assert_eq!(runner.count_starting_with("push"), 0);
    }
}
