use std::process::{Command, Stdio};

/// Outcome of a single `git` invocation.
///
/// Every command executed through a [`CommandRunner`] produces one of these,
/// regardless of whether the command mutated the repository or only queried
/// it. Failure is never raised past the runner boundary; callers inspect
/// `succeeded` and decide what to do with the captured streams.
///
/// Both `stdout` and `stderr` are captured, lossily decoded as UTF-8, and
/// trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    /// `true` if the process exited with status code `0`.
    pub succeeded: bool,
    /// Trimmed standard output of the command.
    pub stdout: String,
    /// Trimmed standard error of the command, or the spawn error message if
    /// the process could not be started at all.
    pub stderr: String,
}

/// Abstraction over running `git` subcommands.
///
/// Implementors define how a git argument vector is executed. The production
/// implementation ([`GitRunner`]) spawns the real `git` binary; tests inject
/// recording fakes so that workflow logic (step ordering, fail-fast gating,
/// amend-versus-filter-branch routing) can be asserted without touching a
/// repository.
pub trait CommandRunner {
    /// Execute `git` with the given arguments.
    ///
    /// # Parameters
    ///
    /// * `args` - Arguments passed to `git` (without the leading `"git"`).
    /// * `env` - Optional environment overrides, merged on top of the
    ///   inherited process environment. An override wins on key collision.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] describing the exit status and captured streams.
    fn run(&mut self, args: &[&str], env: Option<&[(String, String)]>) -> CommandResult;
}

/// Production [`CommandRunner`] that spawns the system `git` binary.
///
/// Always injects `FILTER_BRANCH_SQUELCH_WARNING=1` so automated
/// `filter-branch` rewrites run without git's deprecation banner.
pub struct GitRunner;

impl CommandRunner for GitRunner {
    fn run(&mut self, args: &[&str], env: Option<&[(String, String)]>) -> CommandResult {
        let mut cmd = Command::new("git");
        cmd.args(args);
        cmd.env("FILTER_BRANCH_SQUELCH_WARNING", "1");
        if let Some(overrides) = env {
            for (key, value) in overrides {
                cmd.env(key, value);
            }
        }
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        match cmd.output() {
            Ok(out) => CommandResult {
                succeeded: out.status.success(),
                stdout: String::from_utf8_lossy(&out.stdout).trim().to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            },
            Err(e) => CommandResult {
                succeeded: false,
                stdout: String::new(),
                stderr: format!("{}", e),
            },
        }
    }
}

/// Runs `git config --get <key>` and returns the value, or `None` if unset.
///
/// A missing key is a normal, expected state (e.g. a repository with no
/// `github.user` configured), not a failure: command failure and an empty
/// value both map to `None`.
///
/// # Parameters
///
/// * `runner` - The command runner to execute through.
/// * `key` - The git configuration key to query (e.g. `"user.name"`).
///
/// # Returns
///
/// * `Some(String)` containing the trimmed config value.
/// * `None` when the key is unset or the lookup failed.
///
/// # Examples
///
/// ```ignore
/// // Ignored because it requires a git repository with configuration.
/// let mut runner = GitRunner;
/// match config_get(&mut runner, "user.name") {
///     Some(name) => println!("User name: {}", name),
///     None => println!("No user name configured."),
/// }
/// ```
pub fn config_get<R: CommandRunner>(runner: &mut R, key: &str) -> Option<String> {
    let res = runner.run(&["config", "--get", key], None);
    if res.succeeded && !res.stdout.is_empty() {
        Some(res.stdout)
    } else {
        None
    }
}

/// Placeholder identity used when no username can be resolved from config.
pub const FALLBACK_USERNAME: &str = "unknown-user";

/// Placeholder repository name used when no remote is configured.
pub const FALLBACK_REPO_NAME: &str = "unknown-repo";

/// Detects the GitHub username from git configuration.
///
/// Tries `github.user` first, then falls back to `user.name`. If both are
/// absent, returns [`FALLBACK_USERNAME`] rather than failing: downstream
/// consumers (AI request, profile lookup) need some identity string to
/// proceed with degraded functionality instead of aborting.
pub fn resolve_username<R: CommandRunner>(runner: &mut R) -> String {
    match config_get(runner, "github.user") {
        Some(user) => user,
        None => match config_get(runner, "user.name") {
            Some(name) => name,
            None => String::from(FALLBACK_USERNAME),
        },
    }
}

/// Extracts the repository name from the `remote.origin.url` configuration.
///
/// Parses the last path segment of the remote URL and strips a trailing
/// `.git` suffix. Falls back to [`FALLBACK_REPO_NAME`] when no remote is
/// configured.
///
/// # Examples
///
/// ```ignore
/// // "git@github.com:someone/my-tool.git" resolves to "my-tool".
/// let name = resolve_repo_name(&mut GitRunner);
/// ```
pub fn resolve_repo_name<R: CommandRunner>(runner: &mut R) -> String {
    match config_get(runner, "remote.origin.url") {
        Some(url) => repo_name_from_url(&url),
        None => String::from(FALLBACK_REPO_NAME),
    }
}

/// Derives a repository name from a remote URL.
///
/// Takes the last `/`-separated segment and strips a trailing `.git`.
pub(crate) fn repo_name_from_url(url: &str) -> String {
    let last = match url.rsplit('/').next() {
        Some(segment) => segment,
        None => url,
    };
    match last.strip_suffix(".git") {
        Some(stripped) => stripped.to_string(),
        None => last.to_string(),
    }
}

/// Returns the name of the currently checked-out branch.
///
/// Runs `git rev-parse --abbrev-ref HEAD`. Fails softly: a detached HEAD
/// (git prints the literal `HEAD`) and an unborn repository both map to
/// `None` rather than an error.
pub fn current_branch<R: CommandRunner>(runner: &mut R) -> Option<String> {
    let res = runner.run(&["rev-parse", "--abbrev-ref", "HEAD"], None);
    if !res.succeeded || res.stdout.is_empty() || res.stdout == "HEAD" {
        None
    } else {
        Some(res.stdout)
    }
}

/// Reports whether the current branch has an upstream tracking branch.
///
/// Determined by attempting to resolve `@{u}`; absence of an upstream is not
/// an error, it is the trigger for the set-upstream push variant. The status
/// is queried fresh before every push decision and never cached, since a
/// newly created branch literally has no upstream yet.
pub fn has_upstream<R: CommandRunner>(runner: &mut R) -> bool {
    runner
        .run(&["rev-parse", "--symbolic-full-name", "@{u}"], None)
        .succeeded
}

/// Returns the diff of staged changes, if any.
///
/// Runs `git diff --staged`.
///
/// # Returns
///
/// * `Ok(Some(diff))` when changes are staged.
/// * `Ok(None)` when nothing is staged. This is a valid, common state that
///   callers must short-circuit on cleanly rather than attempting a no-op
///   commit.
/// * `Err(String)` with the captured stderr when the command itself failed.
pub fn staged_diff<R: CommandRunner>(runner: &mut R) -> Result<Option<String>, String> {
    let res = runner.run(&["diff", "--staged"], None);
    if !res.succeeded {
        return Err(res.stderr);
    }
    if res.stdout.is_empty() {
        Ok(None)
    } else {
        Ok(Some(res.stdout))
    }
}
