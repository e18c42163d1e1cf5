use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::blocking::Client;
use serde_json::{Value, json};

/// Obfuscated endpoint of the commit-generation backend, decoded once per
/// request. Not a security boundary, just keeps the raw URL out of casual
/// greps.
const ENDPOINT_B64: &str = "aHR0cHM6Ly9kaW55LWNsaS52ZXJjZWwuYXBwL2FwaS92Mi9jb21taXQ=";

/// Hard deadline for a commit-generation request.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Abstraction over drafting a commit message from a staged diff.
///
/// The production implementation ([`AiService`]) calls the remote backend;
/// tests inject canned generators so the AI commit workflow's branching
/// (proposal, regenerate, edit, cancel) can be driven without a network.
pub trait MessageGenerator {
    /// Draft a commit message for the given staged diff.
    ///
    /// # Returns
    ///
    /// * `Some(message)` when the backend produced a usable draft.
    /// * `None` on any network failure, non-success status, or malformed
    ///   response; the caller surfaces this as a single error line.
    fn generate(
        &mut self,
        diff: &str,
        username: &str,
        repo_name: &str,
        custom_instructions: &str,
    ) -> Option<String>;
}

/// Production [`MessageGenerator`] backed by the remote commit-generation
/// service.
pub struct AiService;

impl MessageGenerator for AiService {
    fn generate(
        &mut self,
        diff: &str,
        username: &str,
        repo_name: &str,
        custom_instructions: &str,
    ) -> Option<String> {
        let url = endpoint()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .ok()?;

        let payload = commit_payload(diff, username, repo_name, custom_instructions);
        let response = client.post(url).json(&payload).send().ok()?;
        if !response.status().is_success() {
            return None;
        }

        let body: Value = response.json().ok()?;
        extract_message(&body)
    }
}

/// Decodes the backend URL from its base64 constant.
fn endpoint() -> Option<String> {
    let bytes = STANDARD.decode(ENDPOINT_B64).ok()?;
    String::from_utf8(bytes).ok()
}

/// Builds the JSON payload for a commit-generation request.
///
/// Carries the staged diff plus the identity and commit-style configuration
/// the backend expects: conventional-commit types, the emoji map, tone and
/// length, and optional free-form instructions.
pub(crate) fn commit_payload(
    diff: &str,
    username: &str,
    repo_name: &str,
    custom_instructions: &str,
) -> Value {
    json!({
        "gitDiff": diff,
        "version": concat!("v", env!("CARGO_PKG_VERSION")),
        "name": username,
        "repoName": repo_name,
        "system": "linux",
        "config": {
            "Theme": "catppuccin",
            "Commit": {
                "Conventional": true,
                "ConventionalFormat": [
                    "feat", "fix", "docs", "chore", "style", "refactor", "test", "perf"
                ],
                "Emoji": false,
                "EmojiMap": {
                    "feat": "🚀", "fix": "🐛", "docs": "📚", "style": "🎨",
                    "refactor": "♻️", "test": "✅", "chore": "🔧", "perf": "⚡"
                },
                "Tone": "casual",
                "Length": "short",
                "CustomInstructions": custom_instructions,
                "HashAfterCommit": false
            }
        }
    })
}

/// Pulls the drafted message out of a backend reply (`data.commitMessage`).
pub(crate) fn extract_message(body: &Value) -> Option<String> {
    body.get("data")?
        .get("commitMessage")?
        .as_str()
        .map(|s| s.to_string())
}
