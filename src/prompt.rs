use dialoguer::{Confirm, Input, theme::ColorfulTheme};

/// Abstraction over a string input prompt.
///
/// Implementors define how string input is collected from the user,
/// including any styling or interactivity. This trait enables testability
/// by decoupling user input from the workflow logic that consumes it.
pub trait StringPrompter {
    /// Prompt the user for a string input.
    ///
    /// # Parameters
    /// - `prompt`: The message shown to the user.
    /// - `default`: Default value if the user presses Enter without input.
    ///
    /// # Returns
    /// `Ok(String)` if input is successfully collected, or an `Err(String)`
    /// describing the failure (including an operator interrupt).
    fn prompt(&mut self, prompt: &str, default: &str) -> Result<String, String>;

    /// Prompt the user with an editable input buffer pre-filled with
    /// `initial`.
    ///
    /// The operator can edit the proposed text in place and submit the final
    /// version, or clear it entirely. Used to let an AI-drafted commit
    /// message be touched up before committing.
    fn prompt_with_initial(&mut self, prompt: &str, initial: &str) -> Result<String, String>;
}

/// Abstraction over a boolean (yes/no) confirmation prompt.
///
/// This trait allows interactive confirmation to be injected or mocked,
/// promoting testability in CLI workflows.
pub trait ConfirmPrompter {
    /// Prompt the user for a yes/no confirmation.
    ///
    /// # Parameters
    /// - `prompt`: The confirmation message.
    /// - `default`: The default answer if the user presses Enter.
    ///
    /// # Returns
    /// `Ok(true)` if confirmed, `Ok(false)` if declined, or `Err(String)` on
    /// input failure.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, String>;
}

/// Default implementation of `StringPrompter` using `dialoguer::Input`.
///
/// Uses the `ColorfulTheme` for user-friendly styling.
pub struct DialoguerStringPrompter;

impl StringPrompter for DialoguerStringPrompter {
    fn prompt(&mut self, prompt: &str, default: &str) -> Result<String, String> {
        let theme = ColorfulTheme::default();
        let input = Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .default(default.to_string());
        match input.interact_text() {
            Ok(v) => Ok(v),
            Err(e) => Err(e.to_string()),
        }
    }

    fn prompt_with_initial(&mut self, prompt: &str, initial: &str) -> Result<String, String> {
        let theme = ColorfulTheme::default();
        let input = Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .with_initial_text(initial.to_string())
            .allow_empty(true);
        match input.interact_text() {
            Ok(v) => Ok(v),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// Default implementation of `ConfirmPrompter` using `dialoguer::Confirm`.
///
/// Displays a yes/no dialog with styling from `ColorfulTheme`.
pub struct DialoguerConfirmPrompter;

impl ConfirmPrompter for DialoguerConfirmPrompter {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, String> {
        let theme = ColorfulTheme::default();
        let confirm = Confirm::with_theme(&theme)
            .with_prompt(prompt)
            .default(default);
        match confirm.interact() {
            Ok(v) => Ok(v),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// Prompt the user for an input string with a default value.
///
/// Thin wrapper over the `StringPrompter` trait so call sites read uniformly.
///
/// # Parameters
/// - `prompter`: A mutable reference to a `StringPrompter` implementation.
/// - `label`: A short description of what is being requested
///   (e.g. `"Enter commit message"`).
/// - `default_value`: A fallback if the user presses Enter without typing.
///
/// # Returns
/// - `Ok(String)` containing user input or the default.
/// - `Err(String)` if the input could not be collected.
pub fn ask<P: StringPrompter>(
    prompter: &mut P,
    label: &str,
    default_value: &str,
) -> Result<String, String> {
    prompter.prompt(label, default_value)
}

/// Ask the user to pick from a numbered menu.
///
/// The raw choice string is returned; mapping unrecognized input to a safe
/// default is the caller's responsibility.
pub fn ask_choice<P: StringPrompter>(prompter: &mut P, label: &str) -> Result<String, String> {
    prompter.prompt(label, "")
}

/// Ask the user to confirm a branch-wide history rewrite before it runs.
///
/// Wraps the `ConfirmPrompter` trait with a prompt spelling out that commit
/// hashes will change.
///
/// # Returns
/// - `Ok(true)` if the user confirmed.
/// - `Ok(false)` if the user declined.
/// - `Err(String)` if input failed.
pub fn confirm_rewrite<P: ConfirmPrompter>(prompter: &mut P) -> Result<bool, String> {
    let prompt = "Rewrite history now? (commit hashes on this branch will change)";
    prompter.confirm(prompt, true)
}
