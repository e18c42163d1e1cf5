use console::{Style, style};

use crate::panel;

const ASCII_LOGO: &str = r#"
 ██████╗ ██╗     ██╗
██╔════╝ ██║     ██║
██║  ███╗██║     ██║
██║   ██║██║     ██║
╚██████╔╝███████╗██║
 ╚═════╝ ╚══════╝╚═╝
"#;

const TAGLINE: &str = "a git wrapper for make developer life easy";

/// Renders the logo, tagline, and command overview table.
pub fn render() {
    println!("{}", style(ASCII_LOGO).green().bold());
    println!("{}", style(TAGLINE).italic().dim());
    println!();

    let rows: Vec<Vec<String>> = commands()
        .iter()
        .map(|(name, flag, desc)| {
            vec![name.to_string(), flag.to_string(), desc.to_string()]
        })
        .collect();

    panel::print_table(
        "Available Commands",
        &["Command", "Flag", "Description"],
        &rows,
        &Style::new().dim(),
    );

    println!();
    println!(
        "{}",
        style("Usage example: gli -c 'feat: msg' or gli -ac").dim()
    );
}

/// The command overview, one row per CLI surface entry.
fn commands() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("Commit & Push", "-c, --commit", "Stage all, commit with msg, and push"),
        ("AI Commit", "-ac, --ai-commit", "Generate AI message and push"),
        ("Log", "-l, --log", "View commit history"),
        ("Reflog", "-rl, --reflog", "View git reflog"),
        ("Reset", "-rs, --reset", "Reset last commit (soft/hard)"),
        ("Switch Branch", "-s, --switch", "Create, switch, and push new branch"),
        ("Change Time", "-ct, --changeTime", "Update commit timestamp(s)"),
        ("Change Author", "-ca, --changeAuthor", "Update commit author identity"),
        ("Change Message", "-cm, --changeMessage", "Update last commit message"),
        ("No Verify", "-nv, --no-verify", "Skip git hooks during commit"),
        ("My Profile", "me", "View your GitHub profile"),
        ("User Profile", "profile <user>", "View a specific GitHub profile"),
    ]
}
