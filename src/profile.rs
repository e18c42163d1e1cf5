use console::{Style, measure_text_width, style};

use crate::ascii;
use crate::git::{self, CommandRunner};
use crate::github::{self, RepoSummary, UserProfile};
use crate::panel;

/// Avatar panel dimensions, sized to roughly match the height of the info
/// panel next to it.
const AVATAR_WIDTH: usize = 24;
const AVATAR_HEIGHT: usize = 13;

/// Fetches and renders a GitHub profile dashboard.
///
/// With no explicit `username`, the identity is detected from git
/// configuration (`github.user`, then `user.name`); the placeholder identity
/// keeps the flow alive and simply 404s into the normal error line for
/// repositories with no usable config.
pub fn show_profile<R: CommandRunner>(runner: &mut R, username: Option<&str>) {
    let username = match username {
        Some(u) => u.to_string(),
        None => git::resolve_username(runner),
    };

    let profile = match github::fetch_user_data(&username) {
        Ok(p) => p,
        Err(e) => {
            panel::print_error(&e);
            return;
        }
    };
    let repos = github::fetch_user_repos(&username);

    render(&profile, &repos);
}

/// Renders the two-panel dashboard: ASCII avatar on the left, profile fields
/// and recent repositories on the right.
fn render(profile: &UserProfile, repos: &[RepoSummary]) {
    let art = ascii::render_identicon(&profile.login, AVATAR_WIDTH, AVATAR_HEIGHT);
    let art_lines: Vec<String> = art
        .lines()
        .map(|l| style(l).green().to_string())
        .collect();
    let left = panel::panel_lines("Avatar", &art_lines, &Style::new().dim());

    let mut body = profile_rows(profile);
    if !repos.is_empty() {
        body.push(String::new());
        body.push(style("Recent Repos").bold().to_string());
        for repo in repos {
            body.push(format!("{} ★ {}", repo.name, repo.stargazers_count));
        }
    }
    let right = panel::panel_lines(
        &format!("GitHub Profile: {}", profile.login),
        &body,
        &Style::new().cyan(),
    );

    for line in join_columns(&left, &right) {
        println!("{}", line);
    }
}

/// Builds the aligned key/value lines of the profile info table, with the
/// original's fallback strings for absent fields.
pub(crate) fn profile_rows(profile: &UserProfile) -> Vec<String> {
    let blog = match profile.blog.as_deref() {
        Some(b) if !b.is_empty() => b.to_string(),
        _ => String::from("N/A"),
    };

    let rows: Vec<(&str, String)> = vec![
        ("Name", text_or(profile.name.as_deref(), "N/A")),
        ("Username", format!("@{}", profile.login)),
        ("Bio", text_or(profile.bio.as_deref(), "No bio provided.")),
        ("Location", text_or(profile.location.as_deref(), "Unknown")),
        ("Company", text_or(profile.company.as_deref(), "N/A")),
        ("Blog", blog),
        ("Followers", profile.followers.to_string()),
        ("Following", profile.following.to_string()),
        ("Public Repos", profile.public_repos.to_string()),
    ];

    let key_width = rows
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0);

    rows.into_iter()
        .map(|(key, value)| {
            let pad = key_width - key.len();
            format!(
                "{}{}  {}",
                style(key).cyan().bold(),
                " ".repeat(pad),
                value
            )
        })
        .collect()
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// Lays two pre-framed panels side by side, padding the shorter one with
/// blank rows and the left one to a uniform visible width.
pub(crate) fn join_columns(left: &[String], right: &[String]) -> Vec<String> {
    let left_width = left
        .iter()
        .map(|l| measure_text_width(l))
        .max()
        .unwrap_or(0);
    let rows = left.len().max(right.len());

    (0..rows)
        .map(|i| {
            let l = left.get(i).map(|s| s.as_str()).unwrap_or("");
            let r = right.get(i).map(|s| s.as_str()).unwrap_or("");
            let pad = left_width - measure_text_width(l);
            format!("{}{} {}", l, " ".repeat(pad), r).trim_end().to_string()
        })
        .collect()
}
