use reqwest::blocking::Client;
use serde::Deserialize;

/// Base URL for GitHub user lookups.
const BASE_URL: &str = "https://api.github.com/users/";

/// Public profile fields of a GitHub user, as returned by the users
/// endpoint. Only the fields the profile dashboard renders are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub public_repos: u64,
}

/// Summary of one public repository, for the "recent repos" section of the
/// profile dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
}

/// Builds the blocking HTTP client used for GitHub calls.
///
/// GitHub rejects requests without a User-Agent, so one carrying the tool
/// name and version is always attached.
fn client() -> Result<Client, String> {
    Client::builder()
        .user_agent(concat!("gli/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| format!("failed to create HTTP client: {}", e))
}

/// Retrieves public profile information for a GitHub user.
///
/// # Parameters
///
/// * `username` - The GitHub login to query.
///
/// # Returns
///
/// * `Ok(UserProfile)` on a successful lookup.
/// * `Err(String)` with a single human-readable line on network failure, a
///   non-success HTTP status (404 for unknown users, 403 when rate-limited),
///   or a malformed response body.
pub fn fetch_user_data(username: &str) -> Result<UserProfile, String> {
    let client = client()?;
    let response = client
        .get(format!("{}{}", BASE_URL, username))
        .send()
        .map_err(|e| format!("Failed to fetch data for '{}': {}", username, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!(
            "Failed to fetch data for '{}': HTTP {}",
            username, status
        ));
    }

    response
        .json::<UserProfile>()
        .map_err(|e| format!("Failed to fetch data for '{}': {}", username, e))
}

/// Retrieves the five most recently updated public repositories of a user.
///
/// Failures are not surfaced: the profile dashboard simply omits the repo
/// section, so any error collapses to an empty list.
pub fn fetch_user_repos(username: &str) -> Vec<RepoSummary> {
    let client = match client() {
        Ok(c) => c,
        Err(_) => return Vec::new(),
    };

    let response = client
        .get(format!("{}{}/repos", BASE_URL, username))
        .query(&[("sort", "updated"), ("per_page", "5")])
        .send();

    match response {
        Ok(resp) if resp.status().is_success() => resp.json().unwrap_or_default(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_deserializes_with_null_fields() {
        let raw = r#"{
            "login": "octocat",
            "name": null,
            "bio": null,
            "location": "San Francisco",
            "company": null,
            "blog": "",
            "followers": 4000,
            "following": 9,
            "public_repos": 8
        }"#;
        let profile: UserProfile = serde_json::from_str(raw).expect("profile should parse");
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.name, None);
        assert_eq!(profile.location, Some(String::from("San Francisco")));
        assert_eq!(profile.followers, 4000);
    }

    #[test]
    fn profile_tolerates_missing_counters() {
        let raw = r#"{"login": "ghost"}"#;
        let profile: UserProfile = serde_json::from_str(raw).expect("profile should parse");
        assert_eq!(profile.followers, 0);
        assert_eq!(profile.public_repos, 0);
    }

    #[test]
    fn repo_summary_deserializes() {
        let raw = r#"[{"name": "gli", "description": "git wrapper", "stargazers_count": 12},
                      {"name": "dotfiles", "description": null}]"#;
        let repos: Vec<RepoSummary> = serde_json::from_str(raw).expect("repos should parse");
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "gli");
        assert_eq!(repos[0].stargazers_count, 12);
        assert_eq!(repos[1].description, None);
        assert_eq!(repos[1].stargazers_count, 0);
    }
}
