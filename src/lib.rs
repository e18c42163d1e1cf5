//! # gli
//!
//! A CLI companion for `git` that wraps common multi-step workflows behind
//! single flags.
//!
//! This crate provides functionality to:
//! - Stage, commit, and push in one step, auto-configuring upstream
//!   tracking on a branch's first push
//! - Rewrite commit timestamps, authors, and messages across a chosen
//!   scope (last commit, one specific commit, or the whole branch)
//! - View the log and reflog as formatted tables
//! - Draft commit messages from the staged diff via a remote AI backend
//! - Render a GitHub profile dashboard in the terminal
//!
//! ## Usage
//!
//! ```bash
//! # Commit everything and push
//! gli -c "feat: add login"
//!
//! # Let the AI draft the message
//! gli -ac
//!
//! # Rewrite commit timestamps interactively
//! gli -ct
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Flag dispatch and main entry point
//! - [`git`] - Git command runner and repository state queries
//! - [`commit`] - Commit-and-push workflows (manual and AI-drafted)
//! - [`history`] - History rewriting (timestamp, author, message)
//! - [`actions`] - Reset and branch-switch workflows
//! - [`log`] - Log and reflog tables
//! - [`prompt`] - User input abstractions
//! - [`panel`] - Terminal panels and tables
//! - [`github`] - GitHub REST client
//! - [`ai`] - AI commit-message client
//! - [`profile`] - Profile dashboard rendering
//! - [`ascii`] - Avatar ASCII art
//! - [`help`] - Help screen

pub mod actions;
pub mod ai;
pub mod ascii;
pub mod cli;
pub mod commit;
pub mod git;
pub mod github;
pub mod help;
pub mod history;
pub mod log;
pub mod panel;
pub mod profile;
pub mod prompt;
