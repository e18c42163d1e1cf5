use console::Style;

use crate::git::CommandRunner;
use crate::panel;

/// Default number of entries shown by the log and reflog views.
pub const DEFAULT_COUNT: usize = 10;

/// Pretty-format passed to `git log`: hash, date, author, subject separated
/// by pipes.
const LOG_FORMAT: &str = "--pretty=format:%h|%ad|%an|%s";

/// Pretty-format passed to `git reflog`: hash, date, reflog subject.
const REFLOG_FORMAT: &str = "--pretty=format:%h|%ad|%gs";

const DATE_FORMAT: &str = "--date=format:%Y-%m-%d %H:%M";

/// Renders the last `count` commits as a bordered table.
pub fn show_log<R: CommandRunner>(runner: &mut R, count: usize) {
    let n = count.to_string();
    let res = runner.run(&["log", "-n", &n, LOG_FORMAT, DATE_FORMAT], None);
    if !res.succeeded {
        panel::print_error("Could not fetch log.");
        return;
    }

    let rows = parse_rows(&res.stdout, 4);
    panel::print_table(
        "Git History",
        &["Hash", "Date & Time", "Author", "Message"],
        &rows,
        &Style::new().green(),
    );
}

/// Renders the last `count` reflog entries as a bordered table, each row
/// prefixed with its `HEAD@{i}` index for recovery use.
pub fn show_reflog<R: CommandRunner>(runner: &mut R, count: usize) {
    let n = count.to_string();
    let res = runner.run(&["reflog", "-n", &n, REFLOG_FORMAT, DATE_FORMAT], None);
    if !res.succeeded {
        panel::print_error("Could not fetch reflog.");
        return;
    }

    let rows: Vec<Vec<String>> = parse_rows(&res.stdout, 3)
        .into_iter()
        .enumerate()
        .map(|(i, mut row)| {
            let mut indexed = vec![format!("HEAD@{{{}}}", i)];
            indexed.append(&mut row);
            indexed
        })
        .collect();

    panel::print_table(
        "Reflog (Recovery)",
        &["Index", "Hash", "Time", "Operation"],
        &rows,
        &Style::new().magenta(),
    );
}

/// Splits pipe-delimited pretty-format output into table rows.
///
/// Only the first `fields - 1` pipes split; the final field keeps any
/// remaining pipes, since commit subjects may legitimately contain them.
/// Lines without a pipe (e.g. blank output) are skipped.
pub(crate) fn parse_rows(raw: &str, fields: usize) -> Vec<Vec<String>> {
    raw.lines()
        .filter(|line| line.contains('|'))
        .map(|line| {
            line.splitn(fields, '|')
                .map(|cell| cell.to_string())
                .collect()
        })
        .collect()
}
