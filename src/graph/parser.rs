//! Commit log parsing
//!
//! One record per commit, pipe-separated:
//! `hash|parents|author|isoDate|subject|decorations`, emitted newest-first
//! in topological order (`git log --topo-order`).

use chrono::{DateTime, FixedOffset};
use std::collections::HashSet;

use crate::models::CommitRecord;

/// Lenient ISO-8601 parse; unparseable input falls back to the Unix epoch
/// rather than dropping the record.
pub(crate) fn parse_iso_date(raw: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(raw).unwrap_or_else(|_| DateTime::UNIX_EPOCH.fixed_offset())
}

/// Parse raw log lines into records, newest first.
///
/// Malformed lines are skipped and duplicate hashes keep the first record;
/// one corrupt line must not cost the rest of the history.
pub fn parse_commits(raw_lines: &[String]) -> Vec<CommitRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut records = Vec::with_capacity(raw_lines.len());

    for line in raw_lines {
        let Some(record) = parse_commit_line(line) else {
            tracing::debug!("skipping malformed commit record: {line}");
            continue;
        };
        if !seen.insert(record.hash.clone()) {
            continue;
        }
        records.push(record);
    }

    records
}

fn parse_commit_line(line: &str) -> Option<CommitRecord> {
    let mut parts = line.splitn(6, '|');

    let hash = parts.next()?.trim();
    let parents = parts.next().unwrap_or("");
    let author = parts.next().unwrap_or("").trim();
    let date = parts.next().unwrap_or("").trim();
    let subject = parts.next().unwrap_or("").trim();
    let decorations = parts.next().unwrap_or("");

    if hash.is_empty() {
        return None;
    }

    Some(CommitRecord {
        hash: hash.to_string(),
        parent_hashes: parents.split_whitespace().map(str::to_string).collect(),
        author: author.to_string(),
        date: parse_iso_date(date),
        subject: subject.to_string(),
        decorations: parse_decorations(decorations),
    })
}

/// Split `%D` decorations into plain branch names.
///
/// Drops tag entries and the bare detached-HEAD marker; `HEAD -> branch`
/// collapses to the branch name itself.
fn parse_decorations(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .map(|d| d.strip_prefix("HEAD -> ").unwrap_or(d))
        .filter(|d| !d.is_empty() && *d != "HEAD" && !d.starts_with("tag: "))
        .map(str::to_string)
        .collect()
}
