//! Ref catalog
//!
//! Branch enumeration from raw `for-each-ref` records, one per line:
//! `refName|shortName|isoDate|author|commitHash|subject`, already sorted
//! by descending commit date.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset};

use crate::models::{BranchInfo, BranchKind};

use super::colors::BranchColorCache;
use super::parser::parse_iso_date;

struct RefRecord<'a> {
    full_ref_name: &'a str,
    name: &'a str,
    date: DateTime<FixedOffset>,
    author: &'a str,
    subject: &'a str,
}

/// Build the branch catalog, preserving the given most-recent-first order.
///
/// Duplicate full ref names keep their first occurrence; malformed records
/// are skipped. Colors come from the session cache so a branch keeps its
/// color across refreshes even when its position shifts.
pub fn catalog_branches(
    raw_refs: &[String],
    current_branch: Option<&str>,
    colors: &mut BranchColorCache,
) -> Vec<BranchInfo> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut branches = Vec::new();

    for line in raw_refs {
        let Some(record) = parse_ref_record(line) else {
            tracing::debug!("skipping malformed ref record: {line}");
            continue;
        };
        if !seen.insert(record.full_ref_name.to_string()) {
            continue;
        }

        let kind = if record.full_ref_name.starts_with("refs/heads/") {
            BranchKind::Local
        } else {
            BranchKind::Remote
        };
        let is_current = kind == BranchKind::Local && Some(record.name) == current_branch;
        let color = colors.color_for(record.name, branches.len()).to_string();

        branches.push(BranchInfo {
            name: record.name.to_string(),
            full_ref_name: record.full_ref_name.to_string(),
            kind,
            is_current,
            latest_subject: record.subject.to_string(),
            author: record.author.to_string(),
            updated_at: record.date,
            color,
        });
    }

    branches
}

fn parse_ref_record(line: &str) -> Option<RefRecord<'_>> {
    let mut parts = line.splitn(6, '|');

    let full_ref_name = parts.next()?.trim();
    let name = parts.next()?.trim();
    let date = parts.next()?.trim();
    let author = parts.next()?.trim();
    let hash = parts.next()?.trim();
    let subject = parts.next()?.trim();

    if full_ref_name.is_empty() || name.is_empty() || hash.is_empty() {
        return None;
    }

    Some(RefRecord {
        full_ref_name,
        name,
        date: parse_iso_date(date),
        author,
        subject,
    })
}
