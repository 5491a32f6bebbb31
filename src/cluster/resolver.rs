use std::collections::HashSet;
use tracing::debug;

use crate::catalog::IgnoreSet;
use crate::config::MembershipRule;
use crate::fs_ops::FileEntry;

use super::ranker::RankedToken;
use super::tokenizer::tokenize;
use super::MIN_GROUP_SIZE;

/// A label plus the snapshot entries that will move under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    pub label: String,
    pub members: Vec<&'a FileEntry>,
}

impl<'a> Group<'a> {
    pub fn new(label: impl Into<String>, members: Vec<&'a FileEntry>) -> Self {
        Self {
            label: label.into(),
            members,
        }
    }

    /// Directory name for this group (sanitized label).
    pub fn dir_name(&self) -> String {
        sanitize_label(&self.label)
    }

    pub fn is_materializable(&self) -> bool {
        self.members.len() >= MIN_GROUP_SIZE
    }

    /// Keep only the members for which `keep` returns true.
    pub fn retain_members(mut self, keep: impl FnMut(&&'a FileEntry) -> bool) -> Self {
        self.members.retain(keep);
        self
    }
}

/// Make a label safe to use as a single directory name under the scanned
/// directory: separators become `_`, and `.`/`..` are replaced entirely.
pub fn sanitize_label(label: &str) -> String {
    let cleaned: String = label
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    if cleaned == "." || cleaned == ".." {
        return "_".repeat(cleaned.len());
    }
    cleaned
}

/// Groups for the ranked tokens, in rank order, from the cached snapshot.
///
/// With `MembershipRule::Filename` a file joins every token its lowercased
/// filename contains, so one file can sit in several groups; the driver
/// decides what to do about that. Groups under two members are discarded.
pub fn resolve_auto_groups<'a>(
    entries: &'a [FileEntry],
    ranked: &[RankedToken],
    ignore: &IgnoreSet,
    rule: MembershipRule,
) -> Vec<Group<'a>> {
    let haystacks: Vec<HashSet<String>> = match rule {
        MembershipRule::Filename => Vec::new(),
        MembershipRule::Token => entries
            .iter()
            .map(|e| tokenize(&e.stem, ignore).collect())
            .collect(),
    };
    let lowered: Vec<String> = entries.iter().map(|e| e.file_name.to_lowercase()).collect();

    ranked
        .iter()
        .filter_map(|rt| {
            let members: Vec<&FileEntry> = entries
                .iter()
                .enumerate()
                .filter(|(i, _)| match rule {
                    MembershipRule::Filename => lowered[*i].contains(rt.token.as_str()),
                    MembershipRule::Token => haystacks[*i].contains(&rt.token),
                })
                .map(|(_, e)| e)
                .collect();

            let group = Group::new(rt.token.clone(), members);
            if group.is_materializable() {
                Some(group)
            } else {
                debug!(token = %rt.token, members = group.members.len(), "Discarding token with too few files");
                None
            }
        })
        .collect()
}

/// Every entry whose filename contains `pattern`, case-insensitively.
/// `None` when nothing matches.
pub fn resolve_explicit_group<'a>(entries: &'a [FileEntry], pattern: &str) -> Option<Group<'a>> {
    let needle = pattern.to_lowercase();
    let members: Vec<&FileEntry> = entries
        .iter()
        .filter(|e| e.file_name.to_lowercase().contains(&needle))
        .collect();
    if members.is_empty() {
        None
    } else {
        Some(Group::new(pattern, members))
    }
}
