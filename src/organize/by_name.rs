use std::path::Path;
use tracing::{debug, info};

use crate::cluster::{count_tokens, rank_tokens, resolve_auto_groups, resolve_explicit_group};
use crate::config::{Config, OverlapPolicy};
use crate::errors::OrganizeError;
use crate::fs_ops::{move_group, scan_directory, Placements};
use crate::report::GroupReport;

/// Move every file whose name contains `pattern` (case-insensitive) into
/// `<dir>/<pattern>`.
pub fn organize_by_explicit_match(
    dir: &Path,
    pattern: &str,
    cfg: &Config,
) -> Result<GroupReport, OrganizeError> {
    if pattern.trim().is_empty() {
        return Err(OrganizeError::EmptyPattern);
    }

    let entries = scan_directory(dir)?;
    let Some(group) = resolve_explicit_group(&entries, pattern) else {
        info!(pattern, "No files matched");
        return Err(OrganizeError::NoMatch(pattern.to_string()));
    };

    info!(pattern, members = group.members.len(), "Explicit match");
    Ok(move_group(dir, &group, cfg.dry_run, &mut Placements::new()))
}

/// Detect the most common name tokens and move each token's files into a
/// folder named after it. Reports come back in rank order, one per group
/// that was actually materialized.
pub fn organize_by_auto_detect(
    dir: &Path,
    cfg: &Config,
) -> Result<Vec<GroupReport>, OrganizeError> {
    let entries = scan_directory(dir)?;
    let frequency = count_tokens(&entries, &cfg.ignore);
    let ranked = rank_tokens(&frequency);
    if ranked.is_empty() {
        info!(files = entries.len(), "No shared name tokens");
        return Err(OrganizeError::NoTokensDetected);
    }
    for rt in &ranked {
        debug!(token = %rt.token, count = rt.count, "Ranked token");
    }

    let groups = resolve_auto_groups(&entries, &ranked, &cfg.ignore, cfg.membership);
    let mut placements = Placements::new();
    let mut reports = Vec::with_capacity(groups.len());

    for group in groups {
        let group = match cfg.overlap {
            OverlapPolicy::FirstWins => {
                let group = group.retain_members(|e| !placements.contains_key(&e.path));
                if !group.is_materializable() {
                    debug!(label = %group.label, remaining = group.members.len(), "Group emptied by earlier groups");
                    continue;
                }
                group
            }
            OverlapPolicy::Keep => group,
        };
        reports.push(move_group(dir, &group, cfg.dry_run, &mut placements));
    }

    Ok(reports)
}
