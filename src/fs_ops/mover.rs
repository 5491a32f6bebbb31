//! Moves one group's members into `<root>/<sanitized label>`.
//! Per-file problems become skips in the report; nothing here aborts a run.

use anyhow::{bail, Result};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::cluster::Group;
use crate::report::{GroupReport, MoveOutcome, MoveReport};

use super::atomic::rename_no_clobber;
use super::helpers::{describe_io_error, io_error_with_help};
use super::scan::FileEntry;

/// Files already placed during this run, keyed by original path, with the
/// label of the group that took them.
pub type Placements = HashMap<PathBuf, String>;

/// Make sure `dir` is a usable destination directory.
///
/// An existing directory is reused. Anything else at that name (a file or
/// a symlink) is refused. In dry-run mode nothing is created.
pub fn ensure_dir(dir: &Path, dry_run: bool) -> Result<()> {
    match fs::symlink_metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(meta) if meta.file_type().is_symlink() => {
            bail!("'{}' is a symlink; refusing to move files through it", dir.display())
        }
        Ok(_) => bail!("'{}' exists and is not a directory", dir.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if dry_run {
                info!(action = "mkdir", path = %dir.display(), "dry-run");
                return Ok(());
            }
            fs::create_dir_all(dir).map_err(io_error_with_help("create directory", dir))?;
            debug!(path = %dir.display(), "Created directory");
            Ok(())
        }
        Err(e) => Err(io_error_with_help("inspect destination", dir)(e)),
    }
}

/// Move one file into `dest_dir`, keeping its name.
pub fn relocate(entry: &FileEntry, dest_dir: &Path, dry_run: bool) -> MoveOutcome {
    let Some(name) = entry.path.file_name() else {
        return MoveOutcome::SkippedError(format!("no file name: {}", entry.path.display()));
    };
    let dest = dest_dir.join(name);

    match fs::symlink_metadata(&dest) {
        Ok(_) => {
            warn!(file = %entry.file_name, dest = %dest.display(), "Destination exists; leaving file in place");
            return MoveOutcome::SkippedCollision;
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return MoveOutcome::SkippedError(describe_io_error("inspect destination", &dest, &e)),
    }

    if dry_run {
        info!(src = %entry.path.display(), dest = %dest.display(), "dry-run: would move file");
        return MoveOutcome::Moved;
    }

    commit_move(entry, &dest)
}

/// Perform the no-clobber move to `dest` and classify the result.
/// A destination that appeared after the existence check is a collision.
fn commit_move(entry: &FileEntry, dest: &Path) -> MoveOutcome {
    match rename_no_clobber(&entry.path, dest) {
        Ok(()) => {
            debug!(src = %entry.path.display(), dest = %dest.display(), "Moved file");
            MoveOutcome::Moved
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            warn!(file = %entry.file_name, dest = %dest.display(), "Destination appeared during move; leaving file in place");
            MoveOutcome::SkippedCollision
        }
        Err(e) => {
            let reason = describe_io_error("move", &entry.path, &e);
            warn!(file = %entry.file_name, %reason, "Move failed");
            MoveOutcome::SkippedError(reason)
        }
    }
}

/// Materialize one group under `root` and move its members.
///
/// Members already recorded in `placements` are skipped with the label that
/// took them; successful moves are added to it.
pub fn move_group(
    root: &Path,
    group: &Group<'_>,
    dry_run: bool,
    placements: &mut Placements,
) -> GroupReport {
    let destination = root.join(group.dir_name());
    let mut report = MoveReport::new(dry_run);

    if let Err(e) = ensure_dir(&destination, dry_run) {
        let reason = format!("{e:#}");
        warn!(label = %group.label, %reason, "Cannot prepare group directory; skipping group");
        for entry in &group.members {
            report.record(
                entry.file_name.clone(),
                MoveOutcome::SkippedError(reason.clone()),
            );
        }
        return GroupReport {
            label: group.label.clone(),
            destination,
            report,
            directory_error: Some(reason),
        };
    }

    for entry in &group.members {
        if let Some(previous) = placements.get(&entry.path) {
            report.record(
                entry.file_name.clone(),
                MoveOutcome::SkippedError(format!("already moved into '{previous}'")),
            );
            continue;
        }
        let outcome = relocate(entry, &destination, dry_run);
        if outcome == MoveOutcome::Moved {
            placements.insert(entry.path.clone(), group.label.clone());
        }
        report.record(entry.file_name.clone(), outcome);
    }

    info!(
        label = %group.label,
        moved = report.moved_count(),
        skipped = report.skipped_count(),
        dry_run,
        "Group processed"
    );

    GroupReport {
        label: group.label.clone(),
        destination,
        report,
        directory_error: None,
    }
}
