use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::cluster::sanitize_label;
use crate::config::Config;
use crate::errors::OrganizeError;
use crate::fs_ops::{ensure_dir, relocate, scan_directory};
use crate::report::{MoveOutcome, MoveReport};

/// Skip reason for files the type cleaner refuses to touch.
pub const DANGEROUS_EXTENSION: &str = "dangerous extension";

/// Move every file into `<dir>/<category>` by extension. Files with a
/// dangerous extension stay where they are.
pub fn organize_by_type(dir: &Path, cfg: &Config) -> Result<MoveReport, OrganizeError> {
    let entries = scan_directory(dir)?;
    let mut report = MoveReport::new(cfg.dry_run);
    // Destination directories already prepared (or refused) during this run.
    let mut prepared: HashMap<PathBuf, Option<String>> = HashMap::new();

    for entry in &entries {
        if cfg.catalog.is_dangerous(&entry.path) {
            warn!(file = %entry.file_name, "Skipping dangerous file");
            report.skip(entry.file_name.clone(), DANGEROUS_EXTENSION);
            continue;
        }

        let category = cfg.catalog.category_for(&entry.path);
        let dest_dir = dir.join(sanitize_label(category));
        let dir_error = prepared
            .entry(dest_dir.clone())
            .or_insert_with(|| ensure_dir(&dest_dir, cfg.dry_run).err().map(|e| format!("{e:#}")));
        if let Some(reason) = dir_error {
            warn!(file = %entry.file_name, %reason, "Cannot prepare category directory");
            report.record(entry.file_name.clone(), MoveOutcome::SkippedError(reason.clone()));
            continue;
        }

        debug!(file = %entry.file_name, category, "Classified");
        let outcome = relocate(entry, &dest_dir, cfg.dry_run);
        report.record(entry.file_name.clone(), outcome);
    }

    info!(
        moved = report.moved_count(),
        skipped = report.skipped_count(),
        dry_run = cfg.dry_run,
        "Type clean finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TypeCatalog;
    use assert_fs::prelude::*;

    #[test]
    fn unknown_and_missing_extensions_go_to_other() {
        let td = assert_fs::TempDir::new().unwrap();
        td.child("README").touch().unwrap();
        td.child("blob.zzz").touch().unwrap();

        let report = organize_by_type(td.path(), &Config::default()).unwrap();
        assert_eq!(report.moved_count(), 2);
        assert!(td.child("Other/README").path().exists());
        assert!(td.child("Other/blob.zzz").path().exists());
    }

    #[test]
    fn category_blocked_by_a_file_skips_only_that_category() {
        let td = assert_fs::TempDir::new().unwrap();
        td.child("zeta").write_str("in the way").unwrap();
        td.child("a.zz").touch().unwrap();
        td.child("b.zz").touch().unwrap();
        td.child("c.pdf").touch().unwrap();
        let cfg = Config {
            catalog: TypeCatalog::new(
                vec![
                    ("zeta".to_string(), vec![".zz".to_string()]),
                    ("Documents".to_string(), vec![".pdf".to_string()]),
                ],
                [".exe"],
            ),
            ..Config::default()
        };

        let report = organize_by_type(td.path(), &cfg).unwrap();
        // The blocking file has no extension and is itself sorted into Other.
        assert_eq!(report.moved, vec!["c.pdf", "zeta"]);
        assert_eq!(report.skipped_count(), 2);
        assert!(td.child("a.zz").path().exists());
        assert!(td.child("Documents/c.pdf").path().exists());
    }

    #[test]
    fn dangerous_files_stay_put() {
        let td = assert_fs::TempDir::new().unwrap();
        td.child("setup.EXE").touch().unwrap();
        td.child("photo.jpg").touch().unwrap();

        let report = organize_by_type(td.path(), &Config::default()).unwrap();
        assert_eq!(report.moved, vec!["photo.jpg"]);
        assert_eq!(report.skipped[0].reason, DANGEROUS_EXTENSION);
        assert!(td.child("setup.EXE").path().exists());
        assert!(td.child("Images/photo.jpg").path().exists());
    }
}
