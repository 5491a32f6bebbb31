//! No-clobber rename.
//! - Links the source at the destination (fails if the name exists), then unlinks the source.
//! - Where hard links are unsupported, re-checks the destination and renames.
//! - On Unix, best-effort fsync of the destination directory afterwards.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Move `src` to `dst`, failing with `ErrorKind::AlreadyExists` instead of
/// replacing anything at `dst`.
pub fn rename_no_clobber(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::hard_link(src, dst) {
        Ok(()) => {
            if let Err(e) = fs::remove_file(src) {
                // Undo the link so the file is not left under two names.
                let _ = fs::remove_file(dst);
                return Err(e);
            }
        }
        Err(e)
            if matches!(
                e.kind(),
                io::ErrorKind::AlreadyExists | io::ErrorKind::NotFound
            ) =>
        {
            return Err(e);
        }
        Err(e) => {
            debug!(src = %src.display(), dst = %dst.display(), error = %e, "Hard link unavailable; using checked rename");
            match fs::symlink_metadata(dst) {
                Ok(_) => {
                    return Err(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("destination exists: {}", dst.display()),
                    ));
                }
                Err(m) if m.kind() == io::ErrorKind::NotFound => {}
                Err(m) => return Err(m),
            }
            fs::rename(src, dst)?;
        }
    }

    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        // Ignore fsync errors; the move itself already succeeded.
        let _ = fsync_dir(parent);
    }

    Ok(())
}

#[cfg(unix)]
fn fsync_dir(dir: &Path) -> io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn moves_when_destination_is_free() {
        let td = tempdir().unwrap();
        let src = td.path().join("a.txt");
        let dst = td.path().join("b.txt");
        fs::write(&src, "alpha").unwrap();

        rename_no_clobber(&src, &dst).unwrap();
        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "alpha");
    }

    #[test]
    fn refuses_to_replace_existing_destination() {
        let td = tempdir().unwrap();
        let src = td.path().join("a.txt");
        let dst = td.path().join("b.txt");
        fs::write(&src, "new").unwrap();
        fs::write(&dst, "old").unwrap();

        let err = rename_no_clobber(&src, &dst).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&src).unwrap(), "new");
        assert_eq!(fs::read_to_string(&dst).unwrap(), "old");
    }

    #[test]
    fn missing_source_is_not_found() {
        let td = tempdir().unwrap();
        let err = rename_no_clobber(&td.path().join("gone"), &td.path().join("dst")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
