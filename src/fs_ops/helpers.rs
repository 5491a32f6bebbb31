//! I/O helper utilities.
//!
//! Small adapters that enrich io::Error with the operation, the path and a
//! platform-aware hint. Reports keep the rendered string as a skip reason.
//!
//! Usage:
//!   // in functions returning anyhow::Result<_>
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create directory", dir))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Format a human-friendly message with op/path plus platform-aware hints.
pub fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str("; permission denied, check ownership and write permissions");
                }
                libc::EXDEV => {
                    msg.push_str("; cross-filesystem, the folder must be on the same device");
                }
                libc::EBUSY => {
                    msg.push_str("; resource busy, ensure no other process is using it");
                }
                libc::ENOENT => {
                    msg.push_str("; path not found, it may have been moved or deleted");
                }
                libc::EEXIST => {
                    msg.push_str("; already exists");
                }
                libc::ENOTDIR => {
                    msg.push_str("; a path component is not a directory");
                }
                libc::ENOSPC => {
                    msg.push_str("; insufficient space on device");
                }
                libc::EROFS => {
                    msg.push_str("; read-only filesystem");
                }
                libc::ENAMETOOLONG => {
                    msg.push_str("; filename or path too long");
                }
                libc::EMFILE | libc::ENFILE => {
                    msg.push_str("; too many open files");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str("; access denied, check permissions"), // ERROR_ACCESS_DENIED
                17 => msg.push_str("; not same device"),                 // ERROR_NOT_SAME_DEVICE
                32 => msg.push_str("; sharing violation, file is in use"), // ERROR_SHARING_VIOLATION
                2 | 3 => msg.push_str("; path not found"),
                80 | 183 => msg.push_str("; already exists"),
                112 => msg.push_str("; insufficient disk space"),
                19 => msg.push_str("; write protected media"),
                206 => msg.push_str("; filename or path too long"),
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str("; permission denied, check ownership and write permissions");
            }
            io::ErrorKind::NotFound => {
                msg.push_str("; path not found, it may have been moved or deleted");
            }
            io::ErrorKind::AlreadyExists => {
                msg.push_str("; already exists");
            }
            _ => {}
        }
    }

    msg
}

/// Adapter for anyhow::Result code.
/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(describe_io_error(op, path, &e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_operation_and_path() {
        let e = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        let msg = describe_io_error("move", Path::new("/data/a.txt"), &e);
        assert!(msg.starts_with("move '/data/a.txt': nope"));
        assert!(msg.contains("permission denied"));
    }

    #[cfg(unix)]
    #[test]
    fn raw_os_errors_carry_code_and_hint() {
        let e = io::Error::from_raw_os_error(libc::ENOSPC);
        let msg = describe_io_error("create directory", Path::new("/data/x"), &e);
        assert!(msg.contains("insufficient space"));
        assert!(msg.contains(&format!("[os code: {}]", libc::ENOSPC)));
    }

    #[test]
    fn anyhow_adapter_keeps_message() {
        let e = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err = io_error_with_help("open", Path::new("x"))(e);
        assert!(err.to_string().contains("open 'x': missing"));
    }
}
