//! Filesystem operations: scanning the target directory and moving files
//! into group folders without ever replacing an existing name.

mod atomic;
mod helpers;
mod mover;
mod scan;

pub use atomic::rename_no_clobber;
pub use helpers::{describe_io_error, io_error_with_help};
pub use mover::{ensure_dir, move_group, relocate, Placements};
pub use scan::{scan_directory, FileEntry};
