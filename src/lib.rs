//! Core library for `declutter`.
//!
//! Sorts the files directly inside one directory into sub-folders, either by
//! the name tokens they share or by file type. The binary is a thin CLI over
//! the functions in [`organize`].

pub mod catalog;
pub mod cli;
pub mod cluster;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod organize;
pub mod output;
pub mod platform;
pub mod report;

pub use catalog::{IgnoreSet, TypeCatalog, OTHER_CATEGORY};
pub use config::{
    default_config_path, default_log_path, load_config, path_has_symlink_ancestor, Config,
    ConfigSource, LogLevel, MembershipRule, OverlapPolicy, CONFIG_ENV,
};
pub use errors::OrganizeError;
pub use fs_ops::{rename_no_clobber, scan_directory, FileEntry};
pub use organize::{
    list_by_type, organize_by_auto_detect, organize_by_explicit_match, organize_by_type,
    TypeListing,
};
pub use report::{GroupReport, MoveOutcome, MoveReport, SkippedFile};
