//! Entry points used by the CLI: one function per organize mode plus the
//! read-only listing. Each call takes one directory snapshot and works from it.

mod by_name;
mod by_type;
mod listing;

pub use by_name::{organize_by_auto_detect, organize_by_explicit_match};
pub use by_type::{organize_by_type, DANGEROUS_EXTENSION};
pub use listing::{list_by_type, CategoryListing, TypeListing};
