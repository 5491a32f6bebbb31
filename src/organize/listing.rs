use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::catalog::TypeCatalog;
use crate::config::Config;
use crate::errors::OrganizeError;
use crate::fs_ops::{scan_directory, FileEntry};

/// Files of one category, in file name order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    pub name: String,
    pub files: Vec<FileEntry>,
}

/// Read-only view of a directory grouped by type category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeListing {
    pub directory: PathBuf,
    /// Non-empty categories in display order.
    pub categories: Vec<CategoryListing>,
}

impl TypeListing {
    pub fn total(&self) -> usize {
        self.categories.iter().map(|c| c.files.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

pub fn list_by_type(dir: &Path, cfg: &Config) -> Result<TypeListing, OrganizeError> {
    let entries = scan_directory(dir)?;

    let mut grouped: BTreeMap<String, Vec<FileEntry>> = BTreeMap::new();
    for entry in entries {
        let category = cfg.catalog.category_for(&entry.path).to_string();
        grouped.entry(category).or_default().push(entry);
    }

    let mut categories: Vec<CategoryListing> = grouped
        .into_iter()
        .map(|(name, files)| CategoryListing { name, files })
        .collect();
    categories.sort_by_key(|c| TypeCatalog::display_rank(&c.name));

    Ok(TypeListing {
        directory: dir.to_path_buf(),
        categories,
    })
}
