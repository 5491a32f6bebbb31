//! Read-only lookup tables built once from configuration.
//! - IgnoreSet: stop-words excluded from name tokens.
//! - TypeCatalog: extension -> category mapping plus the dangerous-extension list.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

/// Category used for unknown or missing extensions.
pub const OTHER_CATEGORY: &str = "Other";

/// Categories listed first, in this order; the rest follow alphabetically.
const PREFERRED_ORDER: &[&str] = &["Images", "Videos", "Audio", "Documents", "Archives", "Code"];

/// Lowercase stop-words that never become group labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    words: HashSet<String>,
}

impl IgnoreSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in sorted order (stable output for templates and logs).
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

/// Normalize an extension to lowercase with a single leading dot.
pub fn normalize_ext(ext: &str) -> String {
    let trimmed = ext.trim().trim_start_matches('.').to_lowercase();
    format!(".{trimmed}")
}

/// Lookup key for a path's extension, e.g. `photo.JPG` -> `.jpg`.
fn extension_key(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| normalize_ext(&e.to_string_lossy()))
}

/// Extension catalog used by the type cleaner and the listing.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    categories: BTreeMap<String, Vec<String>>,
    by_ext: HashMap<String, String>,
    dangerous: HashSet<String>,
}

impl TypeCatalog {
    /// Build the catalog. An extension listed under several categories maps
    /// to the last of them in name order.
    pub fn new<C, D, S>(categories: C, dangerous: D) -> Self
    where
        C: IntoIterator<Item = (String, Vec<String>)>,
        D: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, exts) in categories {
            let name = name.trim().to_string();
            if name.is_empty() {
                continue;
            }
            let entry = map.entry(name).or_default();
            entry.extend(
                exts.iter()
                    .filter(|e| !e.trim().trim_start_matches('.').is_empty())
                    .map(|e| normalize_ext(e)),
            );
        }

        let mut by_ext = HashMap::new();
        for (name, exts) in &map {
            for ext in exts {
                by_ext.insert(ext.clone(), name.clone());
            }
        }

        let dangerous = dangerous
            .into_iter()
            .map(|e| normalize_ext(e.as_ref()))
            .collect();

        Self {
            categories: map,
            by_ext,
            dangerous,
        }
    }

    /// Category for a file, `Other` when the extension is unknown or absent.
    pub fn category_for(&self, path: &Path) -> &str {
        extension_key(path)
            .and_then(|ext| self.by_ext.get(&ext))
            .map(String::as_str)
            .unwrap_or(OTHER_CATEGORY)
    }

    pub fn is_dangerous(&self, path: &Path) -> bool {
        extension_key(path).is_some_and(|ext| self.dangerous.contains(&ext))
    }

    pub fn categories(&self) -> &BTreeMap<String, Vec<String>> {
        &self.categories
    }

    /// Sorted dangerous extensions.
    pub fn dangerous(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.dangerous.iter().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }

    /// Sort key for displaying categories: preferred ones first, then
    /// alphabetical, `Other` last.
    pub fn display_rank(name: &str) -> (usize, String) {
        if name == OTHER_CATEGORY {
            return (usize::MAX, String::new());
        }
        match PREFERRED_ORDER.iter().position(|p| *p == name) {
            Some(i) => (i, String::new()),
            None => (PREFERRED_ORDER.len(), name.to_string()),
        }
    }
}
