use std::collections::{HashMap, HashSet};

use crate::catalog::IgnoreSet;
use crate::fs_ops::FileEntry;

use super::tokenizer::tokenize;

/// Token -> number of distinct files whose stem produced it.
pub type TokenFrequency = HashMap<String, usize>;

/// Count tokens across the whole snapshot. Each file adds at most one to a
/// given token, however many times its stem yields it.
pub fn count_tokens(entries: &[FileEntry], ignore: &IgnoreSet) -> TokenFrequency {
    let mut freq = TokenFrequency::new();
    for entry in entries {
        let distinct: HashSet<String> = tokenize(&entry.stem, ignore).collect();
        for token in distinct {
            *freq.entry(token).or_insert(0) += 1;
        }
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn entries(names: &[&str]) -> Vec<FileEntry> {
        names
            .iter()
            .map(|n| FileEntry::from_path(&Path::new("/data").join(n)))
            .collect()
    }

    #[test]
    fn counts_distinct_files_per_token() {
        let files = entries(&["trip_paris_01.jpg", "trip_paris_02.jpg", "invoice.pdf"]);
        let freq = count_tokens(&files, &IgnoreSet::default());
        assert_eq!(freq.get("trip"), Some(&2));
        assert_eq!(freq.get("paris"), Some(&2));
        assert_eq!(freq.get("invoice"), Some(&1));
        assert_eq!(freq.get("trip_paris_01"), Some(&1));
    }

    #[test]
    fn repeated_token_in_one_file_counts_once() {
        let files = entries(&["report.txt", "report-report.txt"]);
        let freq = count_tokens(&files, &IgnoreSet::default());
        assert_eq!(freq.get("report"), Some(&2));
        assert_eq!(freq.get("report-report"), Some(&1));
    }

    #[test]
    fn ignored_tokens_are_not_counted() {
        let files = entries(&["song_live.mp3", "other_live.mp3"]);
        let freq = count_tokens(&files, &IgnoreSet::new(["live"]));
        assert!(!freq.contains_key("live"));
    }

    #[test]
    fn empty_snapshot_gives_empty_map() {
        assert!(count_tokens(&[], &IgnoreSet::default()).is_empty());
    }
}
