//! Per-file outcomes and the reports built from them.

use std::path::PathBuf;

/// Skip reason recorded when the destination name is already taken.
pub const NAME_CONFLICT: &str = "name conflict";

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    SkippedCollision,
    SkippedError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: String,
}

/// Moved and skipped files for one group (or one type-cleaner run).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveReport {
    pub moved: Vec<String>,
    pub skipped: Vec<SkippedFile>,
    /// Nothing was touched; `moved` lists would-be moves.
    pub dry_run: bool,
}

impl MoveReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    pub fn record(&mut self, file_name: impl Into<String>, outcome: MoveOutcome) {
        let file_name = file_name.into();
        match outcome {
            MoveOutcome::Moved => self.moved.push(file_name),
            MoveOutcome::SkippedCollision => self.skip(file_name, NAME_CONFLICT),
            MoveOutcome::SkippedError(reason) => self.skip(file_name, reason),
        }
    }

    pub fn skip(&mut self, file_name: impl Into<String>, reason: impl Into<String>) {
        self.skipped.push(SkippedFile {
            file_name: file_name.into(),
            reason: reason.into(),
        });
    }

    pub fn moved_count(&self) -> usize {
        self.moved.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn merge(&mut self, other: MoveReport) {
        self.moved.extend(other.moved);
        self.skipped.extend(other.skipped);
        self.dry_run |= other.dry_run;
    }
}

/// Result of materializing one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    pub label: String,
    pub destination: PathBuf,
    pub report: MoveReport,
    /// Set when the destination directory could not be prepared; every
    /// member is then listed as skipped with this reason.
    pub directory_error: Option<String>,
}

impl GroupReport {
    pub fn member_count(&self) -> usize {
        self.report.moved_count() + self.report.skipped_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_land_in_the_right_list() {
        let mut r = MoveReport::new(false);
        r.record("a.txt", MoveOutcome::Moved);
        r.record("b.txt", MoveOutcome::SkippedCollision);
        r.record("c.txt", MoveOutcome::SkippedError("denied".into()));
        assert_eq!(r.moved, vec!["a.txt"]);
        assert_eq!(r.skipped_count(), 2);
        assert_eq!(r.skipped[0].reason, NAME_CONFLICT);
        assert_eq!(r.skipped[1].reason, "denied");
    }

    #[test]
    fn merge_sums_both_sides() {
        let mut a = MoveReport::new(false);
        a.record("a", MoveOutcome::Moved);
        let mut b = MoveReport::new(true);
        b.record("b", MoveOutcome::Moved);
        b.skip("c", "dangerous extension");
        a.merge(b);
        assert_eq!(a.moved_count(), 2);
        assert_eq!(a.skipped_count(), 1);
        assert!(a.dry_run);
    }
}
