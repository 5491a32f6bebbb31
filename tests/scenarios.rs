//! End-to-end runs of the name-based organizer on small directories.

use assert_fs::prelude::*;
use std::fs;

use declutter::{organize_by_auto_detect, organize_by_explicit_match, Config, OrganizeError};

fn dir_with(files: &[&str]) -> assert_fs::TempDir {
    let td = assert_fs::TempDir::new().unwrap();
    for f in files {
        td.child(f).write_str(f).unwrap();
    }
    td
}

#[test]
fn auto_detect_groups_shared_token_and_leaves_the_rest() {
    let td = dir_with(&["trip_paris_01.jpg", "trip_paris_02.jpg", "invoice.pdf"]);

    let reports = organize_by_auto_detect(td.path(), &Config::default()).expect("auto detect");
    assert_eq!(reports.len(), 1, "one group expected: {reports:?}");
    assert_eq!(reports[0].label, "paris");
    assert_eq!(reports[0].report.moved, vec!["trip_paris_01.jpg", "trip_paris_02.jpg"]);

    assert!(td.child("paris/trip_paris_01.jpg").path().exists());
    assert!(td.child("paris/trip_paris_02.jpg").path().exists());
    assert!(td.child("invoice.pdf").path().exists());
}

#[test]
fn explicit_match_moves_free_names_and_skips_taken_ones() {
    let td = dir_with(&["report.txt", "report_final.txt"]);
    td.child("report").create_dir_all().unwrap();
    td.child("report/report.txt").write_str("already filed").unwrap();

    let group = organize_by_explicit_match(td.path(), "report", &Config::default()).expect("explicit");
    assert_eq!(group.report.moved, vec!["report_final.txt"]);
    assert_eq!(group.report.skipped.len(), 1);
    assert_eq!(group.report.skipped[0].file_name, "report.txt");
    assert_eq!(group.report.skipped[0].reason, "name conflict");

    assert_eq!(fs::read_to_string(td.child("report.txt").path()).unwrap(), "report.txt");
    assert_eq!(
        fs::read_to_string(td.child("report/report.txt").path()).unwrap(),
        "already filed"
    );
}

#[test]
fn repeated_token_in_one_file_does_not_form_a_group() {
    let td = dir_with(&["abcd-abcd.txt", "misc.txt"]);

    let err = organize_by_auto_detect(td.path(), &Config::default()).unwrap_err();
    assert!(matches!(err, OrganizeError::NoTokensDetected));
    assert!(!td.child("abcd").path().exists());
}

#[test]
fn empty_directory_reports_nothing_to_do_in_both_modes() {
    let td = assert_fs::TempDir::new().unwrap();

    let err = organize_by_explicit_match(td.path(), "report", &Config::default()).unwrap_err();
    assert!(matches!(err, OrganizeError::NoMatch(_)));
    let err = organize_by_auto_detect(td.path(), &Config::default()).unwrap_err();
    assert!(matches!(err, OrganizeError::NoTokensDetected));

    assert_eq!(fs::read_dir(td.path()).unwrap().count(), 0);
}

#[test]
fn ignored_words_never_become_folders() {
    let td = dir_with(&["official_a.mp3", "official_b.mp3"]);

    let err = organize_by_auto_detect(td.path(), &Config::default()).unwrap_err();
    assert!(matches!(err, OrganizeError::NoTokensDetected));

    let cfg = Config::with_ignore(Vec::<String>::new());
    let reports = organize_by_auto_detect(td.path(), &cfg).unwrap();
    assert_eq!(reports[0].label, "official");
}

#[test]
fn blocked_group_directory_does_not_stop_later_groups() {
    let td = dir_with(&["alpha_x1.txt", "alpha_x2.txt", "beta_y1.txt", "beta_y2.txt"]);
    td.child("alpha").write_str("a plain file").unwrap();

    let reports = organize_by_auto_detect(td.path(), &Config::default()).expect("auto detect");
    let labels: Vec<&str> = reports.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["alpha", "beta"]);

    let alpha = &reports[0];
    let err = alpha.directory_error.as_deref().expect("alpha directory error");
    assert!(err.contains("not a directory"), "{err}");
    assert!(alpha.report.moved.is_empty());

    let beta = &reports[1];
    assert!(beta.directory_error.is_none());
    assert_eq!(beta.report.moved, vec!["beta_y1.txt", "beta_y2.txt"]);
    assert!(td.child("beta/beta_y1.txt").path().exists());
    assert!(td.child("beta/beta_y2.txt").path().exists());

    assert!(td.child("alpha_x1.txt").path().exists());
    assert!(td.child("alpha_x2.txt").path().exists());
    assert_eq!(fs::read_to_string(td.child("alpha").path()).unwrap(), "a plain file");
}
