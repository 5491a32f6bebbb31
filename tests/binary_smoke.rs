use assert_fs::prelude::*;
use std::process::Command;

fn declutter(config_dir: &assert_fs::TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("declutter"));
    // Keep the run away from the user's real config.
    cmd.env("DECLUTTER_CONFIG", config_dir.path().join("config.xml"));
    cmd
}

#[test]
fn binary_print_config_succeeds() {
    let cfg = assert_fs::TempDir::new().unwrap();
    let out = declutter(&cfg).arg("--print-config").output().expect("spawn binary");
    assert!(out.status.success(), "binary should succeed with --print-config");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("config.xml"), "{stdout}");
}

#[test]
fn init_config_writes_template_once() {
    let cfg = assert_fs::TempDir::new().unwrap();
    let out = declutter(&cfg).arg("--init-config").output().unwrap();
    assert!(out.status.success());
    assert!(cfg.child("config.xml").path().exists());

    let again = declutter(&cfg).arg("--init-config").output().unwrap();
    assert!(!again.status.success(), "existing config must not be replaced");
}

#[test]
fn by_name_auto_detect_moves_files() {
    let cfg = assert_fs::TempDir::new().unwrap();
    let work = assert_fs::TempDir::new().unwrap();
    for f in ["trip_paris_01.jpg", "trip_paris_02.jpg", "invoice.pdf"] {
        work.child(f).touch().unwrap();
    }

    let out = declutter(&cfg).arg("by-name").arg(work.path()).output().unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Moved: 2"), "{stdout}");
    assert!(work.child("paris/trip_paris_01.jpg").path().exists());
    assert!(work.child("invoice.pdf").path().exists());
}

#[test]
fn no_match_is_not_a_failure() {
    let cfg = assert_fs::TempDir::new().unwrap();
    let work = assert_fs::TempDir::new().unwrap();
    work.child("a.txt").touch().unwrap();

    let out = declutter(&cfg)
        .args(["by-name", "-m", "budget"])
        .arg(work.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("budget"));
}

#[test]
fn dry_run_type_clean_leaves_files() {
    let cfg = assert_fs::TempDir::new().unwrap();
    let work = assert_fs::TempDir::new().unwrap();
    work.child("photo.jpg").touch().unwrap();

    let out = declutter(&cfg)
        .args(["--dry-run", "by-type"])
        .arg(work.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Moved: 1"));
    assert!(work.child("photo.jpg").path().exists());
    assert!(!work.child("Images").path().exists());
}

#[test]
fn missing_directory_fails_with_code() {
    let cfg = assert_fs::TempDir::new().unwrap();
    let out = declutter(&cfg)
        .args(["list", "/definitely/not/a/real/dir"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn list_prints_categories() {
    let cfg = assert_fs::TempDir::new().unwrap();
    let work = assert_fs::TempDir::new().unwrap();
    work.child("song.mp3").touch().unwrap();
    work.child("notes.md").touch().unwrap();

    let out = declutter(&cfg).arg("list").arg(work.path()).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let audio = stdout.find("-- Audio --").expect("audio header");
    let docs = stdout.find("-- Documents --").expect("documents header");
    assert!(audio < docs);
    assert!(stdout.contains("Total files: 2"));
}
