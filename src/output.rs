//! User-facing output: colored prefixes and report rendering.
//! Colors are enabled only when stdout is a TTY.

use owo_colors::OwoColorize;

use crate::organize::TypeListing;
use crate::report::{GroupReport, MoveReport};

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix).
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// One line per group, plus the directory failure if there was one.
pub fn print_group_report(group: &GroupReport) {
    let verb = if group.report.dry_run { "would move" } else { "moved" };
    let line = format!(
        "[{}] {} {} of {} file(s) -> {}",
        group.label,
        verb,
        group.report.moved_count(),
        group.member_count(),
        group.destination.display()
    );
    match &group.directory_error {
        Some(reason) => print_warn(&format!("[{}] folder not usable: {}", group.label, reason)),
        None if is_tty() => println!("{}", line.bold()),
        None => print_user(&line),
    }
}

/// Totals line followed by the skipped files and their reasons.
pub fn print_move_summary(report: &MoveReport) {
    if report.dry_run {
        print_info("Dry run: no files or folders were changed.");
    }
    let moved = format!("Moved: {}", report.moved_count());
    let skipped = format!("Skipped: {}", report.skipped_count());
    if is_tty() {
        println!("{}  {}", moved.green(), skipped.yellow());
    } else {
        println!("{}  {}", moved, skipped);
    }

    if !report.skipped.is_empty() {
        print_user("Skipped files:");
        for s in &report.skipped {
            print_user(&format!(" - {} ({})", s.file_name, s.reason));
        }
    }
}

fn paint_for_category(category: &str, text: &str) -> String {
    if !is_tty() {
        return text.to_string();
    }
    match category {
        "Images" => text.green().to_string(),
        "Videos" => text.magenta().to_string(),
        "Audio" => text.cyan().to_string(),
        "Documents" => text.yellow().to_string(),
        "Archives" => text.red().to_string(),
        "Code" => text.blue().to_string(),
        _ => text.white().to_string(),
    }
}

pub fn print_listing(listing: &TypeListing) {
    if listing.is_empty() {
        print_warn("No files found in this directory.");
        return;
    }

    for category in &listing.categories {
        let header = format!("-- {} --", category.name);
        if is_tty() {
            println!("{}", header.bold());
        } else {
            println!("{}", header);
        }
        for file in &category.files {
            let ext = file
                .path
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_default();
            let name = paint_for_category(&category.name, &format!("{:<60}", file.file_name));
            if is_tty() {
                println!("{} {}", name, format!("({ext})").dimmed());
            } else {
                println!("{} ({ext})", name);
            }
        }
        println!();
    }
    print_user(&format!("Total files: {}", listing.total()));
}
