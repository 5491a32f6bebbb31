//! Application orchestrator.
//! Loads/merges config, initializes logging, resolves the target directory
//! and runs the requested organize mode.

use anyhow::{anyhow, bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use declutter::cli::{Args, Command};
use declutter::config::{create_template_config, resolve_config_path};
use declutter::output as out;
use declutter::{
    list_by_type, load_config, organize_by_auto_detect, organize_by_explicit_match,
    organize_by_type, Config, MoveReport, OrganizeError, CONFIG_ENV,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Config housekeeping flags run before logging init
    if args.print_config {
        return print_config_location(&args);
    }
    if args.init_config {
        let path = resolve_config_path(args.config.as_deref())
            .ok_or_else(|| anyhow!("Could not determine a config location; pass --config PATH"))?;
        create_template_config(&path)?;
        out::print_success(&format!("Template config written to: {}", path.display()));
        return Ok(());
    }

    let (mut cfg, source) = load_config(args.config.as_deref())?;
    args.apply_overrides(&mut cfg);

    // Held until the end of run so the file appender flushes.
    let _guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json)
        .context("Failed to initialize logging")?;
    debug!(?source, membership = %cfg.membership, overlap = %cfg.overlap, dry_run = cfg.dry_run, "Configuration ready");

    let Some(command) = args.command.as_ref() else {
        bail!("No command given; run with --help for usage");
    };

    let dir = target_directory(&args)?;
    debug!(dir = %dir.display(), ?command, "Starting");

    let result = dispatch(command, &dir, &cfg);
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_nothing_to_do() => {
            out::print_warn(&e.to_string());
            Ok(())
        }
        Err(e) => {
            log_failure(&e);
            Err(e.into())
        }
    }
}

fn print_config_location(args: &Args) -> Result<()> {
    if let Some(explicit) = &args.config {
        out::print_info(&format!("Using --config:\n  {}\n", explicit.display()));
    } else if let Some(v) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        out::print_info(&format!(
            "Using {CONFIG_ENV} (explicit):\n  {}\n",
            PathBuf::from(v).display()
        ));
        out::print_info(&format!("To override, unset {CONFIG_ENV} or pass --config."));
    }

    match resolve_config_path(args.config.as_deref()) {
        Some(p) => {
            if args.config.is_none() && env::var_os(CONFIG_ENV).is_none_or(|v| v.is_empty()) {
                out::print_info(&format!("Default declutter config path:\n  {}\n", p.display()));
            }
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info("No config file exists there yet; built-in defaults are used. Run with --init-config to create one.");
            }
        }
        None => out::print_error("Could not determine a default config path."),
    }
    Ok(())
}

/// Subcommand directory (or the current directory), made absolute.
fn target_directory(args: &Args) -> Result<PathBuf> {
    let dir = match args.resolved_directory() {
        Some(d) => d,
        None => env::current_dir().context("Cannot determine the current directory")?,
    };
    let canonical =
        dunce::canonicalize(&dir).map_err(|_| OrganizeError::InvalidDirectory(dir.clone()))?;
    Ok(canonical)
}

fn dispatch(command: &Command, dir: &Path, cfg: &Config) -> Result<(), OrganizeError> {
    match command {
        Command::ByName {
            pattern: Some(pattern),
            ..
        } => {
            let group = organize_by_explicit_match(dir, pattern, cfg)?;
            out::print_group_report(&group);
            out::print_move_summary(&group.report);
        }
        Command::ByName { pattern: None, .. } => {
            let groups = organize_by_auto_detect(dir, cfg)?;
            let mut total = MoveReport::new(cfg.dry_run);
            for group in groups {
                out::print_group_report(&group);
                total.merge(group.report);
            }
            out::print_move_summary(&total);
        }
        Command::ByType { .. } => {
            let report = organize_by_type(dir, cfg)?;
            out::print_move_summary(&report);
        }
        Command::List { .. } => {
            let listing = list_by_type(dir, cfg)?;
            out::print_listing(&listing);
        }
    }
    Ok(())
}

fn log_failure(e: &OrganizeError) {
    let code = e.code();
    match e {
        OrganizeError::InvalidDirectory(path) => {
            error!(code, kind = "invalid_directory", path = %path.display(), "Cannot organize")
        }
        OrganizeError::Scan { path, source } => {
            error!(code, kind = "scan", path = %path.display(), error = %source, "Cannot organize")
        }
        OrganizeError::EmptyPattern => error!(code, kind = "empty_pattern", "Cannot organize"),
        _ => error!(code, kind = "organize_error", error = ?e, "Cannot organize"),
    }
}
