//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Global flags may appear before or after the subcommand.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, Subcommand, ValueHint};
use std::path::{Path, PathBuf};

use crate::config::{Config, LogLevel, MembershipRule, OverlapPolicy};

/// Sort the files of a directory into folders by shared name or by type.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Sort the files of a directory into folders by shared name or by type",
    arg_required_else_help = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file to use instead of $DECLUTTER_CONFIG or the OS default.
    #[arg(short = 'c', long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, value_name = "LEVEL", help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<LogLevel>,

    #[arg(
        short = 'd',
        long,
        global = true,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,

    #[arg(
        long,
        global = true,
        help = "Show what would be done, but do not modify files/directories"
    )]
    pub dry_run: bool,

    /// Auto-detect only groups files whose own name produced the token.
    #[arg(long, global = true)]
    pub strict_tokens: bool,

    /// Auto-detect keeps overlapping groups instead of giving each file to its best group.
    #[arg(long, global = true)]
    pub keep_overlap: bool,

    #[arg(long, help = "Print the config file location used by declutter and exit")]
    pub print_config: bool,

    #[arg(long, help = "Write a commented template config file and exit")]
    pub init_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Group files by a search text, or by detected common name tokens.
    ByName {
        /// Directory to organize (default: current directory)
        #[arg(value_hint = ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Move files whose name contains this text (case-insensitive).
        /// Without it the most common name tokens are detected.
        #[arg(short = 'm', long = "match", value_name = "PATTERN")]
        pattern: Option<String>,
    },
    /// Move files into category folders by extension.
    ByType {
        #[arg(value_hint = ValueHint::DirPath)]
        dir: Option<PathBuf>,
    },
    /// List files grouped by category without moving anything.
    List {
        #[arg(value_hint = ValueHint::DirPath)]
        dir: Option<PathBuf>,
    },
}

impl Command {
    pub fn dir(&self) -> Option<&Path> {
        match self {
            Command::ByName { dir, .. } | Command::ByType { dir } | Command::List { dir } => {
                dir.as_deref()
            }
        }
    }
}

impl Args {
    /// Directory argument of the subcommand with stray shell quoting removed.
    /// `None` means "use the current directory".
    pub fn resolved_directory(&self) -> Option<PathBuf> {
        self.command
            .as_ref()
            .and_then(Command::dir)
            .map(|p| Self::sanitize_str(&p.to_string_lossy()))
    }

    fn sanitize_str(s: &str) -> PathBuf {
        // Quotes survive when the shell was asked to pass them literally (PowerShell, CMD).
        let trimmed = s.trim();
        let mut inner = if trimmed.len() >= 2
            && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
                || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
        {
            trimmed[1..trimmed.len() - 1].to_string()
        } else {
            trimmed.trim_matches(|c| c == '\'' || c == '"').to_string()
        };

        // One trailing separator; never the root itself.
        if (inner.ends_with('\\') || inner.ends_with('/')) && inner.len() > 1 {
            inner.pop();
        }

        PathBuf::from(inner)
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.strict_tokens {
            cfg.membership = MembershipRule::Token;
        }
        if self.keep_overlap {
            cfg.overlap = OverlapPolicy::Keep;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
