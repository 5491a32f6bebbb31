//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel, MembershipRule and OverlapPolicy carry simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::catalog::{IgnoreSet, TypeCatalog};

use super::defaults;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Warnings and errors (default)
    #[default]
    Normal,
    /// Per-group progress
    Info,
    /// Per-file decisions
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// How auto-detect decides which files belong to a ranked token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MembershipRule {
    /// Lowercased filename contains the token anywhere.
    #[default]
    Filename,
    /// The file's own stem produced exactly this token.
    Token,
}

impl MembershipRule {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filename" | "substring" | "loose" => Some(MembershipRule::Filename),
            "token" | "strict" => Some(MembershipRule::Token),
            _ => None,
        }
    }
}

impl fmt::Display for MembershipRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MembershipRule::Filename => "filename",
            MembershipRule::Token => "token",
        })
    }
}

impl FromStr for MembershipRule {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid membership rule: '{s}'"))
    }
}

/// What happens when one file qualifies for several auto-detected groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// The highest-ranked group takes the file; later groups lose it and
    /// are dropped if fewer than two members remain.
    #[default]
    FirstWins,
    /// Every group keeps its full membership; files already moved by an
    /// earlier group are reported as skipped.
    Keep,
}

impl OverlapPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-wins" | "first_wins" | "firstwins" => Some(OverlapPolicy::FirstWins),
            "keep" | "allow" => Some(OverlapPolicy::Keep),
            _ => None,
        }
    }
}

impl fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OverlapPolicy::FirstWins => "first-wins",
            OverlapPolicy::Keep => "keep",
        })
    }
}

impl FromStr for OverlapPolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid overlap policy: '{s}'"))
    }
}

/// Runtime configuration shared (read-only) by every organize pass.
#[derive(Debug, Clone)]
pub struct Config {
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, report actions but do not modify the filesystem
    pub dry_run: bool,
    /// Auto-detect group membership rule
    pub membership: MembershipRule,
    /// Auto-detect handling of files matching several groups
    pub overlap: OverlapPolicy,
    /// Stop-words never used as group labels
    pub ignore: IgnoreSet,
    /// Extension categories and dangerous extensions for the type cleaner
    pub catalog: TypeCatalog,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Normal,
            log_file: None,
            dry_run: false,
            membership: MembershipRule::default(),
            overlap: OverlapPolicy::default(),
            ignore: IgnoreSet::new(defaults::DEFAULT_IGNORE_TOKENS.iter().copied()),
            catalog: TypeCatalog::new(
                defaults::default_categories(),
                defaults::DEFAULT_DANGEROUS_EXTS.iter().copied(),
            ),
        }
    }
}

impl Config {
    /// Default config with a custom ignore list; handy for tests and embedding.
    pub fn with_ignore<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            ignore: IgnoreSet::new(tokens),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_policies_case_insensitive() {
        assert_eq!(MembershipRule::parse(" Token "), Some(MembershipRule::Token));
        assert_eq!(MembershipRule::parse("FILENAME"), Some(MembershipRule::Filename));
        assert_eq!(OverlapPolicy::parse("Keep"), Some(OverlapPolicy::Keep));
        assert_eq!(OverlapPolicy::parse("first-wins"), Some(OverlapPolicy::FirstWins));
        assert!("sideways".parse::<OverlapPolicy>().is_err());
    }

    #[test]
    fn defaults_carry_builtin_lists() {
        let cfg = Config::default();
        assert!(cfg.ignore.contains("official"));
        assert!(cfg.catalog.is_dangerous(std::path::Path::new("setup.EXE")));
        assert_eq!(cfg.log_level.to_string(), "normal");
        assert!(!cfg.dry_run);
    }
}
