//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a commented template on request (`--init-config`).
//!
//! Notes:
//! - A missing file is not an error: the built-in lists are used.
//! - Unknown elements or invalid values are hard errors so typos surface early.
//! - A list element that is present replaces the built-in list, even when empty.

use anyhow::{anyhow, bail, Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{default_log_path, path_has_symlink_ancestor, resolve_config_path};
use super::types::{Config, LogLevel, MembershipRule, OverlapPolicy};

use crate::catalog::{IgnoreSet, TypeCatalog};
use crate::platform::{set_dir_mode_0700, write_config_secure_new_0600};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
    #[serde(rename = "dry_run", default, deserialize_with = "de_bool_trimmed_opt")]
    dry_run: Option<bool>,
    #[serde(rename = "membership")]
    membership: Option<String>,
    #[serde(rename = "overlap")]
    overlap: Option<String>,
    #[serde(rename = "ignore_tokens")]
    ignore_tokens: Option<XmlTokens>,
    #[serde(rename = "dangerous_extensions")]
    dangerous_extensions: Option<XmlExts>,
    #[serde(rename = "categories")]
    categories: Option<XmlCategories>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlTokens {
    #[serde(rename = "token", default)]
    items: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlExts {
    #[serde(rename = "ext", default)]
    items: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlCategories {
    #[serde(rename = "category", default)]
    items: Vec<XmlCategory>,
}

#[derive(Debug, Deserialize)]
struct XmlCategory {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "ext", default)]
    exts: Vec<String>,
}

// Custom deserializer that trims surrounding whitespace for optional bool
fn de_bool_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some("true") | Some("1") | Some("yes") => Ok(Some(true)),
        Some("false") | Some("0") | Some("no") => Ok(Some(false)),
        Some(other) => Err(D::Error::custom(format!("invalid boolean '{other}'"))),
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file.
    File(PathBuf),
    /// No file at this location (or no location at all); built-ins in use.
    Defaults(Option<PathBuf>),
}

// Map XmlConfig -> Config
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = parsed.log_level.as_deref() {
        cfg.log_level = s.parse::<LogLevel>().map_err(|e| anyhow!(e))?;
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }
    cfg.dry_run = parsed.dry_run.unwrap_or(false);
    if let Some(s) = parsed.membership.as_deref() {
        cfg.membership = s.parse::<MembershipRule>().map_err(|e| anyhow!(e))?;
    }
    if let Some(s) = parsed.overlap.as_deref() {
        cfg.overlap = s.parse::<OverlapPolicy>().map_err(|e| anyhow!(e))?;
    }

    if let Some(tokens) = parsed.ignore_tokens {
        cfg.ignore = IgnoreSet::new(tokens.items);
    }

    let replace_categories = parsed.categories.is_some();
    let replace_dangerous = parsed.dangerous_extensions.is_some();
    if replace_categories || replace_dangerous {
        let categories: Vec<(String, Vec<String>)> = match parsed.categories {
            Some(c) => c.items.into_iter().map(|c| (c.name, c.exts)).collect(),
            None => cfg.catalog.categories().clone().into_iter().collect(),
        };
        let dangerous: Vec<String> = match parsed.dangerous_extensions {
            Some(d) => d.items,
            None => cfg.catalog.dangerous().into_iter().map(str::to_string).collect(),
        };
        cfg.catalog = TypeCatalog::new(categories, dangerous);
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path (quick_xml).
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid value in config '{}'", path.display()))
}

/// Resolve the config location (explicit > $DECLUTTER_CONFIG > OS default)
/// and load it. A missing file yields the built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, ConfigSource)> {
    let Some(path) = resolve_config_path(explicit) else {
        debug!("No config location available; using built-in defaults");
        return Ok((Config::default(), ConfigSource::Defaults(None)));
    };

    if !path.exists() {
        // An explicitly named file must exist; the implicit default may not.
        if explicit.is_some() {
            bail!("Config file not found: {}", path.display());
        }
        debug!(path = %path.display(), "Config file not found; using built-in defaults");
        return Ok((Config::default(), ConfigSource::Defaults(Some(path))));
    }

    let cfg = load_config_from_xml_path(&path)?;
    debug!(path = %path.display(), "Loaded config");
    Ok((cfg, ConfigSource::File(path)))
}

/// Render the template for the given config (normally the defaults).
pub fn render_template(cfg: &Config) -> String {
    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "/path/to/declutter.log".into());

    let tokens: String = cfg
        .ignore
        .sorted()
        .iter()
        .map(|t| format!("    <token>{t}</token>\n"))
        .collect();
    let dangerous: String = cfg
        .catalog
        .dangerous()
        .iter()
        .map(|e| format!("    <ext>{e}</ext>\n"))
        .collect();
    let mut categories = String::new();
    for (name, exts) in cfg.catalog.categories() {
        if exts.is_empty() {
            categories.push_str(&format!("    <category name=\"{name}\"/>\n"));
            continue;
        }
        categories.push_str(&format!("    <category name=\"{name}\">"));
        for e in exts {
            categories.push_str(&format!("<ext>{e}</ext>"));
        }
        categories.push_str("</category>\n");
    }

    format!(
        "<!--\n  declutter configuration (XML)\n\n    log_level             -> quiet | normal | info | debug\n    log_file              -> optional log file, off unless set (stderr is always used)\n    dry_run               -> true: report only, never touch files\n    membership            -> filename (name contains the token) | token (stem produced the token)\n    overlap               -> first-wins (a file joins only its best group) | keep\n    ignore_tokens         -> words never used as folder names\n    dangerous_extensions  -> files the type cleaner never moves\n    categories            -> folder name -> extensions for the type cleaner\n\n  CLI flags override these values. Removing a list keeps the built-in list;\n  an empty list disables it.\n-->\n<config>\n  <log_level>{}</log_level>\n  <!-- <log_file>{}</log_file> -->\n  <dry_run>{}</dry_run>\n  <membership>{}</membership>\n  <overlap>{}</overlap>\n  <ignore_tokens>\n{}  </ignore_tokens>\n  <dangerous_extensions>\n{}  </dangerous_extensions>\n  <categories>\n{}  </categories>\n</config>\n",
        cfg.log_level,
        suggested_log,
        cfg.dry_run,
        cfg.membership,
        cfg.overlap,
        tokens,
        dangerous,
        categories,
    )
}

/// Create the template config file and parent directory (best-effort permissions).
/// Never replaces an existing file.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir '{}'", parent.display()))?;
            let _ = set_dir_mode_0700(parent);
        }
    }

    let content = render_template(&Config::default());
    write_config_secure_new_0600(path, content.as_bytes())?;

    info!("Created template config at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn template_round_trips_through_parser() {
        let td = tempdir().unwrap();
        let path = td.path().join("nested").join("config.xml");
        create_template_config(&path).unwrap();

        let cfg = load_config_from_xml_path(&path).unwrap();
        let defaults = Config::default();
        assert_eq!(cfg.ignore, defaults.ignore);
        assert_eq!(cfg.catalog.categories(), defaults.catalog.categories());
        assert_eq!(cfg.catalog.dangerous(), defaults.catalog.dangerous());
        assert_eq!(
            cfg.catalog.category_for(Path::new("x.iso")),
            "DiskImages"
        );
    }

    #[test]
    fn template_is_never_overwritten() {
        let td = tempdir().unwrap();
        let path = td.path().join("config.xml");
        fs::write(&path, "<config/>").unwrap();
        assert!(create_template_config(&path).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "<config/>");
    }

    #[test]
    fn invalid_membership_is_rejected() {
        let td = tempdir().unwrap();
        let path = td.path().join("config.xml");
        fs::write(&path, "<config><membership>fuzzy</membership></config>").unwrap();
        let err = load_config_from_xml_path(&path).unwrap_err();
        assert!(format!("{err:#}").contains("membership"));
    }
}
