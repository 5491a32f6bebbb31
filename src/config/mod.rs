//! Config module.
//! Provides configuration types, built-in defaults, default paths and XML loading.

pub mod defaults;
pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor, resolve_config_path};
pub use types::{Config, LogLevel, MembershipRule, OverlapPolicy};
pub use xml::{create_template_config, load_config, load_config_from_xml_path, render_template, ConfigSource};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "DECLUTTER_CONFIG";
