//! Shell variant configuration.
//!
//! The terminal shipped in several iterations that differ only cosmetically:
//! banner text, import-command spelling, package allow-list, and whether
//! `clear` resets the scrollback to the banner or to nothing. Those
//! divergences live here as data. Loaded from `termysh.toml`; every field
//! has a default, so an absent or empty file yields the stock variant.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TermyError};

/// Configuration for one shell variant.
#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    /// Lines shown at session start and after a banner-style `clear`.
    #[serde(default = "default_banner")]
    pub banner: Vec<String>,
    /// Prefix used when echoing an entered command into the scrollback.
    #[serde(default = "default_echo_prefix")]
    pub echo_prefix: String,
    /// Leading token of the package-import command.
    #[serde(default = "default_import_command")]
    pub import_command: String,
    /// Package identifiers that may be imported.
    #[serde(default = "default_allowed_packages")]
    pub allowed_packages: Vec<String>,
    /// `true`: `clear` resets the scrollback to the banner.
    /// `false`: `clear` resets it to empty.
    #[serde(default = "default_clear_to_banner")]
    pub clear_to_banner: bool,
    /// Echo-request count passed to `ping`.
    #[serde(default = "default_ping_count")]
    pub ping_count: u32,
    /// Extra hint line appended to the `Command not found` message.
    #[serde(default)]
    pub help_hint: Option<String>,
}

fn default_banner() -> Vec<String> {
    vec![
        "TermySH - Local Based Advanced Terminal".to_string(),
        "Use 'h' for help".to_string(),
    ]
}

fn default_echo_prefix() -> String {
    "> ".to_string()
}

fn default_import_command() -> String {
    "termy-import".to_string()
}

fn default_allowed_packages() -> Vec<String> {
    vec!["math".to_string(), "shell".to_string(), "files".to_string()]
}

fn default_clear_to_banner() -> bool {
    true
}

fn default_ping_count() -> u32 {
    4
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            banner: default_banner(),
            echo_prefix: default_echo_prefix(),
            import_command: default_import_command(),
            allowed_packages: default_allowed_packages(),
            clear_to_banner: default_clear_to_banner(),
            ping_count: default_ping_count(),
            help_hint: None,
        }
    }
}

impl ShellConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, falling back to the defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.import_command.is_empty()
            || self.import_command.chars().any(|c| c.is_whitespace())
        {
            return Err(TermyError::Config(format!(
                "import_command must be a single word, got '{}'",
                self.import_command
            )));
        }
        if self.allowed_packages.iter().any(|p| p.is_empty()) {
            return Err(TermyError::Config(
                "allowed_packages must not contain empty names".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_stock_variant() {
        let config = ShellConfig::default();
        assert_eq!(config.banner.len(), 2);
        assert!(config.banner[0].contains("TermySH"));
        assert_eq!(config.import_command, "termy-import");
        assert_eq!(
            config.allowed_packages,
            vec!["math", "shell", "files"]
        );
        assert!(config.clear_to_banner);
        assert_eq!(config.ping_count, 4);
        assert!(config.help_hint.is_none());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = ShellConfig::from_toml_str("").unwrap();
        assert_eq!(config.echo_prefix, "> ");
        assert_eq!(config.ping_count, 4);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = ShellConfig::from_toml_str(
            r#"
banner = ["ty v2"]
import_command = "ty.import"
allowed_packages = ["math", "game"]
clear_to_banner = false
help_hint = "Type 'h' for help"
"#,
        )
        .unwrap();
        assert_eq!(config.banner, vec!["ty v2"]);
        assert_eq!(config.import_command, "ty.import");
        assert_eq!(config.allowed_packages, vec!["math", "game"]);
        assert!(!config.clear_to_banner);
        assert_eq!(config.help_hint.as_deref(), Some("Type 'h' for help"));
        // Untouched fields keep their defaults.
        assert_eq!(config.echo_prefix, "> ");
        assert_eq!(config.ping_count, 4);
    }

    #[test]
    fn import_command_with_spaces_rejected() {
        let err = ShellConfig::from_toml_str(r#"import_command = "termy import""#)
            .unwrap_err();
        assert!(matches!(err, TermyError::Config(_)));
    }

    #[test]
    fn empty_package_name_rejected() {
        let err =
            ShellConfig::from_toml_str(r#"allowed_packages = ["math", ""]"#).unwrap_err();
        assert!(matches!(err, TermyError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = ShellConfig::from_toml_str("banner = [[[").unwrap_err();
        assert!(matches!(err, TermyError::TomlParse(_)));
    }

    #[test]
    fn load_missing_file_yields_defaults() {
        let config = ShellConfig::load(Path::new("/nonexistent/termysh.toml")).unwrap();
        assert_eq!(config.import_command, "termy-import");
    }
}
