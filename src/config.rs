//! Sitemap configuration.
//!
//! Everything that used to be a per-deployment constant lives in
//! [`SitemapConfig`]: the base URL prefixed to every `<loc>`, the site root to
//! scan, the output file, and the site-specific priority tweaks.
//!
//! ## Config File Location
//!
//! An optional `sitemap.toml` in the working directory overrides the stock
//! defaults. Command-line flags override the file.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! base_url = ""              # Prefixed to every <loc>, e.g. "https://example.com"
//! site_root = "."            # Directory to scan
//! output = "sitemap.xml"     # Written in the working directory
//! robots_file = "robots.txt" # Relative to site_root, required
//! lastmod_utc = false        # Convert <lastmod> to UTC before formatting
//!
//! [priority]
//! index_bonus = 0.10
//! featured_section = "/lifts"
//! featured_bonus = 0.20
//! archive_section = "/blog"
//! archive_penalty = 0.15
//! clamp_priority = false
//! ```
//!
//! Config files are sparse and unknown keys are rejected.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "sitemap.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Sitemap configuration loaded from `sitemap.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SitemapConfig {
    /// Prefixed verbatim to every location. Empty means relative locations.
    pub base_url: String,
    /// Root of the website file tree.
    pub site_root: PathBuf,
    /// Output file, truncated on every run.
    pub output: PathBuf,
    /// Exclusion file, resolved against `site_root`.
    pub robots_file: String,
    /// Convert modification times to UTC so the `+00:00` suffix is accurate.
    /// Off by default: the timestamp is rendered in local time.
    pub lastmod_utc: bool,
    /// Site-specific priority adjustments.
    pub priority: PriorityConfig,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            site_root: PathBuf::from("."),
            output: PathBuf::from("sitemap.xml"),
            robots_file: "robots.txt".to_string(),
            lastmod_utc: false,
            priority: PriorityConfig::default(),
        }
    }
}

impl SitemapConfig {
    /// Full path of the robots exclusion file.
    pub fn robots_path(&self) -> PathBuf {
        self.site_root.join(&self.robots_file)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        if self.robots_file.is_empty() {
            return Err(ConfigError::Validation(
                "robots_file must not be empty".into(),
            ));
        }
        self.priority.validate()
    }
}

/// Priority heuristic tweaks.
///
/// Pages under `featured_section` are boosted, pages under `archive_section`
/// that are not from the current year are demoted, and nested index pages get
/// a small bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PriorityConfig {
    pub index_bonus: f64,
    pub featured_section: String,
    pub featured_bonus: f64,
    pub archive_section: String,
    pub archive_penalty: f64,
    /// Limit scores to `0.0..=1.0`. Off by default: deep pages can go negative.
    pub clamp_priority: bool,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            index_bonus: 0.10,
            featured_section: "/lifts".to_string(),
            featured_bonus: 0.20,
            archive_section: "/blog".to_string(),
            archive_penalty: 0.15,
            clamp_priority: false,
        }
    }
}

impl PriorityConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let adjustments = [
            ("priority.index_bonus", self.index_bonus),
            ("priority.featured_bonus", self.featured_bonus),
            ("priority.archive_penalty", self.archive_penalty),
        ];
        for (key, value) in adjustments {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be between 0.0 and 1.0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Values passed on the command line. `None` leaves the loaded value alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub site_root: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Apply the overrides on top of `config`.
    pub fn apply(self, mut config: SitemapConfig) -> SitemapConfig {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(site_root) = self.site_root {
            config.site_root = site_root;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        config
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SitemapConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<SitemapConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SitemapConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the config at `path`, apply command-line overrides, and validate.
pub fn load_config(path: &Path, overrides: ConfigOverrides) -> Result<SitemapConfig, ConfigError> {
    let config = overrides.apply(resolve_config(load_raw_config(path)?)?);
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `sitemap.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# sitemap-gen configuration
# ========================
# All settings are optional. Values shown below are the defaults.
# Command-line flags (--base-url, --site, --output) override this file.
# Unknown keys will cause an error.

# Prefixed verbatim to every <loc>. Set this per deployment,
# e.g. "https://www.example.com".
base_url = ""

# Root of the website file tree to scan.
site_root = "."

# Sitemap file to write. Overwritten on every run.
output = "sitemap.xml"

# Exclusion file inside site_root. Any page whose path (without ".php")
# appears anywhere in this file is left out of the sitemap.
robots_file = "robots.txt"

# <lastmod> is rendered in local time followed by a literal "+00:00".
# Set to true to convert to UTC first so the offset is accurate.
lastmod_utc = false

# ---------------------------------------------------------------------------
# Priority heuristic
# ---------------------------------------------------------------------------
# Base priority is 0.9 minus 0.15 per directory level. The site root
# /index.php is always 1.00. The first matching rule below applies.
[priority]
# Added to nested index pages.
index_bonus = 0.10

# Pages under this path get featured_bonus added.
featured_section = "/lifts"
featured_bonus = 0.20

# Pages under this path lose archive_penalty unless their path contains
# the current year (e.g. /blog/2026/...).
archive_section = "/blog"
archive_penalty = 0.15

# Pages seven or more levels deep score below zero (e.g. -0.15). Set to
# true to keep every score within the sitemap protocol's 0.0 - 1.0 range.
clamp_priority = false
"##
}
