//! Pipeline configuration.
//!
//! Configuration lives in a `revstamp.toml` file (or is assembled from CLI
//! flags) and names the source tree, the subdirectories to process, the
//! output root, the fingerprint extension set, and an optional public-path
//! domain prefix.
//!
//! ```toml
//! base_dir = "site"            # root of all source paths
//! paths = ["assets", "pages"]  # subdirectories of base_dir to process
//! output_dir = "dist"          # destination root
//! exts = [".js", ".png"]       # fingerprinted extensions, leading dot required
//! domain = ""                  # public-path prefix, "" = none
//! ```
//!
//! Unknown keys are rejected to catch typos early. All fields default, so a
//! sparse file is fine — but a config without `base_dir` and `paths` makes
//! the pipeline a deliberate no-op (see [`crate::pipeline::run`]).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Pipeline configuration, loadable from `revstamp.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root directory all source paths are relative to.
    pub base_dir: PathBuf,
    /// Subdirectories of `base_dir` to process, in order.
    pub paths: Vec<String>,
    /// Destination root for the materialized tree.
    pub output_dir: PathBuf,
    /// File extensions eligible for fingerprinting. Each entry includes the
    /// leading dot and is matched exactly (case-sensitive).
    pub exts: Vec<String>,
    /// Optional prefix for public paths in the rename map. Empty = none.
    pub domain: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::new(),
            paths: Vec::new(),
            output_dir: PathBuf::from("dist"),
            exts: Vec::new(),
            domain: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Whether the fields required for a run are present. An incomplete
    /// config makes [`crate::pipeline::run`] a silent no-op, never an error.
    pub fn is_complete(&self) -> bool {
        !self.base_dir.as_os_str().is_empty() && !self.paths.is_empty()
    }

    /// Reject configs that are well-formed TOML but cannot mean what the
    /// user intended. Called by the CLI before running; the library entry
    /// point deliberately does not validate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for ext in &self.exts {
            if !ext.starts_with('.') {
                return Err(ConfigError::Validation(format!(
                    "exts entries must include the leading dot: {ext:?}"
                )));
            }
        }
        if !self.base_dir.as_os_str().is_empty() && self.output_dir == self.base_dir {
            return Err(ConfigError::Validation(
                "output_dir must differ from base_dir".into(),
            ));
        }
        Ok(())
    }
}

/// A stock `revstamp.toml` with every option documented. Printed by the
/// `gen-config` subcommand.
pub fn stock_config_toml() -> &'static str {
    r#"# revstamp configuration
#
# The pipeline copies every file under base_dir/<path> into output_dir,
# renaming files whose extension is listed in `exts` to embed a short
# content hash (cache-busting), then rewrites url(...) references in
# CSS/LESS/SASS files and src=... references in HTML/Mustache files to
# point at the fingerprinted names.

# Root directory all source paths are relative to. Required.
base_dir = "site"

# Subdirectories of base_dir to process, in order. Required.
paths = ["assets"]

# Destination root for the materialized tree.
output_dir = "dist"

# Extensions eligible for fingerprinting. Leading dot required,
# matched exactly (case-sensitive).
exts = [".js", ".css", ".png", ".jpg", ".gif", ".svg", ".woff2"]

# Optional prefix for public paths in the rename map, e.g. a CDN origin.
# Empty means bare relative paths.
domain = ""
"#
}
