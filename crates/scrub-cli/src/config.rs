//! Engine settings loaded from TOML.
//!
//! ```toml
//! preview_rows = 20
//! value_list_limit = 50
//!
//! [detection]
//! sample_rows = 10
//! min_matches = 5
//! name_patterns = ["date", "year", "time", "dt"]
//!
//! [export]
//! suffix = "_cleaned"
//! format = "json"
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use scrub_model::EngineOptions;
use tracing::debug;

/// File picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "scrub.toml";

/// Parses engine options from TOML text.
pub fn parse_options(content: &str) -> Result<EngineOptions> {
    toml::from_str(content).context("parse engine settings")
}

/// Reads engine options from `path`.
pub fn load_options_from(path: &Path) -> Result<EngineOptions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    parse_options(&content).with_context(|| format!("in {}", path.display()))
}

/// Resolves the settings for a run.
///
/// An explicit path must exist. Otherwise `scrub.toml` in `working_dir` is
/// used when present, and built-in defaults when not.
pub fn resolve_options(explicit: Option<&Path>, working_dir: &Path) -> Result<EngineOptions> {
    let path: PathBuf = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = working_dir.join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                debug!("no config file, using defaults");
                return Ok(EngineOptions::default());
            }
            candidate
        }
    };
    let options = load_options_from(&path)?;
    debug!(path = %path.display(), "loaded config");
    Ok(options)
}
