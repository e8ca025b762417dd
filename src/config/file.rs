//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::UnifyConfig;
use super::validation::Validatable;
use crate::error::{Result, UnifyError};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".item-unify.yaml",
    ".item-unify.yml",
    "item-unify.yaml",
    "item-unify.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    None
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Load a `UnifyConfig` from a YAML file and validate it.
///
/// Shape errors (unparseable YAML, uncompilable patterns, malformed alias
/// fragments) are fatal here, before the engine accepts any events.
pub fn load_config_file(path: &Path) -> Result<UnifyConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: UnifyConfig = serde_yaml::from_str(&content)?;

    let errors = config.validate();
    if !errors.is_empty() {
        let joined = errors
            .iter()
            .map(std::string::ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(UnifyError::config(joined));
    }

    Ok(config)
}

/// Load config from a discovered file, or return the default.
///
/// A file that exists but fails to load is reported and ignored; the default
/// configuration is used instead.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (UnifyConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (UnifyConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (UnifyConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Tests
// ============================================================================
