//! Configuration types for the unification engine.
//!
//! All sections are serde-deserializable with full defaults, so a partial
//! config file only overrides what it names. Configuration is hot-reloadable
//! between calls: the engine snapshots it at construction and the signature
//! cache TTL bounds staleness after a reload.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Top-level configuration
// ============================================================================

/// Top-level configuration for the unification engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct UnifyConfig {
    /// Category allow/deny filtering
    pub filter: FilterRulesConfig,
    /// Source namespace preferences and blacklist
    pub sources: SourcesConfig,
    /// Alias groups of interchangeable name fragments
    pub aliases: AliasConfig,
    /// Per-event unification toggles
    pub events: EventConfig,
    /// Signature cache tuning
    pub cache: CacheConfig,
}

// ============================================================================
// Filtering
// ============================================================================

/// Which of the allow/deny lists participate in category filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ListMode {
    /// Accept only categories matching some allow pattern
    AllowOnly,
    /// Accept only categories matching no deny pattern
    DenyOnly,
    /// Both rules must hold (allow match AND no deny match)
    #[default]
    Both,
    /// Accept every category unconditionally
    Neither,
}

/// Allow/deny pattern lists for category filtering.
///
/// Patterns are regular expressions matched against the full qualified
/// category name (`namespace:path`) as a whole string, not a substring
/// search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FilterRulesConfig {
    /// Category names that should be unified
    pub allow_patterns: Vec<String>,
    /// Category names that should not be unified
    pub deny_patterns: Vec<String>,
    /// Which lists participate in filtering
    pub list_mode: ListMode,
}

impl Default for FilterRulesConfig {
    fn default() -> Self {
        Self {
            allow_patterns: super::defaults::default_allow_patterns(),
            deny_patterns: super::defaults::default_deny_patterns(),
            list_mode: ListMode::Both,
        }
    }
}

// ============================================================================
// Sources
// ============================================================================

/// Source namespace ranking and exclusions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SourcesConfig {
    /// Preferred source namespaces, earlier = more preferred. Namespaces not
    /// listed rank last, in catalog encounter order among themselves.
    pub preferred: Vec<String>,
    /// Source namespaces whose items are never unified
    pub blacklisted: Vec<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            preferred: super::defaults::default_preferred_sources(),
            blacklisted: super::defaults::default_blacklisted_sources(),
        }
    }
}

// ============================================================================
// Aliases
// ============================================================================

/// Configured alias groups.
///
/// Each group is a small set of interchangeable name fragments (for example
/// `["aluminum", "aluminium", "bauxite"]`); categories containing one
/// fragment are also treated as carrying the variants with the sibling
/// fragments substituted. Fragments must not contain the namespace
/// separator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AliasConfig {
    /// Groups of interchangeable fragments
    pub groups: Vec<Vec<String>>,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            groups: super::defaults::default_alias_groups(),
        }
    }
}

// ============================================================================
// Events
// ============================================================================

/// Which gameplay events trigger unification.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EventConfig {
    /// Unify when items spawn in the world
    pub on_drop: bool,
    /// Unify drops when entities die
    pub on_death_drop: bool,
    /// Unify inventory slots when they change
    pub on_slot_change: bool,
    /// Periodically unify entire player inventories
    pub inventory_scan: bool,
    /// Simulated ticks between periodic inventory scans
    pub scan_interval_ticks: u64,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            on_drop: true,
            on_death_drop: true,
            on_slot_change: true,
            inventory_scan: false,
            scan_interval_ticks: super::defaults::DEFAULT_SCAN_INTERVAL_TICKS,
        }
    }
}

// ============================================================================
// Cache
// ============================================================================

/// Signature cache tuning.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CacheConfig {
    /// Seconds a cached signature stays valid. This bounds staleness after a
    /// catalog or configuration change without explicit invalidation.
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: super::defaults::DEFAULT_CACHE_TTL_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_shape() {
        let config = UnifyConfig::default();
        assert_eq!(config.filter.list_mode, ListMode::Both);
        assert!(!config.filter.allow_patterns.is_empty());
        assert!(config.events.on_drop);
        assert!(!config.events.inventory_scan);
        assert_eq!(config.cache.ttl_secs, 20);
    }

    #[test]
    fn test_default_sources_and_aliases_are_populated() {
        let config = UnifyConfig::default();
        assert_eq!(config.sources.preferred, vec!["base".to_string()]);
        assert_eq!(config.sources.blacklisted, vec!["decorative".to_string()]);
        assert_eq!(
            config.aliases.groups,
            vec![vec![
                "aluminum".to_string(),
                "aluminium".to_string(),
                "bauxite".to_string(),
            ]]
        );
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r"
sources:
  preferred: [mody]
events:
  inventory_scan: true
";
        let config: UnifyConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.sources.preferred, vec!["mody".to_string()]);
        assert!(config.events.inventory_scan);
        // untouched sections keep their defaults
        assert!(config.events.on_drop);
        assert_eq!(config.filter.list_mode, ListMode::Both);
    }

    #[test]
    fn test_list_mode_snake_case() {
        let mode: ListMode = serde_yaml::from_str("allow_only").unwrap();
        assert_eq!(mode, ListMode::AllowOnly);
        let mode: ListMode = serde_yaml::from_str("neither").unwrap();
        assert_eq!(mode, ListMode::Neither);
    }
}
