//! Default configuration values.
//!
//! Mirrors the conventional resource-category layout most content packs use:
//! unify the common material families, shield the base game's own namespace
//! from being collapsed into third-party variants.

/// Default allow patterns: the resource category families worth unifying.
pub fn default_allow_patterns() -> Vec<String> {
    [
        r"common:ores/.+",
        r"common:ingots/.+",
        r"common:nuggets/.+",
        r"common:raw_materials/.+",
        r"common:storage_blocks/.+",
        r"common:gems/.+",
        r"common:dusts/.+",
        r"common:gears/.+",
        r"common:plates/.+",
        r"common:rods/.+",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

/// Default deny patterns: base-game categories and fragile glass variants.
pub fn default_deny_patterns() -> Vec<String> {
    [r"base:.+", r"common:glass.+"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

/// Default preferred source namespaces: the base game wins ties with
/// third-party variants.
pub fn default_preferred_sources() -> Vec<String> {
    vec!["base".to_string()]
}

/// Default blacklisted source namespaces: decorative-variant packs whose
/// items share material categories but are cosmetic, not interchangeable.
pub fn default_blacklisted_sources() -> Vec<String> {
    vec!["decorative".to_string()]
}

/// Default alias groups: regional spelling variants of the same material.
pub fn default_alias_groups() -> Vec<Vec<String>> {
    vec![vec![
        "aluminum".to_string(),
        "aluminium".to_string(),
        "bauxite".to_string(),
    ]]
}

/// Default interval between periodic inventory scans, in simulated ticks.
pub const DEFAULT_SCAN_INTERVAL_TICKS: u64 = 20;

/// Default signature cache time-to-live, in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 20;
