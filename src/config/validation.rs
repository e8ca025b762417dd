//! Configuration validation.
//!
//! The engine must not start with invalid configuration: every pattern must
//! compile, every alias fragment must be namespace-free, and timing knobs
//! must be non-zero. Validation collects all problems instead of stopping at
//! the first so operators see the full list.

use super::types::*;
use crate::model::NAMESPACE_SEPARATOR;
use regex::Regex;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for UnifyConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.filter.validate());
        errors.extend(self.aliases.validate());
        errors.extend(self.events.validate());
        errors.extend(self.cache.validate());
        errors
    }
}

impl Validatable for FilterRulesConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (list, patterns) in [
            ("filter.allow_patterns", &self.allow_patterns),
            ("filter.deny_patterns", &self.deny_patterns),
        ] {
            for (i, pattern) in patterns.iter().enumerate() {
                if let Err(e) = Regex::new(pattern) {
                    errors.push(ConfigError {
                        field: format!("{list}[{i}]"),
                        message: format!("invalid regex '{pattern}': {e}"),
                    });
                }
            }
        }
        errors
    }
}

impl Validatable for AliasConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (g, group) in self.groups.iter().enumerate() {
            for (f, fragment) in group.iter().enumerate() {
                let field = format!("aliases.groups[{g}][{f}]");
                if fragment.is_empty() {
                    errors.push(ConfigError {
                        field,
                        message: "alias fragment must not be empty".to_string(),
                    });
                } else if fragment.contains(NAMESPACE_SEPARATOR) {
                    errors.push(ConfigError {
                        field,
                        message: format!("':' is not allowed in alias fragment '{fragment}'"),
                    });
                }
            }
        }
        errors
    }
}

impl Validatable for EventConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.scan_interval_ticks == 0 {
            errors.push(ConfigError {
                field: "events.scan_interval_ticks".to_string(),
                message: "scan interval must be at least 1 tick".to_string(),
            });
        }
        errors
    }
}

impl Validatable for CacheConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.ttl_secs == 0 {
            errors.push(ConfigError {
                field: "cache.ttl_secs".to_string(),
                message: "cache TTL must be at least 1 second".to_string(),
            });
        }
        errors
    }
}

impl Validatable for SourcesConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Plain namespace lists need no validation; an unknown namespace
        // simply never matches anything.
        Vec::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(UnifyConfig::default().is_valid());
    }

    #[test]
    fn test_bad_regex_rejected() {
        let config = FilterRulesConfig {
            allow_patterns: vec!["ores/[".to_string()],
            ..FilterRulesConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "filter.allow_patterns[0]");
    }

    #[test]
    fn test_alias_fragment_with_separator_rejected() {
        let config = AliasConfig {
            groups: vec![vec!["aluminum".to_string(), "common:aluminium".to_string()]],
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("common:aluminium"));
    }

    #[test]
    fn test_empty_alias_fragment_rejected() {
        let config = AliasConfig {
            groups: vec![vec![String::new()]],
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = EventConfig {
            scan_interval_ticks: 0,
            ..EventConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let config = CacheConfig { ttl_secs: 0 };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_errors_are_collected_not_short_circuited() {
        let mut config = UnifyConfig::default();
        config.filter.deny_patterns.push("(".to_string());
        config.cache.ttl_secs = 0;
        config.events.scan_interval_ticks = 0;
        assert_eq!(config.validate().len(), 3);
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError {
            field: "cache.ttl_secs".to_string(),
            message: "cache TTL must be at least 1 second".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "cache.ttl_secs: cache TTL must be at least 1 second"
        );
    }
}
