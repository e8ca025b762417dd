//! Allow/deny filtering of category names.

use crate::config::{FilterRulesConfig, ListMode};
use crate::error::{Result, UnifyError};
use crate::model::CategoryId;
use regex::Regex;

/// Compiled allow/deny filter deciding which categories participate in
/// signature computation.
///
/// Patterns are compiled once at engine construction, anchored so matching
/// is whole-string against the qualified category name. The lists are pure
/// existential tests; evaluation order never affects the result.
#[derive(Debug)]
pub struct CategoryFilter {
    mode: ListMode,
    allow: Vec<Regex>,
    deny: Vec<Regex>,
}

impl CategoryFilter {
    /// Compile a filter from configuration.
    ///
    /// Pattern compilation errors are fatal at configuration-load time.
    pub fn from_config(config: &FilterRulesConfig) -> Result<Self> {
        Ok(Self {
            mode: config.list_mode,
            allow: compile_all(&config.allow_patterns)?,
            deny: compile_all(&config.deny_patterns)?,
        })
    }

    /// Decide whether a category participates in signatures.
    pub fn accepts(&self, category: &CategoryId) -> bool {
        let name = category.as_str();
        match self.mode {
            ListMode::AllowOnly => self.matches_allow(name),
            ListMode::DenyOnly => !self.matches_deny(name),
            ListMode::Both => self.matches_allow(name) && !self.matches_deny(name),
            ListMode::Neither => true,
        }
    }

    /// The configured list mode.
    pub fn mode(&self) -> ListMode {
        self.mode
    }

    fn matches_allow(&self, name: &str) -> bool {
        self.allow.iter().any(|re| re.is_match(name))
    }

    fn matches_deny(&self, name: &str) -> bool {
        self.deny.iter().any(|re| re.is_match(name))
    }
}

/// Compile a pattern list, anchoring each pattern for whole-string matching.
fn compile_all(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(&format!("^(?:{pattern})$"))
                .map_err(|e| UnifyError::pattern(pattern, e.to_string()))
        })
        .collect()
}
