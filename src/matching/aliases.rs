//! Alias table for interchangeable category name fragments.
//!
//! Some content sources spell the same material differently (`aluminum` vs
//! `aluminium`). An alias group declares such fragments interchangeable; a
//! category whose unqualified path contains one fragment is also treated as
//! carrying the variants with the sibling fragments substituted, so items
//! tagged under either spelling end up with equal signatures.

use crate::error::{Result, UnifyError};
use crate::model::{CategoryId, NAMESPACE_SEPARATOR};
use std::collections::HashMap;

/// Mapping from a name fragment to the sibling fragments of its alias group.
///
/// Built exactly once, at engine construction, from the configured alias
/// groups; treated as read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    expansions: HashMap<String, Vec<String>>,
}

impl AliasTable {
    /// Build the table from configured alias groups.
    ///
    /// For each fragment `f` in a group, maps `f -> (group minus f)`.
    /// Fails fast if any fragment is empty or contains the namespace
    /// separator; the engine must not start with such a configuration.
    pub fn from_groups(groups: &[Vec<String>]) -> Result<Self> {
        let mut expansions: HashMap<String, Vec<String>> = HashMap::new();

        for group in groups {
            for fragment in group {
                if fragment.is_empty() {
                    return Err(UnifyError::alias(fragment, "fragment must not be empty"));
                }
                if fragment.contains(NAMESPACE_SEPARATOR) {
                    return Err(UnifyError::alias(
                        fragment,
                        "':' is not allowed in an alias fragment",
                    ));
                }

                let siblings: Vec<String> = group
                    .iter()
                    .filter(|other| *other != fragment)
                    .cloned()
                    .collect();
                if !siblings.is_empty() {
                    expansions.insert(fragment.clone(), siblings);
                }
            }
        }

        Ok(Self { expansions })
    }

    /// Synthesize the alternate categories a category should also count as.
    ///
    /// Lookup is substring-based on the unqualified path: every fragment the
    /// path contains contributes one synthesized category per sibling alias,
    /// with the fragment substring replaced and the namespace preserved. The
    /// caller unions the result with the native categories; nothing is ever
    /// replaced.
    pub fn expand(&self, category: &CategoryId) -> Vec<CategoryId> {
        let path = category.path();
        let mut synthesized = Vec::new();

        for (fragment, siblings) in &self.expansions {
            if !path.contains(fragment.as_str()) {
                continue;
            }
            for alias in siblings {
                let alt_path = path.replace(fragment.as_str(), alias);
                // Fragments are validated separator-free and non-empty, so
                // the synthesized identifier is always well-formed.
                if let Ok(alt) = CategoryId::new(category.namespace(), &alt_path) {
                    synthesized.push(alt);
                }
            }
        }

        synthesized
    }

    /// Number of fragments with at least one sibling.
    pub fn len(&self) -> usize {
        self.expansions.len()
    }

    /// Whether the table has no expansions at all.
    pub fn is_empty(&self) -> bool {
        self.expansions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(s: &str) -> CategoryId {
        CategoryId::parse(s).unwrap()
    }

    fn group(fragments: &[&str]) -> Vec<String> {
        fragments.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_expansion_covers_all_siblings() {
        let table =
            AliasTable::from_groups(&[group(&["aluminum", "aluminium", "bauxite"])]).unwrap();

        let expanded = table.expand(&cat("common:ores/aluminum"));
        assert!(expanded.contains(&cat("common:ores/aluminium")));
        assert!(expanded.contains(&cat("common:ores/bauxite")));
        assert_eq!(expanded.len(), 2);
    }

    #[test]
    fn test_expansion_is_symmetric() {
        let table = AliasTable::from_groups(&[group(&["aluminum", "aluminium"])]).unwrap();

        assert_eq!(
            table.expand(&cat("common:ores/aluminium")),
            vec![cat("common:ores/aluminum")]
        );
        assert_eq!(
            table.expand(&cat("common:ores/aluminum")),
            vec![cat("common:ores/aluminium")]
        );
    }

    #[test]
    fn test_namespace_is_preserved() {
        let table = AliasTable::from_groups(&[group(&["aluminum", "aluminium"])]).unwrap();
        let expanded = table.expand(&cat("othermod:ingots/aluminum"));
        assert_eq!(expanded, vec![cat("othermod:ingots/aluminium")]);
    }

    #[test]
    fn test_no_match_yields_nothing() {
        let table = AliasTable::from_groups(&[group(&["aluminum", "aluminium"])]).unwrap();
        assert!(table.expand(&cat("common:ores/copper")).is_empty());
    }

    #[test]
    fn test_multiple_groups_all_contribute() {
        let table = AliasTable::from_groups(&[
            group(&["aluminum", "aluminium"]),
            group(&["wood", "timber"]),
        ])
        .unwrap();

        // A path containing fragments from two groups expands under both.
        let expanded = table.expand(&cat("common:aluminum_wood"));
        assert!(expanded.contains(&cat("common:aluminium_wood")));
        assert!(expanded.contains(&cat("common:aluminum_timber")));
        assert_eq!(expanded.len(), 2);
    }

    #[test]
    fn test_singleton_group_expands_nothing() {
        let table = AliasTable::from_groups(&[group(&["aluminum"])]).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_separator_in_fragment_rejected() {
        let result = AliasTable::from_groups(&[group(&["aluminum", "common:aluminium"])]);
        assert!(matches!(result, Err(UnifyError::Alias { .. })));
    }

    #[test]
    fn test_empty_fragment_rejected() {
        let result = AliasTable::from_groups(&[group(&["aluminum", ""])]);
        assert!(matches!(result, Err(UnifyError::Alias { .. })));
    }
}
