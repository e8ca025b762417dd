//! Canonical category signatures.

use super::CategoryId;
use serde::{Deserialize, Serialize};

/// The normalized category signature of an item type: every category name
/// (native plus alias expansions) that survived filtering, deduplicated and
/// sorted lexicographically on the qualified name.
///
/// The canonical sort makes plain sequence equality behave as set equality,
/// so two item types are equivalent iff their signatures compare equal.
///
/// An empty signature means the item is not eligible for unification — it is
/// never treated as "matches everything".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature(Vec<CategoryId>);

impl Signature {
    /// An empty signature.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a signature from an arbitrary collection of categories,
    /// deduplicating and sorting into canonical order.
    pub fn from_categories(categories: impl IntoIterator<Item = CategoryId>) -> Self {
        let mut cats: Vec<CategoryId> = categories.into_iter().collect();
        cats.sort_unstable();
        cats.dedup();
        Self(cats)
    }

    /// The categories in canonical order.
    pub fn categories(&self) -> &[CategoryId] {
        &self.0
    }

    /// Iterate the categories in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, CategoryId> {
        self.0.iter()
    }

    /// Number of categories in the signature.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no category survived normalization.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Signature {
    type Item = &'a CategoryId;
    type IntoIter = std::slice::Iter<'a, CategoryId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
