//! Signature computation for item types.

use super::aliases::AliasTable;
use super::filter::CategoryFilter;
use crate::catalog::Catalog;
use crate::model::{CategoryId, ItemTypeId, Signature};

/// Computes the normalized category signature of an item type.
///
/// The pipeline: native catalog memberships → alias-expansion union →
/// allow/deny filter → canonical dedup + sort. Pure function of the catalog
/// snapshot and the configuration compiled into the table and filter; the
/// time-bounded caching layer lives separately in [`super::SignatureCache`].
#[derive(Debug)]
pub struct SignatureResolver {
    aliases: AliasTable,
    filter: CategoryFilter,
}

impl SignatureResolver {
    /// Create a resolver from an already-built alias table and compiled
    /// filter.
    pub fn new(aliases: AliasTable, filter: CategoryFilter) -> Self {
        Self { aliases, filter }
    }

    /// Compute the signature of an item type.
    ///
    /// Unknown item types have no native categories and therefore an empty
    /// signature; callers treat that as "not eligible for unification".
    pub fn signature_of(&self, catalog: &dyn Catalog, item: &ItemTypeId) -> Signature {
        let native = catalog.categories_of(item);

        let mut candidates: Vec<CategoryId> = Vec::with_capacity(native.len());
        for category in &native {
            candidates.extend(self.aliases.expand(category));
        }
        candidates.extend(native);

        Signature::from_categories(candidates.into_iter().filter(|c| self.filter.accepts(c)))
    }
}
