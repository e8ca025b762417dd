//! Preference-ordered candidate generation.

use crate::catalog::Catalog;
use crate::model::{ItemStack, ItemTypeId, Signature};

/// Preference rank assigned to namespaces absent from the preferred list.
/// Large enough to sort after every configured index.
const UNRANKED: usize = usize::MAX;

/// Generates substitute candidates for a target signature, grouped by the
/// signature category they came from and ordered by source preference.
#[derive(Debug, Clone)]
pub struct CandidateRanker {
    preferred: Vec<String>,
}

impl CandidateRanker {
    /// Create a ranker from the ordered preferred-sources list.
    pub fn new(preferred: Vec<String>) -> Self {
        Self { preferred }
    }

    /// Rank of a source namespace: its index in the preference list, or
    /// [`UNRANKED`] when absent. Lower is better.
    fn rank(&self, namespace: &str) -> usize {
        self.preferred
            .iter()
            .position(|p| p == namespace)
            .unwrap_or(UNRANKED)
    }

    /// Produce candidate groups for a signature.
    ///
    /// One inner list per signature category, in signature order; each holds
    /// every catalog type natively belonging to that category, instantiated
    /// at `count`, sorted ascending by preference rank. The sort is stable,
    /// so equally-ranked candidates keep catalog encounter order. Categories
    /// with no members are dropped.
    pub fn ranked_candidates(
        &self,
        catalog: &dyn Catalog,
        signature: &Signature,
        count: u32,
    ) -> Vec<Vec<ItemStack>> {
        let types: Vec<ItemTypeId> = catalog.item_types();

        signature
            .iter()
            .filter_map(|category| {
                let mut group: Vec<ItemStack> = types
                    .iter()
                    .filter(|item| catalog.categories_of(item).contains(category))
                    .map(|item| ItemStack::new(item.clone(), count))
                    .collect();
                if group.is_empty() {
                    return None;
                }
                group.sort_by_key(|stack| self.rank(stack.item().namespace()));
                Some(group)
            })
            .collect()
    }
}
