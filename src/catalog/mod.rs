//! Read-only catalog snapshot interface.
//!
//! The host runtime owns a mutable global item registry. This core never
//! touches it directly: resolution runs against the [`Catalog`] trait, an
//! injected read-only snapshot assumed stable for the duration of one
//! `resolve` call. This decouples correctness from host registry mutation
//! timing and lets tests use a small fixed fixture.

use crate::model::{CategoryId, ItemTypeId};
use indexmap::IndexMap;

/// Read-only view of all known item types and their category memberships.
pub trait Catalog: Send + Sync {
    /// Native category memberships of an item type.
    ///
    /// Unknown item types yield an empty list — a lookup miss is "no
    /// categories", never an error.
    fn categories_of(&self, item: &ItemTypeId) -> Vec<CategoryId>;

    /// Every known item type, in stable encounter order.
    ///
    /// Encounter order is observable: it is the tie-break among candidates
    /// whose source namespaces share a preference rank.
    fn item_types(&self) -> Vec<ItemTypeId>;

    /// Source namespace an item type was registered under.
    fn source_namespace_of(&self, item: &ItemTypeId) -> String {
        item.namespace().to_string()
    }
}

/// Insertion-ordered in-memory catalog.
///
/// Used by host adapters to publish registry snapshots and by tests as a
/// fixture. Iteration order is registration order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    entries: IndexMap<ItemTypeId, Vec<CategoryId>>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item type with its category memberships.
    ///
    /// Re-registering an existing type replaces its categories but keeps its
    /// original encounter position.
    pub fn register(&mut self, item: ItemTypeId, categories: Vec<CategoryId>) {
        self.entries.insert(item, categories);
    }

    /// Number of registered item types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Catalog for InMemoryCatalog {
    fn categories_of(&self, item: &ItemTypeId) -> Vec<CategoryId> {
        self.entries.get(item).cloned().unwrap_or_default()
    }

    fn item_types(&self) -> Vec<ItemTypeId> {
        self.entries.keys().cloned().collect()
    }
}
