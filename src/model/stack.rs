//! Countable item stacks.

use super::ItemTypeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form per-stack metadata. A non-empty map marks a unique or customized
/// stack that must never be collapsed into another item type.
pub type StackMetadata = BTreeMap<String, serde_json::Value>;

/// A countable instance of an item type, possibly carrying metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    item: ItemTypeId,
    count: u32,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    metadata: StackMetadata,
}

impl ItemStack {
    /// Create a metadata-free stack.
    pub fn new(item: ItemTypeId, count: u32) -> Self {
        Self {
            item,
            count,
            metadata: StackMetadata::new(),
        }
    }

    /// Attach metadata to the stack.
    pub fn with_metadata(mut self, metadata: StackMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// The item type of this stack.
    pub fn item(&self) -> &ItemTypeId {
        &self.item
    }

    /// Number of items in the stack.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The stack's metadata map.
    pub fn metadata(&self) -> &StackMetadata {
        &self.metadata
    }

    /// A stack with zero count is empty and never eligible for substitution.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether the stack carries any metadata.
    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }
}
