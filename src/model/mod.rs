//! Core data model: identifiers, stacks, and signatures.

mod identifiers;
mod signature;
mod stack;

pub use identifiers::{CategoryId, ItemTypeId, NAMESPACE_SEPARATOR};
pub use signature::Signature;
pub use stack::{ItemStack, StackMetadata};
