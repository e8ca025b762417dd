//! Automatic item-stack unification for live game simulations.
//!
//! When several content sources register interchangeable item types (three
//! different `copper_ingot`s, say), this crate picks one canonical type per
//! equivalence class and substitutes it at gameplay boundaries: item drops,
//! death loot, slot changes, and periodic inventory scans.
//!
//! Equivalence is decided by *category signatures*: the set of shared
//! category names an item type belongs to, expanded through configured alias
//! groups, filtered through allow/deny pattern lists, then deduplicated and
//! sorted. Two types with identical non-empty signatures are interchangeable;
//! the replacement is chosen by source-namespace preference order.
//!
//! The crate is host-agnostic. The surrounding runtime supplies a read-only
//! [`catalog::Catalog`] snapshot and a [`events::MutationSink`] commit point;
//! nothing here touches host state directly, and per-item resolution never
//! panics or errors, it just declines to substitute.
//!
//! ```
//! use item_unify::catalog::InMemoryCatalog;
//! use item_unify::config::{ListMode, UnifyConfig};
//! use item_unify::engine::UnifyEngine;
//! use item_unify::model::{CategoryId, ItemStack, ItemTypeId};
//! use std::sync::Arc;
//!
//! # fn main() -> item_unify::error::Result<()> {
//! let mut catalog = InMemoryCatalog::new();
//! let ingots = CategoryId::parse("common:ingots/copper")?;
//! catalog.register(ItemTypeId::parse("modx:copper_ingot")?, vec![ingots.clone()]);
//! catalog.register(ItemTypeId::parse("mody:copper_ingot")?, vec![ingots]);
//!
//! let mut config = UnifyConfig::default();
//! config.filter.list_mode = ListMode::Neither;
//! config.sources.preferred = vec!["mody".into()];
//!
//! let engine = UnifyEngine::new(&config, Arc::new(catalog))?;
//! let stack = ItemStack::new(ItemTypeId::parse("modx:copper_ingot")?, 8);
//! let resolved = engine.resolve(&stack).expect("equivalent exists");
//! assert_eq!(resolved.item().as_str(), "mody:copper_ingot");
//! # Ok(())
//! # }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod matching;
pub mod model;

pub use engine::UnifyEngine;
pub use error::{Result, UnifyError};
