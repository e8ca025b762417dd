//! The equivalence engine: resolves item stacks to their preferred
//! equivalents.

use crate::catalog::Catalog;
use crate::config::{UnifyConfig, Validatable};
use crate::error::{Result, UnifyError};
use crate::matching::{
    AliasTable, CandidateRanker, CategoryFilter, Clock, SignatureCache, SignatureResolver,
};
use crate::model::{ItemStack, ItemTypeId, Signature};
use std::sync::Arc;
use std::time::Duration;

/// Resolves item stacks to their preferred equivalent types.
///
/// Construction compiles every configured pattern and alias group, so a
/// malformed configuration fails here rather than mid-resolution. After
/// construction the engine is immutable and safe to share across threads.
///
/// Per-item resolution never panics and never returns an error: anything
/// that prevents substitution degrades to `None`, leaving the original stack
/// untouched.
pub struct UnifyEngine {
    catalog: Arc<dyn Catalog>,
    resolver: SignatureResolver,
    cache: SignatureCache,
    ranker: CandidateRanker,
    blacklisted: Vec<String>,
}

impl UnifyEngine {
    /// Build an engine from validated configuration and a catalog snapshot.
    ///
    /// Fails on invalid regex patterns, malformed alias fragments, or any
    /// other configuration-shape problem.
    pub fn new(config: &UnifyConfig, catalog: Arc<dyn Catalog>) -> Result<Self> {
        Self::with_clock(config, catalog, None)
    }

    /// Like [`UnifyEngine::new`] but with an injected cache clock.
    pub fn with_clock(
        config: &UnifyConfig,
        catalog: Arc<dyn Catalog>,
        clock: Option<Arc<dyn Clock>>,
    ) -> Result<Self> {
        let problems = config.validate();
        if !problems.is_empty() {
            let joined = problems
                .iter()
                .map(|p| format!("{}: {}", p.field, p.message))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(UnifyError::config(joined));
        }

        let aliases = AliasTable::from_groups(&config.aliases.groups)?;
        let filter = CategoryFilter::from_config(&config.filter)?;
        let ttl = Duration::from_secs(config.cache.ttl_secs);

        let cache = match clock {
            Some(clock) => SignatureCache::with_clock(ttl, clock),
            None => SignatureCache::new(ttl),
        };

        tracing::debug!(
            alias_fragments = aliases.len(),
            allow_patterns = config.filter.allow_patterns.len(),
            deny_patterns = config.filter.deny_patterns.len(),
            preferred = config.sources.preferred.len(),
            "engine constructed"
        );

        Ok(Self {
            catalog,
            resolver: SignatureResolver::new(aliases, filter),
            cache,
            ranker: CandidateRanker::new(config.sources.preferred.clone()),
            blacklisted: config.sources.blacklisted.clone(),
        })
    }

    /// Signature of an item type, served from the cache when fresh.
    pub fn signature_of(&self, item: &ItemTypeId) -> Signature {
        self.cache
            .get_or_compute(item, || self.resolver.signature_of(&*self.catalog, item))
    }

    /// Resolve a stack to its preferred equivalent.
    ///
    /// Returns `None` when the stack is empty, carries metadata, comes from
    /// a blacklisted source, has an empty signature, or no candidate shares
    /// its exact signature. Otherwise returns the highest-preference
    /// candidate at the original count; the result may name the input's own
    /// type, which callers treat as "already canonical".
    pub fn resolve(&self, stack: &ItemStack) -> Option<ItemStack> {
        if stack.is_empty() {
            return None;
        }
        // Metadata encodes per-instance state (damage, enchantments); a
        // substitute type cannot be assumed to carry it faithfully.
        if stack.has_metadata() {
            return None;
        }

        let source = self.catalog.source_namespace_of(stack.item());
        if self.blacklisted.iter().any(|ns| *ns == source) {
            tracing::debug!(item = %stack.item(), source = %source, "source blacklisted");
            return None;
        }

        let target = self.signature_of(stack.item());
        if target.is_empty() {
            return None;
        }

        for group in self
            .ranker
            .ranked_candidates(&*self.catalog, &target, stack.count())
        {
            for candidate in group {
                if self.signature_of(candidate.item()) == target {
                    tracing::debug!(
                        from = %stack.item(),
                        to = %candidate.item(),
                        "resolved equivalent"
                    );
                    return Some(candidate);
                }
            }
        }

        None
    }

    /// Resolve every stack of an inventory snapshot in place.
    ///
    /// Stacks that resolve to a different type are replaced; everything else
    /// is left alone. Returns whether anything changed.
    pub fn resolve_all(&self, stacks: &mut [ItemStack]) -> bool {
        let mut changed = false;
        for slot in stacks.iter_mut() {
            if let Some(replacement) = self.resolve(slot) {
                if replacement.item() != slot.item() {
                    *slot = replacement;
                    changed = true;
                }
            }
        }
        changed
    }
}

impl std::fmt::Debug for UnifyEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnifyEngine")
            .field("cache", &self.cache)
            .field("blacklisted", &self.blacklisted)
            .finish_non_exhaustive()
    }
}
