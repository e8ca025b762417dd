//! Event subscriptions and dispatch.
//!
//! The host runtime owns the actual event bus; this module keeps an explicit
//! record of which event kinds the engine subscribes to and routes fired
//! events into the engine. Results are committed through a host-provided
//! [`MutationSink`], so the core never mutates host state directly.

use crate::config::EventConfig;
use crate::engine::UnifyEngine;
use crate::model::ItemStack;
use std::sync::Arc;

/// The gameplay events that can trigger unification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// An item stack spawned in the world
    ItemSpawned,
    /// An entity died and is about to drop its loot
    EntityDeathDrops,
    /// The periodic whole-inventory scan tick
    InventoryTick,
    /// A single inventory slot changed
    SlotChanged,
}

/// Which event kinds the engine is subscribed to.
///
/// Built once from configuration; hosts read it during init to know which
/// bus hooks to install, and discard it (with the dispatcher) at teardown.
#[derive(Debug, Clone)]
pub struct EventRegistry {
    subscribed: Vec<EventKind>,
    scan_interval_ticks: u64,
}

impl EventRegistry {
    /// Derive the subscription set from configuration.
    pub fn from_config(config: &EventConfig) -> Self {
        let mut subscribed = Vec::new();
        if config.on_drop {
            subscribed.push(EventKind::ItemSpawned);
        }
        if config.on_death_drop {
            subscribed.push(EventKind::EntityDeathDrops);
        }
        if config.inventory_scan {
            subscribed.push(EventKind::InventoryTick);
        }
        if config.on_slot_change {
            subscribed.push(EventKind::SlotChanged);
        }
        Self {
            subscribed,
            scan_interval_ticks: config.scan_interval_ticks,
        }
    }

    /// Whether the engine is subscribed to an event kind.
    pub fn is_subscribed(&self, kind: EventKind) -> bool {
        self.subscribed.contains(&kind)
    }

    /// The subscribed kinds, in a fixed order.
    pub fn subscriptions(&self) -> &[EventKind] {
        &self.subscribed
    }

    /// Whether a periodic scan fires on this tick.
    ///
    /// Scans run every `scan_interval_ticks` ticks, offset two ticks before
    /// each interval boundary so they never coincide with the boundary work
    /// hosts typically schedule there.
    pub fn scan_due(&self, tick: u64) -> bool {
        if !self.is_subscribed(EventKind::InventoryTick) {
            return false;
        }
        let interval = self.scan_interval_ticks.max(1);
        tick % interval == interval.saturating_sub(2) % interval
    }
}

/// Host-provided commit point for resolved replacements.
pub trait MutationSink {
    /// Replace the stack in `slot` with `replacement`.
    fn replace(&mut self, slot: usize, replacement: ItemStack);
}

/// Routes fired events into the engine and commits results.
pub struct EventDispatcher {
    engine: Arc<UnifyEngine>,
    registry: EventRegistry,
}

impl EventDispatcher {
    /// Create a dispatcher over a shared engine.
    pub fn new(engine: Arc<UnifyEngine>, registry: EventRegistry) -> Self {
        Self { engine, registry }
    }

    /// The subscription record this dispatcher was built with.
    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    /// An item stack spawned in the world. Returns the replacement to spawn
    /// instead, if a different type is preferred.
    pub fn on_item_spawned(&self, stack: &ItemStack) -> Option<ItemStack> {
        if !self.registry.is_subscribed(EventKind::ItemSpawned) {
            return None;
        }
        self.resolve_if_different(stack)
    }

    /// An entity died; `drops` is its pending loot. Commits replacements
    /// through the sink, slot by slot.
    pub fn on_entity_death_drops(&self, drops: &[ItemStack], sink: &mut dyn MutationSink) {
        if !self.registry.is_subscribed(EventKind::EntityDeathDrops) {
            return;
        }
        for (slot, stack) in drops.iter().enumerate() {
            if let Some(replacement) = self.resolve_if_different(stack) {
                sink.replace(slot, replacement);
            }
        }
    }

    /// A single inventory slot changed.
    pub fn on_slot_changed(
        &self,
        slot: usize,
        stack: &ItemStack,
        sink: &mut dyn MutationSink,
    ) {
        if !self.registry.is_subscribed(EventKind::SlotChanged) {
            return;
        }
        if let Some(replacement) = self.resolve_if_different(stack) {
            sink.replace(slot, replacement);
        }
    }

    /// The simulation ticked; scans the whole inventory when the periodic
    /// scan is due.
    pub fn on_inventory_tick(
        &self,
        tick: u64,
        inventory: &[ItemStack],
        sink: &mut dyn MutationSink,
    ) {
        if !self.registry.scan_due(tick) {
            return;
        }
        tracing::debug!(tick, slots = inventory.len(), "periodic inventory scan");
        for (slot, stack) in inventory.iter().enumerate() {
            if let Some(replacement) = self.resolve_if_different(stack) {
                sink.replace(slot, replacement);
            }
        }
    }

    fn resolve_if_different(&self, stack: &ItemStack) -> Option<ItemStack> {
        let resolved = self.engine.resolve(stack)?;
        if resolved.item() == stack.item() {
            return None;
        }
        Some(resolved)
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
