//! End-to-end resolution tests against a small fixture catalog.

use item_unify::catalog::InMemoryCatalog;
use item_unify::config::{ListMode, UnifyConfig};
use item_unify::engine::UnifyEngine;
use item_unify::matching::ManualClock;
use item_unify::model::{CategoryId, ItemStack, ItemTypeId, StackMetadata};
use std::sync::Arc;
use std::time::Duration;

/// Install a subscriber once so engine traces show up under
/// `RUST_LOG=debug cargo test`.
fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn item(s: &str) -> ItemTypeId {
    ItemTypeId::parse(s).unwrap()
}

fn cat(s: &str) -> CategoryId {
    CategoryId::parse(s).unwrap()
}

fn fixture_catalog() -> Arc<InMemoryCatalog> {
    init_tracing();
    let mut catalog = InMemoryCatalog::new();
    catalog.register(item("modx:copper_ingot"), vec![cat("common:ores/copper")]);
    catalog.register(item("mody:copper_ingot"), vec![cat("common:ores/copper")]);
    catalog.register(
        item("modz:copper_chunk"),
        vec![cat("common:ores/copper"), cat("common:raw_materials/copper")],
    );
    catalog.register(item("modx:gadget"), vec![cat("base:gadgets")]);
    Arc::new(catalog)
}

fn base_config() -> UnifyConfig {
    init_tracing();
    let mut config = UnifyConfig::default();
    config.filter.list_mode = ListMode::AllowOnly;
    config.filter.allow_patterns = vec![r"common:ores/.+".to_string()];
    config.sources.preferred = vec!["mody".to_string()];
    config
}

#[test]
fn test_end_to_end_copper_unification() {
    let engine = UnifyEngine::new(&base_config(), fixture_catalog()).unwrap();

    let resolved = engine
        .resolve(&ItemStack::new(item("modx:copper_ingot"), 5))
        .expect("copper ingot should resolve");

    assert_eq!(resolved.item(), &item("mody:copper_ingot"));
    assert_eq!(resolved.count(), 5, "count must be preserved");
    assert!(resolved.metadata().is_empty());
}

#[test]
fn test_no_false_equivalence() {
    // modz:copper_chunk shares ores/copper but also carries
    // raw_materials/copper; widening the filter separates its signature, so
    // the ingots must never resolve to it even though it shares a category.
    let mut config = base_config();
    config.filter.allow_patterns = vec![r"common:.+".to_string()];
    config.sources.preferred = vec!["modz".to_string(), "mody".to_string()];
    let engine = UnifyEngine::new(&config, fixture_catalog()).unwrap();

    let resolved = engine
        .resolve(&ItemStack::new(item("modx:copper_ingot"), 1))
        .expect("an equal-signature candidate exists");

    assert_eq!(
        resolved.item(),
        &item("mody:copper_ingot"),
        "a candidate with a superset signature must be skipped"
    );
}

#[test]
fn test_metadata_guard_leaves_stack_alone() {
    let engine = UnifyEngine::new(&base_config(), fixture_catalog()).unwrap();

    let mut meta = StackMetadata::new();
    meta.insert("enchant".to_string(), serde_json::json!("sharpness"));
    let stack = ItemStack::new(item("modx:copper_ingot"), 5).with_metadata(meta);

    assert!(engine.resolve(&stack).is_none());
}

#[test]
fn test_blacklist_overrides_matches() {
    let mut config = base_config();
    config.sources.blacklisted = vec!["modx".to_string()];
    let engine = UnifyEngine::new(&config, fixture_catalog()).unwrap();

    assert!(engine
        .resolve(&ItemStack::new(item("modx:copper_ingot"), 5))
        .is_none());
}

#[test]
fn test_filtered_out_item_does_not_resolve() {
    let engine = UnifyEngine::new(&base_config(), fixture_catalog()).unwrap();
    assert!(engine
        .resolve(&ItemStack::new(item("modx:gadget"), 1))
        .is_none());
}

#[test]
fn test_alias_spellings_unify() {
    let mut catalog = InMemoryCatalog::new();
    catalog.register(item("modx:alu_ingot"), vec![cat("common:ores/aluminum")]);
    catalog.register(item("mody:alu_ingot"), vec![cat("common:ores/aluminium")]);

    let mut config = base_config();
    config.aliases.groups = vec![vec!["aluminum".to_string(), "aluminium".to_string()]];
    let engine = UnifyEngine::new(&config, Arc::new(catalog)).unwrap();

    let resolved = engine
        .resolve(&ItemStack::new(item("modx:alu_ingot"), 2))
        .expect("alias spellings should share a signature");
    assert_eq!(resolved.item(), &item("mody:alu_ingot"));
}

#[test]
fn test_cache_transparency_across_ttl() {
    let clock = Arc::new(ManualClock::new());
    let engine = UnifyEngine::with_clock(
        &base_config(),
        fixture_catalog(),
        Some(clock.clone() as Arc<dyn item_unify::matching::Clock>),
    )
    .unwrap();

    let stack = ItemStack::new(item("modx:copper_ingot"), 5);
    let fresh = engine.resolve(&stack).unwrap();
    clock.advance(Duration::from_secs(10));
    let cached = engine.resolve(&stack).unwrap();
    clock.advance(Duration::from_secs(30));
    let recomputed = engine.resolve(&stack).unwrap();

    assert_eq!(fresh, cached);
    assert_eq!(fresh, recomputed);
}

#[test]
fn test_resolve_all_inventory_pass() {
    let engine = UnifyEngine::new(&base_config(), fixture_catalog()).unwrap();

    let mut inventory = vec![
        ItemStack::new(item("modx:copper_ingot"), 64),
        ItemStack::new(item("modx:gadget"), 1),
        ItemStack::new(item("mody:copper_ingot"), 12),
    ];

    assert!(engine.resolve_all(&mut inventory));
    assert_eq!(inventory[0].item(), &item("mody:copper_ingot"));
    assert_eq!(inventory[0].count(), 64);
    assert_eq!(inventory[1].item(), &item("modx:gadget"));
    assert_eq!(inventory[2].item(), &item("mody:copper_ingot"));

    // a second pass finds nothing left to do
    assert!(!engine.resolve_all(&mut inventory));
}

#[test]
fn test_config_file_round_trip() {
    use item_unify::config::load_config_file;
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("item-unify.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        "filter:\n  list_mode: allow_only\n  allow_patterns: ['common:ores/.+']\nsources:\n  preferred: [mody]\n"
    )
    .unwrap();

    let config = load_config_file(&path).unwrap();
    let engine = UnifyEngine::new(&config, fixture_catalog()).unwrap();
    let resolved = engine
        .resolve(&ItemStack::new(item("modx:copper_ingot"), 5))
        .unwrap();
    assert_eq!(resolved.item(), &item("mody:copper_ingot"));
}
