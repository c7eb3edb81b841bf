//! End-to-end engine scenarios exercised through the public facade.

use shelfdb::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn record(id: u64, name: &str) -> Record {
    Record::new(RecordId(id), name, json!({"name": name}))
}

fn ids(records: &[&Record]) -> Vec<u64> {
    records.iter().map(|r| r.id.0).collect()
}

/// The canonical walkthrough: two similar names, prefix scans at two
/// depths, then a delete that must vanish from every query path.
#[test]
fn smith_smythe_walkthrough() {
    init_tracing();
    let mut engine = Engine::new();
    engine.insert(record(3, "Smith"));
    engine.insert(record(7, "smythe"));

    let both = engine.prefix_by_name("sm").unwrap();
    assert_eq!(ids(&both.value), vec![3, 7], "smith sorts before smythe");

    let narrow = engine.prefix_by_name("smi").unwrap();
    assert_eq!(ids(&narrow.value), vec![3]);

    assert!(engine.delete_by_id(RecordId(3)).unwrap());

    assert!(engine.prefix_by_name("smi").unwrap().value.is_empty());
    assert_eq!(ids(&engine.prefix_by_name("sm").unwrap().value), vec![7]);
    assert!(engine.find_by_id(RecordId(3)).unwrap().value.is_none());
}

#[test]
fn deleted_rid_never_reappears() {
    init_tracing();
    let mut engine = Engine::new();
    for i in 1..=6 {
        engine.insert(record(i, &format!("name{i}")));
    }
    engine.delete_by_id(RecordId(4)).unwrap();

    let scan = engine.range_by_id(RecordId(1), RecordId(6)).unwrap();
    assert_eq!(ids(&scan.value), vec![1, 2, 3, 5, 6]);

    let prefix = engine.prefix_by_name("name").unwrap();
    assert_eq!(ids(&prefix.value), vec![1, 2, 3, 5, 6]);
}

#[test]
fn find_succeeds_until_deleted_then_always_fails() {
    let mut engine = Engine::new();
    engine.insert(record(10, "Holt"));

    for _ in 0..3 {
        assert!(engine.find_by_id(RecordId(10)).unwrap().value.is_some());
    }
    engine.delete_by_id(RecordId(10)).unwrap();
    for _ in 0..3 {
        assert!(engine.find_by_id(RecordId(10)).unwrap().value.is_none());
    }
}

#[test]
fn reinsert_after_delete_is_live_again() {
    let mut engine = Engine::new();
    engine.insert(record(1, "Reyes"));
    engine.delete_by_id(RecordId(1)).unwrap();
    engine.insert(record(1, "Reyes"));

    assert!(engine.find_by_id(RecordId(1)).unwrap().value.is_some());
    assert_eq!(ids(&engine.prefix_by_name("rey").unwrap().value), vec![1]);
    assert_eq!(engine.stored_count(), 2, "both rows keep their slots");
    assert_eq!(engine.live_count(), 1);
}

#[test]
fn range_results_are_id_ordered_across_name_groups() {
    let mut engine = Engine::new();
    engine.insert(record(30, "zeta"));
    engine.insert(record(10, "zeta"));
    engine.insert(record(20, "alpha"));

    let scan = engine.range_by_id(RecordId(0), RecordId(99)).unwrap();
    assert_eq!(ids(&scan.value), vec![10, 20, 30], "never insertion or name order");
}

#[test]
fn prefix_orders_by_name_then_insertion() {
    let mut engine = Engine::new();
    engine.insert(record(9, "walker"));
    engine.insert(record(2, "Wall"));
    engine.insert(record(5, "walker"));

    let hit = engine.prefix_by_name("wal").unwrap();
    // walker bucket in insertion order (9 then 5), then wall.
    assert_eq!(ids(&hit.value), vec![9, 5, 2]);
}

#[test]
fn comparison_counts_do_not_leak_between_calls() {
    let mut engine = Engine::new();
    for i in 0..32 {
        engine.insert(record(i, &format!("n{i:02}")));
    }

    let wide = engine.range_by_id(RecordId(0), RecordId(31)).unwrap();
    let point = engine.find_by_id(RecordId(0)).unwrap();
    assert!(
        point.comparisons < wide.comparisons,
        "a point lookup after a full scan reports only its own cost \
         ({} vs {})",
        point.comparisons,
        wide.comparisons
    );
}

#[test]
fn supersede_chain_keeps_one_live_row() {
    let mut engine = Engine::new();
    for round in 0..4 {
        engine.insert(Record::new(
            RecordId(1),
            format!("gen{round}"),
            json!(round),
        ));
    }

    assert_eq!(engine.stored_count(), 4);
    assert_eq!(engine.live_count(), 1);
    let found = engine.find_by_id(RecordId(1)).unwrap();
    assert_eq!(found.value.unwrap().name, "gen3");
    assert!(engine.prefix_by_name("gen0").unwrap().value.is_empty());
    assert_eq!(ids(&engine.prefix_by_name("gen3").unwrap().value), vec![1]);
}

#[test]
fn empty_engine_queries_are_empty_not_errors() {
    let engine = Engine::new();
    assert!(engine.find_by_id(RecordId(1)).unwrap().value.is_none());
    assert!(engine.range_by_id(RecordId(0), RecordId(9)).unwrap().value.is_empty());
    assert!(engine.prefix_by_name("a").unwrap().value.is_empty());
}
