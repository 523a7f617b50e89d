//! Property tests for tree linearization.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use serde_json::{json, Value};

use treegrid::{Record, TreeFields, TreeGridError, TreeLinearizer};

fn node(key: u64, parent: Value) -> Record {
    Record::new().with("id", key).with("parent_id", parent)
}

fn linearizer() -> TreeLinearizer {
    TreeLinearizer::new(TreeFields::new("id", "parent_id").unwrap())
}

/// A shuffled forest: every node is a root, a child of an earlier node, or
/// an orphan pointing at a key no record carries.
fn forest() -> impl Strategy<Value = Vec<Record>> {
    proptest::collection::vec((0u8..3, any::<prop::sample::Index>()), 0..40)
        .prop_map(|shape| {
            shape
                .iter()
                .enumerate()
                .map(|(i, (kind, pick))| {
                    let parent = match kind {
                        1 if i > 0 => json!(pick.index(i)),
                        2 => json!(1000 + i),
                        _ => Value::Null,
                    };
                    node(i as u64, parent)
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

fn key(record: &Record) -> Value {
    record.field("id").cloned().unwrap_or(Value::Null)
}

fn parent(record: &Record) -> Value {
    record.field("parent_id").cloned().unwrap_or(Value::Null)
}

/// Pre-order by rescanning the whole input for each parent.
fn rescan(records: &[Record], parent_key: &Value, out: &mut Vec<Value>) {
    for record in records {
        if &parent(record) == parent_key {
            out.push(key(record));
            rescan(records, &key(record), out);
        }
    }
}

fn parent_index(records: &[Record]) -> HashMap<String, Value> {
    records
        .iter()
        .map(|r| (key(r).to_string(), parent(r)))
        .collect()
}

fn has_cycle(records: &[Record]) -> bool {
    let parents = parent_index(records);
    records.iter().any(|start| {
        let mut seen = HashSet::new();
        let mut current = key(start);
        loop {
            if !seen.insert(current.to_string()) {
                return true;
            }
            match parents.get(&current.to_string()) {
                Some(next) => current = next.clone(),
                None => return false,
            }
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Linearization matches the rescanning pre-order traversal.
    #[test]
    fn property_matches_rescan_order(records in forest()) {
        let ordered: Vec<Value> = linearizer()
            .linearize(&records)
            .unwrap()
            .into_iter()
            .map(key)
            .collect();

        let mut expected = Vec::new();
        rescan(&records, &Value::Null, &mut expected);
        prop_assert_eq!(ordered, expected);
    }

    /// PROPERTY: Every parent precedes its children and siblings keep input order.
    #[test]
    fn property_ancestors_first_and_siblings_stable(records in forest()) {
        let indices = linearizer().linearize_indices(&records).unwrap();

        let mut position = HashMap::new();
        for (pos, &index) in indices.iter().enumerate() {
            position.insert(key(&records[index]).to_string(), pos);
        }

        let mut last_sibling: HashMap<String, usize> = HashMap::new();
        for &index in &indices {
            let parent_key = parent(&records[index]);
            if !parent_key.is_null() {
                prop_assert!(
                    position[&parent_key.to_string()] < position[&key(&records[index]).to_string()]
                );
            }
            let group = parent_key.to_string();
            if let Some(&previous) = last_sibling.get(&group) {
                prop_assert!(previous < index, "siblings reordered");
            }
            last_sibling.insert(group, index);
        }
    }

    /// PROPERTY: Reachable records appear exactly once; orphans never appear.
    #[test]
    fn property_reachable_exactly_once(records in forest()) {
        let indices = linearizer().linearize_indices(&records).unwrap();
        let parents = parent_index(&records);

        let unique: HashSet<usize> = indices.iter().copied().collect();
        prop_assert_eq!(unique.len(), indices.len());
        for &index in &indices {
            let mut current = parent(&records[index]);
            while !current.is_null() {
                prop_assert!(current.as_u64().is_some_and(|k| k < 1000), "orphan emitted");
                current = parents[&current.to_string()].clone();
            }
        }
    }

    /// PROPERTY: Arbitrary parent links either linearize or report a real cycle.
    #[test]
    fn property_cycles_are_reported_never_hang(
        parents in proptest::collection::vec(proptest::option::of(0u64..12), 0..12),
    ) {
        let records: Vec<Record> = parents
            .iter()
            .enumerate()
            .map(|(i, p)| node(i as u64, p.map_or(Value::Null, |p| json!(p))))
            .collect();

        match linearizer().linearize(&records) {
            Ok(_) => prop_assert!(!has_cycle(&records)),
            Err(TreeGridError::CyclicHierarchy { .. }) => prop_assert!(has_cycle(&records)),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
