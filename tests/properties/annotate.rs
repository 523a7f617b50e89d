//! Property tests for row annotation.

use proptest::prelude::*;
use serde_json::{json, Value};

use treegrid::{InitialState, Record, RowAnnotator, RowOptions, TreeFields};

fn record() -> impl Strategy<Value = Record> {
    (0u64..50, proptest::option::of(0u64..50)).prop_map(|(key, parent)| {
        Record::new()
            .with("id", key)
            .with("parent_id", parent.map_or(Value::Null, |p| json!(p)))
    })
}

fn annotator(collapsed: bool) -> RowAnnotator {
    let state = if collapsed {
        InitialState::Collapsed
    } else {
        InitialState::Expanded
    };
    RowAnnotator::new(TreeFields::new("id", "parent_id").unwrap()).with_initial_state(state)
}

proptest! {
    /// PROPERTY: Annotating an already annotated row changes nothing.
    #[test]
    fn property_annotation_is_idempotent(record in record(), collapsed in any::<bool>(), index in 0usize..100) {
        let key = record.field("id").cloned().unwrap();
        let once = annotator(collapsed).annotate(&record, &key, index).unwrap();
        let twice = annotator(collapsed)
            .with_row_options(RowOptions::Static(once.clone()))
            .annotate(&record, &key, index)
            .unwrap();
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Collapsed grids hide every child row and never a root row.
    #[test]
    fn property_collapsed_hides_children_only(record in record(), collapsed in any::<bool>()) {
        let key = record.field("id").cloned().unwrap();
        let attrs = annotator(collapsed).annotate(&record, &key, 0).unwrap();
        let is_root = record.field("parent_id") == Some(&Value::Null);

        prop_assert_eq!(attrs.contains("style"), collapsed && !is_root);
        prop_assert_eq!(
            attrs.classes().iter().any(|c| c.starts_with("treegrid-parent-")),
            !is_root
        );
        let node_class = format!("treegrid-{}", key);
        prop_assert!(attrs.has_class(&node_class));
    }
}
