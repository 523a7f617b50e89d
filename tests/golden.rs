//! Golden tests for treegrid
//!
//! These tests render a reference record set and compare the complete
//! markup against the stored snapshots.

use insta::assert_snapshot;
use serde_json::{json, Value};

use treegrid::{ColumnConfig, GridConfig, InMemoryDataSource, InitialState, Record, TreeGrid};

fn file(id: u64, parent: Value, name: &str, size: Value) -> Record {
    Record::new()
        .with("id", id)
        .with("parent_id", parent)
        .with("name", name)
        .with("size", size)
}

fn file_tree() -> Vec<Record> {
    vec![
        file(1, Value::Null, "Documents", Value::Null),
        file(2, json!(1), "report.pdf", json!(120)),
        file(3, Value::Null, "Music & Video", Value::Null),
        file(4, json!(3), "song.mp3", json!(4096)),
        file(5, json!(1), "<draft>.txt", json!(2)),
    ]
}

fn files_config() -> GridConfig {
    let mut config = GridConfig::new("id", "parent_id")
        .with_initial_state(InitialState::Collapsed)
        .with_column(ColumnConfig::new("name"))
        .with_column(ColumnConfig::new("size"));
    config.id = "files".to_string();
    config
        .plugin
        .insert("saveState".to_string(), Value::Bool(true));
    config
}

#[test]
fn golden_collapsed_file_tree() {
    let grid = TreeGrid::new(files_config()).unwrap();
    let source = InMemoryDataSource::new(file_tree()).with_key_field("id");
    let rendered = grid.render(&source).unwrap();

    assert_eq!(rendered.rows, 5);
    assert_snapshot!("collapsed_file_tree", rendered.with_script_tag());
}

#[test]
fn golden_empty_grid() {
    let grid = TreeGrid::new(files_config()).unwrap();
    let source = InMemoryDataSource::new(Vec::new());
    let rendered = grid.render(&source).unwrap();

    assert_eq!(rendered.rows, 0);
    assert_snapshot!("empty_grid", rendered.html);
}
