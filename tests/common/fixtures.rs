//! Test fixtures - reusable content constants for tests.

/// Grid configuration with two columns
pub const GRID_CONFIG: &str = r#"
key_field = "id"
parent_field = "parent_id"
id = "files"

[[columns]]
attribute = "name"

[[columns]]
attribute = "size"
label = "Bytes"
"#;

/// Configuration without the parent field
pub const CONFIG_WITHOUT_PARENT: &str = r#"
key_field = "id"
"#;

/// A small file tree, children listed before their parents
pub const FILE_TREE_JSON: &str = r#"[
  {"id": 2, "parent_id": 1, "name": "report.pdf", "size": 120},
  {"id": 1, "parent_id": null, "name": "Documents", "size": null},
  {"id": 4, "parent_id": 3, "name": "song.mp3", "size": 4096},
  {"id": 3, "parent_id": null, "name": "Music", "size": null},
  {"id": 5, "parent_id": 2, "name": "appendix.pdf", "size": 12}
]"#;

/// The same tree in YAML
pub const FILE_TREE_YAML: &str = r#"
- id: 1
  parent_id: ~
  name: Documents
- id: 2
  parent_id: 1
  name: report.pdf
"#;

/// Two records pointing at each other
pub const CYCLE_JSON: &str = r#"[
  {"id": 1, "parent_id": 2, "name": "a"},
  {"id": 2, "parent_id": 1, "name": "b"}
]"#;
