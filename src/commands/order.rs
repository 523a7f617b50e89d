use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;

use treegrid::domain::value_objects::{key_text, NodeKey};
use treegrid::{DataSource, TreeLinearizer};

use super::common::{load_config, load_data, report_warnings};

pub fn cmd_order(data: &Path, config_path: Option<&Path>, json: bool) -> Result<()> {
    let (config, warnings) = load_config(config_path)?;
    report_warnings(&warnings, json);

    let fields = config.tree_fields()?;
    let source = load_data(data, &config)?;
    let records = source.models();
    let linearizer = TreeLinearizer::new(fields.clone());
    let ordered = linearizer.linearize(&records)?;

    let mut depths: HashMap<NodeKey, usize> = HashMap::new();
    for (index, record) in ordered.iter().enumerate() {
        let key = fields.key_of(record, index)?;
        let parent = fields.parent_of(record, index)?;
        let depth = if fields.is_root(parent) {
            0
        } else {
            depths
                .get(&NodeKey::from_value(parent))
                .map_or(0, |d| d + 1)
        };
        depths.insert(NodeKey::from_value(key), depth);

        if json {
            crate::ui::json::emit(serde_json::json!({
                "event": "row",
                "index": index,
                "key": key,
                "parent": parent,
                "depth": depth,
            }))?;
        } else {
            println!("{}{}", "  ".repeat(depth), key_text(key));
        }
    }

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "order",
            "records": records.len(),
            "rows": ordered.len(),
        }))?;
    }

    Ok(())
}
