use std::path::Path;

use anyhow::Result;

use treegrid::TreeGrid;

use super::common::{load_config, report_warnings};

pub fn cmd_check(config_path: Option<&Path>, json: bool) -> Result<()> {
    let (config, warnings) = load_config(config_path)?;
    report_warnings(&warnings, json);

    let id = config.id.clone();
    let result = TreeGrid::new(config);

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "check",
            "success": result.is_ok(),
            "id": id,
            "warnings": warnings.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "error": result.as_ref().err().map(ToString::to_string),
        }))?;
    }

    let grid = result?;
    if !json {
        println!(
            "✓ grid '{}' is valid: key '{}', parent '{}', {} column(s), {} warning(s)",
            id,
            grid.config().key_field,
            grid.config().parent_field,
            grid.columns().len(),
            warnings.len()
        );
    }

    Ok(())
}
