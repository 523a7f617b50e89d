use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use treegrid::infrastructure::atomic_write;
use treegrid::{InitialState, TreeGrid};

use super::common::{load_config, load_data, report_warnings};

pub fn cmd_render(
    data: &Path,
    config_path: Option<&Path>,
    output: Option<&PathBuf>,
    no_script: bool,
    initial_state: Option<&str>,
    json: bool,
) -> Result<()> {
    let (mut config, warnings) = load_config(config_path)?;
    report_warnings(&warnings, json);

    if let Some(state) = initial_state {
        config.set_initial_state(state.parse::<InitialState>().map_err(|e| anyhow!(e))?);
    }

    let grid = TreeGrid::new(config)?;
    let source = load_data(data, grid.config())?;
    let rendered = grid.render(&source)?;

    let markup = if no_script {
        rendered.html.clone()
    } else {
        rendered.with_script_tag()
    };

    match output {
        Some(path) => atomic_write(path, format!("{}\n", markup).as_bytes())?,
        None if !json => println!("{}", markup),
        None => {}
    }

    if json {
        let inline_html = output.is_none().then_some(&markup);
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "render",
            "rows": rendered.rows,
            "warnings": warnings.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "output": output.map(|p| p.display().to_string()),
            "html": inline_html,
        }))?;
    }

    Ok(())
}
