//! Configuration and data loading shared by the subcommands

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use treegrid::config::ConfigWarning;
use treegrid::{FileDataSource, GridConfig};

/// Resolve the grid configuration for a command
///
/// An explicit path must load; otherwise the project and user files are
/// tried in turn. Environment overrides apply in both cases.
pub fn load_config(path: Option<&Path>) -> Result<(GridConfig, Vec<ConfigWarning>)> {
    match path {
        Some(path) => {
            let (config, warnings) = GridConfig::load_with_warnings(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?;
            debug!(path = %path.display(), "loaded grid configuration");
            Ok((config.with_env_overrides(), warnings))
        }
        None => {
            let project_root = std::env::current_dir()?;
            Ok((GridConfig::load_or_default(Some(&project_root)), Vec::new()))
        }
    }
}

/// Log configuration warnings unless they are reported as JSON events
pub fn report_warnings(warnings: &[ConfigWarning], json: bool) {
    if json {
        return;
    }
    for warning in warnings {
        warn!("{}", warning);
    }
}

/// Load the record file, keyed by the configured key field
pub fn load_data(path: &Path, config: &GridConfig) -> Result<FileDataSource> {
    let source = FileDataSource::load(path)
        .with_context(|| format!("failed to load records from {}", path.display()))?;
    Ok(source.with_key_field(config.key_field.as_str()))
}
