//! Grid configuration
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TREEGRID_*)
//! 3. Project config (./treegrid.toml) or an explicit `--config` file
//! 4. User config (<config dir>/treegrid/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{parse_with_warnings, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColumnConfig, GridConfig, PLUGIN_INITIAL_STATE};
