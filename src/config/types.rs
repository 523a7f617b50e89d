//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::services::TreeFields;
use crate::domain::value_objects::InitialState;
use crate::error::{TreeGridError, TreeGridResult};
use crate::html::Attributes;

use super::loader::{self, ConfigWarning};

/// Key under which the initial state is forwarded to the client plugin
pub const PLUGIN_INITIAL_STATE: &str = "initialState";

/// One display column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Record field (dotted paths allowed) shown in this column
    pub attribute: String,

    /// Header text; derived from `attribute` when absent
    #[serde(default)]
    pub label: Option<String>,

    /// Attributes of every `<td>` in this column
    #[serde(default)]
    pub options: Attributes,

    /// Attributes of the `<th>`
    #[serde(default)]
    pub header_options: Attributes,
}

impl ColumnConfig {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            label: None,
            options: Attributes::new(),
            header_options: Attributes::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Grid configuration
///
/// `key_field` and `parent_field` default to empty so that a missing value
/// surfaces as `MissingConfiguration` from `tree_fields()` rather than as a
/// parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default)]
    pub key_field: String,

    #[serde(default)]
    pub parent_field: String,

    /// Parent value that marks a top-level record; absent means `null`
    #[serde(default)]
    pub root_marker: Value,

    #[serde(default)]
    pub initial_state: InitialState,

    /// DOM id of the `<table>`, also used by the init script
    #[serde(default = "default_id")]
    pub id: String,

    #[serde(default = "default_empty_text")]
    pub empty_text: String,

    #[serde(default = "default_true")]
    pub show_header: bool,

    /// Attributes of the `<table>` element
    #[serde(default = "default_table_options")]
    pub table: Attributes,

    #[serde(default)]
    pub columns: Vec<ColumnConfig>,

    /// Options passed through verbatim to the client plugin
    #[serde(default)]
    pub plugin: Map<String, Value>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            key_field: String::new(),
            parent_field: String::new(),
            root_marker: Value::Null,
            initial_state: InitialState::default(),
            id: default_id(),
            empty_text: default_empty_text(),
            show_header: true,
            table: default_table_options(),
            columns: Vec::new(),
            plugin: Map::new(),
        }
    }
}

fn default_id() -> String {
    "treegrid".to_string()
}

fn default_empty_text() -> String {
    "No results found.".to_string()
}

fn default_true() -> bool {
    true
}

fn default_table_options() -> Attributes {
    Attributes::new().with("class", "table table-striped table-bordered")
}

impl GridConfig {
    pub fn new(key_field: impl Into<String>, parent_field: impl Into<String>) -> Self {
        Self {
            key_field: key_field.into(),
            parent_field: parent_field.into(),
            ..Self::default()
        }
    }

    pub fn with_root_marker(mut self, root_marker: Value) -> Self {
        self.root_marker = root_marker;
        self
    }

    pub fn with_initial_state(mut self, initial_state: InitialState) -> Self {
        self.set_initial_state(initial_state);
        self
    }

    /// Set the initial state for both the rows and the plugin options
    pub fn set_initial_state(&mut self, initial_state: InitialState) {
        self.initial_state = initial_state;
        self.plugin.insert(
            PLUGIN_INITIAL_STATE.to_string(),
            Value::String(initial_state.as_str().to_string()),
        );
    }

    /// The initial state shared by the rows and the plugin
    ///
    /// `initialState` under `[plugin]` takes precedence over `initial_state`.
    pub fn effective_initial_state(&self) -> TreeGridResult<InitialState> {
        match self.plugin.get(PLUGIN_INITIAL_STATE) {
            None => Ok(self.initial_state),
            Some(Value::String(state)) => {
                state
                    .parse()
                    .map_err(|message| TreeGridError::InvalidOption {
                        option: format!("plugin.{}", PLUGIN_INITIAL_STATE),
                        message,
                    })
            }
            Some(other) => Err(TreeGridError::InvalidOption {
                option: format!("plugin.{}", PLUGIN_INITIAL_STATE),
                message: format!("expected a string, found {}", other),
            }),
        }
    }

    pub fn with_column(mut self, column: ColumnConfig) -> Self {
        self.columns.push(column);
        self
    }

    /// Validated tree field description
    pub fn tree_fields(&self) -> TreeGridResult<TreeFields> {
        Ok(TreeFields::new(self.key_field.as_str(), self.parent_field.as_str())?
            .with_root_marker(self.root_marker.clone()))
    }

    /// Plugin options with the configured initial state filled in
    ///
    /// An explicit `initialState` in `[plugin]` is left untouched; see
    /// `effective_initial_state`.
    pub fn plugin_options(&self) -> Value {
        let mut options = self.plugin.clone();
        options
            .entry(PLUGIN_INITIAL_STATE)
            .or_insert_with(|| Value::String(self.initial_state.as_str().to_string()));
        Value::Object(options)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TreeGridResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and report unknown keys
    pub fn load_with_warnings(path: &Path) -> TreeGridResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the project file, the user file, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply `TREEGRID_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
