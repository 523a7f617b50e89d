//! TreeGrid widget
//!
//! Renders a complete `<table>` whose rows are in tree order and carry the
//! classes read by the jQuery TreeGrid plugin, plus the script that
//! initialises the plugin.

use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::config::GridConfig;
use crate::domain::entities::Record;
use crate::domain::ports::{self, DataSource, RowHook, RowOptions};
use crate::domain::services::{RowAnnotator, TreeLinearizer};
use crate::error::{TreeGridError, TreeGridResult};
use crate::html::{self, Attributes};

use super::column::Column;

/// Rendered markup of one grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGrid {
    /// The `<table>` element
    pub html: String,
    /// JavaScript that initialises the plugin on the table
    pub script: String,
    /// Number of data rows rendered
    pub rows: usize,
}

impl RenderedGrid {
    /// Table followed by the init script in a `<script>` element
    pub fn with_script_tag(&self) -> String {
        format!("{}\n<script>{}</script>", self.html, self.script)
    }
}

/// Hierarchical table widget
///
/// Construction validates the configuration; rendering is a pure function
/// of the supplied records.
pub struct TreeGrid {
    config: GridConfig,
    linearizer: TreeLinearizer,
    annotator: RowAnnotator,
    columns: Vec<Column>,
    before_row: Option<Box<dyn RowHook>>,
    after_row: Option<Box<dyn RowHook>>,
}

impl fmt::Debug for TreeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeGrid")
            .field("config", &self.config)
            .field("annotator", &self.annotator)
            .field("columns", &self.columns)
            .field("before_row", &self.before_row.is_some())
            .field("after_row", &self.after_row.is_some())
            .finish()
    }
}

impl TreeGrid {
    /// Build a grid, failing with `MissingConfiguration` before any data is seen
    ///
    /// The rows and the init script share one initial state, resolved by
    /// `GridConfig::effective_initial_state`.
    pub fn new(mut config: GridConfig) -> TreeGridResult<Self> {
        let fields = config.tree_fields()?;
        let initial_state = config.effective_initial_state()?;
        config.set_initial_state(initial_state);
        let columns = config.columns.iter().map(Column::from).collect();

        Ok(Self {
            linearizer: TreeLinearizer::new(fields.clone()),
            annotator: RowAnnotator::new(fields).with_initial_state(initial_state),
            columns,
            before_row: None,
            after_row: None,
            config,
        })
    }

    /// Append a column in addition to the configured ones
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Caller attributes for each `<tr>`; tree classes are appended to them
    pub fn with_row_options(mut self, row_options: RowOptions) -> Self {
        self.annotator = self.annotator.with_row_options(row_options);
        self
    }

    pub fn with_before_row(mut self, hook: impl RowHook + 'static) -> Self {
        self.before_row = Some(Box::new(hook));
        self
    }

    pub fn with_after_row(mut self, hook: impl RowHook + 'static) -> Self {
        self.after_row = Some(Box::new(hook));
        self
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Render the records of a data source
    pub fn render(&self, source: &dyn DataSource) -> TreeGridResult<RenderedGrid> {
        let (models, keys) = ports::fetch(source)?;
        self.render_records(&models, &keys)
    }

    /// Render records with their parallel keys
    pub fn render_records(&self, records: &[Record], keys: &[Value]) -> TreeGridResult<RenderedGrid> {
        let (body, rows) = self.table_body(records, keys)?;

        let mut table_options = self.config.table.clone();
        table_options.set("id", self.config.id.as_str());

        let mut content = String::from("\n");
        if self.config.show_header {
            content.push_str(&self.render_table_header());
            content.push('\n');
        }
        content.push_str(&body);
        content.push('\n');

        let html = html::tag("table", &content, &table_options);
        let script = self.init_script()?;
        debug!(id = %self.config.id, rows, "rendered tree grid");

        Ok(RenderedGrid { html, script, rows })
    }

    /// `<thead>` with one header cell per column
    pub fn render_table_header(&self) -> String {
        let cells: String = self
            .columns
            .iter()
            .map(Column::render_header_cell)
            .collect();
        format!("<thead>\n<tr>{}</tr>\n</thead>", cells)
    }

    /// `<tbody>` with the rows in tree order
    pub fn render_table_body(&self, records: &[Record], keys: &[Value]) -> TreeGridResult<String> {
        self.table_body(records, keys).map(|(body, _)| body)
    }

    fn table_body(&self, records: &[Record], keys: &[Value]) -> TreeGridResult<(String, usize)> {
        if records.len() != keys.len() {
            return Err(TreeGridError::KeyCountMismatch {
                models: records.len(),
                keys: keys.len(),
            });
        }

        let order = self.linearizer.linearize_indices(records)?;
        let mut rows: Vec<String> = Vec::with_capacity(order.len());

        for (index, &position) in order.iter().enumerate() {
            let record = &records[position];
            let key = &keys[position];

            if let Some(markup) = run_hook(self.before_row.as_deref(), record, key, index) {
                rows.push(markup);
            }
            rows.push(self.render_table_row(record, key, index)?);
            if let Some(markup) = run_hook(self.after_row.as_deref(), record, key, index) {
                rows.push(markup);
            }
        }

        if rows.is_empty() {
            return Ok((
                format!(
                    "<tbody>\n<tr><td colspan=\"{}\">{}</td></tr>\n</tbody>",
                    self.columns.len(),
                    self.render_empty()
                ),
                0,
            ));
        }

        Ok((format!("<tbody>\n{}\n</tbody>", rows.join("\n")), order.len()))
    }

    /// One `<tr>` for a record at `index` in the linearized sequence
    pub fn render_table_row(&self, record: &Record, key: &Value, index: usize) -> TreeGridResult<String> {
        let cells: String = self
            .columns
            .iter()
            .map(|column| column.render_data_cell(record))
            .collect();
        let attrs = self.annotator.annotate(record, key, index)?;
        Ok(html::tag("tr", &cells, &attrs))
    }

    /// Placeholder shown when there is nothing to render
    pub fn render_empty(&self) -> String {
        html::tag(
            "div",
            &html::encode(&self.config.empty_text),
            &Attributes::new().with("class", "empty"),
        )
    }

    /// `jQuery("#id").treegrid({...});`
    pub fn init_script(&self) -> TreeGridResult<String> {
        let selector = html::json_html_encode(&Value::String(format!("#{}", self.config.id)))?;
        let options = html::json_html_encode(&self.config.plugin_options())?;
        Ok(format!("jQuery({}).treegrid({});", selector, options))
    }
}

fn run_hook(hook: Option<&dyn RowHook>, record: &Record, key: &Value, index: usize) -> Option<String> {
    hook.and_then(|h| h.render(record, key, index))
        .filter(|markup| !markup.is_empty())
}
