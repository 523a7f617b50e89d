//! Row annotator
//!
//! Turns one linearized record into the attributes of its `<tr>`: the
//! caller's row options, `data-key`, and the `treegrid-*` classes the client
//! plugin uses to rebuild the hierarchy.

use serde_json::Value;

use crate::domain::entities::Record;
use crate::domain::ports::RowOptions;
use crate::domain::value_objects::{key_text, InitialState};
use crate::error::TreeGridResult;
use crate::html::Attributes;

use super::linearizer::TreeFields;

/// CSS class prefix understood by the TreeGrid plugin
pub const NODE_CLASS_PREFIX: &str = "treegrid-";
/// CSS class prefix linking a row to its parent row
pub const PARENT_CLASS_PREFIX: &str = "treegrid-parent-";

#[derive(Debug)]
pub struct RowAnnotator {
    fields: TreeFields,
    initial_state: InitialState,
    row_options: RowOptions,
}

impl RowAnnotator {
    pub fn new(fields: TreeFields) -> Self {
        Self {
            fields,
            initial_state: InitialState::default(),
            row_options: RowOptions::None,
        }
    }

    pub fn with_initial_state(mut self, initial_state: InitialState) -> Self {
        self.initial_state = initial_state;
        self
    }

    pub fn with_row_options(mut self, row_options: RowOptions) -> Self {
        self.row_options = row_options;
        self
    }

    pub fn initial_state(&self) -> InitialState {
        self.initial_state
    }

    /// Attributes for the row of `record`
    ///
    /// `key` is the data-source key of the row and `index` its position in
    /// the linearized sequence.
    pub fn annotate(&self, record: &Record, key: &Value, index: usize) -> TreeGridResult<Attributes> {
        let id = self.fields.key_of(record, index)?;
        let parent = self.fields.parent_of(record, index)?;

        let mut attrs = self.row_options.resolve(record, key, index);
        attrs.set("data-key", key_text(key));
        attrs.add_class(&format!("{}{}", NODE_CLASS_PREFIX, key_text(id)));

        if !self.fields.is_root(parent) {
            if self.initial_state.is_collapsed() {
                attrs.add_style("display", "none");
            }
            attrs.add_class(&format!("{}{}", PARENT_CLASS_PREFIX, key_text(parent)));
        }

        Ok(attrs)
    }
}
