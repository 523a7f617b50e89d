//! Display columns

use serde_json::Value;

use crate::config::ColumnConfig;
use crate::domain::entities::Record;
use crate::domain::value_objects::key_text;
use crate::html::{self, Attributes};

/// Markup for a cell whose value is missing or `null`
pub const NOT_SET: &str = r#"<span class="not-set">(not set)</span>"#;

/// A column showing one record field
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    attribute: String,
    label: String,
    options: Attributes,
    header_options: Attributes,
}

impl Column {
    pub fn new(attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        Self {
            label: generate_label(&attribute),
            attribute,
            options: Attributes::new(),
            header_options: Attributes::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    pub fn with_header_options(mut self, header_options: Attributes) -> Self {
        self.header_options = header_options;
        self
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn render_header_cell(&self) -> String {
        html::tag("th", &html::encode(&self.label), &self.header_options)
    }

    pub fn render_data_cell(&self, record: &Record) -> String {
        html::tag("td", &cell_content(record.field(&self.attribute)), &self.options)
    }
}

impl From<&ColumnConfig> for Column {
    fn from(config: &ColumnConfig) -> Self {
        let column = Column::new(config.attribute.as_str())
            .with_options(config.options.clone())
            .with_header_options(config.header_options.clone());
        match &config.label {
            Some(label) => column.with_label(label.as_str()),
            None => column,
        }
    }
}

fn cell_content(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => NOT_SET.to_string(),
        Some(value) => html::encode(&key_text(value)),
    }
}

/// `parent_id` → `Parent Id`, `meta.itemCount` → `Meta Item Count`
fn generate_label(attribute: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in attribute.chars() {
        if c == '_' || c == '-' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
