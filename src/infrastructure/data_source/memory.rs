//! In-memory data source

use serde_json::Value;

use crate::domain::entities::Record;
use crate::domain::ports::DataSource;

/// Records held in memory
///
/// Keys are the record positions unless a key field or explicit keys are
/// given. A record lacking the key field gets a `null` key.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSource {
    records: Vec<Record>,
    key_field: Option<String>,
    keys: Option<Vec<Value>>,
}

impl InMemoryDataSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            key_field: None,
            keys: None,
        }
    }

    /// Use the value of `field` as each row's key
    pub fn with_key_field(mut self, field: impl Into<String>) -> Self {
        self.key_field = Some(field.into());
        self
    }

    /// Use explicit keys, parallel to the records
    pub fn with_keys(mut self, keys: Vec<Value>) -> Self {
        self.keys = Some(keys);
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl DataSource for InMemoryDataSource {
    fn models(&self) -> Vec<Record> {
        self.records.clone()
    }

    fn keys(&self) -> Vec<Value> {
        if let Some(keys) = &self.keys {
            return keys.clone();
        }
        match &self.key_field {
            Some(field) => self
                .records
                .iter()
                .map(|r| r.field(field).cloned().unwrap_or(Value::Null))
                .collect(),
            None => (0..self.records.len()).map(Value::from).collect(),
        }
    }
}
