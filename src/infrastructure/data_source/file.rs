//! File-backed data source
//!
//! Reads a JSON or YAML array of records. The format follows the file
//! extension.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::domain::entities::Record;
use crate::domain::ports::DataSource;
use crate::error::{TreeGridError, TreeGridResult};

use super::InMemoryDataSource;

/// Record file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(DataFormat::Json),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            _ => None,
        }
    }
}

/// Records loaded from disk
#[derive(Debug, Clone)]
pub struct FileDataSource {
    path: PathBuf,
    inner: InMemoryDataSource,
}

impl FileDataSource {
    /// Read and parse the file
    pub fn load(path: &Path) -> TreeGridResult<Self> {
        let format = DataFormat::from_path(path).ok_or_else(|| {
            TreeGridError::UnsupportedDataFormat {
                file: path.to_path_buf(),
            }
        })?;
        let content = fs::read_to_string(path)?;
        let records = parse_records(&content, format, path)?;
        debug!(path = %path.display(), records = records.len(), "loaded records");

        Ok(Self {
            path: path.to_path_buf(),
            inner: InMemoryDataSource::new(records),
        })
    }

    /// Use the value of `field` as each row's key
    pub fn with_key_field(mut self, field: impl Into<String>) -> Self {
        self.inner = self.inner.with_key_field(field);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[Record] {
        self.inner.records()
    }
}

impl DataSource for FileDataSource {
    fn models(&self) -> Vec<Record> {
        self.inner.models()
    }

    fn keys(&self) -> Vec<Value> {
        self.inner.keys()
    }
}

/// Parse an array of record objects
pub fn parse_records(content: &str, format: DataFormat, path: &Path) -> TreeGridResult<Vec<Record>> {
    let invalid = |message: String| TreeGridError::InvalidData {
        file: path.to_path_buf(),
        message,
    };

    let value: Value = match format {
        DataFormat::Json => serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?,
        DataFormat::Yaml => {
            serde_yaml_ng::from_str(content).map_err(|e| invalid(e.to_string()))?
        }
    };

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(invalid(format!(
                "expected an array of records, found {}",
                json_type_name(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            Record::from_value(item)
                .ok_or_else(|| invalid(format!("record #{} is not an object", i)))
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DataFormat::from_path(Path::new("rows.JSON")),
            Some(DataFormat::Json)
        );
        assert_eq!(
            DataFormat::from_path(Path::new("rows.yml")),
            Some(DataFormat::Yaml)
        );
        assert_eq!(DataFormat::from_path(Path::new("rows.csv")), None);
    }

    #[test]
    fn load_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rows.json");
        fs::write(
            &path,
            r#"[{"id": 1, "parent_id": null}, {"id": 2, "parent_id": 1}]"#,
        )
        .unwrap();

        let source = FileDataSource::load(&path).unwrap().with_key_field("id");
        assert_eq!(source.records().len(), 2);
        assert_eq!(source.keys(), vec![json!(1), json!(2)]);
    }

    #[test]
    fn load_yaml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rows.yaml");
        fs::write(
            &path,
            "- id: a\n  parent_id: ~\n- id: b\n  parent_id: a\n",
        )
        .unwrap();

        let source = FileDataSource::load(&path).unwrap();
        assert_eq!(source.records()[0].field("parent_id"), Some(&Value::Null));
        assert_eq!(source.records()[1].field("parent_id"), Some(&json!("a")));
    }

    #[test]
    fn unsupported_extension() {
        let err = FileDataSource::load(Path::new("rows.csv")).unwrap_err();
        assert!(matches!(err, TreeGridError::UnsupportedDataFormat { .. }));
    }

    #[test]
    fn non_array_is_invalid() {
        let err = parse_records(r#"{"id": 1}"#, DataFormat::Json, Path::new("x.json"))
            .unwrap_err();
        assert!(err.to_string().contains("expected an array of records"));
    }

    #[test]
    fn non_object_item_is_invalid() {
        let err =
            parse_records("[1]", DataFormat::Json, Path::new("x.json")).unwrap_err();
        assert!(err.to_string().contains("record #0 is not an object"));
    }
}
