//! DataSource port - where the records of one render come from
//!
//! Mirrors a paginated data provider: `models()` and `keys()` are parallel
//! sequences of the same length and order.

use serde_json::Value;

use crate::domain::entities::Record;
use crate::error::{TreeGridError, TreeGridResult};

/// Abstract provider of the records to render
///
/// Implemented by the infrastructure layer (in-memory, file-backed).
pub trait DataSource {
    /// Records in provider order
    fn models(&self) -> Vec<Record>;

    /// Row keys, parallel to `models()`
    fn keys(&self) -> Vec<Value>;
}

/// Fetch both sequences and check they line up
pub fn fetch(source: &dyn DataSource) -> TreeGridResult<(Vec<Record>, Vec<Value>)> {
    let models = source.models();
    let keys = source.keys();
    if models.len() != keys.len() {
        return Err(TreeGridError::KeyCountMismatch {
            models: models.len(),
            keys: keys.len(),
        });
    }
    Ok((models, keys))
}
