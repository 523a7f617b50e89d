//! Tree linearizer
//!
//! Reorders a flat, parent-keyed record list into pre-order: every record
//! follows its parent, children stay in input order, and unreachable records
//! are dropped.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::domain::entities::Record;
use crate::domain::value_objects::NodeKey;
use crate::error::{TreeGridError, TreeGridResult};

/// Field names and root marker describing how records link together
#[derive(Debug, Clone, PartialEq)]
pub struct TreeFields {
    key_field: String,
    parent_field: String,
    root_marker: Value,
}

impl TreeFields {
    /// Both field names are required; an empty name is a configuration error.
    pub fn new(key_field: impl Into<String>, parent_field: impl Into<String>) -> TreeGridResult<Self> {
        let key_field = key_field.into();
        let parent_field = parent_field.into();

        if key_field.trim().is_empty() {
            return Err(TreeGridError::MissingConfiguration { field: "key_field" });
        }
        if parent_field.trim().is_empty() {
            return Err(TreeGridError::MissingConfiguration {
                field: "parent_field",
            });
        }

        Ok(Self {
            key_field,
            parent_field,
            root_marker: Value::Null,
        })
    }

    pub fn with_root_marker(mut self, root_marker: Value) -> Self {
        self.root_marker = root_marker;
        self
    }

    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    pub fn parent_field(&self) -> &str {
        &self.parent_field
    }

    pub fn root_marker(&self) -> &Value {
        &self.root_marker
    }

    /// The record's own key, or `MalformedRecord` when the field is absent
    pub fn key_of<'a>(&self, record: &'a Record, index: usize) -> TreeGridResult<&'a Value> {
        record
            .field(&self.key_field)
            .ok_or_else(|| TreeGridError::MalformedRecord {
                index,
                field: self.key_field.clone(),
            })
    }

    /// The record's parent key, or `MalformedRecord` when the field is absent
    pub fn parent_of<'a>(&self, record: &'a Record, index: usize) -> TreeGridResult<&'a Value> {
        record
            .field(&self.parent_field)
            .ok_or_else(|| TreeGridError::MalformedRecord {
                index,
                field: self.parent_field.clone(),
            })
    }

    pub fn is_root(&self, parent: &Value) -> bool {
        *parent == self.root_marker
    }
}

/// Pre-order linearization over a parent-pointer relation
#[derive(Debug, Clone)]
pub struct TreeLinearizer {
    fields: TreeFields,
}

impl TreeLinearizer {
    pub fn new(fields: TreeFields) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &TreeFields {
        &self.fields
    }

    /// Linearize records, borrowing them in output order
    pub fn linearize<'a>(&self, records: &'a [Record]) -> TreeGridResult<Vec<&'a Record>> {
        let order = self.linearize_indices(records)?;
        Ok(order.into_iter().map(|i| &records[i]).collect())
    }

    /// Linearize records, returning input positions in output order
    ///
    /// Positions let callers carry data that runs parallel to the records
    /// (such as data-source keys) through the reordering.
    pub fn linearize_indices(&self, records: &[Record]) -> TreeGridResult<Vec<usize>> {
        let index = AdjacencyIndex::build(&self.fields, records)?;
        let root = NodeKey::from_value(self.fields.root_marker());

        let mut visited = vec![false; records.len()];
        let mut order = Vec::with_capacity(records.len());
        let mut stack: Vec<usize> = index.children_of(&root).iter().rev().copied().collect();

        while let Some(node) = stack.pop() {
            if visited[node] {
                return Err(TreeGridError::CyclicHierarchy {
                    key: index.keys[node].to_string(),
                });
            }
            visited[node] = true;
            order.push(node);
            stack.extend(index.children_of(&index.keys[node]).iter().rev().copied());
        }

        if order.len() < records.len() {
            index.check_unreachable(&visited)?;
            debug!(
                dropped = records.len() - order.len(),
                "omitted records unreachable from the root marker"
            );
        }

        debug!(records = records.len(), rows = order.len(), "linearized tree");
        Ok(order)
    }
}

/// Key and child lookups built once per linearization
struct AdjacencyIndex {
    keys: Vec<NodeKey>,
    parents: Vec<NodeKey>,
    by_key: HashMap<NodeKey, usize>,
    children: HashMap<NodeKey, Vec<usize>>,
}

impl AdjacencyIndex {
    fn build(fields: &TreeFields, records: &[Record]) -> TreeGridResult<Self> {
        let mut keys = Vec::with_capacity(records.len());
        let mut parents = Vec::with_capacity(records.len());
        let mut by_key = HashMap::with_capacity(records.len());
        let mut children: HashMap<NodeKey, Vec<usize>> = HashMap::new();

        for (i, record) in records.iter().enumerate() {
            let key = NodeKey::from_value(fields.key_of(record, i)?);
            let parent = NodeKey::from_value(fields.parent_of(record, i)?);

            if by_key.insert(key.clone(), i).is_some() {
                return Err(TreeGridError::DuplicateKey {
                    key: key.to_string(),
                });
            }
            children.entry(parent.clone()).or_default().push(i);
            keys.push(key);
            parents.push(parent);
        }

        Ok(Self {
            keys,
            parents,
            by_key,
            children,
        })
    }

    fn children_of(&self, key: &NodeKey) -> &[usize] {
        self.children.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Follow the parent chain of every unvisited record
    ///
    /// A chain ending at a missing parent is an orphan branch and is fine;
    /// a chain that returns to a record already on it is a cycle.
    fn check_unreachable(&self, visited: &[bool]) -> TreeGridResult<()> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unknown,
            OnChain,
            Settled,
        }

        let mut marks: Vec<Mark> = visited
            .iter()
            .map(|&v| if v { Mark::Settled } else { Mark::Unknown })
            .collect();

        for start in 0..marks.len() {
            let mut chain = Vec::new();
            let mut current = Some(start);

            while let Some(node) = current {
                match marks[node] {
                    Mark::Settled => break,
                    Mark::OnChain => {
                        return Err(TreeGridError::CyclicHierarchy {
                            key: self.keys[node].to_string(),
                        })
                    }
                    Mark::Unknown => {
                        marks[node] = Mark::OnChain;
                        chain.push(node);
                        current = self.by_key.get(&self.parents[node]).copied();
                    }
                }
            }

            for node in chain {
                marks[node] = Mark::Settled;
            }
        }

        Ok(())
    }
}
