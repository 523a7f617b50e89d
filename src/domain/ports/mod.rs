//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod data_source;
pub mod row_hook;

pub use data_source::{fetch, DataSource};
pub use row_hook::{RowHook, RowOptions};
