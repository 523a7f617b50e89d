//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `data_source/` - `DataSource` implementations (in-memory, JSON/YAML files)
//! - `fs/` - Atomic output writing

pub mod data_source;
pub mod fs;

// Re-export for convenience
pub use data_source::{FileDataSource, InMemoryDataSource};
pub use fs::atomic_write;
