//! treegrid - server-side renderer for jQuery TreeGrid tables
//!
//! Takes flat records that point at their parent through a key field,
//! orders them parent-before-children and renders table rows carrying the
//! `treegrid-*` classes the client plugin uses to expand and collapse
//! branches.

pub mod config;
pub mod domain;
pub mod error;
pub mod html;
pub mod infrastructure;
pub mod widget;

// Re-exports for convenience
pub use config::{ColumnConfig, ConfigWarning, GridConfig};
pub use domain::entities::Record;
pub use domain::ports::{DataSource, RowHook, RowOptions};
pub use domain::services::{RowAnnotator, TreeFields, TreeLinearizer};
pub use domain::value_objects::InitialState;
pub use error::{TreeGridError, TreeGridResult};
pub use html::Attributes;
pub use infrastructure::{FileDataSource, InMemoryDataSource};
pub use widget::{Column, RenderedGrid, TreeGrid};
