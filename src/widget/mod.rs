//! The TreeGrid widget and its columns

mod column;
mod grid;

pub use column::{Column, NOT_SET};
pub use grid::{RenderedGrid, TreeGrid};
