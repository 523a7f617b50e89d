//! Domain Services
//!
//! Pure business logic: tree linearization and row annotation.
//! No I/O; everything here is a function of its inputs.

mod annotator;
mod linearizer;

pub use annotator::{RowAnnotator, NODE_CLASS_PREFIX, PARENT_CLASS_PREFIX};
pub use linearizer::{TreeFields, TreeLinearizer};
