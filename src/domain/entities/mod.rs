//! Domain Entities
//!
//! - `Record` - one row of tree data

mod record;

pub use record::Record;
