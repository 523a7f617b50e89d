//! DataSource implementations

mod file;
mod memory;

pub use file::{parse_records, DataFormat, FileDataSource};
pub use memory::InMemoryDataSource;
