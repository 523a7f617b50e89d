//! File system helpers

mod output;

pub use output::atomic_write;
