//! Terminal and machine-readable output for the CLI

pub mod json;
