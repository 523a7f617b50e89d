//! Subcommand implementations

mod check;
mod common;
mod order;
mod render;

pub use check::cmd_check;
pub use order::cmd_order;
pub use render::cmd_render;
