//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod initial_state;
mod node_key;

pub use initial_state::InitialState;
pub use node_key::{key_text, NodeKey};
