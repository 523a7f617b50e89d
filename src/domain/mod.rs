//! Domain Layer
//!
//! The tree logic of treegrid, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - `Record`, one row of data
//! - `value_objects/` - `NodeKey`, `InitialState`
//! - `services/` - `TreeLinearizer`, `RowAnnotator`
//! - `ports/` - `DataSource`, `RowHook`, `RowOptions`

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
