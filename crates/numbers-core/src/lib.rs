//! numbers-core - UI-agnostic sheet model + text I/O.

pub mod error;
pub mod io;
pub mod sheet;

pub use error::{NumbersError, Result};
pub use sheet::Sheet;

pub use numbers_engine::engine::{Cell, CellRef};
