pub mod error;
pub mod grid;

pub use common::vector::Vector;
pub use error::{GridError, GridResult, InvalidInput};
pub use grid::{key, wide_key, Body, CellKey, Config, Entity, Grid, GridStats, KeyScheme, Snapshot};
