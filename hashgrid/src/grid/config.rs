use super::*;
use crate::error::GridError;

/// How a pair of cell indices is folded into a [`CellKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyScheme {
    /// `(cy << 16) ^ cx` in 32-bit wrapping arithmetic. Distinct cells alias once an
    /// index leaves the 16-bit range (about 32768 cells from the origin).
    #[default]
    Packed16,
    /// `(cy << 32) | (cx as u32)`. Unique while both indices fit in 32 bits.
    Wide,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Side length of one square cell.
    pub cell_size: f32,
    /// Multiplier applied to an entity's size to get the padded half-extent used
    /// for cell assignment.
    pub padding_factor: f32,
    /// Extra distance added on every side of an `area_ids` query square.
    pub query_slack: f32,
    pub key_scheme: KeyScheme,
    /// Number of entities the store reserves room for up front.
    pub pool_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cell_size: 100.0,
            padding_factor: 2.0,
            query_slack: 1.0,
            key_scheme: KeyScheme::Packed16,
            pool_size: 0,
        }
    }
}

impl Config {
    pub fn with_cell_size(cell_size: f32) -> Self {
        Config {
            cell_size,
            ..Config::default()
        }
    }

    pub(crate) fn validate(&self) -> GridResult<()> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(GridError::InvalidCellSize {
                cell_size: self.cell_size,
            });
        }
        validate_non_negative("padding_factor", self.padding_factor)?;
        validate_non_negative("query_slack", self.query_slack)?;
        Ok(())
    }
}

fn validate_non_negative(field: &'static str, value: f32) -> GridResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidConfig { field, value })
    }
}
