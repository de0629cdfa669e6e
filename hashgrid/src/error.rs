/// Reasons a query or registration was rejected before doing any work.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    #[error("no position supplied")]
    MissingPosition,
    #[error("no distance supplied")]
    MissingDistance,
    #[error("position must be finite (x: {x}, y: {y})")]
    NonFinitePosition { x: f32, y: f32 },
    #[error("distance must be finite (distance: {distance})")]
    InvalidDistance { distance: f32 },
    #[error("entity size must be finite and non-negative (size: {size})")]
    InvalidSize { size: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum GridError {
    #[error("cell size must be finite and positive (cell_size: {cell_size})")]
    InvalidCellSize { cell_size: f32 },
    #[error("{field} must be finite and non-negative (value: {value})")]
    InvalidConfig { field: &'static str, value: f32 },
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

impl GridError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, GridError::InvalidInput(_))
    }
}

pub type GridResult<T> = Result<T, GridError>;
