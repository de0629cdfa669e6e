use super::*;
use super::key::cell_index;

/// Distinct cell keys an entity is registered under, sorted ascending.
pub type Footprint = SmallVec<[CellKey; 4]>;

/// Keys of the four corners of the square centred on `position` with half-extent
/// `size * padding_factor`.
///
/// Only the corners are sampled. A padded square wider than one cell can overlap
/// interior cells none of its corners fall in, and those cells are not returned.
#[inline(always)]
pub(crate) fn footprint_keys(
    position: Vector,
    size: f32,
    padding_factor: f32,
    cell_size: f32,
    key_scheme: KeyScheme,
) -> Footprint {
    let cell_size = f64::from(cell_size);
    let pad = f64::from(size) * f64::from(padding_factor);
    let (x, y) = (f64::from(position.x), f64::from(position.y));
    let (left, right) = (cell_index(x - pad, cell_size), cell_index(x + pad, cell_size));
    let (low, high) = (cell_index(y - pad, cell_size), cell_index(y + pad, cell_size));
    let mut keys: Footprint = [(left, low), (right, low), (left, high), (right, high)]
        .iter()
        .map(|&(cx, cy)| key_scheme.compose(cx, cy))
        .collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}

impl<E: Entity> Grid<E> {
    /// Cells `entity` occupies after a rebuild under this grid's configuration.
    pub fn footprint(&self, entity: &E) -> Footprint {
        footprint_keys(
            entity.position(),
            entity.size(),
            self.config.padding_factor,
            self.config.cell_size,
            self.config.key_scheme,
        )
    }
}
