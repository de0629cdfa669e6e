use super::*;

/// Identifier of one grid cell.
///
/// [`KeyScheme::Packed16`] keys always fit in an `i32`; they are widened so both
/// schemes share one type.
pub type CellKey = i64;

/// Cell key of `(x, y)` for a grid with the given cell size, using the packed
/// 16-bit scheme.
///
/// ```
/// use hashgrid::key;
///
/// assert_eq!(key(999.0, 999.0, 1000.0), key(1.0, 1.0, 1000.0));
/// assert_ne!(key(1000.0, -1000.0, 1000.0), key(-1000.0, 1000.0, 1000.0));
/// ```
#[inline(always)]
pub fn key(x: f32, y: f32, cell_size: f32) -> CellKey {
    pack16(
        cell_index(f64::from(x), f64::from(cell_size)),
        cell_index(f64::from(y), f64::from(cell_size)),
    )
}

/// Same as [`key`] but using [`KeyScheme::Wide`].
#[inline(always)]
pub fn wide_key(x: f32, y: f32, cell_size: f32) -> CellKey {
    pack_wide(
        cell_index(f64::from(x), f64::from(cell_size)),
        cell_index(f64::from(y), f64::from(cell_size)),
    )
}

#[inline(always)]
pub(crate) fn cell_index(v: f64, cell_size: f64) -> i64 {
    (v / cell_size).floor() as i64
}

// Indices are truncated to 32 bits first, so the packed key wraps exactly the way
// 32-bit integer arithmetic does.
#[inline(always)]
pub(crate) fn pack16(cx: i64, cy: i64) -> CellKey {
    let a = cx as i32;
    let b = cy as i32;
    CellKey::from((b << 16) ^ a)
}

#[inline(always)]
pub(crate) fn pack_wide(cx: i64, cy: i64) -> CellKey {
    (CellKey::from(cy as i32) << 32) | CellKey::from(cx as i32 as u32)
}

impl KeyScheme {
    #[inline(always)]
    pub fn compose(self, cx: i64, cy: i64) -> CellKey {
        match self {
            KeyScheme::Packed16 => pack16(cx, cy),
            KeyScheme::Wide => pack_wide(cx, cy),
        }
    }

    #[inline(always)]
    pub fn key(self, x: f32, y: f32, cell_size: f32) -> CellKey {
        let cell_size = f64::from(cell_size);
        self.compose(
            cell_index(f64::from(x), cell_size),
            cell_index(f64::from(y), cell_size),
        )
    }
}
