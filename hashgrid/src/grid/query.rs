use super::*;
use super::key::cell_index;
use std::ops::RangeInclusive;

// Upper bound on up-front reservations for area queries; huge extents grow lazily.
const MAX_AREA_RESERVE: usize = 1024;

pub(crate) fn require_position(position: Option<Vector>) -> Result<Vector, InvalidInput> {
    let position = position.ok_or(InvalidInput::MissingPosition)?;
    if !position.is_finite() {
        return Err(InvalidInput::NonFinitePosition {
            x: position.x,
            y: position.y,
        });
    }
    Ok(position)
}

/// Zero and NaN count as "no distance". A negative distance covers nothing and
/// yields `Ok(None)`.
pub(crate) fn require_distance(distance: f32) -> Result<Option<f32>, InvalidInput> {
    if distance == 0.0 || distance.is_nan() {
        return Err(InvalidInput::MissingDistance);
    }
    if distance.is_infinite() {
        return Err(InvalidInput::InvalidDistance { distance });
    }
    Ok((distance > 0.0).then_some(distance))
}

#[inline(always)]
fn span_len(span: &RangeInclusive<i64>) -> usize {
    let len = span.end().saturating_sub(*span.start()).saturating_add(1);
    usize::try_from(len).unwrap_or(0)
}

impl<I: Copy + Eq + Hash> Snapshot<I> {
    /// Every entity registered in the cell containing `position`, unfiltered by
    /// distance.
    pub fn closest(&self, position: impl Into<Option<Vector>>) -> GridResult<&[I]> {
        let position = require_position(position.into())?;
        Ok(self.bucket(self.key(position.x, position.y)))
    }

    /// Cell index ranges covering `[c - half_extent - slack, c + half_extent + slack]`
    /// on both axes.
    fn cell_span(
        &self,
        center: Vector,
        half_extent: f32,
        slack: f32,
    ) -> (RangeInclusive<i64>, RangeInclusive<i64>) {
        let cell_size = f64::from(self.cell_size);
        let reach = f64::from(half_extent) + f64::from(slack);
        let span = |c: f32| {
            let c = f64::from(c);
            cell_index(c - reach, cell_size)..=cell_index(c + reach, cell_size)
        };
        (span(center.x), span(center.y))
    }

    /// Keys of every cell intersecting the square of half-width `half_extent`
    /// around `center`, x-major from the minimum corner, each key once.
    pub fn area_keys(
        &self,
        center: impl Into<Option<Vector>>,
        half_extent: f32,
    ) -> GridResult<Vec<CellKey>> {
        let center = require_position(center.into())?;
        let Some(half_extent) = require_distance(half_extent)? else {
            return Ok(Vec::new());
        };

        let (xs, ys) = self.cell_span(center, half_extent, 0.0);
        let capacity = (span_len(&xs).saturating_mul(span_len(&ys))).min(MAX_AREA_RESERVE);
        let mut keys = Vec::with_capacity(capacity);
        let mut seen = FxHashSet::default();
        for cx in xs {
            for cy in ys.clone() {
                let key = self.key_scheme.compose(cx, cy);
                if seen.insert(key) {
                    keys.push(key);
                }
            }
        }
        Ok(keys)
    }

    /// Ids found in the buckets around `center`, each id once.
    ///
    /// The square is widened by the configured slack on every side.
    pub fn area_ids(
        &self,
        center: impl Into<Option<Vector>>,
        half_extent: f32,
    ) -> GridResult<Vec<I>> {
        let mut ids = Vec::new();
        self.area_ids_into(center, half_extent, &mut ids)?;
        Ok(ids)
    }

    /// Appends the result of [`Snapshot::area_ids`] to `ids`.
    pub fn area_ids_into(
        &self,
        center: impl Into<Option<Vector>>,
        half_extent: f32,
        ids: &mut Vec<I>,
    ) -> GridResult<()> {
        let center = require_position(center.into())?;
        let Some(half_extent) = require_distance(half_extent)? else {
            return Ok(());
        };

        let (xs, ys) = self.cell_span(center, half_extent, self.query_slack);
        let mut seen = FxHashSet::default();
        for cx in xs {
            for cy in ys.clone() {
                let Some(bucket) = self.cells.get(&self.key_scheme.compose(cx, cy)) else {
                    continue;
                };
                for &id in bucket {
                    if seen.insert(id) {
                        ids.push(id);
                    }
                }
            }
        }
        Ok(())
    }
}

impl<E: Entity> Grid<E> {
    /// See [`Snapshot::closest`].
    pub fn closest(&self, position: impl Into<Option<Vector>>) -> GridResult<&[E::Id]> {
        self.snapshot.closest(position)
    }

    pub fn area_keys(
        &self,
        center: impl Into<Option<Vector>>,
        half_extent: f32,
    ) -> GridResult<Vec<CellKey>> {
        self.snapshot.area_keys(center, half_extent)
    }

    pub fn area_ids(
        &self,
        center: impl Into<Option<Vector>>,
        half_extent: f32,
    ) -> GridResult<Vec<E::Id>> {
        self.snapshot.area_ids(center, half_extent)
    }

    pub fn area_ids_into(
        &self,
        center: impl Into<Option<Vector>>,
        half_extent: f32,
        ids: &mut Vec<E::Id>,
    ) -> GridResult<()> {
        self.snapshot.area_ids_into(center, half_extent, ids)
    }

    /// Stored entities whose ids [`Grid::area_ids`] reports. Ids left in stale
    /// buckets by a removal are skipped.
    pub fn area_entities(
        &self,
        center: impl Into<Option<Vector>>,
        half_extent: f32,
    ) -> GridResult<Vec<&E>> {
        let ids = self.snapshot.area_ids(center, half_extent)?;
        Ok(ids.into_iter().filter_map(|id| self.store.get(id)).collect())
    }
}
