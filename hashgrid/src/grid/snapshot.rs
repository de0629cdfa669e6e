use super::*;

/// Bucket layout produced by one [`Grid::rebuild`].
///
/// A snapshot never changes after it is built, so it can be shared behind an
/// [`Arc`] with readers on other threads while the grid rebuilds the next one.
#[derive(Debug, Clone)]
pub struct Snapshot<I> {
    pub(crate) cell_size: f32,
    pub(crate) key_scheme: KeyScheme,
    pub(crate) query_slack: f32,
    pub(crate) cells: FxHashMap<CellKey, Vec<I>>,
    pub(crate) indexed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridStats {
    /// Entities currently in the store.
    pub entities: usize,
    /// Entities placed in buckets by the last rebuild.
    pub indexed: usize,
    /// Non-empty buckets.
    pub cells: usize,
    /// Bucket entries summed over all buckets.
    pub references: usize,
    pub largest_bucket: usize,
}

impl<I: Copy + Eq + Hash> Snapshot<I> {
    pub(crate) fn empty(config: &Config) -> Self {
        Self::with_capacity(config, 0)
    }

    pub(crate) fn with_capacity(config: &Config, cells: usize) -> Self {
        Self {
            cell_size: config.cell_size,
            key_scheme: config.key_scheme,
            query_slack: config.query_slack,
            cells: FxHashMap::with_capacity_and_hasher(cells, Default::default()),
            indexed: 0,
        }
    }

    // Drops every bucket but keeps the map's allocation for the next fill.
    pub(crate) fn reset(&mut self) {
        self.cells.clear();
        self.indexed = 0;
    }

    pub(crate) fn insert(&mut self, id: I, keys: &[CellKey]) {
        for &key in keys {
            self.cells.entry(key).or_default().push(id);
        }
        self.indexed += 1;
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn key_scheme(&self) -> KeyScheme {
        self.key_scheme
    }

    #[inline(always)]
    pub fn key(&self, x: f32, y: f32) -> CellKey {
        self.key_scheme.key(x, y, self.cell_size)
    }

    /// Entities registered under `key`, empty when no bucket exists.
    pub fn bucket(&self, key: CellKey) -> &[I] {
        self.cells.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: CellKey) -> bool {
        self.cells.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = CellKey> + '_ {
        self.cells.keys().copied()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn stats(&self) -> GridStats {
        let mut stats = GridStats {
            entities: self.indexed,
            indexed: self.indexed,
            cells: self.cells.len(),
            ..GridStats::default()
        };
        for bucket in self.cells.values() {
            stats.references += bucket.len();
            stats.largest_bucket = stats.largest_bucket.max(bucket.len());
        }
        stats
    }
}

impl<E: Entity> Grid<E> {
    /// Entities registered under `key` at the last rebuild.
    pub fn bucket(&self, key: CellKey) -> &[E::Id] {
        self.snapshot.bucket(key)
    }
}
