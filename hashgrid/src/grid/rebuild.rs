use super::*;
use super::assign::footprint_keys;

impl<E: Entity> Grid<E> {
    /// Recomputes every bucket from the entities currently in the store.
    ///
    /// The previous snapshot is discarded, not diffed. When no one else holds it,
    /// its storage is cleared and refilled in place; otherwise a new snapshot is
    /// built and swapped in, leaving outstanding holders on the old state.
    pub fn rebuild(&mut self) {
        let reused = match Arc::get_mut(&mut self.snapshot) {
            Some(snapshot) => {
                snapshot.reset();
                Self::fill(snapshot, &self.store, &self.config);
                true
            }
            None => {
                let mut snapshot =
                    Snapshot::with_capacity(&self.config, self.snapshot.cell_count());
                Self::fill(&mut snapshot, &self.store, &self.config);
                self.snapshot = Arc::new(snapshot);
                false
            }
        };
        tracing::debug!(
            "rebuilt grid: {} entities across {} cells (reused storage: {})",
            self.snapshot.indexed,
            self.snapshot.cell_count(),
            reused
        );
    }

    fn fill(snapshot: &mut Snapshot<E::Id>, store: &EntityStore<E>, config: &Config) {
        for entity in store.values() {
            let keys = footprint_keys(
                entity.position(),
                entity.size(),
                config.padding_factor,
                config.cell_size,
                config.key_scheme,
            );
            snapshot.insert(entity.id(), &keys);
        }
    }
}
