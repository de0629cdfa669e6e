//! Uniform hash grid for area-of-interest queries.
//!
//! Entities live in a store owned by the [`Grid`]. Cell membership is only computed by
//! [`Grid::rebuild`], which replaces the current [`Snapshot`] wholesale. Queries always
//! read the latest snapshot, so entities registered, moved or removed since the last
//! rebuild are seen at their old state until the next one.

mod assign;
mod config;
mod entity;
mod key;
mod query;
mod rebuild;
mod snapshot;
mod store;

pub use assign::Footprint;
pub use config::{Config, KeyScheme};
pub use entity::{Body, Entity};
pub use key::{key, wide_key, CellKey};
pub use snapshot::{GridStats, Snapshot};

use crate::error::{GridResult, InvalidInput};
use common::vector::Vector;
use fxhash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use std::hash::Hash;
use std::sync::Arc;
use store::EntityStore;

pub struct Grid<E: Entity> {
    config: Config,
    store: EntityStore<E>,
    snapshot: Arc<Snapshot<E::Id>>,
}

impl<E: Entity> Grid<E> {
    /// Creates a grid with the default [`Config`] and the given cell size.
    pub fn new(cell_size: f32) -> GridResult<Self> {
        Self::new_with_config(Config::with_cell_size(cell_size))
    }

    pub fn new_with_config(config: Config) -> GridResult<Self> {
        config.validate()?;
        Ok(Self {
            store: EntityStore::with_capacity(config.pool_size),
            snapshot: Arc::new(Snapshot::empty(&config)),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cell_size(&self) -> f32 {
        self.config.cell_size
    }

    /// Cell key of `(x, y)` under this grid's cell size and key scheme.
    ///
    /// With the default [`KeyScheme::Packed16`] this is bit-for-bit equal to
    /// [`key`]`(x, y, self.cell_size())`.
    #[inline(always)]
    pub fn key(&self, x: f32, y: f32) -> CellKey {
        self.config
            .key_scheme
            .key(x, y, self.config.cell_size)
    }

    /// The snapshot produced by the most recent rebuild.
    ///
    /// Holders keep reading that state even after the grid is rebuilt again.
    pub fn snapshot(&self) -> Arc<Snapshot<E::Id>> {
        Arc::clone(&self.snapshot)
    }

    pub fn stats(&self) -> GridStats {
        GridStats {
            entities: self.store.len(),
            ..self.snapshot.stats()
        }
    }
}
