use super::*;

pub(crate) struct EntityStore<E: Entity> {
    entities: FxHashMap<E::Id, E>,
}

impl<E: Entity> EntityStore<E> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub(crate) fn insert(&mut self, entity: E) -> E::Id {
        let id = entity.id();
        self.entities.insert(id, entity);
        id
    }

    pub(crate) fn get(&self, id: E::Id) -> Option<&E> {
        self.entities.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: E::Id) -> Option<&mut E> {
        self.entities.get_mut(&id)
    }

    pub(crate) fn remove(&mut self, id: E::Id) -> Option<E> {
        self.entities.remove(&id)
    }

    pub(crate) fn contains(&self, id: E::Id) -> bool {
        self.entities.contains_key(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entities.len()
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &E> + '_ {
        self.entities.values()
    }
}

fn validate_entity<E: Entity>(entity: &E) -> Result<(), InvalidInput> {
    let position = entity.position();
    if !position.is_finite() {
        return Err(InvalidInput::NonFinitePosition {
            x: position.x,
            y: position.y,
        });
    }
    let size = entity.size();
    if !(size.is_finite() && size >= 0.0) {
        return Err(InvalidInput::InvalidSize { size });
    }
    Ok(())
}

impl<E: Entity> Grid<E> {
    /// Stores `entity` under its id, replacing any entity already stored there.
    ///
    /// The entity stays invisible to queries until the next [`Grid::rebuild`].
    pub fn register(&mut self, entity: E) -> GridResult<E::Id> {
        if let Err(err) = validate_entity(&entity) {
            tracing::warn!("rejected entity {:?}: {}", entity.id(), err);
            return Err(err.into());
        }
        let id = self.store.insert(entity);
        tracing::trace!("registered entity {:?}", id);
        Ok(id)
    }

    pub fn get(&self, id: E::Id) -> Option<&E> {
        self.store.get(id)
    }

    /// Mutable access for moving or resizing an entity between rebuilds.
    pub fn get_mut(&mut self, id: E::Id) -> Option<&mut E> {
        self.store.get_mut(id)
    }

    /// Drops the entity from the store. Buckets keep referring to it until the
    /// next rebuild.
    pub fn remove(&mut self, id: E::Id) -> Option<E> {
        let removed = self.store.remove(id);
        if removed.is_some() {
            tracing::trace!("removed entity {:?}", id);
        }
        removed
    }

    pub fn contains(&self, id: E::Id) -> bool {
        self.store.contains(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    /// Stored entities in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.store.values()
    }
}
