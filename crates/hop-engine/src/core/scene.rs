use std::ops::{Index, IndexMut};

/// Ordered entity storage using a flat Vec.
/// Insertion order is preserved and doubles as draw order (back to front).
/// There is no per-entity removal: a scene is cleared and rebuilt wholesale.
#[derive(Debug, Clone)]
pub struct Scene<E> {
    entities: Vec<E>,
}

impl<E> Scene<E> {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(16),
        }
    }

    /// Create a scene with a specific entity capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    /// Append an entity and return its slot index.
    pub fn spawn(&mut self, entity: E) -> usize {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    /// Get a reference to the entity in `slot`.
    pub fn get(&self, slot: usize) -> Option<&E> {
        self.entities.get(slot)
    }

    /// Iterate over all entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut E> {
        self.entities.iter_mut()
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clear all entities.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl<E> Default for Scene<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Index<usize> for Scene<E> {
    type Output = E;

    fn index(&self, slot: usize) -> &E {
        &self.entities[slot]
    }
}

impl<E> IndexMut<usize> for Scene<E> {
    fn index_mut(&mut self, slot: usize) -> &mut E {
        &mut self.entities[slot]
    }
}
