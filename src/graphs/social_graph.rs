use std::collections::hash_map::Entry::{Occupied, Vacant};

use ahash::{HashMap, HashMapExt, HashSet};

use super::{vertex::Vertex, Distance, GraphError, Network, VertexId, Weight};

/// Owns every vertex of the network, keyed by id.
///
/// Vertices live in a slot table so that iteration follows insertion order.
/// Removing a vertex leaves an empty slot behind; the table is compacted once
/// empty slots outnumber live vertices. Friend lists hold plain ids and are
/// never rewritten on removal, so a removed friend simply resolves to nothing.
#[derive(Clone, Debug)]
pub struct SocialGraph<V: VertexId> {
    slots: Vec<Option<Vertex<V>>>,
    index: HashMap<V, usize>,
}

impl<V: VertexId> Default for SocialGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId> SocialGraph<V> {
    pub fn new() -> Self {
        SocialGraph {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates the vertex `id` or overwrites it.
    ///
    /// An overwritten vertex keeps its position in the iteration order but
    /// loses all search state.
    pub fn insert(
        &mut self,
        id: V,
        weight: Weight,
        friends: impl IntoIterator<Item = V>,
    ) -> &mut Vertex<V> {
        let vertex = Vertex::new(id, weight, friends.into_iter().collect());

        let slot = match self.index.entry(id) {
            Occupied(o) => *o.get(),
            Vacant(v) => {
                self.slots.push(None);
                *v.insert(self.slots.len() - 1)
            }
        };

        self.slots[slot].insert(vertex)
    }

    pub fn get(&self, id: &V) -> Option<&Vertex<V>> {
        let slot = *self.index.get(id)?;
        self.slots[slot].as_ref()
    }

    pub fn get_mut(&mut self, id: &V) -> Option<&mut Vertex<V>> {
        let slot = *self.index.get(id)?;
        self.slots[slot].as_mut()
    }

    pub fn contains(&self, id: &V) -> bool {
        self.index.contains_key(id)
    }

    /// Removes `id` and returns it. Other vertices that still list `id` as a
    /// friend are left untouched.
    pub fn remove(&mut self, id: &V) -> Option<Vertex<V>> {
        let slot = self.index.remove(id)?;
        let vertex = self.slots[slot].take();

        if self.slots.len() - self.index.len() > self.index.len() {
            self.compact();
        }

        vertex
    }

    pub fn number_of_vertices(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<V>> + '_ {
        self.slots.iter().flatten()
    }

    pub fn friends(&self, id: &V) -> Result<&HashSet<V>, GraphError<V>> {
        Ok(self.vertex(id)?.friends())
    }

    pub fn distance(&self, id: &V) -> Result<Distance, GraphError<V>> {
        Ok(self.vertex(id)?.distance())
    }

    pub fn set_distance(&mut self, id: &V, distance: Distance) -> Result<(), GraphError<V>> {
        self.vertex_mut(id)?.set_distance(distance);
        Ok(())
    }

    pub fn predecessor(&self, id: &V) -> Result<Option<V>, GraphError<V>> {
        Ok(self.vertex(id)?.predecessor())
    }

    pub fn set_predecessor(
        &mut self,
        id: &V,
        predecessor: Option<V>,
    ) -> Result<(), GraphError<V>> {
        self.vertex_mut(id)?.set_predecessor(predecessor);
        Ok(())
    }

    pub fn weight(&self, id: &V) -> Result<Weight, GraphError<V>> {
        Ok(self.vertex(id)?.weight())
    }

    pub fn set_weight(&mut self, id: &V, weight: Weight) -> Result<(), GraphError<V>> {
        self.vertex_mut(id)?.set_weight(weight);
        Ok(())
    }

    /// Resets distance, predecessor and visited flag of every vertex.
    pub fn reset_search_state(&mut self) {
        self.slots
            .iter_mut()
            .flatten()
            .for_each(Vertex::reset_search_state);
    }

    fn vertex(&self, id: &V) -> Result<&Vertex<V>, GraphError<V>> {
        self.get(id).ok_or(GraphError::NotFound(*id))
    }

    fn vertex_mut(&mut self, id: &V) -> Result<&mut Vertex<V>, GraphError<V>> {
        self.get_mut(id).ok_or(GraphError::NotFound(*id))
    }

    fn compact(&mut self) {
        self.slots.retain(Option::is_some);
        self.index.clear();
        for (slot, vertex) in self.slots.iter().flatten().enumerate() {
            self.index.insert(vertex.id(), slot);
        }
    }
}

impl<V: VertexId> Network<V> for SocialGraph<V> {
    fn contains(&self, vertex: &V) -> bool {
        self.contains(vertex)
    }

    fn weight(&self, vertex: &V) -> Option<Weight> {
        self.get(vertex).map(Vertex::weight)
    }

    fn friends(&self, vertex: &V) -> Vec<V> {
        self.get(vertex)
            .map(|vertex| vertex.friends().iter().copied().collect())
            .unwrap_or_default()
    }
}
