use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};

use crate::{
    graphs::{social_graph::SocialGraph, vertex::Vertex, Distance, VertexId},
    search::path::Path,
};

/// Trait for handling data access in Dijkstra's algorithm.
///
/// Unknown vertices read as unreached: infinite distance, no predecessor, not
/// visited.
pub trait DijkstraData<V: VertexId> {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Retrieves the distance to a given vertex.
    fn get_distance(&self, vertex: &V) -> Distance;

    /// Sets the distance to a given vertex.
    fn set_distance(&mut self, vertex: &V, distance: Distance);

    /// Retrieves the predecessor of a given vertex, if any.
    fn get_predecessor(&self, vertex: &V) -> Option<V>;

    /// Sets the predecessor for a given vertex.
    fn set_predecessor(&mut self, vertex: &V, predecessor: V);

    fn is_visited(&self, vertex: &V) -> bool;

    /// Marks `vertex` as finalized and returns whether it already was.
    fn visit(&mut self, vertex: &V) -> bool;

    /// Constructs the path from `source` to `target` by walking predecessors
    /// back from `target`. The distance is measured from `source`, which need
    /// not be the source of the search that produced the predecessors.
    ///
    /// Returns `None` if the walk ends before reaching `source`, if it runs in
    /// a cycle, or if `source == target`.
    fn get_path(&self, source: V, target: V) -> Option<Path<V>> {
        if source == target {
            return None;
        }

        let mut vertices = vec![target];
        let mut seen = HashSet::new();
        seen.insert(target);

        let mut current = target;
        while current != source {
            current = self.get_predecessor(&current)?;
            if !seen.insert(current) {
                return None;
            }
            vertices.push(current);
        }

        // Reverse the path to start from the source vertex.
        vertices.reverse();

        Some(Path {
            vertices,
            distance: self.get_distance(&target) - self.get_distance(&source),
        })
    }
}

/// The search state stored directly on the vertices of the graph.
impl<V: VertexId> DijkstraData<V> for SocialGraph<V> {
    fn clear(&mut self) {
        self.reset_search_state();
    }

    fn get_distance(&self, vertex: &V) -> Distance {
        self.get(vertex)
            .map_or(Distance::INFINITY, Vertex::distance)
    }

    fn set_distance(&mut self, vertex: &V, distance: Distance) {
        if let Some(vertex) = self.get_mut(vertex) {
            vertex.set_distance(distance);
        }
    }

    fn get_predecessor(&self, vertex: &V) -> Option<V> {
        self.get(vertex).and_then(Vertex::predecessor)
    }

    fn set_predecessor(&mut self, vertex: &V, predecessor: V) {
        if let Some(vertex) = self.get_mut(vertex) {
            vertex.set_predecessor(Some(predecessor));
        }
    }

    fn is_visited(&self, vertex: &V) -> bool {
        self.get(vertex).map_or(false, Vertex::is_visited)
    }

    fn visit(&mut self, vertex: &V) -> bool {
        match self.get_mut(vertex) {
            Some(vertex) => {
                let was_visited = vertex.is_visited();
                vertex.set_visited(true);
                was_visited
            }
            // nothing to expand
            None => true,
        }
    }
}

/// Search state kept apart from the graph, so the graph itself can stay
/// shared and untouched.
#[derive(Clone, Debug)]
pub struct DijkstraDataMap<V: VertexId> {
    predecessors: HashMap<V, V>,
    distances: HashMap<V, Distance>,
    visited: HashSet<V>,
}

impl<V: VertexId> Default for DijkstraDataMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId> DijkstraDataMap<V> {
    pub fn new() -> Self {
        DijkstraDataMap {
            predecessors: HashMap::new(),
            distances: HashMap::new(),
            visited: HashSet::new(),
        }
    }

    pub fn number_of_visited(&self) -> usize {
        self.visited.len()
    }
}

impl<V: VertexId> DijkstraData<V> for DijkstraDataMap<V> {
    fn clear(&mut self) {
        self.predecessors.clear();
        self.distances.clear();
        self.visited.clear();
    }

    fn get_distance(&self, vertex: &V) -> Distance {
        *self.distances.get(vertex).unwrap_or(&Distance::INFINITY)
    }

    fn set_distance(&mut self, vertex: &V, distance: Distance) {
        self.distances.insert(*vertex, distance);
    }

    fn get_predecessor(&self, vertex: &V) -> Option<V> {
        self.predecessors.get(vertex).copied()
    }

    fn set_predecessor(&mut self, vertex: &V, predecessor: V) {
        self.predecessors.insert(*vertex, predecessor);
    }

    fn is_visited(&self, vertex: &V) -> bool {
        self.visited.contains(vertex)
    }

    fn visit(&mut self, vertex: &V) -> bool {
        !self.visited.insert(*vertex)
    }
}
