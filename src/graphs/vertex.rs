use std::fmt::{self, Display};

use ahash::HashSet;
use itertools::Itertools;

use super::{Distance, VertexId, Weight};

/// A member of the network together with the state of the search currently
/// running over it.
#[derive(Clone, Debug)]
pub struct Vertex<V: VertexId> {
    id: V,
    weight: Weight,
    distance: Distance,
    predecessor: Option<V>,
    friends: HashSet<V>,
    visited: bool,
}

impl<V: VertexId> Vertex<V> {
    pub fn new(id: V, weight: Weight, friends: HashSet<V>) -> Self {
        debug_assert!(
            weight >= 0.0 && weight.is_finite(),
            "weights must be finite and non-negative"
        );

        Vertex {
            id,
            weight,
            distance: Distance::INFINITY,
            predecessor: None,
            friends,
            visited: false,
        }
    }

    pub fn id(&self) -> V {
        self.id
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn set_distance(&mut self, distance: Distance) {
        self.distance = distance;
    }

    pub fn predecessor(&self) -> Option<V> {
        self.predecessor
    }

    pub fn set_predecessor(&mut self, predecessor: Option<V>) {
        self.predecessor = predecessor;
    }

    pub fn friends(&self) -> &HashSet<V> {
        &self.friends
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// Forgets everything a previous search wrote into this vertex.
    pub fn reset_search_state(&mut self) {
        self.distance = Distance::INFINITY;
        self.predecessor = None;
        self.visited = false;
    }
}

impl<V: VertexId + Display> Display for Vertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let predecessor = self
            .predecessor
            .map_or_else(|| "none".to_string(), |predecessor| predecessor.to_string());

        write!(
            f,
            "User [id={}, weight={}, distance={}, predecessor={}, friends=[{}], visited={}]",
            self.id,
            self.weight,
            self.distance,
            predecessor,
            self.friends.iter().join(", "),
            self.visited
        )
    }
}

#[cfg(test)]
mod tests {
    use ahash::{HashSet, HashSetExt};

    use super::Vertex;

    #[test]
    fn new_vertex_has_no_search_state() {
        let vertex = Vertex::new(1u64, 0.5, HashSet::new());

        assert_eq!(vertex.distance(), f64::INFINITY);
        assert_eq!(vertex.predecessor(), None);
        assert!(!vertex.is_visited());
    }

    #[test]
    fn display_lists_fields() {
        let mut vertex = Vertex::new(7u64, 0.25, HashSet::from_iter([3]));
        vertex.set_predecessor(Some(3));

        assert_eq!(
            vertex.to_string(),
            "User [id=7, weight=0.25, distance=inf, predecessor=3, friends=[3], visited=false]"
        );
    }
}
