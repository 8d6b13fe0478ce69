use std::fmt::{self, Display};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::graphs::Distance;

/// Represents a request for finding a shortest path in a graph.
///
/// A request from a vertex to itself does not describe a route and cannot be
/// constructed.
#[derive(Clone, Copy, Debug)]
pub struct ShortestPathRequest<V> {
    source: V,
    target: V,
}

impl<V: Copy + PartialEq> ShortestPathRequest<V> {
    pub fn new(source: V, target: V) -> Option<ShortestPathRequest<V>> {
        if source == target {
            return None;
        }

        Some(ShortestPathRequest { source, target })
    }

    pub fn source(&self) -> V {
        self.source
    }

    pub fn target(&self) -> V {
        self.target
    }
}

/// Represents a path in a graph.
///
/// `vertices` runs from source to target and `distance` is the sum of the
/// weights of every vertex entered along the way, so the source's own weight
/// is not included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path<V> {
    pub vertices: Vec<V>,
    pub distance: Distance,
}

impl<V: Display> Display for Path<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path [{}]", self.vertices.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::{Path, ShortestPathRequest};

    #[test]
    fn request_to_self_is_rejected() {
        assert!(ShortestPathRequest::new(4u64, 4).is_none());

        let request = ShortestPathRequest::new(1u64, 4).unwrap();
        assert_eq!(request.source(), 1);
        assert_eq!(request.target(), 4);
    }

    #[test]
    fn display() {
        let path = Path {
            vertices: vec![1u64, 2, 4],
            distance: 0.75,
        };
        assert_eq!(path.to_string(), "Path [1 2 4]");
    }
}
