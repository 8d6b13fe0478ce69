use std::{fmt::Debug, hash::Hash};

use thiserror::Error;

pub mod social_graph;
pub mod vertex;

pub type Weight = f64;
pub type Distance = f64;

/// Any identifier that can key a vertex.
pub trait VertexId: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> VertexId for T {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<V: Debug> {
    #[error("vertex {0:?} not found")]
    NotFound(V),
}

/// Read-only view of the network topology.
///
/// The cost of entering a vertex is a property of the vertex itself, so there is
/// no separate edge weight table.
pub trait Network<V: VertexId> {
    fn contains(&self, vertex: &V) -> bool;

    /// Cost of entering `vertex` from any of its neighbors, or `None` if the
    /// vertex does not exist.
    fn weight(&self, vertex: &V) -> Option<Weight>;

    /// Owned copy of the friends of `vertex`. Empty for unknown vertices.
    fn friends(&self, vertex: &V) -> Vec<V>;
}
