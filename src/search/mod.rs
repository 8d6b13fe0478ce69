use std::fmt::Debug;

use thiserror::Error;

pub mod collections;
pub mod dijkstra;
pub mod path;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError<V: Debug> {
    /// The search was asked to start or end at a vertex that does not exist.
    /// Nothing has been mutated when this is returned.
    #[error("endpoint {0:?} is not part of the network")]
    InvalidEndpoint(V),
}
