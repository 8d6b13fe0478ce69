use std::path::Path as FilePath;

use crate::{
    graphs::{social_graph::SocialGraph, vertex::Vertex},
    loader::{load_network, LoadError, LoadReport, UserId},
    search::{
        dijkstra::{find_shortest_path, reconstruct_path},
        path::Path,
    },
};

/// A loaded social network that answers "who connects these two people through
/// the most skilled users" questions.
#[derive(Clone, Debug, Default)]
pub struct SocialNetwork {
    graph: SocialGraph<UserId>,
}

impl SocialNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_graph(graph: SocialGraph<UserId>) -> Self {
        SocialNetwork { graph }
    }

    /// Replaces the whole network with the contents of `path`.
    ///
    /// On failure the previously loaded network is kept.
    pub fn load_data(&mut self, path: &FilePath) -> Result<LoadReport, LoadError> {
        let (graph, report) = load_network(path)?;
        self.graph = graph;
        Ok(report)
    }

    pub fn number_of_users(&self) -> usize {
        self.graph.number_of_vertices()
    }

    pub fn user(&self, id: UserId) -> Option<&Vertex<UserId>> {
        self.graph.get(&id)
    }

    pub fn users(&self) -> impl Iterator<Item = &Vertex<UserId>> + '_ {
        self.graph.vertices()
    }

    pub fn graph(&self) -> &SocialGraph<UserId> {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut SocialGraph<UserId> {
        &mut self.graph
    }

    /// Cheapest path from `source` to `target`.
    ///
    /// `None` covers unknown users, `source == target` and unreachable
    /// targets alike.
    pub fn find_shortest_path_between(
        &mut self,
        source: UserId,
        target: UserId,
    ) -> Option<Path<UserId>> {
        find_shortest_path(&mut self.graph, source, target)
            .ok()
            .flatten()
    }

    /// Path to `target` as left behind by the last search. `source` may be any
    /// user on that path, the distance then counts from `source`.
    pub fn path_from(&self, source: UserId, target: UserId) -> Option<Path<UserId>> {
        reconstruct_path(&self.graph, source, target)
    }
}
