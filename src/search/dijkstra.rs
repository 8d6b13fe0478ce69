use tracing::debug;

use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataMap},
        vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
    },
    path::{Path, ShortestPathRequest},
    SearchError,
};
use crate::graphs::{social_graph::SocialGraph, Distance, Network, VertexId, Weight};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// The target was popped and its distance finalized.
    Found,
    /// The queue ran empty before the target was reached.
    Exhausted,
}

/// Single pair Dijkstra over any network that also carries the search state.
///
/// Entering a vertex costs that vertex's weight. The search stops as soon as
/// `target` is finalized. Friends that are not part of the network are
/// skipped.
pub fn dijkstra_one_to_one<V, S, Q>(
    space: &mut S,
    queue: &mut Q,
    source: V,
    target: V,
) -> SearchStatus
where
    V: VertexId,
    S: Network<V> + DijkstraData<V>,
    Q: VertexDistanceQueue<V>,
{
    space.set_distance(&source, 0.0);
    queue.insert(source, 0.0);

    let mut expanded = 0u32;

    while let Some(entry) = queue.pop() {
        let tail = entry.vertex;

        // stale entry, the vertex was finalized with a smaller distance
        if space.visit(&tail) {
            continue;
        }
        expanded += 1;

        if tail == target {
            debug!(?source, ?target, expanded, "target finalized");
            return SearchStatus::Found;
        }

        let distance_tail = space.get_distance(&tail);

        for head in space.friends(&tail) {
            let Some(weight) = space.weight(&head) else {
                continue;
            };
            if space.is_visited(&head) {
                continue;
            }

            let alternative_distance_head = distance_tail + weight;
            if alternative_distance_head < space.get_distance(&head) {
                space.set_distance(&head, alternative_distance_head);
                space.set_predecessor(&head, tail);
                queue.insert(head, alternative_distance_head);
            }
        }
    }

    debug!(?source, ?target, expanded, "queue exhausted");
    SearchStatus::Exhausted
}

/// Finds the cheapest path from `source` to `target`, writing the search state
/// into the vertices of `graph`.
///
/// Fails without touching the graph if either endpoint is unknown. A path from
/// a vertex to itself is never reported. Unreachable targets yield `Ok(None)`.
pub fn find_shortest_path<V: VertexId>(
    graph: &mut SocialGraph<V>,
    source: V,
    target: V,
) -> Result<Option<Path<V>>, SearchError<V>> {
    validate_endpoints(&*graph, source, target)?;
    let Some(request) = ShortestPathRequest::new(source, target) else {
        return Ok(None);
    };

    Ok(shortest_path(graph, &request))
}

/// Same contract as [`find_shortest_path`], but the search state lives in a
/// table owned by this call and `graph` is only read.
pub fn find_shortest_path_isolated<V: VertexId>(
    graph: &SocialGraph<V>,
    source: V,
    target: V,
) -> Result<Option<Path<V>>, SearchError<V>> {
    validate_endpoints(graph, source, target)?;
    let Some(request) = ShortestPathRequest::new(source, target) else {
        return Ok(None);
    };

    let mut search = IsolatedSearch::new(graph);
    Ok(shortest_path(&mut search, &request))
}

/// Rebuilds the path found by the last search over `space`.
///
/// `source` may be any vertex on the predecessor chain of `target`; the
/// distance is the sum of the weights entered after `source`. Returns `None`
/// if either endpoint is unknown, if they are equal, if the predecessor chain
/// of `target` does not lead back to `source`, or if it runs through a vertex
/// that has since been removed.
pub fn reconstruct_path<V, S>(space: &S, source: V, target: V) -> Option<Path<V>>
where
    V: VertexId,
    S: Network<V> + DijkstraData<V>,
{
    if !space.contains(&source) || !space.contains(&target) {
        return None;
    }

    let mut path = space.get_path(source, target)?;
    path.distance = path
        .vertices
        .iter()
        .skip(1)
        .map(|vertex| space.weight(vertex))
        .sum::<Option<Weight>>()?;

    Some(path)
}

fn shortest_path<V, S>(space: &mut S, request: &ShortestPathRequest<V>) -> Option<Path<V>>
where
    V: VertexId,
    S: Network<V> + DijkstraData<V>,
{
    space.clear();
    let mut queue = VertexDistanceQueueBinaryHeap::new();

    match dijkstra_one_to_one(space, &mut queue, request.source(), request.target()) {
        SearchStatus::Found => reconstruct_path(&*space, request.source(), request.target()),
        SearchStatus::Exhausted => None,
    }
}

fn validate_endpoints<V: VertexId>(
    network: &impl Network<V>,
    source: V,
    target: V,
) -> Result<(), SearchError<V>> {
    for endpoint in [source, target] {
        if !network.contains(&endpoint) {
            return Err(SearchError::InvalidEndpoint(endpoint));
        }
    }
    Ok(())
}

/// A read-only network paired with search state that belongs to one search.
pub struct IsolatedSearch<'a, V: VertexId, N: Network<V>> {
    network: &'a N,
    data: DijkstraDataMap<V>,
}

impl<'a, V: VertexId, N: Network<V>> IsolatedSearch<'a, V, N> {
    pub fn new(network: &'a N) -> Self {
        IsolatedSearch {
            network,
            data: DijkstraDataMap::new(),
        }
    }

    pub fn data(&self) -> &DijkstraDataMap<V> {
        &self.data
    }
}

impl<'a, V: VertexId, N: Network<V>> Network<V> for IsolatedSearch<'a, V, N> {
    fn contains(&self, vertex: &V) -> bool {
        self.network.contains(vertex)
    }

    fn weight(&self, vertex: &V) -> Option<Weight> {
        self.network.weight(vertex)
    }

    fn friends(&self, vertex: &V) -> Vec<V> {
        self.network.friends(vertex)
    }
}

impl<'a, V: VertexId, N: Network<V>> DijkstraData<V> for IsolatedSearch<'a, V, N> {
    fn clear(&mut self) {
        self.data.clear();
    }

    fn get_distance(&self, vertex: &V) -> Distance {
        self.data.get_distance(vertex)
    }

    fn set_distance(&mut self, vertex: &V, distance: Distance) {
        self.data.set_distance(vertex, distance);
    }

    fn get_predecessor(&self, vertex: &V) -> Option<V> {
        self.data.get_predecessor(vertex)
    }

    fn set_predecessor(&mut self, vertex: &V, predecessor: V) {
        self.data.set_predecessor(vertex, predecessor);
    }

    fn is_visited(&self, vertex: &V) -> bool {
        self.data.is_visited(vertex)
    }

    fn visit(&mut self, vertex: &V) -> bool {
        self.data.visit(vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        dijkstra_one_to_one, find_shortest_path, find_shortest_path_isolated, reconstruct_path,
        IsolatedSearch, SearchStatus,
    };
    use crate::{
        graphs::social_graph::SocialGraph,
        search::{
            collections::{
                dijkstra_data::DijkstraData,
                vertex_distance_queue::VertexDistanceQueueBinaryHeap,
            },
            SearchError,
        },
    };

    fn diamond() -> SocialGraph<u64> {
        let mut graph = SocialGraph::new();
        graph.insert(1, 1.0, [2, 3]);
        graph.insert(2, 0.5, [4]);
        graph.insert(3, 1.0, [4]);
        graph.insert(4, 0.25, []);
        graph
    }

    #[test]
    fn diamond_prefers_cheaper_branch() {
        let mut graph = diamond();

        let path = find_shortest_path(&mut graph, 1, 4).unwrap().unwrap();
        assert_eq!(path.vertices, vec![1, 2, 4]);
        assert_eq!(path.distance, 0.75);
        assert_eq!(graph.distance(&4), Ok(0.75));
        assert_eq!(graph.predecessor(&4), Ok(Some(2)));
    }

    #[test]
    fn relaxation_sets_friend_distances() {
        let mut graph = diamond();
        let mut queue = VertexDistanceQueueBinaryHeap::new();

        let status = dijkstra_one_to_one(&mut graph, &mut queue, 1, 99);

        assert_eq!(status, SearchStatus::Exhausted);
        assert_eq!(graph.distance(&2), Ok(0.5));
        assert_eq!(graph.distance(&3), Ok(1.0));
        assert_eq!(graph.predecessor(&2), Ok(Some(1)));
        assert_eq!(graph.predecessor(&3), Ok(Some(1)));
        assert!(graph.vertices().all(|vertex| vertex.is_visited()));
    }

    #[test]
    fn stops_when_target_is_finalized() {
        let mut graph = diamond();
        let mut queue = VertexDistanceQueueBinaryHeap::new();

        let status = dijkstra_one_to_one(&mut graph, &mut queue, 1, 2);

        assert_eq!(status, SearchStatus::Found);
        assert!(graph.is_visited(&2));
        assert!(!graph.is_visited(&4));
        assert!(!graph.is_visited(&3));
    }

    #[test]
    fn path_to_self_is_none() {
        let mut graph = diamond();

        assert_eq!(find_shortest_path(&mut graph, 4, 4), Ok(None));
        assert_eq!(find_shortest_path_isolated(&graph, 1, 1), Ok(None));
        assert!(reconstruct_path(&graph, 2, 2).is_none());
    }

    #[test]
    fn unknown_endpoint_is_rejected_without_mutation() {
        let mut graph = diamond();

        assert_eq!(
            find_shortest_path(&mut graph, 1, 42),
            Err(SearchError::InvalidEndpoint(42))
        );
        assert_eq!(
            find_shortest_path(&mut graph, 42, 1),
            Err(SearchError::InvalidEndpoint(42))
        );
        assert!(graph
            .vertices()
            .all(|vertex| vertex.distance() == f64::INFINITY && !vertex.is_visited()));
        assert!(reconstruct_path(&graph, 1, 42).is_none());
    }

    #[test]
    fn unreachable_target() {
        let mut graph = SocialGraph::new();
        graph.insert(10u64, 1.0, []);
        graph.insert(20u64, 1.0, []);

        assert_eq!(find_shortest_path(&mut graph, 10, 20), Ok(None));
        assert_eq!(find_shortest_path_isolated(&graph, 10, 20), Ok(None));
    }

    #[test]
    fn removed_friend_is_skipped() {
        let mut graph = diamond();
        graph.remove(&2);

        let path = find_shortest_path(&mut graph, 1, 4).unwrap().unwrap();
        assert_eq!(path.vertices, vec![1, 3, 4]);
        assert_eq!(path.distance, 1.25);
    }

    #[test]
    fn repeated_searches_agree() {
        let mut graph = diamond();

        let first = find_shortest_path(&mut graph, 1, 4).unwrap();
        let second = find_shortest_path(&mut graph, 1, 4).unwrap();
        assert_eq!(first, second);

        // a search from another source must not leak into the next one
        find_shortest_path(&mut graph, 3, 4).unwrap();
        let third = find_shortest_path(&mut graph, 1, 4).unwrap();
        assert_eq!(first, third);
    }

    #[test]
    fn reconstruct_from_inside_the_chain() {
        let mut graph = diamond();
        find_shortest_path(&mut graph, 1, 4).unwrap();

        let path = reconstruct_path(&graph, 2, 4).unwrap();
        assert_eq!(path.vertices, vec![2, 4]);
        assert_eq!(path.distance, 0.25);

        let path = reconstruct_path(&graph, 1, 4).unwrap();
        assert_eq!(path.distance, 0.75);
    }

    #[test]
    fn reconstruct_through_removed_vertex() {
        let mut graph = diamond();
        find_shortest_path(&mut graph, 1, 4).unwrap();
        graph.remove(&2);

        assert!(reconstruct_path(&graph, 1, 4).is_none());
    }

    #[test]
    fn isolated_search_leaves_graph_untouched() {
        let graph = diamond();

        let path = find_shortest_path_isolated(&graph, 1, 4).unwrap().unwrap();
        assert_eq!(path.vertices, vec![1, 2, 4]);
        assert_eq!(path.distance, 0.75);
        assert!(graph
            .vertices()
            .all(|vertex| vertex.distance() == f64::INFINITY && vertex.predecessor().is_none()));
    }

    #[test]
    fn isolated_search_exposes_its_state() {
        let graph = diamond();
        let mut search: IsolatedSearch<u64, _> = IsolatedSearch::new(&graph);
        let mut queue = VertexDistanceQueueBinaryHeap::new();

        dijkstra_one_to_one(&mut search, &mut queue, 1, 4);

        assert_eq!(search.data().get_distance(&4), 0.75);
        assert_eq!(search.data().number_of_visited(), 3);
        assert_eq!(
            reconstruct_path(&search, 1, 4).map(|path| path.vertices),
            Some(vec![1, 2, 4])
        );
    }
}
