//! Adjacency-list graph and its read capabilities.

use std::collections::HashMap;

use tracing::{info, instrument};
use trellis_core::{
    DataDigraph, DataGraph, Digraph, Directedness, Edge, Graph, GraphError, GraphProperties,
    GraphSource, GraphSpec, LabeledDigraph, LabeledGraph, Mutability, Payload, Result,
    TraversalExt, Vertex, WeightedDigraph, WeightedGraph,
};

use crate::links::{EdgeId, Link, Links};

/// In-memory graph storing a link list per vertex.
///
/// One type serves every combination of [`GraphProperties`]; the declared
/// properties are enforced when edges are inserted. Undirected graphs also
/// answer the [`Digraph`] queries as a symmetric digraph, where every edge is
/// an arc in both directions.
///
/// # Examples
/// ```
/// use trellis_core::{Digraph, Edge, Graph, WeightedGraph, spec};
/// use trellis_providers_adjacency::AdjacencyGraph;
///
/// let graph: AdjacencyGraph<u32> = AdjacencyGraph::from_spec(
///     spec().directed().weighted().using(vec![Edge::weighted(1, 2, 3.5)]),
/// )?;
/// assert!(graph.has_weighted_edge(&Edge::weighted(1, 2, 3.5)));
/// assert!(!graph.has_weighted_edge(&Edge::weighted(2, 1, 3.5)));
/// assert_eq!(graph.out_degree_of(&1), Some(1));
/// assert_eq!(graph.degree_of(&9), None);
/// # Ok::<(), trellis_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<V, D = ()> {
    pub(crate) properties: GraphProperties,
    pub(crate) vertices: HashMap<V, Links<V, D>>,
    pub(crate) size: usize,
    pub(crate) next_rank: u64,
    pub(crate) next_id: EdgeId,
}

impl<V, D> AdjacencyGraph<V, D>
where
    V: Vertex,
    D: Clone + PartialEq,
{
    /// Creates an empty graph with the given properties.
    ///
    /// # Errors
    /// Returns [`GraphError::UnsupportedProperty`] for persistent graphs.
    pub fn new(properties: GraphProperties) -> Result<Self> {
        if properties.mutability() == Mutability::Persistent {
            return Err(GraphError::UnsupportedProperty {
                property: "persistent",
            });
        }
        Ok(Self {
            properties,
            vertices: HashMap::new(),
            size: 0,
            next_rank: 0,
            next_id: 0,
        })
    }

    /// Builds a graph from `spec`, draining its source once.
    ///
    /// Every vertex the source enumerates is registered, so isolated source
    /// vertices survive. Immutable graphs are seeded here and reject every
    /// later mutation.
    ///
    /// # Errors
    /// Returns [`GraphError::UnsupportedProperty`] for persistent graphs, or
    /// the first structural violation found among the source's edges.
    #[instrument(
        name = "adjacency.from_spec",
        err,
        skip(spec),
        fields(
            directed = spec.properties().directedness().is_directed(),
            edge_kind = %spec.properties().edge_kind(),
            multiplicity = ?spec.properties().multiplicity(),
            mutability = ?spec.properties().mutability(),
        ),
    )]
    pub fn from_spec<S>(spec: GraphSpec<S>) -> Result<Self>
    where
        S: GraphSource<V, D>,
    {
        let (properties, source) = spec.into_parts();
        let mut graph = Self::new(properties)?;
        for vertex in source.vertices() {
            graph.register_vertex(vertex);
        }
        let edges: Vec<_> = source.edges().collect();
        graph.insert_batch(edges)?;
        info!(order = graph.order(), size = graph.size, "adjacency graph created");
        Ok(graph)
    }
}

impl<V, D> AdjacencyGraph<V, D>
where
    V: Vertex,
{
    /// Returns the properties the graph enforces.
    #[must_use]
    #[rustfmt::skip]
    pub const fn properties(&self) -> GraphProperties { self.properties }

    pub(crate) const fn is_directed(&self) -> bool {
        self.properties.directedness().is_directed()
    }

    pub(crate) fn out_links<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a Link<V, D>> + 'a {
        self.vertices
            .get(vertex)
            .into_iter()
            .flat_map(|links| links.out.iter())
    }

    /// Links carrying arcs into `vertex`: `inbound` when directed, `out` on
    /// the symmetric undirected view.
    fn in_links<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a Link<V, D>> + 'a {
        let directed = self.is_directed();
        self.vertices.get(vertex).into_iter().flat_map(move |links| {
            if directed {
                links.inbound.iter()
            } else {
                links.out.iter()
            }
        })
    }

    /// Payloads of the stored edges from `u` to `v`.
    pub(crate) fn payloads_between<'a>(
        &'a self,
        u: &V,
        v: &'a V,
    ) -> impl Iterator<Item = &'a Payload<D>> + 'a {
        self.out_links(u)
            .filter(move |link| link.peer == *v)
            .map(|link| &link.payload)
    }

    fn rank_of(&self, vertex: &V) -> Option<u64> {
        self.vertices.get(vertex).map(|links| links.rank)
    }

    /// Whether `owner`'s copy of an undirected link is the one to report.
    fn reports(&self, owner: &V, links: &Links<V, D>, link: &Link<V, D>) -> bool {
        self.is_directed()
            || link.peer == *owner
            || self.rank_of(&link.peer).is_some_and(|peer| links.rank < peer)
    }
}

impl<V: Vertex, D: Clone> GraphSource<V, D> for AdjacencyGraph<V, D> {
    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.vertices.keys().cloned()
    }

    fn edges(&self) -> impl Iterator<Item = Edge<V, D>> + '_ {
        self.vertices.iter().flat_map(move |(owner, links)| {
            links
                .out
                .iter()
                .filter(move |link| self.reports(owner, links, link))
                .map(move |link| link.leaving(owner))
        })
    }

    fn order(&self) -> usize {
        self.vertices.len()
    }

    fn size(&self) -> usize {
        self.size
    }
}

impl<V: Vertex, D: Clone> Graph<V, D> for AdjacencyGraph<V, D> {
    fn directedness(&self) -> Directedness {
        self.properties.directedness()
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    fn has_edge(&self, edge: &Edge<V, D>) -> bool {
        let (u, v) = edge.both();
        self.payloads_between(u, v).next().is_some()
    }

    fn degree_of(&self, vertex: &V) -> Option<usize> {
        let links = self.vertices.get(vertex)?;
        Some(if self.is_directed() {
            links.out.len() + links.inbound.len()
        } else {
            links.out.len() + links.loops(vertex)
        })
    }

    fn incident_to(&self, vertex: &V) -> impl Iterator<Item = Edge<V, D>> + '_ {
        let owner = vertex.clone();
        self.vertices.get(vertex).into_iter().flat_map(move |links| {
            let leaving = links.out.iter().map({
                let owner = owner.clone();
                move |link| link.leaving(&owner)
            });
            let entering = links
                .inbound
                .iter()
                .filter({
                    let owner = owner.clone();
                    move |link| link.peer != owner
                })
                .map({
                    let owner = owner.clone();
                    move |link| link.entering(&owner)
                });
            leaving.chain(entering)
        })
    }

    fn adjacent_to(&self, vertex: &V) -> impl Iterator<Item = V> + '_ {
        self.vertices
            .get(vertex)
            .into_iter()
            .flat_map(|links| links.out.iter().chain(links.inbound.iter()))
            .map(|link| link.peer.clone())
            .distinct()
    }
}

impl<V: Vertex, D: Clone> Digraph<V, D> for AdjacencyGraph<V, D> {
    type Transpose = Self;

    fn arcs(&self) -> impl Iterator<Item = Edge<V, D>> + '_ {
        self.vertices
            .iter()
            .flat_map(|(owner, links)| links.out.iter().map(move |link| link.leaving(owner)))
    }

    fn arcs_from(&self, vertex: &V) -> impl Iterator<Item = Edge<V, D>> + '_ {
        let owner = vertex.clone();
        self.out_links(vertex)
            .map(move |link| link.leaving(&owner))
    }

    fn arcs_to(&self, vertex: &V) -> impl Iterator<Item = Edge<V, D>> + '_ {
        let owner = vertex.clone();
        self.in_links(vertex)
            .map(move |link| link.entering(&owner))
    }

    fn successors_of(&self, vertex: &V) -> impl Iterator<Item = V> + '_ {
        self.out_links(vertex)
            .map(|link| link.peer.clone())
            .distinct()
    }

    fn predecessors_of(&self, vertex: &V) -> impl Iterator<Item = V> + '_ {
        self.in_links(vertex)
            .map(|link| link.peer.clone())
            .distinct()
    }

    fn in_degree_of(&self, vertex: &V) -> Option<usize> {
        self.has_vertex(vertex)
            .then(|| self.in_links(vertex).count())
    }

    fn out_degree_of(&self, vertex: &V) -> Option<usize> {
        self.vertices.get(vertex).map(|links| links.out.len())
    }

    fn has_arc(&self, arc: &Edge<V, D>) -> bool {
        self.has_edge(arc)
    }

    fn transpose(&self) -> Self {
        let mut transposed = self.clone();
        if self.is_directed() {
            transposed
                .vertices
                .values_mut()
                .for_each(Links::swap_directions);
        }
        transposed
    }
}

impl<V: Vertex, D: Clone> AdjacencyGraph<V, D> {
    fn has_payload(&self, edge: &Edge<V, D>, matches: impl Fn(&Payload<D>) -> bool) -> bool {
        let (u, v) = edge.both();
        self.payloads_between(u, v).any(matches)
    }
}

impl<V: Vertex, D: Clone> WeightedGraph<V, D> for AdjacencyGraph<V, D> {
    fn has_weighted_edge(&self, edge: &Edge<V, D>) -> bool {
        edge.weight().is_some_and(|weight| {
            self.has_payload(edge, |payload| {
                matches!(payload, Payload::Weighted(stored) if *stored == weight)
            })
        })
    }
}

impl<V: Vertex, D: Clone> LabeledGraph<V, D> for AdjacencyGraph<V, D> {
    fn has_labeled_edge(&self, edge: &Edge<V, D>) -> bool {
        edge.label().is_some_and(|label| {
            self.has_payload(edge, |payload| {
                matches!(payload, Payload::Labeled(stored) if stored == label)
            })
        })
    }
}

impl<V: Vertex, D: Clone + PartialEq> DataGraph<V, D> for AdjacencyGraph<V, D> {
    fn has_data_edge(&self, edge: &Edge<V, D>) -> bool {
        edge.data().is_some_and(|data| {
            self.has_payload(edge, |payload| {
                matches!(payload, Payload::Data(stored) if stored == data)
            })
        })
    }
}

impl<V: Vertex, D: Clone> WeightedDigraph<V, D> for AdjacencyGraph<V, D> {
    fn has_weighted_arc(&self, arc: &Edge<V, D>) -> bool {
        self.has_weighted_edge(arc)
    }
}

impl<V: Vertex, D: Clone> LabeledDigraph<V, D> for AdjacencyGraph<V, D> {
    fn has_labeled_arc(&self, arc: &Edge<V, D>) -> bool {
        self.has_labeled_edge(arc)
    }
}

impl<V: Vertex, D: Clone + PartialEq> DataDigraph<V, D> for AdjacencyGraph<V, D> {
    fn has_data_arc(&self, arc: &Edge<V, D>) -> bool {
        self.has_data_edge(arc)
    }
}
