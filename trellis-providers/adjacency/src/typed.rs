//! Property-typed views of an [`AdjacencyGraph`].
//!
//! [`AdjacencyGraph`] enforces its declared properties when edges arrive.
//! The wrappers here move two of those properties into the type, so generic
//! code can bound on them: [`Simple`] implements [`SimpleGraph`] and
//! [`Frozen`] implements no mutator at all.

use std::ops::Deref;

use trellis_core::{
    ArcSetMutator, DataArcSetMutator, DataDigraph, DataEdgeSetMutator, DataGraph, Digraph,
    Directedness, Edge, EdgeSetMutator, Graph, GraphError, GraphProperties, GraphSource,
    GraphSpec, LabeledArcSetMutator, LabeledDigraph, LabeledEdgeSetMutator, LabeledGraph,
    Multiplicity, Mutability, Result, SimpleGraph, Vertex, VertexSetMutator,
    WeightedArcSetMutator, WeightedDigraph, WeightedEdgeSetMutator, WeightedGraph,
};

use crate::graph::AdjacencyGraph;

/// A graph whose type guarantees no loops and no parallel edges.
///
/// Built by [`AdjacencyGraph::from_simple_spec`]. Mutators stay available and
/// keep rejecting loops and parallel edges.
///
/// # Examples
/// ```
/// use trellis_core::{Edge, SimpleGraph, spec};
/// use trellis_providers_adjacency::{AdjacencyGraph, Simple};
///
/// fn max_degree<G: SimpleGraph<u8>>(graph: &G) -> usize {
///     graph
///         .vertices()
///         .filter_map(|vertex| graph.degree_of(&vertex))
///         .max()
///         .unwrap_or(0)
/// }
///
/// let graph: Simple<AdjacencyGraph<u8>> = AdjacencyGraph::from_simple_spec(
///     spec().using(vec![Edge::new(1_u8, 2), Edge::new(2, 3)]),
/// )?;
/// assert_eq!(max_degree(&graph), 2);
/// # Ok::<(), trellis_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Simple<G>(G);

/// A graph whose type offers no mutators.
///
/// Built by [`AdjacencyGraph::freeze`] or [`AdjacencyGraph::from_frozen_spec`].
/// The wrapped graph is marked [`Mutability::Immutable`], so it stays frozen
/// after [`Frozen::into_inner`].
#[derive(Clone, Debug)]
pub struct Frozen<G>(G);

impl<G> Simple<G> {
    /// Returns the wrapped graph.
    #[must_use]
    pub fn into_inner(self) -> G {
        self.0
    }
}

impl<G> Frozen<G> {
    /// Returns the wrapped graph.
    #[must_use]
    pub fn into_inner(self) -> G {
        self.0
    }
}

impl<G> Deref for Simple<G> {
    type Target = G;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<G> Deref for Frozen<G> {
    type Target = G;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<V, D> AdjacencyGraph<V, D>
where
    V: Vertex,
    D: Clone + PartialEq,
{
    /// Builds a graph from a spec declaring [`Multiplicity::Simple`].
    ///
    /// # Errors
    /// Returns [`GraphError::UnsupportedProperty`] when the spec admits loops
    /// or parallel edges, otherwise whatever [`AdjacencyGraph::from_spec`]
    /// returns.
    pub fn from_simple_spec<S>(spec: GraphSpec<S>) -> Result<Simple<Self>>
    where
        S: GraphSource<V, D>,
    {
        let property = match spec.properties().multiplicity() {
            Multiplicity::Simple => return Self::from_spec(spec).map(Simple),
            Multiplicity::Loops => "loops",
            Multiplicity::Multigraph => "multigraph",
            Multiplicity::Pseudograph => "pseudograph",
        };
        Err(GraphError::UnsupportedProperty { property })
    }

    /// Builds a graph from `spec` and freezes it.
    ///
    /// # Errors
    /// Returns whatever [`AdjacencyGraph::from_spec`] returns.
    pub fn from_frozen_spec<S>(spec: GraphSpec<S>) -> Result<Frozen<Self>>
    where
        S: GraphSource<V, D>,
    {
        Self::from_spec(spec).map(Self::freeze)
    }

    /// Marks the graph immutable and hides its mutators.
    #[must_use]
    pub fn freeze(mut self) -> Frozen<Self> {
        let properties = self.properties;
        self.properties = GraphProperties::new(
            properties.directedness(),
            properties.edge_kind(),
            properties.multiplicity(),
            Mutability::Immutable,
        );
        Frozen(self)
    }
}

macro_rules! delegate_reads {
    ($($Wrapper:ident),+ $(,)?) => {
        $(
            impl<V: Vertex, D: Clone> GraphSource<V, D> for $Wrapper<AdjacencyGraph<V, D>> {
                fn vertices(&self) -> impl Iterator<Item = V> + '_ {
                    self.0.vertices()
                }

                fn edges(&self) -> impl Iterator<Item = Edge<V, D>> + '_ {
                    self.0.edges()
                }

                fn order(&self) -> usize {
                    self.0.order()
                }

                fn size(&self) -> usize {
                    self.0.size()
                }
            }

            impl<V: Vertex, D: Clone> Graph<V, D> for $Wrapper<AdjacencyGraph<V, D>> {
                fn directedness(&self) -> Directedness {
                    self.0.directedness()
                }

                fn has_vertex(&self, vertex: &V) -> bool {
                    self.0.has_vertex(vertex)
                }

                fn has_edge(&self, edge: &Edge<V, D>) -> bool {
                    self.0.has_edge(edge)
                }

                fn degree_of(&self, vertex: &V) -> Option<usize> {
                    self.0.degree_of(vertex)
                }

                fn incident_to(&self, vertex: &V) -> impl Iterator<Item = Edge<V, D>> + '_ {
                    self.0.incident_to(vertex)
                }

                fn adjacent_to(&self, vertex: &V) -> impl Iterator<Item = V> + '_ {
                    self.0.adjacent_to(vertex)
                }
            }

            impl<V: Vertex, D: Clone> Digraph<V, D> for $Wrapper<AdjacencyGraph<V, D>> {
                type Transpose = Self;

                fn arcs(&self) -> impl Iterator<Item = Edge<V, D>> + '_ {
                    self.0.arcs()
                }

                fn arcs_from(&self, vertex: &V) -> impl Iterator<Item = Edge<V, D>> + '_ {
                    self.0.arcs_from(vertex)
                }

                fn arcs_to(&self, vertex: &V) -> impl Iterator<Item = Edge<V, D>> + '_ {
                    self.0.arcs_to(vertex)
                }

                fn successors_of(&self, vertex: &V) -> impl Iterator<Item = V> + '_ {
                    self.0.successors_of(vertex)
                }

                fn predecessors_of(&self, vertex: &V) -> impl Iterator<Item = V> + '_ {
                    self.0.predecessors_of(vertex)
                }

                fn in_degree_of(&self, vertex: &V) -> Option<usize> {
                    self.0.in_degree_of(vertex)
                }

                fn out_degree_of(&self, vertex: &V) -> Option<usize> {
                    self.0.out_degree_of(vertex)
                }

                fn has_arc(&self, arc: &Edge<V, D>) -> bool {
                    self.0.has_arc(arc)
                }

                fn transpose(&self) -> Self {
                    $Wrapper(self.0.transpose())
                }
            }

            impl<V: Vertex, D: Clone> WeightedGraph<V, D> for $Wrapper<AdjacencyGraph<V, D>> {
                fn has_weighted_edge(&self, edge: &Edge<V, D>) -> bool {
                    self.0.has_weighted_edge(edge)
                }
            }

            impl<V: Vertex, D: Clone> LabeledGraph<V, D> for $Wrapper<AdjacencyGraph<V, D>> {
                fn has_labeled_edge(&self, edge: &Edge<V, D>) -> bool {
                    self.0.has_labeled_edge(edge)
                }
            }

            impl<V: Vertex, D: Clone + PartialEq> DataGraph<V, D>
                for $Wrapper<AdjacencyGraph<V, D>>
            {
                fn has_data_edge(&self, edge: &Edge<V, D>) -> bool {
                    self.0.has_data_edge(edge)
                }
            }

            impl<V: Vertex, D: Clone> WeightedDigraph<V, D> for $Wrapper<AdjacencyGraph<V, D>> {
                fn has_weighted_arc(&self, arc: &Edge<V, D>) -> bool {
                    self.0.has_weighted_arc(arc)
                }
            }

            impl<V: Vertex, D: Clone> LabeledDigraph<V, D> for $Wrapper<AdjacencyGraph<V, D>> {
                fn has_labeled_arc(&self, arc: &Edge<V, D>) -> bool {
                    self.0.has_labeled_arc(arc)
                }
            }

            impl<V: Vertex, D: Clone + PartialEq> DataDigraph<V, D>
                for $Wrapper<AdjacencyGraph<V, D>>
            {
                fn has_data_arc(&self, arc: &Edge<V, D>) -> bool {
                    self.0.has_data_arc(arc)
                }
            }
        )+
    };
}

delegate_reads!(Simple, Frozen);

impl<V: Vertex, D: Clone> SimpleGraph<V, D> for Simple<AdjacencyGraph<V, D>> {}

impl<V, D> VertexSetMutator<V> for Simple<AdjacencyGraph<V, D>>
where
    V: Vertex,
    D: Clone + PartialEq,
{
    fn ensure_vertices<I>(&mut self, vertices: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
    {
        self.0.ensure_vertices(vertices)
    }

    fn remove_vertices<I>(&mut self, vertices: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
    {
        self.0.remove_vertices(vertices)
    }
}

impl<V, D> EdgeSetMutator<V, D> for Simple<AdjacencyGraph<V, D>>
where
    V: Vertex,
    D: Clone + PartialEq,
{
    fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = Edge<V, D>>,
    {
        self.0.add_edges(edges)
    }

    fn remove_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = Edge<V, D>>,
    {
        self.0.remove_edges(edges)
    }
}

impl<V, D> ArcSetMutator<V, D> for Simple<AdjacencyGraph<V, D>>
where
    V: Vertex,
    D: Clone + PartialEq,
{
    fn add_arcs<I>(&mut self, arcs: I) -> Result<()>
    where
        I: IntoIterator<Item = Edge<V, D>>,
    {
        self.0.add_arcs(arcs)
    }

    fn remove_arcs<I>(&mut self, arcs: I) -> Result<()>
    where
        I: IntoIterator<Item = Edge<V, D>>,
    {
        self.0.remove_arcs(arcs)
    }
}

macro_rules! simple_richness_mutators {
    ($($Trait:ident),+ $(,)?) => {
        $(
            impl<V, D> $Trait<V, D> for Simple<AdjacencyGraph<V, D>>
            where
                V: Vertex,
                D: Clone + PartialEq,
            {
            }
        )+
    };
}

simple_richness_mutators! {
    WeightedEdgeSetMutator,
    LabeledEdgeSetMutator,
    DataEdgeSetMutator,
    WeightedArcSetMutator,
    LabeledArcSetMutator,
    DataArcSetMutator,
}
