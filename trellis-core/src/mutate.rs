//! Mutation capability traits.
//!
//! Mutators take whole batches. A batch is validated against the graph's
//! declared properties before anything is stored, so an error leaves the
//! graph untouched. Removal of absent items is a no-op.

use crate::{
    edge::{Edge, Vertex},
    error::Result,
};

/// Adds and removes vertices.
pub trait VertexSetMutator<V: Vertex> {
    /// Ensures every vertex in `vertices` is present and registered in its own
    /// right, so it stays after its last incident edge is removed.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::ImmutableGraph`] when the graph rejects
    /// mutation.
    fn ensure_vertices<I>(&mut self, vertices: I) -> Result<()>
    where
        I: IntoIterator<Item = V>;

    /// Removes every vertex in `vertices` together with its incident edges.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::ImmutableGraph`] when the graph rejects
    /// mutation.
    fn remove_vertices<I>(&mut self, vertices: I) -> Result<()>
    where
        I: IntoIterator<Item = V>;
}

/// Adds and removes undirected edges.
pub trait EdgeSetMutator<V: Vertex, D = ()> {
    /// Adds every edge in `edges`. Unseen endpoints are added with them and
    /// leave again with their last edge.
    ///
    /// # Errors
    /// Returns the first structural violation found in the batch; nothing is
    /// stored in that case.
    fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = Edge<V, D>>;

    /// Removes one structurally matching edge for each item in `edges`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::ImmutableGraph`] when the graph rejects
    /// mutation.
    fn remove_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = Edge<V, D>>;
}

/// Adds and removes arcs.
pub trait ArcSetMutator<V: Vertex, D = ()> {
    /// Adds every arc in `arcs`, registering unseen endpoints.
    ///
    /// # Errors
    /// Returns the first structural violation found in the batch; nothing is
    /// stored in that case.
    fn add_arcs<I>(&mut self, arcs: I) -> Result<()>
    where
        I: IntoIterator<Item = Edge<V, D>>;

    /// Removes one arc with matching source and target for each item in
    /// `arcs`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::ImmutableGraph`] when the graph rejects
    /// mutation.
    fn remove_arcs<I>(&mut self, arcs: I) -> Result<()>
    where
        I: IntoIterator<Item = Edge<V, D>>;
}

/// Weighted variant of [`EdgeSetMutator`] taking `(u, v, weight)` triples.
pub trait WeightedEdgeSetMutator<V: Vertex, D = ()>: EdgeSetMutator<V, D> {
    /// Adds a weighted edge for every triple.
    ///
    /// # Errors
    /// See [`EdgeSetMutator::add_edges`].
    fn add_weighted_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        self.add_edges(edges.into_iter().map(|(u, v, w)| Edge::weighted(u, v, w)))
    }
}

/// Labeled variant of [`EdgeSetMutator`] taking `(u, v, label)` triples.
pub trait LabeledEdgeSetMutator<V: Vertex, D = ()>: EdgeSetMutator<V, D> {
    /// Adds a labeled edge for every triple.
    ///
    /// # Errors
    /// See [`EdgeSetMutator::add_edges`].
    fn add_labeled_edges<I, L>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (V, V, L)>,
        L: Into<String>,
    {
        self.add_edges(edges.into_iter().map(|(u, v, l)| Edge::labeled(u, v, l)))
    }
}

/// Data variant of [`EdgeSetMutator`] taking `(u, v, data)` triples.
pub trait DataEdgeSetMutator<V: Vertex, D>: EdgeSetMutator<V, D> {
    /// Adds a data edge for every triple.
    ///
    /// # Errors
    /// See [`EdgeSetMutator::add_edges`].
    fn add_data_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (V, V, D)>,
    {
        self.add_edges(edges.into_iter().map(|(u, v, d)| Edge::with_data(u, v, d)))
    }
}

/// Weighted variant of [`ArcSetMutator`].
pub trait WeightedArcSetMutator<V: Vertex, D = ()>: ArcSetMutator<V, D> {
    /// Adds a weighted arc for every `(source, target, weight)` triple.
    ///
    /// # Errors
    /// See [`ArcSetMutator::add_arcs`].
    fn add_weighted_arcs<I>(&mut self, arcs: I) -> Result<()>
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        self.add_arcs(arcs.into_iter().map(|(u, v, w)| Edge::weighted(u, v, w)))
    }
}

/// Labeled variant of [`ArcSetMutator`].
pub trait LabeledArcSetMutator<V: Vertex, D = ()>: ArcSetMutator<V, D> {
    /// Adds a labeled arc for every `(source, target, label)` triple.
    ///
    /// # Errors
    /// See [`ArcSetMutator::add_arcs`].
    fn add_labeled_arcs<I, L>(&mut self, arcs: I) -> Result<()>
    where
        I: IntoIterator<Item = (V, V, L)>,
        L: Into<String>,
    {
        self.add_arcs(arcs.into_iter().map(|(u, v, l)| Edge::labeled(u, v, l)))
    }
}

/// Data variant of [`ArcSetMutator`].
pub trait DataArcSetMutator<V: Vertex, D>: ArcSetMutator<V, D> {
    /// Adds a data arc for every `(source, target, data)` triple.
    ///
    /// # Errors
    /// See [`ArcSetMutator::add_arcs`].
    fn add_data_arcs<I>(&mut self, arcs: I) -> Result<()>
    where
        I: IntoIterator<Item = (V, V, D)>,
    {
        self.add_arcs(arcs.into_iter().map(|(u, v, d)| Edge::with_data(u, v, d)))
    }
}
