//! Read-only capability traits.
//!
//! Each trait is a small contract on its own. Concrete graphs implement the
//! combination matching their declared properties and algorithms bound on the
//! smallest set they need. Every enumeration returns a fresh iterator, so
//! stopping early is just dropping it and no cursor outlives the call.

use crate::{edge::Edge, edge::Vertex, spec::Directedness};

/// The minimal read interface needed to seed a graph: vertex and edge
/// enumeration.
///
/// Flat-file loaders, generators and graphs all qualify. Undirected sources
/// yield each edge once; directed sources yield each arc once.
///
/// # Examples
/// ```
/// use trellis_core::{Edge, GraphSource};
///
/// struct Path(usize);
///
/// impl GraphSource<usize> for Path {
///     fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
///         0..self.0
///     }
///     fn edges(&self) -> impl Iterator<Item = Edge<usize>> + '_ {
///         (1..self.0).map(|v| Edge::new(v - 1, v))
///     }
/// }
///
/// let path = Path(4);
/// assert_eq!(path.order(), 4);
/// assert_eq!(path.size(), 3);
/// ```
pub trait GraphSource<V: Vertex, D = ()> {
    /// Enumerates every vertex once.
    fn vertices(&self) -> impl Iterator<Item = V> + '_;

    /// Enumerates every edge once.
    fn edges(&self) -> impl Iterator<Item = Edge<V, D>> + '_;

    /// Returns the number of vertices.
    ///
    /// The default implementation counts [`GraphSource::vertices`].
    fn order(&self) -> usize {
        self.vertices().count()
    }

    /// Returns the number of edges.
    ///
    /// The default implementation counts [`GraphSource::edges`].
    fn size(&self) -> usize {
        self.edges().count()
    }
}

/// Base graph capability: membership, degree and neighbourhood queries.
pub trait Graph<V: Vertex, D = ()>: GraphSource<V, D> {
    /// Whether the graph's edges are arcs.
    fn directedness(&self) -> Directedness;

    /// Returns `true` when `vertex` is present.
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns `true` when an edge structurally equal to `edge` is present.
    /// The payload is ignored.
    fn has_edge(&self, edge: &Edge<V, D>) -> bool;

    /// Returns the number of edges incident to `vertex`, or `None` when the
    /// vertex is absent.
    fn degree_of(&self, vertex: &V) -> Option<usize>;

    /// Enumerates the edges incident to `vertex`.
    fn incident_to(&self, vertex: &V) -> impl Iterator<Item = Edge<V, D>> + '_;

    /// Enumerates each vertex adjacent to `vertex` once.
    fn adjacent_to(&self, vertex: &V) -> impl Iterator<Item = V> + '_;

    /// Ratio of present edges to the maximum possible for the current order
    /// and directedness. NaN when the order is below two.
    fn density(&self) -> f64 {
        density(self.order(), self.size(), self.directedness())
    }
}

/// Graph whose edges are arcs with a source and a target.
pub trait Digraph<V: Vertex, D = ()>: Graph<V, D> {
    /// Graph type produced by [`Digraph::transpose`].
    type Transpose: Digraph<V, D>;

    /// Enumerates every arc once.
    fn arcs(&self) -> impl Iterator<Item = Edge<V, D>> + '_;

    /// Enumerates arcs whose source is `vertex`.
    fn arcs_from(&self, vertex: &V) -> impl Iterator<Item = Edge<V, D>> + '_;

    /// Enumerates arcs whose target is `vertex`.
    fn arcs_to(&self, vertex: &V) -> impl Iterator<Item = Edge<V, D>> + '_;

    /// Enumerates each vertex reachable by a single arc from `vertex` once.
    fn successors_of(&self, vertex: &V) -> impl Iterator<Item = V> + '_;

    /// Enumerates each vertex with an arc into `vertex` once.
    fn predecessors_of(&self, vertex: &V) -> impl Iterator<Item = V> + '_;

    /// Number of arcs targeting `vertex`, or `None` when it is absent.
    fn in_degree_of(&self, vertex: &V) -> Option<usize>;

    /// Number of arcs leaving `vertex`, or `None` when it is absent.
    fn out_degree_of(&self, vertex: &V) -> Option<usize>;

    /// Returns `true` when an arc from `arc.source()` to `arc.target()` is
    /// present. The payload is ignored.
    fn has_arc(&self, arc: &Edge<V, D>) -> bool;

    /// Returns a graph with every arc reversed.
    fn transpose(&self) -> Self::Transpose;
}

/// Marker for graphs whose type guarantees no loops and no parallel edges.
pub trait SimpleGraph<V: Vertex, D = ()>: Graph<V, D> {}

/// Graph whose edges carry a weight.
pub trait WeightedGraph<V: Vertex, D = ()>: Graph<V, D> {
    /// Returns `true` when an edge joining the same pair with the same weight
    /// is present.
    fn has_weighted_edge(&self, edge: &Edge<V, D>) -> bool;
}

/// Graph whose edges carry a label.
pub trait LabeledGraph<V: Vertex, D = ()>: Graph<V, D> {
    /// Returns `true` when an edge joining the same pair with the same label
    /// is present.
    fn has_labeled_edge(&self, edge: &Edge<V, D>) -> bool;
}

/// Graph whose edges carry arbitrary data.
pub trait DataGraph<V: Vertex, D = ()>: Graph<V, D> {
    /// Returns `true` when an edge joining the same pair with equal data is
    /// present.
    fn has_data_edge(&self, edge: &Edge<V, D>) -> bool;
}

/// Weighted digraph: weighted membership respecting arc direction.
pub trait WeightedDigraph<V: Vertex, D = ()>: Digraph<V, D> + WeightedGraph<V, D> {
    /// Returns `true` when an arc with the same source, target and weight is
    /// present.
    fn has_weighted_arc(&self, arc: &Edge<V, D>) -> bool;
}

/// Labeled digraph: labeled membership respecting arc direction.
pub trait LabeledDigraph<V: Vertex, D = ()>: Digraph<V, D> + LabeledGraph<V, D> {
    /// Returns `true` when an arc with the same source, target and label is
    /// present.
    fn has_labeled_arc(&self, arc: &Edge<V, D>) -> bool;
}

/// Data digraph: data membership respecting arc direction.
pub trait DataDigraph<V: Vertex, D = ()>: Digraph<V, D> + DataGraph<V, D> {
    /// Returns `true` when an arc with the same source, target and data is
    /// present.
    fn has_data_arc(&self, arc: &Edge<V, D>) -> bool;
}

/// Maximum number of edges a graph of `order` vertices can hold without loops
/// or parallel edges.
///
/// # Examples
/// ```
/// use trellis_core::{Directedness, max_size};
///
/// assert_eq!(max_size(4, Directedness::Undirected), 6);
/// assert_eq!(max_size(4, Directedness::Directed), 12);
/// assert_eq!(max_size(0, Directedness::Directed), 0);
/// ```
#[must_use]
pub const fn max_size(order: usize, directedness: Directedness) -> usize {
    let ordered = order.saturating_mul(order.saturating_sub(1));
    match directedness {
        Directedness::Directed => ordered,
        Directedness::Undirected => ordered / 2,
    }
}

/// Computes `size / max_size(order, directedness)`, or NaN when `order < 2`.
///
/// # Examples
/// ```
/// use trellis_core::{Directedness, density};
///
/// assert!(density(1, 0, Directedness::Undirected).is_nan());
/// assert_eq!(density(2, 1, Directedness::Undirected), 1.0);
/// assert_eq!(density(4, 2, Directedness::Undirected), 1.0 / 3.0);
/// assert_eq!(density(2, 1, Directedness::Directed), 0.5);
/// ```
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "density is a ratio of edge counts"
)]
pub fn density(order: usize, size: usize, directedness: Directedness) -> f64 {
    if order < 2 {
        return f64::NAN;
    }
    size as f64 / max_size(order, directedness) as f64
}
