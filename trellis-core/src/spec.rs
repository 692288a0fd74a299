//! Graph specifications: declared structural properties plus an optional
//! source used to seed the graph.
//!
//! [`GraphSpec`] is a value builder. Each method consumes the spec and returns
//! it with one property axis overwritten, so partially built specs can be
//! cloned and branched freely. The spec never allocates graph storage; that is
//! the job of the factory handed to [`GraphSpec::create`].

use std::fmt;

use crate::null::{NULL_GRAPH, NullGraph};

/// Whether edges have an orientation.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Directedness {
    /// Edges connect an unordered pair.
    #[default]
    Undirected,
    /// Edges are arcs from source to target.
    Directed,
}

impl Directedness {
    /// Returns `true` for [`Directedness::Directed`].
    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

impl fmt::Display for Directedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Undirected => "undirected",
            Self::Directed => "directed",
        })
    }
}

/// Edge richness: the augmentation every edge in the graph carries.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum EdgeKind {
    /// Endpoints only.
    #[default]
    Basic,
    /// Endpoints plus a string label.
    Labeled,
    /// Endpoints plus a numeric weight.
    Weighted,
    /// Endpoints plus arbitrary data.
    Data,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Basic => "basic",
            Self::Labeled => "labeled",
            Self::Weighted => "weighted",
            Self::Data => "data",
        })
    }
}

/// Which loops and parallel edges a graph admits.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Multiplicity {
    /// No loops, no parallel edges.
    #[default]
    Simple,
    /// Loops allowed, parallel edges not.
    Loops,
    /// Parallel edges allowed, loops not.
    Multigraph,
    /// Loops and parallel edges both allowed.
    Pseudograph,
}

impl Multiplicity {
    /// Returns `true` when an edge may connect a vertex to itself.
    #[must_use]
    pub const fn allows_loops(self) -> bool {
        matches!(self, Self::Loops | Self::Pseudograph)
    }

    /// Returns `true` when a vertex pair may be connected more than once.
    #[must_use]
    pub const fn allows_parallel(self) -> bool {
        matches!(self, Self::Multigraph | Self::Pseudograph)
    }

    /// Adds loop permission while keeping any parallel-edge permission.
    #[must_use]
    pub const fn with_loops(self) -> Self {
        if self.allows_parallel() {
            Self::Pseudograph
        } else {
            Self::Loops
        }
    }

    /// Adds parallel-edge permission while keeping any loop permission.
    #[must_use]
    pub const fn with_parallel(self) -> Self {
        if self.allows_loops() {
            Self::Pseudograph
        } else {
            Self::Multigraph
        }
    }
}

/// Whether a graph may change after construction.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mutability {
    /// Mutators are accepted.
    #[default]
    Mutable,
    /// Contents are fixed once the factory returns.
    Immutable,
    /// Mutations produce new versions and earlier versions stay readable.
    Persistent,
}

impl Mutability {
    /// Returns `true` when mutators may change the graph.
    #[must_use]
    pub const fn is_mutable(self) -> bool {
        !matches!(self, Self::Immutable)
    }
}

/// The four independent property axes of a graph.
///
/// Exactly one value per axis is active. The default is an undirected, basic,
/// simple, mutable graph.
///
/// # Examples
/// ```
/// use trellis_core::{Directedness, EdgeKind, GraphProperties, Multiplicity, Mutability};
///
/// let props = GraphProperties::default();
/// assert_eq!(props.directedness(), Directedness::Undirected);
/// assert_eq!(props.edge_kind(), EdgeKind::Basic);
/// assert_eq!(props.multiplicity(), Multiplicity::Simple);
/// assert_eq!(props.mutability(), Mutability::Mutable);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct GraphProperties {
    directedness: Directedness,
    edge_kind: EdgeKind,
    multiplicity: Multiplicity,
    mutability: Mutability,
}

impl GraphProperties {
    /// Assembles properties from one value per axis.
    #[must_use]
    pub const fn new(
        directedness: Directedness,
        edge_kind: EdgeKind,
        multiplicity: Multiplicity,
        mutability: Mutability,
    ) -> Self {
        Self {
            directedness,
            edge_kind,
            multiplicity,
            mutability,
        }
    }

    /// Returns the directedness axis.
    #[must_use]
    #[rustfmt::skip]
    pub const fn directedness(&self) -> Directedness { self.directedness }

    /// Returns the edge richness axis.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_kind(&self) -> EdgeKind { self.edge_kind }

    /// Returns the multiplicity axis.
    #[must_use]
    #[rustfmt::skip]
    pub const fn multiplicity(&self) -> Multiplicity { self.multiplicity }

    /// Returns the mutability axis.
    #[must_use]
    #[rustfmt::skip]
    pub const fn mutability(&self) -> Mutability { self.mutability }
}

/// Fluent, value-semantics description of a graph to be built by a factory.
///
/// `S` is the [`crate::GraphSource`] the factory should drain; it defaults to
/// the [`NullGraph`], which seeds nothing.
///
/// # Examples
/// ```
/// use trellis_core::{Directedness, EdgeKind, GraphSpec, Multiplicity};
///
/// let base = GraphSpec::new().weighted();
/// let directed = base.directed();
/// let multi = base.multigraph();
///
/// assert_eq!(directed.properties().directedness(), Directedness::Directed);
/// assert_eq!(multi.properties().directedness(), Directedness::Undirected);
/// assert_eq!(multi.properties().multiplicity(), Multiplicity::Multigraph);
/// assert_eq!(base.properties().edge_kind(), EdgeKind::Weighted);
/// ```
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphSpec<S = NullGraph> {
    properties: GraphProperties,
    source: S,
}

impl GraphSpec {
    /// Creates a spec for an undirected, basic, simple, mutable graph with no
    /// source.
    pub const fn new() -> Self {
        Self {
            properties: GraphProperties::new(
                Directedness::Undirected,
                EdgeKind::Basic,
                Multiplicity::Simple,
                Mutability::Mutable,
            ),
            source: NULL_GRAPH,
        }
    }
}

impl Default for GraphSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for [`GraphSpec::new`].
///
/// # Examples
/// ```
/// use trellis_core::{GraphSpec, spec};
///
/// assert_eq!(spec(), GraphSpec::new());
/// ```
pub const fn spec() -> GraphSpec {
    GraphSpec::new()
}

impl<S> GraphSpec<S> {
    /// Populate the graph from `source` when it is created.
    ///
    /// Anything that implements [`crate::GraphSource`] qualifies: a flat-file
    /// loader, a generator, or another graph.
    pub fn using<T>(self, source: T) -> GraphSpec<T> {
        GraphSpec {
            properties: self.properties,
            source,
        }
    }

    /// Replaces every axis at once.
    pub const fn with_properties(mut self, properties: GraphProperties) -> Self {
        self.properties = properties;
        self
    }

    /// Edges connect unordered pairs.
    pub const fn undirected(mut self) -> Self {
        self.properties.directedness = Directedness::Undirected;
        self
    }

    /// Edges are arcs; the graph is a digraph.
    pub const fn directed(mut self) -> Self {
        self.properties.directedness = Directedness::Directed;
        self
    }

    /// Edges carry no weight, label or data.
    pub const fn basic(mut self) -> Self {
        self.properties.edge_kind = EdgeKind::Basic;
        self
    }

    /// Edges carry a string label.
    pub const fn labeled(mut self) -> Self {
        self.properties.edge_kind = EdgeKind::Labeled;
        self
    }

    /// Edges carry a numeric weight.
    pub const fn weighted(mut self) -> Self {
        self.properties.edge_kind = EdgeKind::Weighted;
        self
    }

    /// Edges carry arbitrary data.
    pub const fn data_edges(mut self) -> Self {
        self.properties.edge_kind = EdgeKind::Data;
        self
    }

    /// No loops and no parallel edges.
    pub const fn simple(mut self) -> Self {
        self.properties.multiplicity = Multiplicity::Simple;
        self
    }

    /// Parallel edges allowed, loops not.
    pub const fn multigraph(mut self) -> Self {
        self.properties.multiplicity = Multiplicity::Multigraph;
        self
    }

    /// Loops and parallel edges both allowed.
    pub const fn pseudograph(mut self) -> Self {
        self.properties.multiplicity = Multiplicity::Pseudograph;
        self
    }

    /// Additionally allow parallel edges, keeping the current loop setting.
    pub const fn parallel(mut self) -> Self {
        self.properties.multiplicity = self.properties.multiplicity.with_parallel();
        self
    }

    /// Additionally allow loops, keeping the current parallel-edge setting.
    pub const fn loops(mut self) -> Self {
        self.properties.multiplicity = self.properties.multiplicity.with_loops();
        self
    }

    /// The graph accepts mutators after creation.
    pub const fn mutable(mut self) -> Self {
        self.properties.mutability = Mutability::Mutable;
        self
    }

    /// The graph is fixed once the factory returns.
    pub const fn immutable(mut self) -> Self {
        self.properties.mutability = Mutability::Immutable;
        self
    }

    /// The graph keeps earlier versions readable across mutations.
    pub const fn persistent(mut self) -> Self {
        self.properties.mutability = Mutability::Persistent;
        self
    }

    /// Returns the accumulated properties.
    #[must_use]
    pub const fn properties(&self) -> GraphProperties {
        self.properties
    }

    /// Returns the source the factory should drain.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Splits the spec into its properties and source.
    #[must_use]
    pub fn into_parts(self) -> (GraphProperties, S) {
        (self.properties, self.source)
    }

    /// Hands the finished spec to `factory` and returns whatever it builds.
    ///
    /// This is a convenience; the factory can always be called directly.
    ///
    /// # Examples
    /// ```
    /// use trellis_core::{Directedness, GraphProperties, spec};
    ///
    /// let props: GraphProperties = spec().directed().create(|spec| spec.properties());
    /// assert_eq!(props.directedness(), Directedness::Directed);
    /// ```
    pub fn create<G, F>(self, factory: F) -> G
    where
        F: FnOnce(Self) -> G,
    {
        factory(self)
    }
}
