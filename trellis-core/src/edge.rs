//! Edge values connecting two vertices.
//!
//! An [`Edge`] has no opinion about direction; directedness is a property of
//! the graph the edge lives in. The optional augmentation (a weight, a label or
//! arbitrary data) is carried by [`Payload`], and its [`EdgeKind`] is what a
//! graph checks against its declared richness when the edge is inserted.

use std::{fmt, hash::Hash};

use crate::spec::{Directedness, EdgeKind};

/// Opaque vertex identifier.
///
/// Any hashable, comparable and cloneable value qualifies. The library never
/// inspects vertices beyond equality, hashing, and `Debug` rendering for error
/// messages.
pub trait Vertex: Clone + Eq + Hash + fmt::Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + fmt::Debug {}

/// Augmentation carried by an edge beyond its endpoints.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Payload<D = ()> {
    /// No augmentation.
    #[default]
    Basic,
    /// A numeric weight.
    Weighted(f64),
    /// A string label.
    Labeled(String),
    /// Arbitrary caller-supplied data.
    Data(D),
}

impl<D> Payload<D> {
    /// Returns the richness category of this payload.
    ///
    /// # Examples
    /// ```
    /// use trellis_core::{EdgeKind, Payload};
    ///
    /// assert_eq!(Payload::<()>::Weighted(1.5).kind(), EdgeKind::Weighted);
    /// assert_eq!(Payload::Data("x").kind(), EdgeKind::Data);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> EdgeKind {
        match self {
            Self::Basic => EdgeKind::Basic,
            Self::Weighted(_) => EdgeKind::Weighted,
            Self::Labeled(_) => EdgeKind::Labeled,
            Self::Data(_) => EdgeKind::Data,
        }
    }
}

/// A connection between two vertices, using the `(U, V)` notation for its
/// endpoint pair.
///
/// Derived equality compares endpoints in order *and* the payload, which is
/// what labeled, weighted and data membership queries need. Structural
/// equality for loop and multiplicity checks is [`Edge::connects`].
///
/// # Examples
/// ```
/// use trellis_core::{Directedness, Edge};
///
/// let edge: Edge<u32> = Edge::weighted(1, 2, 3.5);
/// assert_eq!(edge.both(), (&1, &2));
/// assert_eq!(edge.weight(), Some(3.5));
/// assert!(edge.connects(&Edge::new(2, 1), Directedness::Undirected));
/// assert!(!edge.connects(&Edge::new(2, 1), Directedness::Directed));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<V, D = ()> {
    u: V,
    v: V,
    payload: Payload<D>,
}

impl<V, D> Edge<V, D> {
    /// Creates a basic edge with no augmentation.
    #[must_use]
    pub const fn new(u: V, v: V) -> Self {
        Self::from_parts(u, v, Payload::Basic)
    }

    /// Creates a weighted edge. The weight is not validated here; graphs
    /// reject non-finite weights at insertion time.
    #[must_use]
    pub const fn weighted(u: V, v: V, weight: f64) -> Self {
        Self::from_parts(u, v, Payload::Weighted(weight))
    }

    /// Creates a labeled edge.
    #[must_use]
    pub fn labeled(u: V, v: V, label: impl Into<String>) -> Self {
        Self::from_parts(u, v, Payload::Labeled(label.into()))
    }

    /// Creates an edge carrying arbitrary data.
    #[must_use]
    pub const fn with_data(u: V, v: V, data: D) -> Self {
        Self::from_parts(u, v, Payload::Data(data))
    }

    /// Assembles an edge from its endpoints and payload.
    #[must_use]
    pub const fn from_parts(u: V, v: V, payload: Payload<D>) -> Self {
        Self { u, v, payload }
    }

    /// Returns the source endpoint (`U`).
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> &V { &self.u }

    /// Returns the target endpoint (`V`).
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> &V { &self.v }

    /// Returns both endpoints as `(source, target)`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn both(&self) -> (&V, &V) { (&self.u, &self.v) }

    /// Returns the augmentation carried by the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn payload(&self) -> &Payload<D> { &self.payload }

    /// Returns the richness category of the edge.
    #[must_use]
    pub const fn kind(&self) -> EdgeKind {
        self.payload.kind()
    }

    /// Returns the weight when the edge is weighted.
    #[must_use]
    pub const fn weight(&self) -> Option<f64> {
        match self.payload {
            Payload::Weighted(weight) => Some(weight),
            _ => None,
        }
    }

    /// Returns the label when the edge is labeled.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match &self.payload {
            Payload::Labeled(label) => Some(label),
            _ => None,
        }
    }

    /// Returns the data when the edge carries data.
    #[must_use]
    pub const fn data(&self) -> Option<&D> {
        match &self.payload {
            Payload::Data(data) => Some(data),
            _ => None,
        }
    }

    /// Swaps source and target, keeping the payload.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            u: self.v,
            v: self.u,
            payload: self.payload,
        }
    }

    /// Splits the edge into `(source, target, payload)`.
    #[must_use]
    pub fn into_parts(self) -> (V, V, Payload<D>) {
        (self.u, self.v, self.payload)
    }
}

impl<V: PartialEq, D> Edge<V, D> {
    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.u == self.v
    }

    /// Returns `true` when the edge joins `a` and `b`.
    ///
    /// Directed graphs compare `(a, b)` against `(source, target)` in order;
    /// undirected graphs accept either orientation.
    #[must_use]
    pub fn joins(&self, a: &V, b: &V, directedness: Directedness) -> bool {
        let forward = self.u == *a && self.v == *b;
        match directedness {
            Directedness::Directed => forward,
            Directedness::Undirected => forward || (self.u == *b && self.v == *a),
        }
    }

    /// Structural equality: both edges connect the same pair under
    /// `directedness`, regardless of payload.
    #[must_use]
    pub fn connects(&self, other: &Self, directedness: Directedness) -> bool {
        self.joins(&other.u, &other.v, directedness)
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((u, v): (V, V)) -> Self {
        Self::new(u, v)
    }
}
