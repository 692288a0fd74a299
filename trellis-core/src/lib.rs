//! Trellis core library.
//!
//! Graphs here are described by *capabilities*: small traits such as
//! [`Graph`], [`Digraph`] or [`WeightedGraph`] that a concrete backend
//! implements according to its declared [`GraphProperties`]. Algorithms bound
//! on the smallest set they need. [`GraphSpec`] collects the properties and an
//! optional seeding [`GraphSource`] before a backend factory builds the graph.
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "generator")]
mod bernoulli;
mod edge;
mod error;
mod graph;
mod mutate;
mod null;
mod source;
mod spec;
mod traversal;

#[cfg(feature = "generator")]
#[cfg_attr(docsrs, doc(cfg(feature = "generator")))]
pub use crate::bernoulli::{
    BernoulliGraph, BernoulliParams, DefaultRng, GeneratorRng, Stability, bernoulli_distribution,
};
pub use crate::{
    edge::{Edge, Payload, Vertex},
    error::{GeneratorError, GeneratorErrorCode, GraphError, GraphErrorCode, Result},
    graph::{
        DataDigraph, DataGraph, Digraph, Graph, GraphSource, LabeledDigraph, LabeledGraph,
        SimpleGraph, WeightedDigraph, WeightedGraph, density, max_size,
    },
    mutate::{
        ArcSetMutator, DataArcSetMutator, DataEdgeSetMutator, EdgeSetMutator,
        LabeledArcSetMutator, LabeledEdgeSetMutator, VertexSetMutator, WeightedArcSetMutator,
        WeightedEdgeSetMutator,
    },
    null::{NULL_GRAPH, NullGraph},
    spec::{
        Directedness, EdgeKind, GraphProperties, GraphSpec, Multiplicity, Mutability, spec,
    },
    traversal::{Distinct, Traversal, TraversalExt},
};
