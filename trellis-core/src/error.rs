//! Error types for the trellis core library.
//!
//! Structural violations raised at a graph's mutation boundary and
//! configuration errors raised by the random generators each get an enum with
//! stable machine-readable codes.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::spec::EdgeKind;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A structural violation rejected at a graph's mutation boundary.
///
/// Mutators validate a whole batch before touching storage, so a returned
/// error always leaves the graph exactly as it was before the call.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// The graph disallows loops and the edge connects a vertex to itself.
    #[error("loop on vertex {vertex} is not allowed in this graph")]
    LoopRejected {
        /// Debug rendering of the looping vertex.
        vertex: Arc<str>,
    },
    /// The graph disallows parallel edges and the pair is already connected.
    #[error("edge ({left}, {right}) would duplicate an existing connection")]
    ParallelEdgeRejected {
        /// Debug rendering of the first endpoint.
        left: Arc<str>,
        /// Debug rendering of the second endpoint.
        right: Arc<str>,
    },
    /// The edge carries a different augmentation than the graph declares.
    #[error("graph stores {declared} edges but received a {found} edge")]
    RichnessMismatch {
        /// Edge kind declared by the graph's properties.
        declared: EdgeKind,
        /// Edge kind of the rejected value.
        found: EdgeKind,
    },
    /// A weighted edge carried a NaN or infinite weight.
    #[error("edge ({left}, {right}) has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Debug rendering of the first endpoint.
        left: Arc<str>,
        /// Debug rendering of the second endpoint.
        right: Arc<str>,
        /// The rejected weight.
        weight: f64,
    },
    /// The graph was declared immutable.
    #[error("graph is immutable")]
    ImmutableGraph,
    /// A factory cannot honour one of the requested properties.
    #[error("property `{property}` is not supported by this graph backend")]
    UnsupportedProperty {
        /// Name of the unsupported property value.
        property: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The graph disallows loops.
        LoopRejected => LoopRejected { .. } => "GRAPH_LOOP_REJECTED",
        /// The graph disallows parallel edges.
        ParallelEdgeRejected => ParallelEdgeRejected { .. } => "GRAPH_PARALLEL_EDGE_REJECTED",
        /// The edge richness differs from the declared richness.
        RichnessMismatch => RichnessMismatch { .. } => "GRAPH_RICHNESS_MISMATCH",
        /// A weighted edge carried a non-finite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// The graph was declared immutable.
        ImmutableGraph => ImmutableGraph => "GRAPH_IMMUTABLE",
        /// A factory cannot honour a requested property.
        UnsupportedProperty => UnsupportedProperty { .. } => "GRAPH_UNSUPPORTED_PROPERTY",
    }
}

impl GraphError {
    /// Builds [`GraphError::LoopRejected`], rendering the vertex with `Debug`.
    #[must_use]
    pub fn loop_rejected(vertex: &impl fmt::Debug) -> Self {
        Self::LoopRejected {
            vertex: render(vertex),
        }
    }

    /// Builds [`GraphError::ParallelEdgeRejected`] for the pair `(left, right)`.
    #[must_use]
    pub fn parallel_rejected(left: &impl fmt::Debug, right: &impl fmt::Debug) -> Self {
        Self::ParallelEdgeRejected {
            left: render(left),
            right: render(right),
        }
    }

    /// Builds [`GraphError::NonFiniteWeight`] for the pair `(left, right)`.
    #[must_use]
    pub fn non_finite_weight(
        left: &impl fmt::Debug,
        right: &impl fmt::Debug,
        weight: f64,
    ) -> Self {
        Self::NonFiniteWeight {
            left: render(left),
            right: render(right),
            weight,
        }
    }
}

/// A configuration error raised while constructing a random graph generator.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// The inclusion probability was outside `[0, 1)` or NaN.
    #[error("edge probability must lie in [0, 1) (got {rho})")]
    InvalidProbability {
        /// The rejected probability.
        rho: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// The inclusion probability was outside `[0, 1)`.
        InvalidProbability => InvalidProbability { .. } => "GENERATOR_INVALID_PROBABILITY",
    }
}

fn render(value: &impl fmt::Debug) -> Arc<str> {
    Arc::from(format!("{value:?}"))
}

/// Convenient alias for results returned by graph mutators and factories.
pub type Result<T> = core::result::Result<T, GraphError>;
