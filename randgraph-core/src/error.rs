//! Error types for the randgraph core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

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
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring or running the graph randomizer.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GraphError {
    /// Graphs need at least one node.
    #[error("node count must be at least 1 (got {got})")]
    InvalidNodeCount {
        /// The node count supplied by the caller.
        got: usize,
    },
    /// Graphs need at least one weak component.
    #[error("component count must be at least 1 (got {got})")]
    InvalidComponentCount {
        /// The component count supplied by the caller.
        got: usize,
    },
    /// The requested strong-block count lies outside `1..=nodes`.
    #[error("strong block count {strong_blocks} must lie within 1..={nodes}")]
    StrongBlocksOutOfRange {
        /// Requested number of strong blocks.
        strong_blocks: usize,
        /// Configured node count.
        nodes: usize,
    },
    /// Every component must contain at least one whole strong block.
    #[error("component count {components} exceeds strong block count {strong_blocks}")]
    ComponentsExceedStrongBlocks {
        /// Requested number of components.
        components: usize,
        /// Resolved number of strong blocks.
        strong_blocks: usize,
    },
    /// A composition of `sum` into `count` positive parts does not exist.
    #[error("cannot split {sum} into {count} positive parts")]
    InvalidComposition {
        /// Number of parts requested.
        count: usize,
        /// Total the parts must add up to.
        sum: usize,
    },
    /// Bipartite ratios must lie strictly between zero and one.
    #[error("bipartite ratio must lie strictly between 0 and 1 (got {ratio})")]
    InvalidBipartiteRatio {
        /// The ratio supplied by the caller.
        ratio: f32,
    },
    /// The edge target could not be reached under the configured constraints.
    #[error("insufficient edges: requested {requested} but only {placed} could be placed")]
    InsufficientEdges {
        /// Edge count the configuration asked for.
        requested: usize,
        /// Edge count actually placed before candidates ran out.
        placed: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Graphs need at least one node.
        InvalidNodeCount => InvalidNodeCount { .. } => "GRAPH_INVALID_NODE_COUNT",
        /// Graphs need at least one weak component.
        InvalidComponentCount => InvalidComponentCount { .. } => "GRAPH_INVALID_COMPONENT_COUNT",
        /// The requested strong-block count lies outside `1..=nodes`.
        StrongBlocksOutOfRange => StrongBlocksOutOfRange { .. }
            => "GRAPH_STRONG_BLOCKS_OUT_OF_RANGE",
        /// Every component must contain at least one whole strong block.
        ComponentsExceedStrongBlocks => ComponentsExceedStrongBlocks { .. }
            => "GRAPH_COMPONENTS_EXCEED_STRONG_BLOCKS",
        /// A composition of the requested shape does not exist.
        InvalidComposition => InvalidComposition { .. } => "GRAPH_INVALID_COMPOSITION",
        /// Bipartite ratios must lie strictly between zero and one.
        InvalidBipartiteRatio => InvalidBipartiteRatio { .. } => "GRAPH_INVALID_BIPARTITE_RATIO",
        /// The edge target could not be reached.
        InsufficientEdges => InsufficientEdges { .. } => "GRAPH_INSUFFICIENT_EDGES",
    }
}

impl GraphError {
    /// Returns `true` when the error describes parameters that can never
    /// produce a graph, as opposed to a generation run that ran out of
    /// candidate edges.
    pub const fn is_invalid_configuration(&self) -> bool {
        !matches!(self, Self::InsufficientEdges { .. })
    }
}

/// Error type produced by [`crate::ListRandomizer`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ListError {
    /// More distinct values were requested than the list can hold.
    #[error("distinct value count {distinct} exceeds list length {length}")]
    DistinctExceedsLength {
        /// Requested number of distinct values.
        distinct: usize,
        /// Requested list length.
        length: usize,
    },
    /// The value engine stopped producing new values before the distinct
    /// pool was full.
    #[error("engine produced only {found} of {distinct} distinct values after {attempts} draws")]
    DistinctValuesExhausted {
        /// Requested number of distinct values.
        distinct: usize,
        /// Distinct values collected before giving up.
        found: usize,
        /// Engine draws performed.
        attempts: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ListError`] variants.
    enum ListErrorCode for ListError {
        /// More distinct values were requested than the list can hold.
        DistinctExceedsLength => DistinctExceedsLength { .. } => "LIST_DISTINCT_EXCEEDS_LENGTH",
        /// The value engine could not supply enough distinct values.
        DistinctValuesExhausted => DistinctValuesExhausted { .. }
            => "LIST_DISTINCT_VALUES_EXHAUSTED",
    }
}

/// Convenient alias for results returned by the graph API.
pub type Result<T> = core::result::Result<T, GraphError>;
