//! randgraph core library.
//!
//! Builds random graphs with a controlled number of nodes, edges, weakly
//! connected components and strongly connected blocks, for use as test
//! inputs to graph algorithms. A companion [`ListRandomizer`] produces
//! value lists with controlled length and distinctness.
//!
//! All randomness flows through [`UniformSource`], implemented for every
//! [`rand::Rng`], so runs can be seeded, stubbed, or isolated per thread.

mod composition;
mod error;
mod graph;
mod list;
mod randomizer;
mod registry;
mod rng;

pub use crate::{
    composition::random_composition,
    error::{GraphError, GraphErrorCode, ListError, ListErrorCode, Result},
    graph::{Edge, Graph},
    list::ListRandomizer,
    randomizer::{GraphConfig, GraphConfigBuilder, GraphRandomizer, GraphShape, generate_graph},
    registry::EdgeRegistry,
    rng::{UniformSource, seeded, shuffle},
};
