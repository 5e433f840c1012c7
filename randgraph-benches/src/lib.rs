//! Benchmark support crate for randgraph.
//!
//! Provides parameter types and setup errors shared by the Criterion
//! benchmarks that time graph generation in both fill modes.

pub mod error;
pub mod params;
