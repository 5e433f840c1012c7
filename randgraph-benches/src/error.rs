//! Benchmark setup error type.
//!
//! Lets setup code propagate configuration and warm-up failures with `?`.

use randgraph_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph configuration or the warm-up generation failed.
    #[error("graph setup failed: {0}")]
    Graph(#[from] GraphError),
}
