//! Support library for the randgraph CLI binary.
//!
//! Exposes the command and logging modules so doctests and unit tests can
//! drive the command pipeline without spawning a process.

pub mod cli;
pub mod logging;
