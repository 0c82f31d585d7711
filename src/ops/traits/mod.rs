//! Operation traits for tensor operations.
//!
//! This module contains trait definitions for the scatter operations.
//! Implementations are in the backend-specific modules (cpu/).

mod scatter;

pub use scatter::ScatterElementsOps;
