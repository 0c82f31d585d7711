//! CPU implementation of scatter operations.

pub mod scatter;
