//! CPU kernel implementations
//!
//! Kernels are generic over `T: Element` and the index type, and receive
//! validated, compacted shapes from the helpers layer.

pub mod scatter;

pub use scatter::{scatter_2d_kernel, scatter_generic_kernel};
