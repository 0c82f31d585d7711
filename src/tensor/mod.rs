//! Tensor descriptors
//!
//! This module provides the shape and stride types the scatter kernels
//! operate on. Buffers themselves are plain slices owned by the caller; a
//! [`Layout`] only describes how a flat buffer is viewed as an N-dimensional
//! row-major tensor.

mod layout;
mod shape;
mod strides;

pub use layout::Layout;
pub use shape::Shape;
pub use strides::Strides;
