//! # scatter-elements
//!
//! **Scatter-Elements for dense row-major tensors, with a compacting 2-D fast path.**
//!
//! Given an input tensor, an indices tensor of the same rank and an updates
//! tensor shaped like the indices, the output is a copy of the input where for
//! every position `p` of the indices the update at `p` is combined into the
//! element whose coordinate along `axis` is `indices[p]` and whose other
//! coordinates are those of `p`.
//!
//! ## Features
//!
//! - **Negative indices**: counted from the end of the scatter axis
//! - **Out-of-range tolerant**: indices outside the axis are dropped, not errors
//! - **Reductions**: overwrite, add, mul, max, min
//! - **Dimension compaction**: mergeable axes are folded, 2-D problems use a dedicated kernel
//! - **Multiple dtypes**: f64, f32, f16, bf16, integers, bool; i32 or i64 indices
//!
//! ## Quick Start
//!
//! ```rust
//! use scatter_elements::prelude::*;
//!
//! let client = CpuClient::new();
//! let out = client.scatter_elements(
//!     &[0.0f32; 6],
//!     &[2, 3],
//!     &[1i64, 0, 2, 0, 2, 1],
//!     &[2, 3],
//!     &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0],
//!     1,
//! )?;
//! assert_eq!(out, [20.0, 10.0, 30.0, 40.0, 60.0, 50.0]);
//! # Ok::<(), scatter_elements::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded CPU kernels
//! - `f16` (default): Half-precision floats (F16, BF16)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod dtype;
pub mod error;
pub mod ops;
pub mod runtime;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element, IndexElement};
    pub use crate::error::{Error, Result};
    pub use crate::ops::{CombineOp, ScatterElementsOps, ScatterReduction};
    pub use crate::runtime::cpu::{CpuClient, ParallelismConfig};
    pub use crate::tensor::{Layout, Shape};
}
