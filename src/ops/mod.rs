//! Scatter operations
//!
//! This module defines the scatter operation trait, the combine operations it
//! is parameterized over, and the backend-independent index machinery.
//!
//! # Design
//!
//! ```text
//! ScatterElementsOps (implemented by CpuClient)
//!   └── dispatch driver
//!         ├── compact_dims        (dimension compaction)
//!         ├── 2-D kernel | generic kernel
//!         │     └── IndexMap      (flat position -> output offset)
//!         └── CombineOp           (Assign, Add, Mul, Max, Min)
//! ```
//!
//! Only the combine op differs between overwrite and the reductions; index
//! mapping and compaction are shared by all of them.

pub mod combine;
pub mod common;
pub(crate) mod cpu;
pub mod dispatch;
pub mod traits;

pub use combine::{Add, Assign, CombineOp, Max, Min, Mul, ScatterReduction};
pub use common::{CompactedShapes, IndexMap, compact_dims, normalize_index};
pub use traits::ScatterElementsOps;
