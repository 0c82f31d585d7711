//! CPU runtime implementation
//!
//! Scatter kernels run on the calling thread or on a rayon pool, depending on
//! the client's [`ParallelismConfig`]. Launches are synchronous: the output is
//! complete when the call returns.

mod client;
pub(crate) mod helpers;
pub(crate) mod kernels;

pub use client::{CpuClient, ParallelismConfig};
