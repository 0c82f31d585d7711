//! Helper functions for CPU scatter operations
//!
//! Helpers validate arguments, compact shapes and pick a kernel; the
//! `ScatterElementsOps` impl for `CpuClient` delegates here.

pub mod scatter;

pub use scatter::{scatter_elements_bytes_impl, scatter_elements_impl};
