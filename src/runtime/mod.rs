//! Execution backends
//!
//! Only the CPU backend exists; its client implements
//! [`ScatterElementsOps`](crate::ops::ScatterElementsOps).

pub mod cpu;
