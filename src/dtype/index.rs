//! Index element trait for the indices tensor

use super::DType;
use bytemuck::Pod;

/// Trait for integer types that may populate an indices tensor
///
/// Only signed 32- and 64-bit integers qualify; negative values count from
/// the end of the scatter axis.
pub trait IndexElement: Copy + Send + Sync + Pod + 'static + std::fmt::Debug {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Widen to i64 for normalization
    fn to_i64(self) -> i64;
}

impl IndexElement for i64 {
    const DTYPE: DType = DType::I64;

    #[inline]
    fn to_i64(self) -> i64 {
        self
    }
}

impl IndexElement for i32 {
    const DTYPE: DType = DType::I32;

    #[inline]
    fn to_i64(self) -> i64 {
        self as i64
    }
}
