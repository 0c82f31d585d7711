//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};

/// Trait for types that can be elements of a scattered tensor
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Shared read-only across worker lanes
/// - `Pod + Zeroable` - Safe reinterpretation of raw byte buffers (bytemuck)
/// - `PartialOrd` - Needed by the max/min combine ops
///
/// Boolean tensors are stored as `u8`; `bool` itself is not `Pod`.
pub trait Element:
    Copy + Send + Sync + Pod + Zeroable + 'static + PartialOrd + std::fmt::Debug
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Sum used by the additive reduction. Integers wrap on overflow.
    fn reduce_add(self, rhs: Self) -> Self;

    /// Product used by the multiplicative reduction. Integers wrap on overflow.
    fn reduce_mul(self, rhs: Self) -> Self;
}

macro_rules! impl_element {
    (wrapping: $($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                #[inline(always)]
                fn reduce_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline(always)]
                fn reduce_mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }
            }
        )*
    };
    (float: $($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                #[inline(always)]
                fn reduce_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline(always)]
                fn reduce_mul(self, rhs: Self) -> Self {
                    self * rhs
                }
            }
        )*
    };
}

impl_element!(float: f64 => F64, f32 => F32);

impl_element!(
    wrapping:
    i64 => I64,
    i32 => I32,
    i16 => I16,
    i8 => I8,
    u64 => U64,
    u32 => U32,
    u16 => U16,
    u8 => U8,
);

#[cfg(feature = "f16")]
impl_element!(float: half::f16 => F16, half::bf16 => BF16);
