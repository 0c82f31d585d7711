//! DType dispatch utilities
//!
//! This module provides the `dispatch_dtype!` and `dispatch_index_dtype!`
//! macros for runtime type dispatch. Together they form the registry that maps
//! an (element tag, index tag) pair onto one monomorphized scatter kernel.
//!
//! # Usage
//!
//! ```ignore
//! fn my_operation(dtype: DType) -> Result<usize> {
//!     dispatch_dtype!(dtype, T => {
//!         // T is now a concrete type (f32, f64, i32, etc.)
//!         Ok(std::mem::size_of::<T>())
//!     })
//! }
//! ```
//!
//! ## Supported Types
//!
//! - `F64` -> `f64`
//! - `F32` -> `f32`
//! - `F16` -> `half::f16` (requires "f16" feature)
//! - `BF16` -> `half::bf16` (requires "f16" feature)
//! - `I64`, `I32`, `I16`, `I8` -> `i64`, `i32`, `i16`, `i8`
//! - `U64`, `U32`, `U16`, `U8` -> `u64`, `u32`, `u16`, `u8`
//! - `Bool` -> `u8`

/// Internal helper macro to dispatch types requiring the "f16" feature.
/// Parameterized by type to avoid duplicating macro for F16 vs BF16.
#[macro_export]
#[doc(hidden)]
macro_rules! dispatch_f16_type {
    ($T:ident, $body:block, $dtype:expr, $type:ty) => {{
        #[cfg(feature = "f16")]
        {
            type $T = $type;
            $body
        }
        #[cfg(not(feature = "f16"))]
        {
            Err($crate::error::Error::FeatureRequired {
                dtype: $dtype,
                feature: "f16",
            })
        }
    }};
}

/// Macro for runtime dtype dispatch to typed operations.
///
/// The body must evaluate to a `Result`; the macro is an expression whose
/// value is the body's. Every element tag has a kernel, so the only error the
/// macro itself produces is `FeatureRequired` for half types.
#[macro_export]
macro_rules! dispatch_dtype {
    ($dtype:expr, $T:ident => $body:block) => {
        match $dtype {
            $crate::dtype::DType::F64 => {
                type $T = f64;
                $body
            }
            $crate::dtype::DType::F32 => {
                type $T = f32;
                $body
            }
            $crate::dtype::DType::F16 => {
                $crate::dispatch_f16_type!($T, $body, $dtype, half::f16)
            }
            $crate::dtype::DType::BF16 => {
                $crate::dispatch_f16_type!($T, $body, $dtype, half::bf16)
            }
            $crate::dtype::DType::I64 => {
                type $T = i64;
                $body
            }
            $crate::dtype::DType::I32 => {
                type $T = i32;
                $body
            }
            $crate::dtype::DType::I16 => {
                type $T = i16;
                $body
            }
            $crate::dtype::DType::I8 => {
                type $T = i8;
                $body
            }
            $crate::dtype::DType::U64 => {
                type $T = u64;
                $body
            }
            $crate::dtype::DType::U32 => {
                type $T = u32;
                $body
            }
            $crate::dtype::DType::U16 => {
                type $T = u16;
                $body
            }
            $crate::dtype::DType::U8 => {
                type $T = u8;
                $body
            }
            $crate::dtype::DType::Bool => {
                type $T = u8;
                $body
            }
        }
    };
}

/// Macro for runtime dispatch over the index dtypes (`I32`, `I64`).
#[macro_export]
macro_rules! dispatch_index_dtype {
    ($dtype:expr, $I:ident => $body:block, $error_op:expr) => {
        match $dtype {
            $crate::dtype::DType::I64 => {
                type $I = i64;
                $body
            }
            $crate::dtype::DType::I32 => {
                type $I = i32;
                $body
            }
            other => Err($crate::error::Error::UnsupportedDType {
                dtype: other,
                op: $error_op,
            }),
        }
    };
}
