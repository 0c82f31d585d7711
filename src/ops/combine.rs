//! Combine operations applied at a scatter destination
//!
//! The scatter machinery (index mapping, compaction, kernels) is written once
//! against [`CombineOp`]; overwrite and the reductions differ only in the op
//! passed down to the kernels.

use crate::dtype::Element;

/// Per-element function applied at a computed destination.
///
/// `dst` is the output element the index selected, `src` the update value at
/// the same flat position as the index.
pub trait CombineOp<T>: Send + Sync {
    /// Combine `src` into `dst`.
    fn combine(&self, dst: &mut T, src: T);
}

/// Overwrite the destination (`*dst = src`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Assign;

/// Accumulate into the destination (`*dst = *dst + src`, wrapping for integers).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Add;

/// Multiply into the destination (`*dst = *dst * src`, wrapping for integers).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mul;

/// Keep the larger of destination and source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max;

/// Keep the smaller of destination and source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Min;

impl<T: Element> CombineOp<T> for Assign {
    #[inline(always)]
    fn combine(&self, dst: &mut T, src: T) {
        *dst = src;
    }
}

impl<T: Element> CombineOp<T> for Add {
    #[inline(always)]
    fn combine(&self, dst: &mut T, src: T) {
        *dst = dst.reduce_add(src);
    }
}

impl<T: Element> CombineOp<T> for Mul {
    #[inline(always)]
    fn combine(&self, dst: &mut T, src: T) {
        *dst = dst.reduce_mul(src);
    }
}

impl<T: Element> CombineOp<T> for Max {
    #[inline(always)]
    fn combine(&self, dst: &mut T, src: T) {
        if src > *dst {
            *dst = src;
        }
    }
}

impl<T: Element> CombineOp<T> for Min {
    #[inline(always)]
    fn combine(&self, dst: &mut T, src: T) {
        if src < *dst {
            *dst = src;
        }
    }
}

/// Runtime tag selecting a combine operation.
///
/// Names follow the `reduction` attribute of ONNX `ScatterElements`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScatterReduction {
    /// Overwrite (no reduction)
    #[default]
    None,
    /// Sum colliding updates into the destination
    Add,
    /// Multiply colliding updates into the destination
    Mul,
    /// Keep the maximum
    Max,
    /// Keep the minimum
    Min,
}

impl ScatterReduction {
    /// Name as used in model files ("none", "add", "mul", "max", "min")
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Add => "add",
            Self::Mul => "mul",
            Self::Max => "max",
            Self::Min => "min",
        }
    }

    /// Parse a reduction name; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Self::None),
            "add" => Some(Self::Add),
            "mul" => Some(Self::Mul),
            "max" => Some(Self::Max),
            "min" => Some(Self::Min),
            _ => None,
        }
    }
}

/// Bind `$op` to the combine op named by a [`ScatterReduction`] and run `$body`.
#[macro_export]
#[doc(hidden)]
macro_rules! with_combine_op {
    ($reduction:expr, $op:ident => $body:expr) => {
        match $reduction {
            $crate::ops::ScatterReduction::None => {
                let $op = &$crate::ops::Assign;
                $body
            }
            $crate::ops::ScatterReduction::Add => {
                let $op = &$crate::ops::Add;
                $body
            }
            $crate::ops::ScatterReduction::Mul => {
                let $op = &$crate::ops::Mul;
                $body
            }
            $crate::ops::ScatterReduction::Max => {
                let $op = &$crate::ops::Max;
                $body
            }
            $crate::ops::ScatterReduction::Min => {
                let $op = &$crate::ops::Min;
                $body
            }
        }
    };
}
