//! Layout: shape and strides of a contiguous tensor buffer

use super::{Shape, Strides};
use crate::error::{Error, Result};

/// Layout describes how a flat buffer is viewed as a row-major tensor
///
/// Address of element at indices [i0, i1, ..., in]:
///   i0 * strides[0] + i1 * strides[1] + ... + in * strides[n]
///
/// Only contiguous layouts exist here: the scatter kernels compute linear
/// offsets directly from these strides.
#[derive(Clone, PartialEq, Eq)]
pub struct Layout {
    /// Shape: size along each dimension
    shape: Shape,
    /// Strides: offset (in elements) between consecutive elements along each dimension
    strides: Strides,
}

impl Layout {
    /// Create a new contiguous (row-major/C-order) layout from a shape
    ///
    /// # Example
    /// ```
    /// use scatter_elements::tensor::Layout;
    /// let layout = Layout::contiguous(&[2, 3, 4]);
    /// assert_eq!(layout.shape(), &[2, 3, 4]);
    /// assert_eq!(layout.strides(), &[12, 4, 1]);
    /// ```
    pub fn contiguous(shape: &[usize]) -> Self {
        Self {
            shape: Shape::from(shape),
            strides: Strides::contiguous(shape),
        }
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Total number of elements
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.shape.elem_count()
    }

    /// Check if the layout describes no elements at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elem_count() == 0
    }

    /// Normalize a possibly negative axis into `[0, ndim)`.
    ///
    /// Returns `InvalidDimension` when the axis is outside `[-ndim, ndim)`.
    pub fn normalize_axis(&self, axis: isize) -> Result<usize> {
        let ndim = self.ndim();
        let adjusted = if axis < 0 { axis + ndim as isize } else { axis };
        if adjusted < 0 || adjusted as usize >= ndim {
            return Err(Error::InvalidDimension { dim: axis, ndim });
        }
        Ok(adjusted as usize)
    }
}

impl std::fmt::Debug for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layout")
            .field("shape", &self.shape)
            .field("strides", &self.strides)
            .finish()
    }
}
