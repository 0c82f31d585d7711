//! Strided index mapping for scatter
//!
//! Maps a flat position in the indices/updates buffer to the linear offset of
//! its destination in the output buffer.

use crate::dtype::IndexElement;

/// Normalize a raw index value against the extent of the scatter axis.
///
/// Negative values count from the end. Anything still outside `[0, extent)`
/// after normalization is invalid and yields `None`; it is never clamped.
#[inline(always)]
pub fn normalize_index(value: i64, extent: usize) -> Option<usize> {
    let extent = extent as i64;
    let value = if value < 0 { value + extent } else { value };
    if (0..extent).contains(&value) {
        Some(value as usize)
    } else {
        None
    }
}

/// Maps indices-buffer positions onto output offsets for an arbitrary rank.
///
/// `input_shape`/`input_strides` describe the output (which has the input's
/// extents), `indices_strides` the row-major strides of the indices tensor.
#[derive(Debug, Clone, Copy)]
pub struct IndexMap<'a> {
    input_shape: &'a [usize],
    input_strides: &'a [usize],
    indices_strides: &'a [usize],
    axis: usize,
}

impl<'a> IndexMap<'a> {
    /// Create a mapper. All three slices must have the same length and
    /// `axis` must be below it.
    pub fn new(
        input_shape: &'a [usize],
        input_strides: &'a [usize],
        indices_strides: &'a [usize],
        axis: usize,
    ) -> Self {
        debug_assert_eq!(input_shape.len(), input_strides.len());
        debug_assert_eq!(input_shape.len(), indices_strides.len());
        debug_assert!(axis < input_shape.len());
        Self {
            input_shape,
            input_strides,
            indices_strides,
            axis,
        }
    }

    /// Linear output offset for the element at flat `position`, or `None`
    /// when its index value is out of range for the scatter axis.
    ///
    /// Every coordinate except the scatter axis is taken from `position`
    /// itself; the scatter coordinate is read from `indices[position]`.
    #[inline]
    pub fn offset<I: IndexElement>(&self, position: usize, indices: &[I]) -> Option<usize> {
        let mut remaining = position;
        let mut offset = 0usize;
        for d in 0..self.input_shape.len() {
            let stride = self.indices_strides[d];
            let mut coord = remaining / stride;
            remaining %= stride;
            if d == self.axis {
                coord = normalize_index(indices[position].to_i64(), self.input_shape[d])?;
            }
            offset += self.input_strides[d] * coord;
        }
        Some(offset)
    }
}
