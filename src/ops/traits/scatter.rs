//! Scatter-elements operation trait.

use crate::dtype::{DType, Element, IndexElement};
use crate::error::Result;
use crate::ops::{CombineOp, ScatterReduction};

/// Scatter-elements operations
///
/// For a 3D tensor with axis=1:
/// `` `out[i][indices[i][j][k]][k] = combine(out[..], updates[i][j][k])` ``
///
/// Every output element not targeted by a valid index keeps its input value.
/// Index values may be negative (counted from the end of the axis); values
/// outside `[-input_shape[axis], input_shape[axis])` are skipped silently.
/// When several indices target the same element the combine op decides the
/// result; for overwrite, one of the colliding updates wins.
pub trait ScatterElementsOps {
    /// Scatter `updates` into a copy of `input` along `axis`, overwriting.
    ///
    /// # Arguments
    ///
    /// * `input` - Input tensor data (row-major)
    /// * `input_shape` - Shape of the input (and output) tensor
    /// * `indices` - Index tensor data, same rank as input
    /// * `indices_shape` - Shape of the indices (and updates) tensor
    /// * `updates` - Values to scatter, one per index
    /// * `axis` - Scatter axis in `[-rank, rank)`
    ///
    /// # Returns
    ///
    /// New buffer with the input's shape holding the scattered result
    #[allow(clippy::too_many_arguments)]
    fn scatter_elements<T: Element, I: IndexElement>(
        &self,
        input: &[T],
        input_shape: &[usize],
        indices: &[I],
        indices_shape: &[usize],
        updates: &[T],
        axis: isize,
    ) -> Result<Vec<T>> {
        self.scatter_elements_reduce(
            input,
            input_shape,
            indices,
            indices_shape,
            updates,
            axis,
            ScatterReduction::None,
        )
    }

    /// Scatter with the combine op selected by `reduction`.
    #[allow(clippy::too_many_arguments)]
    fn scatter_elements_reduce<T: Element, I: IndexElement>(
        &self,
        input: &[T],
        input_shape: &[usize],
        indices: &[I],
        indices_shape: &[usize],
        updates: &[T],
        axis: isize,
        reduction: ScatterReduction,
    ) -> Result<Vec<T>> {
        let mut output = input.to_vec();
        crate::with_combine_op!(reduction, op => {
            self.scatter_elements_inplace(
                &mut output,
                input_shape,
                indices,
                indices_shape,
                updates,
                axis,
                op,
            )
        })?;
        Ok(output)
    }

    /// Copy `input` into `output`, then scatter `updates` into `output`.
    ///
    /// `output` must hold exactly as many elements as `input`.
    #[allow(clippy::too_many_arguments)]
    fn scatter_elements_into<T: Element, I: IndexElement, C: CombineOp<T>>(
        &self,
        input: &[T],
        input_shape: &[usize],
        indices: &[I],
        indices_shape: &[usize],
        updates: &[T],
        axis: isize,
        output: &mut [T],
        op: &C,
    ) -> Result<()>;

    /// Scatter `updates` into `data`, which serves as both input and output.
    #[allow(clippy::too_many_arguments)]
    fn scatter_elements_inplace<T: Element, I: IndexElement, C: CombineOp<T>>(
        &self,
        data: &mut [T],
        shape: &[usize],
        indices: &[I],
        indices_shape: &[usize],
        updates: &[T],
        axis: isize,
        op: &C,
    ) -> Result<()>;

    /// Type-erased scatter over raw byte buffers.
    ///
    /// `dtype` tags `input`, `updates` and `output`; `index_dtype` (I32 or
    /// I64) tags `indices`. Buffers must be aligned for their element type.
    #[allow(clippy::too_many_arguments)]
    fn scatter_elements_bytes(
        &self,
        dtype: DType,
        index_dtype: DType,
        input: &[u8],
        input_shape: &[usize],
        indices: &[u8],
        indices_shape: &[usize],
        updates: &[u8],
        axis: isize,
        output: &mut [u8],
        reduction: ScatterReduction,
    ) -> Result<()>;
}
