//! Scatter-elements helpers for CPU buffers

use super::super::CpuClient;
use super::super::kernels;
use crate::dtype::{DType, Element, IndexElement};
use crate::error::{Error, Result};
use crate::ops::common::compact_dims;
use crate::ops::{CombineOp, ScatterReduction};
use crate::tensor::Layout;
use crate::{dispatch_dtype, dispatch_index_dtype, with_combine_op};

/// Scatter `updates` into `output` along `axis`.
///
/// When `input` is given it is copied into `output` first; otherwise `output`
/// already holds the input (in-place scatter). All validation happens before
/// `output` is touched.
#[allow(clippy::too_many_arguments)]
pub fn scatter_elements_impl<T: Element, I: IndexElement, C: CombineOp<T>>(
    client: &CpuClient,
    input: Option<&[T]>,
    output: &mut [T],
    input_shape: &[usize],
    indices: &[I],
    indices_shape: &[usize],
    updates: &[T],
    axis: isize,
    op: &C,
) -> Result<()> {
    let input_layout = Layout::contiguous(input_shape);
    let indices_layout = Layout::contiguous(indices_shape);

    // Validate buffers against their descriptors
    if output.len() != input_layout.elem_count() {
        return Err(Error::buffer_len("output", input_layout.elem_count(), output.len()));
    }
    if let Some(input) = input {
        if input.len() != output.len() {
            return Err(Error::buffer_len("input", output.len(), input.len()));
        }
    }
    if indices.len() != indices_layout.elem_count() {
        return Err(Error::buffer_len("indices", indices_layout.elem_count(), indices.len()));
    }
    if updates.len() != indices.len() {
        return Err(Error::buffer_len("updates", indices.len(), updates.len()));
    }

    // Validate axis and shapes
    let axis = input_layout.normalize_axis(axis)?;
    if indices_layout.ndim() != input_layout.ndim() {
        return Err(Error::shape_mismatch(input_shape, indices_shape));
    }
    let fits = input_shape
        .iter()
        .zip(indices_shape)
        .enumerate()
        .all(|(d, (&inp, &idx))| d == axis || idx <= inp);
    if !fits {
        return Err(Error::shape_mismatch(input_shape, indices_shape));
    }

    if let Some(input) = input {
        output.copy_from_slice(input);
    }

    if input_layout.is_empty() || indices_layout.is_empty() {
        log::trace!(
            "scatter_elements: nothing to scatter (input {:?}, indices {:?})",
            input_shape,
            indices_shape
        );
        return Ok(());
    }

    let compacted = compact_dims(input_shape, indices_shape, axis);

    if compacted.is_2d() {
        let path = if compacted.axis == 0 { "2d-outer" } else { "2d-inner" };
        log::debug!(
            "scatter_elements<{}, {}>: input {:?} indices {:?} axis {} -> {:?}/{:?} axis {} via {}",
            T::DTYPE,
            I::DTYPE,
            input_shape,
            indices_shape,
            axis,
            compacted.input,
            compacted.indices,
            compacted.axis,
            path
        );
        kernels::scatter_2d_kernel(
            client,
            output,
            [compacted.input[0], compacted.input[1]],
            indices,
            [compacted.indices[0], compacted.indices[1]],
            updates,
            compacted.axis,
            op,
        );
    } else {
        log::debug!(
            "scatter_elements<{}, {}>: {:?}/{:?} axis {} -> {:?}/{:?} axis {} via generic",
            T::DTYPE,
            I::DTYPE,
            input_shape,
            indices_shape,
            axis,
            compacted.input,
            compacted.indices,
            compacted.axis
        );
        kernels::scatter_generic_kernel(
            client,
            output,
            &compacted.input_layout(),
            indices,
            &compacted.indices_layout(),
            updates,
            compacted.axis,
            op,
        );
    }

    Ok(())
}

/// Type-erased scatter over byte buffers.
///
/// Picks the kernel instantiation from `dtype` and `index_dtype`. Boolean
/// tensors only support overwrite.
#[allow(clippy::too_many_arguments)]
pub fn scatter_elements_bytes_impl(
    client: &CpuClient,
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
) -> Result<()> {
    if dtype.is_bool() && reduction != ScatterReduction::None {
        return Err(Error::unsupported_dtype(dtype, "scatter_elements_reduce"));
    }

    dispatch_dtype!(dtype, T => {
        dispatch_index_dtype!(index_dtype, I => {
            let input = cast_buffer::<T>("input", input)?;
            let indices = cast_buffer::<I>("indices", indices)?;
            let updates = cast_buffer::<T>("updates", updates)?;
            let output = cast_buffer_mut::<T>("output", output)?;
            with_combine_op!(reduction, op => scatter_elements_impl(
                client,
                Some(input),
                output,
                input_shape,
                indices,
                indices_shape,
                updates,
                axis,
                op,
            ))
        }, "scatter_elements")
    })
}

fn cast_buffer<'a, T: bytemuck::Pod>(arg: &'static str, bytes: &'a [u8]) -> Result<&'a [T]> {
    bytemuck::try_cast_slice(bytes).map_err(|e| {
        Error::invalid_argument(
            arg,
            format!(
                "cannot view {} bytes as {}: {e}",
                bytes.len(),
                std::any::type_name::<T>()
            ),
        )
    })
}

fn cast_buffer_mut<'a, T: bytemuck::Pod>(
    arg: &'static str,
    bytes: &'a mut [u8],
) -> Result<&'a mut [T]> {
    let len = bytes.len();
    bytemuck::try_cast_slice_mut(bytes).map_err(|e| {
        Error::invalid_argument(
            arg,
            format!(
                "cannot view {len} bytes as {}: {e}",
                std::any::type_name::<T>()
            ),
        )
    })
}
