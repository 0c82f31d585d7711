//! CPU implementation of scatter-elements operations.

use crate::dtype::{DType, Element, IndexElement};
use crate::error::Result;
use crate::ops::{CombineOp, ScatterElementsOps, ScatterReduction};
use crate::runtime::cpu::{
    CpuClient,
    helpers::{scatter_elements_bytes_impl, scatter_elements_impl},
};

/// ScatterElementsOps implementation for CPU runtime.
impl ScatterElementsOps for CpuClient {
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
    ) -> Result<()> {
        scatter_elements_impl(
            self,
            Some(input),
            output,
            input_shape,
            indices,
            indices_shape,
            updates,
            axis,
            op,
        )
    }

    fn scatter_elements_inplace<T: Element, I: IndexElement, C: CombineOp<T>>(
        &self,
        data: &mut [T],
        shape: &[usize],
        indices: &[I],
        indices_shape: &[usize],
        updates: &[T],
        axis: isize,
        op: &C,
    ) -> Result<()> {
        scatter_elements_impl(
            self,
            None,
            data,
            shape,
            indices,
            indices_shape,
            updates,
            axis,
            op,
        )
    }

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
    ) -> Result<()> {
        scatter_elements_bytes_impl(
            self,
            dtype,
            index_dtype,
            input,
            input_shape,
            indices,
            indices_shape,
            updates,
            axis,
            output,
            reduction,
        )
    }
}
