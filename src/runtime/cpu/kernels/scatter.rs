//! Scatter-elements kernels
//!
//! Two kernels share one concurrency model. A *lane* is the set of indices
//! positions that agree on every coordinate except the scatter axis. Lanes
//! write pairwise disjoint output elements, so they run concurrently; inside a
//! lane positions are applied in increasing flat order. For overwrite this
//! makes the last colliding update along the axis the winner.

use crate::dtype::{Element, IndexElement};
use crate::ops::CombineOp;
use crate::ops::common::{IndexMap, normalize_index};
use crate::runtime::cpu::CpuClient;
use crate::tensor::Layout;
use std::marker::PhantomData;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Output buffer shared between lanes.
///
/// Hands out per-element access through a raw pointer so lanes on different
/// threads can each combine into their own destinations. Every access is
/// bounds-checked.
pub(crate) struct LaneOutput<'a, T> {
    ptr: *mut T,
    len: usize,
    _marker: PhantomData<&'a mut [T]>,
}

// SAFETY: access goes through `combine_at`, whose contract forbids two lanes
// touching the same element.
unsafe impl<T: Send> Send for LaneOutput<'_, T> {}
unsafe impl<T: Send> Sync for LaneOutput<'_, T> {}

impl<'a, T> LaneOutput<'a, T> {
    pub(crate) fn new(output: &'a mut [T]) -> Self {
        Self {
            ptr: output.as_mut_ptr(),
            len: output.len(),
            _marker: PhantomData,
        }
    }

    /// Combine `src` into the element at `offset`.
    ///
    /// # Safety
    /// No other thread may access `offset` for the lifetime of this call.
    #[inline(always)]
    pub(crate) unsafe fn combine_at<C: CombineOp<T>>(&self, offset: usize, src: T, op: &C) {
        assert!(
            offset < self.len,
            "scatter offset {offset} out of bounds for output of {} elements",
            self.len
        );
        let dst = unsafe { &mut *self.ptr.add(offset) };
        op.combine(dst, src);
    }
}

/// Run `lane` for every lane index in `0..lanes`.
///
/// `lane_len` is the number of positions one lane processes; it scales the
/// client's per-worker minimum so that small lanes get batched together.
fn for_each_lane<F>(client: &CpuClient, lanes: usize, lane_len: usize, lane: F)
where
    F: Fn(usize) + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        if client.parallel_enabled() && lanes > 1 {
            let min_len = (client.rayon_min_len() / lane_len.max(1)).max(1);
            client.install_parallelism(|| {
                (0..lanes)
                    .into_par_iter()
                    .with_min_len(min_len)
                    .for_each(&lane);
            });
            return;
        }
    }

    #[cfg(not(feature = "rayon"))]
    let _ = (client, lane_len);

    (0..lanes).for_each(lane);
}

/// Generic N-dimensional scatter kernel.
///
/// Visits every position of `indices`, maps it through [`IndexMap`] and
/// combines the matching update into `output`. Positions whose index value is
/// out of range for the scatter axis are skipped.
///
/// # Arguments
///
/// * `output` - Output buffer laid out by `input_layout`, already holding the input
/// * `input_layout` - Row-major layout of the (possibly compacted) input
/// * `indices` - Index values, row-major over `indices_layout`
/// * `indices_layout` - Row-major layout of indices and updates
/// * `updates` - One update per index
/// * `axis` - Normalized scatter axis
///
/// Every non-axis extent of `indices_layout` must not exceed the matching
/// extent of `input_layout`, and `indices_layout` must be non-empty.
#[allow(clippy::too_many_arguments)]
pub fn scatter_generic_kernel<T: Element, I: IndexElement, C: CombineOp<T>>(
    client: &CpuClient,
    output: &mut [T],
    input_layout: &Layout,
    indices: &[I],
    indices_layout: &Layout,
    updates: &[T],
    axis: usize,
    op: &C,
) {
    let map = IndexMap::new(
        input_layout.shape(),
        input_layout.strides(),
        indices_layout.strides(),
        axis,
    );
    let axis_len = indices_layout.shape()[axis];
    let inner = indices_layout.strides()[axis];
    let lanes = indices_layout.elem_count() / axis_len;
    let out = LaneOutput::new(output);

    for_each_lane(client, lanes, axis_len, |lane| {
        let base = (lane / inner) * axis_len * inner + lane % inner;
        for k in 0..axis_len {
            let position = base + k * inner;
            if let Some(offset) = map.offset(position, indices) {
                // SAFETY: positions of different lanes differ in a non-axis
                // coordinate, so their destinations never coincide.
                unsafe { out.combine_at(offset, updates[position], op) };
            }
        }
    });
}

/// Two-dimensional scatter kernel.
///
/// `input_dims` and `indices_dims` are the compacted `[rows, cols]` extents.
/// With `axis == 1` every row of the indices is a lane and maps onto the
/// output row of the same number; with `axis == 0` every column is a lane.
#[allow(clippy::too_many_arguments)]
pub fn scatter_2d_kernel<T: Element, I: IndexElement, C: CombineOp<T>>(
    client: &CpuClient,
    output: &mut [T],
    input_dims: [usize; 2],
    indices: &[I],
    indices_dims: [usize; 2],
    updates: &[T],
    axis: usize,
    op: &C,
) {
    let [in_rows, row_size] = input_dims;
    let [idx_rows, idx_cols] = indices_dims;

    if axis == 0 {
        let out = LaneOutput::new(output);
        for_each_lane(client, idx_cols, idx_rows, |col| {
            for row in 0..idx_rows {
                let position = row * idx_cols + col;
                if let Some(dest) = normalize_index(indices[position].to_i64(), in_rows) {
                    // SAFETY: each lane owns one output column.
                    unsafe { out.combine_at(dest * row_size + col, updates[position], op) };
                }
            }
        });
        return;
    }

    let scatter_row = |((out_row, idx_row), upd_row): ((&mut [T], &[I]), &[T])| {
        for (&index, &update) in idx_row.iter().zip(upd_row) {
            if let Some(dest) = normalize_index(index.to_i64(), row_size) {
                op.combine(&mut out_row[dest], update);
            }
        }
    };

    #[cfg(feature = "rayon")]
    {
        if client.parallel_enabled() && idx_rows > 1 {
            let min_len = (client.rayon_min_len() / idx_cols.max(1)).max(1);
            client.install_parallelism(|| {
                output
                    .par_chunks_mut(row_size)
                    .zip(indices.par_chunks(idx_cols))
                    .zip(updates.par_chunks(idx_cols))
                    .with_min_len(min_len)
                    .for_each(scatter_row);
            });
            return;
        }
    }

    #[cfg(not(feature = "rayon"))]
    let _ = client;

    output
        .chunks_mut(row_size)
        .zip(indices.chunks(idx_cols))
        .zip(updates.chunks(idx_cols))
        .for_each(scatter_row);
}
