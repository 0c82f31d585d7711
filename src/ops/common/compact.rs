//! Dimension compaction for scatter
//!
//! A scatter over N dimensions can often be expressed over fewer: adjacent
//! axes on the same side of the scatter axis whose extents agree in both the
//! input and the indices tensors address memory identically in both, so they
//! can be folded into a single axis. When every non-scatter axis folds away
//! the problem becomes two-dimensional and the 2-D kernel applies.

use crate::tensor::{Layout, Shape};

/// Input/indices shapes after compaction, with the relocated scatter axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactedShapes {
    /// Reduced input (and output) extents
    pub input: Shape,
    /// Reduced indices (and updates) extents
    pub indices: Shape,
    /// Position of the scatter axis within the reduced shapes
    pub axis: usize,
}

impl CompactedShapes {
    /// Rank of the reduced problem.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.input.ndim()
    }

    /// Whether the reduced problem is exactly two-dimensional.
    #[inline]
    pub fn is_2d(&self) -> bool {
        self.ndim() == 2
    }

    /// Row-major layout of the reduced input.
    pub fn input_layout(&self) -> Layout {
        Layout::contiguous(&self.input)
    }

    /// Row-major layout of the reduced indices.
    pub fn indices_layout(&self) -> Layout {
        Layout::contiguous(&self.indices)
    }
}

/// Fold mergeable axes of `input`/`indices` around the scatter `axis`.
///
/// Both shapes must have the same rank and `axis` must be normalized. The
/// result maps every indices position to the same output offset as the
/// original shapes do.
///
/// Construction runs innermost-first:
/// 1. the run of innermost axes with equal extents folds into one entry,
///    the remaining axes down to the scatter axis are kept as they are;
/// 2. the scatter axis is kept on its own;
/// 3. the run of outermost axes with equal extents folds into one entry,
///    the remaining axes up to the scatter axis are kept as they are.
///
/// Folded entries that end up with extent 1 are dropped. The sequences are
/// reversed back into outermost-first order at the end.
pub fn compact_dims(input: &[usize], indices: &[usize], axis: usize) -> CompactedShapes {
    debug_assert_eq!(input.len(), indices.len());
    debug_assert!(axis < input.len());

    let rank = input.len();
    let mut eff_input = Shape::with_capacity(rank);
    let mut eff_indices = Shape::with_capacity(rank);

    // Inner side: fold from the last axis toward the scatter axis.
    if axis + 1 < rank {
        let mut folded = 1usize;
        let mut i = rank - 1;
        while i > axis && input[i] == indices[i] {
            folded *= input[i];
            i -= 1;
        }
        if folded != 1 {
            eff_input.push(folded);
            eff_indices.push(folded);
        }
        while i > axis {
            eff_input.push(input[i]);
            eff_indices.push(indices[i]);
            i -= 1;
        }
    }

    let axis_from_inner = eff_input.ndim();
    eff_input.push(input[axis]);
    eff_indices.push(indices[axis]);

    // Outer side: fold from the first axis toward the scatter axis.
    if axis > 0 {
        let mut folded = 1usize;
        let mut stop = 0usize;
        while stop < axis && input[stop] == indices[stop] {
            folded *= input[stop];
            stop += 1;
        }
        for i in (stop..axis).rev() {
            eff_input.push(input[i]);
            eff_indices.push(indices[i]);
        }
        if folded != 1 {
            eff_input.push(folded);
            eff_indices.push(folded);
        }
    }

    eff_input.reverse();
    eff_indices.reverse();
    let new_axis = eff_input.ndim() - 1 - axis_from_inner;

    CompactedShapes {
        input: eff_input,
        indices: eff_indices,
        axis: new_axis,
    }
}
