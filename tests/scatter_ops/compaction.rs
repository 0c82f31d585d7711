//! Compaction tests: N-D problems that reduce to the 2-D kernel and ones that
//! stay on the generic kernel must both agree with a direct scatter

use crate::common::{all_clients, assert_allclose_f64, overwrite, pseudo_random, reference_scatter};
use scatter_elements::ops::{ScatterElementsOps, ScatterReduction, compact_dims};

/// Scatter random data over the given shapes with every client and compare
/// against the reference, for overwrite and add.
fn check_against_reference(input_shape: &[usize], indices_shape: &[usize], axis: usize, seed: u64) {
    let input_len: usize = input_shape.iter().product();
    let indices_len: usize = indices_shape.iter().product();
    let extent = input_shape[axis] as i64;

    let input = pseudo_random(seed, input_len);
    let updates = pseudo_random(seed ^ 0xA5A5, indices_len);
    // indices in [-extent - 1, extent], so a few are out of range
    let indices: Vec<i64> = pseudo_random(seed.wrapping_mul(31), indices_len)
        .into_iter()
        .map(|r| (r * (2 * extent + 2) as f64) as i64 - extent - 1)
        .collect();

    let expected = reference_scatter(
        &input,
        input_shape,
        &indices,
        indices_shape,
        &updates,
        axis,
        overwrite,
    );
    let expected_add = reference_scatter(
        &input,
        input_shape,
        &indices,
        indices_shape,
        &updates,
        axis,
        |a, b| a + b,
    );

    for (name, client) in all_clients() {
        let out = client
            .scatter_elements(&input, input_shape, &indices, indices_shape, &updates, axis as isize)
            .unwrap();
        assert_eq!(out, expected, "{name}: {input_shape:?}/{indices_shape:?} axis {axis}");

        let out = client
            .scatter_elements_reduce(
                &input,
                input_shape,
                &indices,
                indices_shape,
                &updates,
                axis as isize,
                ScatterReduction::Add,
            )
            .unwrap();
        assert_allclose_f64(
            &out,
            &expected_add,
            1e-12,
            1e-12,
            &format!("{name}: add {input_shape:?}/{indices_shape:?} axis {axis}"),
        );
    }
}

// ============================================================================
// Shapes Reducing To 2-D
// ============================================================================

#[test]
fn test_last_axis_compacts_to_2d_inner() {
    let c = compact_dims(&[2, 3, 4, 9], &[2, 3, 4, 5], 3);
    assert!(c.is_2d());
    assert_eq!(c.axis, 1);
    check_against_reference(&[2, 3, 4, 9], &[2, 3, 4, 5], 3, 1);
}

#[test]
fn test_first_axis_compacts_to_2d_outer() {
    let c = compact_dims(&[6, 3, 4, 5], &[2, 3, 4, 5], 0);
    assert!(c.is_2d());
    assert_eq!(c.axis, 0);
    check_against_reference(&[6, 3, 4, 5], &[2, 3, 4, 5], 0, 2);
}

#[test]
fn test_unit_axes_compact_away() {
    let c = compact_dims(&[1, 7, 1, 3], &[1, 4, 1, 3], 1);
    assert!(c.is_2d());
    assert_eq!(c.input.as_slice(), &[7, 3]);
    check_against_reference(&[1, 7, 1, 3], &[1, 4, 1, 3], 1, 3);
}

#[test]
fn test_large_2d_spans_many_workers() {
    check_against_reference(&[64, 300], &[48, 300], 0, 4);
    check_against_reference(&[300, 64], &[300, 48], 1, 5);
}

// ============================================================================
// Shapes Staying N-D
// ============================================================================

#[test]
fn test_middle_axis_generic() {
    let c = compact_dims(&[2, 3, 8, 4, 5], &[2, 3, 1, 4, 5], 2);
    assert_eq!(c.ndim(), 3);
    check_against_reference(&[2, 3, 8, 4, 5], &[2, 3, 1, 4, 5], 2, 6);
    check_against_reference(&[2, 3, 8, 4, 5], &[2, 3, 6, 4, 5], 2, 7);
}

#[test]
fn test_partial_extents_generic() {
    // indices cover a sub-box on both sides of the axis
    let c = compact_dims(&[4, 5, 6], &[3, 5, 2], 1);
    assert_eq!(c.ndim(), 3);
    check_against_reference(&[4, 5, 6], &[3, 5, 2], 1, 8);
    check_against_reference(&[4, 5, 6, 2], &[4, 2, 3, 2], 2, 9);
}

#[test]
fn test_one_dimensional_generic() {
    check_against_reference(&[17], &[40], 0, 10);
}

#[test]
fn test_rank_six() {
    check_against_reference(&[2, 2, 3, 2, 3, 2], &[2, 1, 3, 2, 2, 2], 4, 11);
    check_against_reference(&[2, 2, 3, 2, 3, 2], &[2, 2, 3, 2, 3, 2], 0, 12);
}
