//! DType coverage: typed entry points per element type, the byte-buffer
//! entry point and index dtype handling

use crate::common::create_cpu_client;
use scatter_elements::dtype::{DType, Element};
use scatter_elements::error::Error;
use scatter_elements::ops::{ScatterElementsOps, ScatterReduction};

// ============================================================================
// Typed Entry Point
// ============================================================================

fn check_typed<T: Element>(zero: T, a: T, b: T) {
    let client = create_cpu_client();
    let out = client
        .scatter_elements(&[zero; 4], &[2, 2], &[1i64, 0], &[1, 2], &[a, b], 0)
        .unwrap();
    assert_eq!(out, [zero, b, a, zero], "{}", T::DTYPE);
}

#[test]
fn test_typed_all_dtypes() {
    check_typed(0.0f64, 1.5, -2.5);
    check_typed(0.0f32, 1.5, -2.5);
    check_typed(0i64, i64::MAX, i64::MIN);
    check_typed(0i32, 7, -7);
    check_typed(0i16, 300, -300);
    check_typed(0i8, 100, -100);
    check_typed(0u64, u64::MAX, 1);
    check_typed(0u32, 9, 8);
    check_typed(0u16, 9, 8);
    check_typed(0u8, 255, 1);
}

#[cfg(feature = "f16")]
#[test]
fn test_typed_half_dtypes() {
    use half::{bf16, f16};
    check_typed(f16::ZERO, f16::from_f32(1.5), f16::from_f32(-0.25));
    check_typed(bf16::ZERO, bf16::from_f32(3.0), bf16::from_f32(-8.0));
}

#[cfg(feature = "f16")]
#[test]
fn test_half_reduce_add() {
    use half::f16;
    let client = create_cpu_client();
    let out = client
        .scatter_elements_reduce(
            &[f16::ONE; 2],
            &[2],
            &[0i64, 0],
            &[2],
            &[f16::from_f32(0.5), f16::from_f32(0.25)],
            0,
            ScatterReduction::Add,
        )
        .unwrap();
    assert_eq!(out, [f16::from_f32(1.75), f16::ONE]);
}

// ============================================================================
// Byte-Buffer Entry Point
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn scatter_bytes<T: Element>(
    dtype: DType,
    input: &[T],
    shape: &[usize],
    indices: &[i64],
    indices_shape: &[usize],
    updates: &[T],
    axis: isize,
    reduction: ScatterReduction,
) -> Result<Vec<T>, Error> {
    let client = create_cpu_client();
    let mut out = input.to_vec();
    client.scatter_elements_bytes(
        dtype,
        DType::I64,
        bytemuck::cast_slice(input),
        shape,
        bytemuck::cast_slice(indices),
        indices_shape,
        bytemuck::cast_slice(updates),
        axis,
        bytemuck::cast_slice_mut(&mut out),
        reduction,
    )?;
    Ok(out)
}

#[test]
fn test_bytes_matches_typed() {
    let client = create_cpu_client();
    let input: Vec<f32> = (0..12).map(|i| i as f32).collect();
    let indices = [2i64, 0, 1, 1, 0, 2];
    let updates = [-1.0f32, -2.0, -3.0, -4.0, -5.0, -6.0];

    let typed = client
        .scatter_elements(&input, &[3, 4], &indices, &[2, 3], &updates, 0)
        .unwrap();
    let bytes = scatter_bytes(
        DType::F32,
        &input,
        &[3, 4],
        &indices,
        &[2, 3],
        &updates,
        0,
        ScatterReduction::None,
    )
    .unwrap();
    assert_eq!(typed, bytes);
}

#[test]
fn test_bytes_integer_reduction() {
    let out = scatter_bytes(
        DType::I16,
        &[1i16, 1, 1],
        &[3],
        &[2, 2, 0],
        &[3],
        &[4i16, 5, 6],
        0,
        ScatterReduction::Mul,
    )
    .unwrap();
    assert_eq!(out, [6, 1, 20]);
}

#[test]
fn test_bytes_bool_overwrite() {
    let out = scatter_bytes(
        DType::Bool,
        &[0u8, 0, 0, 0],
        &[2, 2],
        &[1, 0],
        &[1, 2],
        &[1u8, 1],
        -1,
        ScatterReduction::None,
    )
    .unwrap();
    assert_eq!(out, [1, 1, 0, 0]);
}

#[test]
fn test_bytes_bool_rejects_reduction() {
    for reduction in [
        ScatterReduction::Add,
        ScatterReduction::Mul,
        ScatterReduction::Max,
        ScatterReduction::Min,
    ] {
        let err = scatter_bytes(DType::Bool, &[0u8; 2], &[2], &[0], &[1], &[1u8], 0, reduction)
            .unwrap_err();
        assert!(
            matches!(err, Error::UnsupportedDType { dtype: DType::Bool, .. }),
            "{reduction:?}: {err}"
        );
    }
}

#[test]
fn test_bytes_rejects_non_index_dtype() {
    let client = create_cpu_client();
    let input = [0.0f32; 4];
    let indices = [0u32, 1];
    let updates = [1.0f32, 2.0];
    let mut out = [0.0f32; 4];
    let err = client
        .scatter_elements_bytes(
            DType::F32,
            DType::U32,
            bytemuck::cast_slice(&input),
            &[4],
            bytemuck::cast_slice(&indices),
            &[2],
            bytemuck::cast_slice(&updates),
            0,
            bytemuck::cast_slice_mut(&mut out),
            ScatterReduction::None,
        )
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedDType { dtype: DType::U32, .. }));
}

#[test]
fn test_bytes_rejects_partial_element() {
    let client = create_cpu_client();
    let input = [0.0f64; 2];
    let indices = [0i64];
    let updates = [1.0f64];
    let mut out = [0.0f64; 2];
    let input_bytes: &[u8] = bytemuck::cast_slice(&input);
    let err = client
        .scatter_elements_bytes(
            DType::F64,
            DType::I64,
            &input_bytes[..15],
            &[2],
            bytemuck::cast_slice(&indices),
            &[1],
            bytemuck::cast_slice(&updates),
            0,
            bytemuck::cast_slice_mut(&mut out),
            ScatterReduction::None,
        )
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { arg: "input", .. }), "{err}");
}

#[test]
fn test_bytes_i32_indices() {
    let client = create_cpu_client();
    let input = [0u64; 3];
    let indices = [-1i32, 0];
    let updates = [5u64, 6];
    let mut out = [0u64; 3];
    client
        .scatter_elements_bytes(
            DType::U64,
            DType::I32,
            bytemuck::cast_slice(&input),
            &[3],
            bytemuck::cast_slice(&indices),
            &[2],
            bytemuck::cast_slice(&updates),
            0,
            bytemuck::cast_slice_mut(&mut out),
            ScatterReduction::None,
        )
        .unwrap();
    assert_eq!(out, [6, 0, 5]);
}

#[test]
fn test_bytes_integer_overflow_wraps() {
    let out = scatter_bytes(
        DType::U8,
        &[200u8, 0],
        &[2],
        &[0, 0],
        &[2],
        &[100u8, 200],
        0,
        ScatterReduction::Add,
    )
    .unwrap();
    assert_eq!(out, [244, 0]);

    let out = scatter_bytes(
        DType::I32,
        &[i32::MAX, 1],
        &[2],
        &[0],
        &[1],
        &[2i32],
        0,
        ScatterReduction::Mul,
    )
    .unwrap();
    assert_eq!(out, [-2, 1]);
}
