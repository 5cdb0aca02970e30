//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use gfxmath::{Mat4, float_types::Real, gl::ContextHandle};
use nalgebra::Matrix4;

/// Tests in one binary share the global context registry and run in
/// parallel, so each one binds its own handle.
pub fn unique_handle() -> ContextHandle {
    static NEXT: AtomicUsize = AtomicUsize::new(0x1000);
    ContextHandle(NEXT.fetch_add(1, Ordering::Relaxed))
}

/// Checks if two Real values are approximately equal
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Invertible matrix with determinant -45. Each literal row is a column.
pub fn sample_matrix() -> Mat4 {
    Mat4::from_array([
        2.0, 0.0, 0.0, 1.0, //
        1.0, 3.0, 0.0, 0.0, //
        0.0, 1.0, 4.0, 0.0, //
        5.0, -2.0, 1.0, 1.0,
    ])
}

/// Mostly non-zero entries, determinant -121.
pub fn dense_matrix() -> Mat4 {
    let mut m = [0.0; 16];
    for (i, v) in m.iter_mut().enumerate() {
        *v = ((i * 7 + 3) % 11) as Real - 5.0;
    }
    Mat4::from_array(m)
}

pub fn to_nalgebra(m: &Mat4) -> Matrix4<Real> {
    Matrix4::from_column_slice(&m.m)
}

pub fn max_abs_diff(a: &Mat4, b: &Mat4) -> Real {
    a.m.iter()
        .zip(b.m.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, Real::max)
}
