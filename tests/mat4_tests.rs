mod support;

use approx::assert_relative_eq;
use gfxmath::{
    Mat3, Mat4, MathError, Quaternion, Vec3, Vec4,
    float_types::{FRAC_PI_2, PI, Real},
};
use support::{dense_matrix, max_abs_diff, sample_matrix, to_nalgebra};

#[test]
fn identity_is_neutral_for_multiply() {
    for m in [sample_matrix(), dense_matrix(), Mat4::from_translation(1.0, 2.0, 3.0)] {
        assert_eq!(Mat4::multiply(&Mat4::identity(), &m), m);
        assert_eq!(Mat4::multiply(&m, &Mat4::identity()), m);
    }
}

#[test]
fn inverse_round_trips_to_identity() {
    for m in [sample_matrix(), dense_matrix()] {
        let inv = m.inverse().expect("matrix is invertible");
        let product = m * inv;
        assert!(
            max_abs_diff(&product, &Mat4::identity()) < 1e-4,
            "m * m^-1 = {:?}",
            product
        );
    }
}

#[test]
fn inverse_agrees_with_nalgebra() {
    let m = dense_matrix();
    let ours = m.inverse().expect("matrix is invertible");
    let theirs = to_nalgebra(&m).try_inverse().expect("nalgebra inverts it too");
    for (a, b) in ours.m.iter().zip(theirs.as_slice()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-4);
    }
}

#[test]
fn product_agrees_with_nalgebra() {
    let a = sample_matrix();
    let b = dense_matrix();
    let ours = a * b;
    let theirs = to_nalgebra(&a) * to_nalgebra(&b);
    assert_eq!(ours, Mat4::from(theirs));
}

#[test]
fn all_zero_row_is_singular() {
    let mut m = dense_matrix();
    // zero out row 2
    for col in 0..4 {
        m.m[col * 4 + 2] = 0.0;
    }
    assert_eq!(m.determinant(), 0.0);
    assert_eq!(m.inverse(), Err(MathError::SingularMatrix));
}

#[test]
fn transpose_is_an_involution() {
    let m = dense_matrix();
    assert_eq!(m.transpose().transpose(), m);
    assert_eq!(m.transpose()[(1, 3)], m[(3, 1)]);
}

#[test]
fn determinant_of_known_matrix() {
    assert_eq!(sample_matrix().determinant(), -45.0);
    assert_eq!(dense_matrix().determinant(), -121.0);
}

#[test]
fn is_identity_is_exact() {
    assert!(Mat4::identity().is_identity());
    assert!(Mat4::default().is_identity());
    let mut nearly = Mat4::identity();
    nearly.m[0] = 1.0 + Real::EPSILON;
    assert!(!nearly.is_identity());
    let mut negative_zero = Mat4::identity();
    negative_zero.m[4] = -0.0;
    assert!(negative_zero.is_identity());
}

#[test]
fn approx_eq_is_relative_for_large_entries() {
    let a = Mat4::from_translation(1000.0, 0.0, 0.0);
    let b = Mat4::from_translation(1000.05, 0.0, 0.0);
    assert!(a.approx_eq(&b, 1e-4));
    assert!(!a.approx_eq(&b, 1e-6));
}

#[test]
fn translation_moves_points_not_directions() {
    let t = Mat4::from_translation(1.0, -2.0, 3.0);
    assert_eq!(Vec3::new(1.0, 1.0, 1.0).transform(&t), Vec3::new(2.0, -1.0, 4.0));
    assert_eq!(Vec3::POS_X.transform_normal(&t), Vec3::POS_X);
    assert_eq!(t.extract_translation(), Vec3::new(1.0, -2.0, 3.0));
}

#[test]
fn rotation_z_quarter_turn() {
    let r = Mat4::from_rotation_z(FRAC_PI_2);
    let p = Vec3::POS_X.transform(&r);
    assert_relative_eq!(p, Vec3::POS_Y, epsilon = 1e-6);
}

#[test]
fn axis_angle_round_trip() {
    let axis = Vec3::new(1.0, -1.0, 2.0).normalize();
    let m = Mat4::from_axis_angle(axis, 1.2);
    let (out_axis, angle) = m.rotation_to_axis_angle();
    assert_relative_eq!(angle, 1.2, epsilon = 1e-4);
    assert_relative_eq!(out_axis, axis, epsilon = 1e-4);
}

#[test]
fn axis_is_normalized_before_use() {
    let unit = Mat4::from_axis_angle(Vec3::POS_Y, 0.7);
    let long = Mat4::from_axis_angle(Vec3::new(0.0, 5.0, 0.0), 0.7);
    assert_relative_eq!(unit, long, epsilon = 1e-6);
}

#[test]
fn quaternion_and_axis_angle_agree() {
    let axis = Vec3::new(0.0, 0.6, 0.8);
    let q = Quaternion::from_axis_angle(axis, PI / 3.0);
    assert_relative_eq!(
        Mat4::from_quaternion(&q),
        Mat4::from_axis_angle(axis, PI / 3.0),
        epsilon = 1e-6
    );
}

#[test]
fn rotation_translation_composes_block_and_offset() {
    let rotation = Mat3::from_rotation_x(0.3);
    let m = Mat4::from_rotation_translation(&rotation, Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(m.extract_rotation(), rotation);
    assert_eq!(m.extract_translation(), Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(m.m[15], 1.0);
}

#[test]
fn yaw_pitch_roll_matches_quaternion_order() {
    let (pitch, yaw, roll) = (0.2, -0.4, 0.9);
    let from_euler = Mat4::from_yaw_pitch_roll(pitch, yaw, roll);
    let from_quat = Mat4::from_quaternion(&Quaternion::from_pitch_yaw_roll(pitch, yaw, roll));
    assert_relative_eq!(from_euler, from_quat, epsilon = 1e-5);
}

#[test]
fn look_at_places_target_on_negative_z() {
    let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::POS_Y);
    let target = Vec3::ZERO.transform(&view);
    assert_relative_eq!(target, Vec3::new(0.0, 0.0, -5.0), epsilon = 1e-6);
    assert_relative_eq!(view.up(), Vec3::POS_Y, epsilon = 1e-6);
}

#[test]
fn basis_vectors_ignore_translation() {
    let m = Mat4::from_translation(10.0, 20.0, 30.0) * Mat4::from_rotation_y(FRAC_PI_2);
    assert_relative_eq!(m.right(), Vec3::NEG_Z, epsilon = 1e-6);
    assert_relative_eq!(m.up(), Vec3::POS_Y, epsilon = 1e-6);
    assert_relative_eq!(m.forward_rh(), Vec3::NEG_X, epsilon = 1e-6);
    assert_relative_eq!(m.forward_lh(), -m.forward_rh(), epsilon = 1e-6);
}

#[test]
fn vec4_transform_is_matrix_times_column() {
    let m = dense_matrix();
    let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
    let ours = v.transform(&m);
    let theirs = to_nalgebra(&m) * nalgebra::Vector4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(ours, Vec4::from(theirs));
}
