//! Conversions to and from [`nalgebra`] types. Both sides store matrices
//! column-major, so matrix conversions are plain copies.

use crate::float_types::Real;
use crate::mat3::Mat3;
use crate::mat4::Mat4;
use crate::quaternion::Quaternion;
use crate::vec2::Vec2;
use crate::vec3::Vec3;
use crate::vec4::Vec4;
use nalgebra::{Matrix3, Matrix4, Point3, Vector2, Vector3, Vector4};

impl From<Vec2> for Vector2<Real> {
    fn from(v: Vec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2<Real>> for Vec2 {
    fn from(v: Vector2<Real>) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec3> for Vector3<Real> {
    fn from(v: Vec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3<Real>> for Vec3 {
    fn from(v: Vector3<Real>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Point3<Real> {
    fn from(v: Vec3) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}

impl From<Point3<Real>> for Vec3 {
    fn from(p: Point3<Real>) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

impl From<Vec4> for Vector4<Real> {
    fn from(v: Vec4) -> Self {
        Vector4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4<Real>> for Vec4 {
    fn from(v: Vector4<Real>) -> Self {
        Vec4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Quaternion> for nalgebra::Quaternion<Real> {
    fn from(q: Quaternion) -> Self {
        // nalgebra takes the scalar part first
        nalgebra::Quaternion::new(q.w, q.x, q.y, q.z)
    }
}

impl From<nalgebra::Quaternion<Real>> for Quaternion {
    fn from(q: nalgebra::Quaternion<Real>) -> Self {
        // coords are stored (i, j, k, w)
        Quaternion::new(q.coords.x, q.coords.y, q.coords.z, q.coords.w)
    }
}

impl From<Mat3> for Matrix3<Real> {
    fn from(m: Mat3) -> Self {
        Matrix3::from_column_slice(&m.m)
    }
}

impl From<Matrix3<Real>> for Mat3 {
    fn from(m: Matrix3<Real>) -> Self {
        let mut out = [0.0; 9];
        out.copy_from_slice(m.as_slice());
        Mat3::from_array(out)
    }
}

impl From<Mat4> for Matrix4<Real> {
    fn from(m: Mat4) -> Self {
        Matrix4::from_column_slice(&m.m)
    }
}

impl From<Matrix4<Real>> for Mat4 {
    fn from(m: Matrix4<Real>) -> Self {
        let mut out = [0.0; 16];
        out.copy_from_slice(m.as_slice());
        Mat4::from_array(out)
    }
}
