//! 4x4 transforms: composition, inversion, decomposition and projections.
//!
//! Storage is column-major, matching what fixed-function style APIs upload:
//! element (row, col) lives at `m[col * 4 + row]` and the translation sits in
//! `m[12..15]`.

use crate::errors::MathError;
use crate::float_types::{EPSILON, Real};
use crate::mat3::Mat3;
use crate::plane::{FrustumPlane, Plane};
use crate::quaternion::Quaternion;
use crate::utility::{almost_equal_eps, degrees_to_radians, impl_approx_eq};
use crate::vec3::Vec3;
use core::ops::{Index, Mul};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    pub m: [Real; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

const IDENTITY: [Real; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

impl Mat4 {
    #[inline]
    pub const fn identity() -> Self {
        Self { m: IDENTITY }
    }

    #[inline]
    pub const fn from_array(m: [Real; 16]) -> Self {
        Self { m }
    }

    /// Embeds a 3x3 block in the upper left of an identity matrix.
    pub fn from_mat3(rotation: &Mat3) -> Self {
        let r = &rotation.m;
        Self::from_array([
            r[0], r[1], r[2], 0.0, //
            r[3], r[4], r[5], 0.0, //
            r[6], r[7], r[8], 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Standard product `a * b`.
    ///
    /// The result is accumulated in a fresh array, so callers may pass the same
    /// matrix on both sides and overwrite either input with the result.
    pub fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = a.m[row] * b.m[col * 4]
                    + a.m[4 + row] * b.m[col * 4 + 1]
                    + a.m[8 + row] * b.m[col * 4 + 2]
                    + a.m[12 + row] * b.m[col * 4 + 3];
            }
        }
        Mat4::from_array(out)
    }

    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for z in 0..4 {
            for x in 0..4 {
                out[z * 4 + x] = self.m[x * 4 + z];
            }
        }
        Self::from_array(out)
    }

    /// Transposed cofactor matrix: `self * self.adjugate() == det * I`.
    pub fn adjugate(&self) -> Self {
        let m = &self.m;
        let mut t = [0.0; 16];

        t[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
            + m[9] * m[7] * m[14]
            + m[13] * m[6] * m[11]
            - m[13] * m[7] * m[10];

        t[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
            - m[8] * m[7] * m[14]
            - m[12] * m[6] * m[11]
            + m[12] * m[7] * m[10];

        t[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
            + m[8] * m[7] * m[13]
            + m[12] * m[5] * m[11]
            - m[12] * m[7] * m[9];

        t[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
            - m[8] * m[6] * m[13]
            - m[12] * m[5] * m[10]
            + m[12] * m[6] * m[9];

        t[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
            - m[9] * m[3] * m[14]
            - m[13] * m[2] * m[11]
            + m[13] * m[3] * m[10];

        t[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
            + m[8] * m[3] * m[14]
            + m[12] * m[2] * m[11]
            - m[12] * m[3] * m[10];

        t[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
            - m[8] * m[3] * m[13]
            - m[12] * m[1] * m[11]
            + m[12] * m[3] * m[9];

        t[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
            + m[8] * m[2] * m[13]
            + m[12] * m[1] * m[10]
            - m[12] * m[2] * m[9];

        t[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
            + m[5] * m[3] * m[14]
            + m[13] * m[2] * m[7]
            - m[13] * m[3] * m[6];

        t[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
            - m[4] * m[3] * m[14]
            - m[12] * m[2] * m[7]
            + m[12] * m[3] * m[6];

        t[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
            + m[4] * m[3] * m[13]
            + m[12] * m[1] * m[7]
            - m[12] * m[3] * m[5];

        t[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
            - m[4] * m[2] * m[13]
            - m[12] * m[1] * m[6]
            + m[12] * m[2] * m[5];

        t[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
            - m[5] * m[3] * m[10]
            - m[9] * m[2] * m[7]
            + m[9] * m[3] * m[6];

        t[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
            + m[4] * m[3] * m[10]
            + m[8] * m[2] * m[7]
            - m[8] * m[3] * m[6];

        t[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
            - m[4] * m[3] * m[9]
            - m[8] * m[1] * m[7]
            + m[8] * m[3] * m[5];

        t[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
            + m[4] * m[2] * m[9]
            + m[8] * m[1] * m[6]
            - m[8] * m[2] * m[5];

        Self::from_array(t)
    }

    /// Laplace expansion along the first column, reusing the adjugate terms.
    pub fn determinant(&self) -> Real {
        Self::determinant_with(&self.m, &self.adjugate().m)
    }

    #[inline]
    fn determinant_with(m: &[Real; 16], adj: &[Real; 16]) -> Real {
        m[0] * adj[0] + m[1] * adj[4] + m[2] * adj[8] + m[3] * adj[12]
    }

    /// Cofactor inverse.
    ///
    /// Only an exactly zero determinant counts as singular: a nearly singular
    /// matrix still inverts, with whatever precision loss that implies.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let adj = self.adjugate();
        let det = Self::determinant_with(&self.m, &adj.m);

        if det == 0.0 {
            log::debug!("mat4 inverse: determinant is exactly zero");
            return Err(MathError::SingularMatrix);
        }

        let inv_det = 1.0 / det;
        Ok(Self::from_array(adj.m.map(|v| v * inv_det)))
    }

    /// Exact element-wise comparison with the identity.
    pub fn is_identity(&self) -> bool {
        self.m == IDENTITY
    }

    /// Element-wise relative comparison:
    /// `|a - b| <= epsilon * max(1, max(a, b))` for every component.
    ///
    /// # Panics
    /// If `self` and `other` are the same matrix; comparing a matrix with itself
    /// is always a caller bug.
    pub fn approx_eq(&self, other: &Mat4, epsilon: Real) -> bool {
        assert!(
            !core::ptr::eq(self, other),
            "Mat4::approx_eq called with the same matrix on both sides"
        );
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(&a, &b)| almost_equal_eps(a, b, epsilon))
    }

    /// [`approx_eq`](Self::approx_eq) with the precision epsilon.
    pub fn almost_eq(&self, other: &Mat4) -> bool {
        self.approx_eq(other, EPSILON)
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Construction
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    pub fn from_translation(x: Real, y: Real, z: Real) -> Self {
        let mut out = IDENTITY;
        out[12] = x;
        out[13] = y;
        out[14] = z;
        Self::from_array(out)
    }

    pub fn from_scaling(x: Real, y: Real, z: Real) -> Self {
        let mut out = [0.0; 16];
        out[0] = x;
        out[5] = y;
        out[10] = z;
        out[15] = 1.0;
        Self::from_array(out)
    }

    pub fn from_rotation_x(radians: Real) -> Self {
        Self::from_mat3(&Mat3::from_rotation_x(radians))
    }

    pub fn from_rotation_y(radians: Real) -> Self {
        Self::from_mat3(&Mat3::from_rotation_y(radians))
    }

    pub fn from_rotation_z(radians: Real) -> Self {
        Self::from_mat3(&Mat3::from_rotation_z(radians))
    }

    /// Rotation about an arbitrary axis, built through a quaternion.
    pub fn from_axis_angle(axis: Vec3, radians: Real) -> Self {
        Self::from_quaternion(&Quaternion::from_axis_angle(axis, radians))
    }

    pub fn from_quaternion(q: &Quaternion) -> Self {
        Self::from_mat3(&Mat3::from_quaternion(q))
    }

    /// `yaw * (pitch * roll)`: roll about Z is applied first, yaw about Y last.
    pub fn from_yaw_pitch_roll(pitch: Real, yaw: Real, roll: Real) -> Self {
        let yaw_matrix = Self::from_rotation_y(yaw);
        let pitch_matrix = Self::from_rotation_x(pitch);
        let roll_matrix = Self::from_rotation_z(roll);

        let out = Self::multiply(&pitch_matrix, &roll_matrix);
        Self::multiply(&yaw_matrix, &out)
    }

    /// Rigid transform from a rotation block and a translation, no scale.
    pub fn from_rotation_translation(rotation: &Mat3, translation: Vec3) -> Self {
        let mut out = Self::from_mat3(rotation);
        out.m[12] = translation.x;
        out.m[13] = translation.y;
        out.m[14] = translation.z;
        out
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Projection
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    /// Perspective projection with a vertical field of view in **degrees**,
    /// mapping depth to [-1, 1].
    pub fn perspective(fovy: Real, aspect: Real, z_near: Real, z_far: Real) -> Result<Self, MathError> {
        let r = degrees_to_radians(fovy / 2.0);
        let delta_z = z_near - z_far;
        let s = r.sin();

        if delta_z == 0.0 {
            log::debug!("perspective: z_near == z_far == {z_near}");
            return Err(MathError::DegenerateProjection("z_near equals z_far"));
        }
        if s == 0.0 {
            log::debug!("perspective: sin(fovy / 2) is zero for fovy {fovy}");
            return Err(MathError::DegenerateProjection("field of view has zero sine"));
        }
        if aspect == 0.0 {
            log::debug!("perspective: aspect ratio is zero");
            return Err(MathError::DegenerateProjection("aspect ratio is zero"));
        }

        // cos(r) / sin(r) = cot(r)
        let cotangent = r.cos() / s;

        let mut out = Self::identity();
        out.m[0] = cotangent / aspect;
        out.m[5] = cotangent;
        out.m[10] = (z_far + z_near) / delta_z;
        out.m[11] = -1.0;
        out.m[14] = (2.0 * z_far * z_near) / delta_z;
        out.m[15] = 0.0;
        Ok(out)
    }

    /// Orthographic projection mapping the box to [-1, 1] on every axis.
    pub fn orthographic(
        left: Real,
        right: Real,
        bottom: Real,
        top: Real,
        z_near: Real,
        z_far: Real,
    ) -> Result<Self, MathError> {
        if right == left {
            return Err(MathError::DegenerateProjection("left equals right"));
        }
        if top == bottom {
            return Err(MathError::DegenerateProjection("bottom equals top"));
        }
        if z_far == z_near {
            log::debug!("orthographic: z_near == z_far == {z_near}");
            return Err(MathError::DegenerateProjection("z_near equals z_far"));
        }

        let tx = -((right + left) / (right - left));
        let ty = -((top + bottom) / (top - bottom));
        let tz = -((z_far + z_near) / (z_far - z_near));

        let mut out = Self::identity();
        out.m[0] = 2.0 / (right - left);
        out.m[5] = 2.0 / (top - bottom);
        out.m[10] = -2.0 / (z_far - z_near);
        out.m[12] = tx;
        out.m[13] = ty;
        out.m[14] = tz;
        Ok(out)
    }

    /// Right-handed view matrix looking from `eye` towards `center`.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let f = (center - eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);

        Self::from_array([
            s.x, u.x, -f.x, 0.0, //
            s.y, u.y, -f.y, 0.0, //
            s.z, u.z, -f.z, 0.0, //
            -s.dot(eye), -u.dot(eye), f.dot(eye), 1.0,
        ])
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Extraction
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    /// Upper-left 3x3 block.
    pub fn extract_rotation(&self) -> Mat3 {
        let m = &self.m;
        Mat3::from_array([m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10]])
    }

    pub fn extract_translation(&self) -> Vec3 {
        Vec3::new(self.m[12], self.m[13], self.m[14])
    }

    /// One of the six clip planes of a projection (or view-projection) matrix,
    /// normalized so (a, b, c) is unit length.
    pub fn extract_plane(&self, which: FrustumPlane) -> Result<Plane, MathError> {
        let m = &self.m;
        // row r of the matrix is (m[r], m[4 + r], m[8 + r], m[12 + r])
        let row = |r: usize| [m[r], m[4 + r], m[8 + r], m[12 + r]];
        let (w, sign, axis) = match which {
            FrustumPlane::Left => (row(3), 1.0, row(0)),
            FrustumPlane::Right => (row(3), -1.0, row(0)),
            FrustumPlane::Bottom => (row(3), 1.0, row(1)),
            FrustumPlane::Top => (row(3), -1.0, row(1)),
            FrustumPlane::Near => (row(3), 1.0, row(2)),
            FrustumPlane::Far => (row(3), -1.0, row(2)),
        };

        Plane::new(
            w[0] + sign * axis[0],
            w[1] + sign * axis[1],
            w[2] + sign * axis[2],
            w[3] + sign * axis[3],
        )
        .normalize()
    }

    /// Axis and angle (radians) of the rotation block.
    pub fn rotation_to_axis_angle(&self) -> (Vec3, Real) {
        self.extract_rotation().rotation_to_axis_angle()
    }

    pub fn up(&self) -> Vec3 {
        Vec3::POS_Y.transform_normal(self).normalize()
    }

    pub fn right(&self) -> Vec3 {
        Vec3::POS_X.transform_normal(self).normalize()
    }

    /// Forward for right-handed conventions (-Z).
    pub fn forward_rh(&self) -> Vec3 {
        Vec3::NEG_Z.transform_normal(self).normalize()
    }

    /// Forward for left-handed conventions (+Z).
    pub fn forward_lh(&self) -> Vec3 {
        Vec3::POS_Z.transform_normal(self).normalize()
    }
}

impl Mul for Mat4 {
    type Output = Mat4;
    fn mul(self, rhs: Mat4) -> Mat4 {
        Mat4::multiply(&self, &rhs)
    }
}

impl<'a> Mul<&'a Mat4> for &'a Mat4 {
    type Output = Mat4;
    fn mul(self, rhs: &'a Mat4) -> Mat4 {
        Mat4::multiply(self, rhs)
    }
}

/// `matrix[(row, col)]`
impl Index<(usize, usize)> for Mat4 {
    type Output = Real;
    fn index(&self, (row, col): (usize, usize)) -> &Real {
        &self.m[col * 4 + row]
    }
}

impl_approx_eq!(Mat4, array: m);
