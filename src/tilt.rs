//! Projections for a display panel mounted a quarter turn sideways.
//!
//! Every matrix here is the conventional projection followed by a 90 degree
//! rotation about Z, with clip-space depth remapped from [-1, 1] to [-1, 0].
//!
//! Because the panel is sideways, [`persp_tilt`] and [`persp_stereo_tilt`]
//! take the **horizontal** field of view and the **inverse** aspect ratio
//! (height / width) of the physical panel, not the usual vertical fov and
//! width / height. Stereo separation likewise runs along the panel's vertical
//! axis.

use crate::errors::MathError;
use crate::float_types::Real;
use crate::mat4::Mat4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Handedness {
    Left,
    #[default]
    Right,
}

/// Orthographic projection, rotated and with depth in [-1, 0].
pub fn ortho_tilt(
    left: Real,
    right: Real,
    bottom: Real,
    top: Real,
    near: Real,
    far: Real,
    handedness: Handedness,
) -> Result<Mat4, MathError> {
    if left == right {
        return Err(MathError::DegenerateProjection("left equals right"));
    }
    if bottom == top {
        return Err(MathError::DegenerateProjection("bottom equals top"));
    }
    if near == far {
        return Err(MathError::DegenerateProjection("near equals far"));
    }

    let mut out = Mat4::from_array([0.0; 16]);
    out.m[1] = 2.0 / (left - right);
    out.m[4] = 2.0 / (top - bottom);
    out.m[10] = match handedness {
        Handedness::Left => 1.0 / (far - near),
        Handedness::Right => 1.0 / (near - far),
    };
    out.m[12] = (bottom + top) / (bottom - top);
    out.m[13] = (left + right) / (right - left);
    out.m[14] = 0.5 * (near + far) / (near - far) - 0.5;
    out.m[15] = 1.0;
    Ok(out)
}

/// Perspective projection for the sideways panel.
///
/// * `fov_x` - horizontal field of view in **radians**
/// * `inv_aspect` - panel height divided by panel width
pub fn persp_tilt(
    fov_x: Real,
    inv_aspect: Real,
    near: Real,
    far: Real,
    handedness: Handedness,
) -> Result<Mat4, MathError> {
    let fov_x_tan = check_perspective(fov_x, inv_aspect, near, far)?;

    let mut out = Mat4::from_array([0.0; 16]);
    out.m[1] = -1.0 / (fov_x_tan * inv_aspect);
    out.m[4] = 1.0 / fov_x_tan;
    out.m[11] = handedness_sign(handedness);
    out.m[10] = -out.m[11] * near / (near - far);
    out.m[14] = near * far / (near - far);
    Ok(out)
}

/// Stereo perspective projection for the sideways panel.
///
/// * `fov_x` - horizontal field of view in **radians**
/// * `inv_aspect` - panel height divided by panel width
/// * `iod` - signed interocular distance (negative for the left eye)
/// * `screen` - distance to the zero-parallax plane
pub fn persp_stereo_tilt(
    fov_x: Real,
    inv_aspect: Real,
    near: Real,
    far: Real,
    iod: Real,
    screen: Real,
    handedness: Handedness,
) -> Result<Mat4, MathError> {
    let fov_x_tan = check_perspective(fov_x, inv_aspect, near, far)?;
    if screen == 0.0 {
        return Err(MathError::DegenerateProjection("screen distance is zero"));
    }

    let fov_x_tan_inv_aspect = fov_x_tan * inv_aspect;
    // near cancels out of m[9], so it is left out of the shift
    let shift = iod / (2.0 * screen);

    let mut out = Mat4::from_array([0.0; 16]);
    out.m[1] = -1.0 / fov_x_tan_inv_aspect;
    out.m[4] = 1.0 / fov_x_tan;
    out.m[11] = handedness_sign(handedness);
    out.m[9] = -out.m[11] * shift / fov_x_tan_inv_aspect;
    out.m[10] = -out.m[11] * near / (near - far);
    out.m[13] = iod / 2.0;
    out.m[14] = near * far / (near - far);
    Ok(out)
}

#[inline]
fn handedness_sign(handedness: Handedness) -> Real {
    match handedness {
        Handedness::Left => 1.0,
        Handedness::Right => -1.0,
    }
}

fn check_perspective(fov_x: Real, inv_aspect: Real, near: Real, far: Real) -> Result<Real, MathError> {
    if near == far {
        log::debug!("tilted perspective: near == far == {near}");
        return Err(MathError::DegenerateProjection("near equals far"));
    }
    if inv_aspect == 0.0 {
        return Err(MathError::DegenerateProjection("inverse aspect ratio is zero"));
    }
    let fov_x_tan = (fov_x / 2.0).tan();
    if fov_x_tan == 0.0 {
        return Err(MathError::DegenerateProjection("field of view has zero tangent"));
    }
    Ok(fov_x_tan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::FRAC_PI_2;
    use crate::vec4::Vec4;

    #[test]
    fn ortho_tilt_rotates_right_edge_to_bottom() {
        let m = ortho_tilt(-1.0, 1.0, -1.0, 1.0, 0.0, 1.0, Handedness::Right).expect("valid box");
        // +x edge of the volume maps onto clip -y
        let p = Vec4::new(1.0, 0.0, 0.0, 1.0).transform(&m);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, -1.0);
    }

    #[test]
    fn ortho_tilt_depth_range_is_minus_one_to_zero() {
        let m = ortho_tilt(-1.0, 1.0, -1.0, 1.0, 1.0, 3.0, Handedness::Right).expect("valid box");
        let near = Vec4::new(0.0, 0.0, -1.0, 1.0).transform(&m);
        let far = Vec4::new(0.0, 0.0, -3.0, 1.0).transform(&m);
        assert!((near.z + 1.0).abs() < 1e-6);
        assert!((far.z - 0.0).abs() < 1e-6);
        assert_eq!(near.w, 1.0);
    }

    #[test]
    fn persp_tilt_uses_horizontal_fov() {
        let m = persp_tilt(FRAC_PI_2, 0.5, 1.0, 10.0, Handedness::Right).expect("valid frustum");
        // tan(45°) == 1, so the x-scale is 1 and the y-scale is 1 / inv_aspect
        assert!((m.m[4] - 1.0).abs() < 1e-6);
        assert!((m.m[1] + 2.0).abs() < 1e-5);
        assert_eq!(m.m[11], -1.0);
    }

    #[test]
    fn degenerate_tilt_parameters_fail() {
        assert!(persp_tilt(0.0, 1.0, 1.0, 10.0, Handedness::Left).is_err());
        assert!(persp_tilt(1.0, 0.0, 1.0, 10.0, Handedness::Left).is_err());
        assert!(persp_stereo_tilt(1.0, 1.0, 1.0, 1.0, 0.1, 2.0, Handedness::Left).is_err());
        assert!(ortho_tilt(0.0, 0.0, -1.0, 1.0, 1.0, 2.0, Handedness::Left).is_err());
    }
}
