//! Scalar helpers shared by every vector and matrix type.

use crate::float_types::{DEG_TO_RAD, EPSILON, RAD_TO_DEG, Real};

/// Returns `s * s`.
#[inline]
pub fn sqr(s: Real) -> Real {
    s * s
}

#[inline]
pub fn degrees_to_radians(degrees: Real) -> Real {
    degrees * DEG_TO_RAD
}

#[inline]
pub fn radians_to_degrees(radians: Real) -> Real {
    radians * RAD_TO_DEG
}

/// Relative approximate equality with the precision epsilon.
///
/// See [`almost_equal_eps`].
#[inline]
pub fn almost_equal(lhs: Real, rhs: Real) -> bool {
    almost_equal_eps(lhs, rhs, EPSILON)
}

/// `|lhs - rhs| <= epsilon * max(1, max(lhs, rhs))`.
///
/// The scale factor uses the signed maximum, not the magnitude: two large
/// negative values are compared with an absolute `epsilon`.
#[inline]
pub fn almost_equal_eps(lhs: Real, rhs: Real, epsilon: Real) -> bool {
    (lhs - rhs).abs() <= epsilon * lhs.max(rhs).max(1.0)
}

#[inline]
pub fn clamp(x: Real, min: Real, max: Real) -> Real {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

#[inline]
pub fn lerp(x: Real, y: Real, factor: Real) -> Real {
    x + factor * (y - x)
}

/// Implements `approx::AbsDiffEq` and `approx::RelativeEq` component-wise.
macro_rules! impl_approx_eq {
    ($ty:ty, fields: $($field:ident),+) => {
        impl approx::AbsDiffEq for $ty {
            type Epsilon = $crate::float_types::Real;

            fn default_epsilon() -> Self::Epsilon {
                $crate::float_types::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }

        impl approx::RelativeEq for $ty {
            fn default_max_relative() -> Self::Epsilon {
                $crate::float_types::EPSILON
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $(approx::RelativeEq::relative_eq(&self.$field, &other.$field, epsilon, max_relative))&&+
            }
        }
    };
    ($ty:ty, array: $field:ident) => {
        impl approx::AbsDiffEq for $ty {
            type Epsilon = $crate::float_types::Real;

            fn default_epsilon() -> Self::Epsilon {
                $crate::float_types::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.$field
                    .iter()
                    .zip(other.$field.iter())
                    .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
            }
        }

        impl approx::RelativeEq for $ty {
            fn default_max_relative() -> Self::Epsilon {
                $crate::float_types::EPSILON
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.$field
                    .iter()
                    .zip(other.$field.iter())
                    .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
            }
        }
    };
}

pub(crate) use impl_approx_eq;
