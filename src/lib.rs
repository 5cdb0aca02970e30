//! Linear algebra for real-time graphics: 2/3/4 component vectors, column-major
//! 3x3 and 4x4 matrices, quaternions, planes, rays and axis-aligned boxes, plus
//! a fixed-function style **matrix stack** ([`gl`]) with one set of stacks per
//! rendering context.
//!
//! Matrices are stored column-major, element (row, col) at `m[col * N + row]`,
//! so a [`Mat4`]'s `m` array can be handed straight to a graphics API.
//!
//! # Features
//! #### Default
//! - **f32**: use f32 as Real
//!
//! #### Optional
//! - **f64**: use f64 as Real, this conflicts with f32
//!
//! # Configuration
//! `GFXMATH_TOLERANCE`, read at build time, overrides the geometric tolerance
//! used for plane classification and ray parallel tests (see
//! [`float_types::tolerance`]).

#![forbid(unsafe_code)]

pub mod aabb;
pub mod errors;
pub mod float_types;
pub mod gl;
pub mod interop;
pub mod mat3;
pub mod mat4;
pub mod plane;
pub mod quaternion;
pub mod ray2;
pub mod ray3;
pub mod tilt;
pub mod utility;
pub mod vec2;
pub mod vec3;
pub mod vec4;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use aabb::{Aabb2, Aabb3, Containment};
pub use errors::MathError;
pub use float_types::Real;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use plane::{FrustumPlane, Plane, PointClassification};
pub use quaternion::Quaternion;
pub use ray2::Ray2;
pub use ray3::Ray3;
pub use tilt::Handedness;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
