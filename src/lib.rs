//! Lightweight fixed-dimension vector math for graphics, simulation and
//! game logic: 2D/3D vectors with arithmetic operators, spline and linear
//! interpolation, and the usual geometry helpers (dot, cross, clamp,
//! reflect, distance). No matrices, no SIMD.

mod error;
mod vec2;
mod vec3;
mod vector;

pub use error::VectorError;
pub use vec2::{vec2, Vec2};
pub use vec3::{vec3, Vec3};
pub use vector::VecN;
