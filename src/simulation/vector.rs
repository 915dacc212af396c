//! 3D vector arithmetic for positions, velocities and accelerations
//!
//! `NVec3` is nalgebra's `Vector3<f64>`, so the usual operators (`+`, `-`,
//! `*`, `+=`) already work on it. The named functions below are the
//! operations the integrator and force law are written against.

use nalgebra::Vector3;

pub type NVec3 = Vector3<f64>;

/// a + b
#[inline]
pub fn add(a: &NVec3, b: &NVec3) -> NVec3 {
    a + b
}

/// a - b
#[inline]
pub fn subtract(a: &NVec3, b: &NVec3) -> NVec3 {
    a - b
}

/// k * a
#[inline]
pub fn scale(a: &NVec3, k: f64) -> NVec3 {
    a * k
}

/// a += b
#[inline]
pub fn accumulate(a: &mut NVec3, b: &NVec3) {
    *a += b;
}

/// sqrt(x^2 + y^2 + z^2), zero for the zero vector
#[inline]
pub fn magnitude(a: &NVec3) -> f64 {
    a.norm()
}
