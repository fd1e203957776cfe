//! Free-function forms of the [`Vector3`] operations.
//!
//! These mirror the methods one-to-one for callers that prefer a functional
//! style (`ops::dot(a, b)` rather than `a.dot(b)`).
//!
//! # Examples
//! ```
//! use vector3::ops;
//! let v = ops::create(3.0, 4.0, 0.0);
//! assert_eq!(ops::length(v), 5.0);
//! assert_eq!(ops::subtract(v, v), ops::zero());
//! ```

use crate::vec3::Vector3;

/// Creates a vector from its components.
pub fn create(x: f64, y: f64, z: f64) -> Vector3 {
    Vector3::new(x, y, z)
}

/// The zero vector, i.e. `create` with every argument omitted.
pub fn zero() -> Vector3 {
    Vector3::ZERO
}

/// Component-wise sum.
pub fn add(a: Vector3, b: Vector3) -> Vector3 {
    a.add(b)
}

/// Component-wise difference `a - b`.
pub fn subtract(a: Vector3, b: Vector3) -> Vector3 {
    a.subtract(b)
}

/// Scales `v` by `s`.
pub fn multiply(v: Vector3, s: f64) -> Vector3 {
    v.multiply(s)
}

/// Dot product.
pub fn dot(a: Vector3, b: Vector3) -> f64 {
    a.dot(b)
}

/// Squared length.
pub fn length_squared(v: Vector3) -> f64 {
    v.length_squared()
}

/// Euclidean length.
pub fn length(v: Vector3) -> f64 {
    v.length()
}

/// Unit vector in the direction of `v`, or the zero vector when `v` has
/// length zero.
pub fn normalize(v: Vector3) -> Vector3 {
    v.normalize()
}

#[cfg(test)]
mod tests;
