//! The [`Vector3`] value type.
//!
//! `Vector3` is a plain `Copy` value: every operation reads its inputs and
//! returns a new vector, so nothing here ever mutates an argument.

use std::ops::{Add, Mul, Sub};

use config::constants::GlobalConfig;
use serde::{Deserialize, Serialize};

use crate::error::{VectorError, VectorResult};

/// An immutable three-component `f64` vector.
///
/// Equality is structural and exact (IEEE-754 semantics, so a vector with a
/// NaN component is not equal to itself). Use [`Vector3::approx_eq`] for
/// tolerance-based comparisons.
///
/// Serializes as `{"x": .., "y": .., "z": ..}`; missing fields deserialize
/// as `0.0`.
///
/// # Examples
/// ```
/// use vector3::Vector3;
/// let v = Vector3::new(3.0, 4.0, 0.0);
/// assert_eq!(v.length(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vector3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector3 {
    /// The zero vector `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component-wise sum `self + other`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Component-wise difference `self - other`.
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Scales every component by `s`.
    pub fn multiply(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    /// Dot product.
    ///
    /// # Examples
    /// ```
    /// use vector3::Vector3;
    /// let a = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(a.dot(Vector3::new(4.0, 5.0, 6.0)), 32.0);
    /// ```
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared length, `self.dot(self)`. Never negative for finite input.
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// A vector of length exactly zero normalizes to [`Vector3::ZERO`]
    /// instead of producing NaN components. Non-finite input propagates.
    ///
    /// # Examples
    /// ```
    /// use vector3::Vector3;
    /// assert_eq!(Vector3::new(5.0, 0.0, 0.0).normalize(), Vector3::new(1.0, 0.0, 0.0));
    /// assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
    /// ```
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            log::trace!("normalize: zero-length input {self:?}, returning zero vector");
            return Self::ZERO;
        }
        self.multiply(1.0 / len)
    }

    /// Strict variant of [`normalize`](Self::normalize).
    ///
    /// Fails with [`VectorError::ZeroLength`] for the zero vector and with
    /// [`VectorError::NonFinite`] when the length is NaN or infinite.
    ///
    /// # Examples
    /// ```
    /// use vector3::{Vector3, VectorError};
    /// assert_eq!(Vector3::ZERO.try_normalize(), Err(VectorError::ZeroLength));
    /// ```
    pub fn try_normalize(self) -> VectorResult<Self> {
        let len = self.length();
        if len == 0.0 {
            log::debug!("try_normalize: rejecting zero-length vector");
            return Err(VectorError::ZeroLength);
        }
        if !len.is_finite() {
            log::debug!("try_normalize: rejecting {self:?} with length {len}");
            return Err(VectorError::NonFinite { length: len });
        }
        Ok(self.multiply(1.0 / len))
    }

    /// Returns `true` when all three components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Per-component absolute comparison within `tolerance`.
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }

    /// [`approx_eq`](Self::approx_eq) using the workspace default tolerance.
    pub fn approx_eq_default(self, other: Self) -> bool {
        self.approx_eq(other, GlobalConfig::default().tolerance)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Self) -> Self::Output {
        Vector3::add(self, rhs)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs.multiply(self)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = VectorError;

    fn try_from(components: &[f64]) -> VectorResult<Self> {
        match *components {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(VectorError::DimensionMismatch(components.len())),
        }
    }
}

impl From<glam::DVec3> for Vector3 {
    fn from(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for glam::DVec3 {
    fn from(v: Vector3) -> Self {
        glam::DVec3::new(v.x, v.y, v.z)
    }
}
