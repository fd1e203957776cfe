//! Pure 3D vector arithmetic.
//!
//! This crate provides a single immutable [`Vector3`] value type and the
//! arithmetic primitives geometry, physics and graphics code builds on.
//! Every operation is available both as a method and as a free function in
//! [`ops`].
//!
//! ```rust
//! use vector3::{ops, Vector3};
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::new(4.0, 5.0, 6.0);
//! assert_eq!(a.dot(b), 32.0);
//! assert_eq!(ops::dot(a, b), 32.0);
//! assert_eq!(ops::normalize(Vector3::ZERO), Vector3::ZERO);
//! ```

pub mod error;
pub mod ops;
pub mod vec3;

pub use error::{VectorError, VectorResult};
pub use vec3::Vector3;
