//! # Config Crate
//!
//! Centralized numeric tolerances for the vector3 workspace. Every
//! comparison threshold used by the vector kernel is defined here so that
//! callers and tests agree on what "approximately equal" means.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, EPSILON};
//!
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.tolerance, EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All tolerances defined once, used everywhere
//! - **Validated**: Custom configurations are checked on construction

pub mod constants;

#[cfg(test)]
mod tests;
