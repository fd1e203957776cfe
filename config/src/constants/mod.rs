//! Centralized tolerance values shared across the vector3 workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Absolute tolerance for per-component floating-point comparisons.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance used when checking whether a vector has unit length.
///
/// Looser than [`EPSILON`] because a normalized vector accumulates error from
/// the square root and the reciprocal multiply.
///
/// # Examples
/// ```
/// use config::constants::UNIT_LENGTH_EPSILON;
/// let len: f64 = (1.0_f64 / 3.0).sqrt() * 3.0_f64.sqrt();
/// assert!((len - 1.0).abs() < UNIT_LENGTH_EPSILON);
/// ```
pub const UNIT_LENGTH_EPSILON: f64 = 1e-9;

/// Immutable snapshot of tolerance settings that can be shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Absolute tolerance for approximate vector comparisons.
    pub tolerance: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing a strictly positive, finite tolerance.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6).expect("valid config");
    /// assert_eq!(cfg.tolerance, 1.0e-6);
    /// ```
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self { tolerance: EPSILON }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative, NaN or infinite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
