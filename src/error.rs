//! Crate error types.
//!
//! The calculator itself is total; errors only arise at the boundaries where
//! caller-supplied data enters the crate (parameter construction, config and
//! scenario files, identifier lookups).
//!
//! ## Usage
//!
//! ```rust
//! use asteroid_impact::error::{validate_range, Result};
//!
//! fn checked_speed(speed: f64) -> Result<f64> {
//!     validate_range("speed", speed, 5.0, 50.0)?;
//!     Ok(speed)
//! }
//! # assert!(checked_speed(60.0).is_err());
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error enum for the impact estimator.
#[derive(Debug, Error)]
pub enum ImpactError {
    /// A numeric input is outside its documented domain or is not finite.
    #[error("parameter '{name}' = {value} is outside valid range {valid_range}")]
    InvalidParameter {
        /// Name of the parameter (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f64,
        /// Human-readable description of the accepted range.
        valid_range: String,
    },

    /// A location was supplied without a name, which leaves the ocean test
    /// undefined.
    #[error("location name must not be empty")]
    EmptyLocationName,

    /// Only one of latitude and longitude was given.
    #[error("location coordinate '{missing}' is missing; lat and lng must be given together")]
    IncompleteCoordinates { missing: &'static str },

    /// A strategy identifier did not match any catalogue entry.
    #[error("unknown strategy '{0}' (expected one of: deflect, nuclear, evacuation, nothing)")]
    UnknownStrategy(String),

    /// A location name did not match any predefined target.
    #[error("unknown location '{0}'")]
    UnknownLocation(String),

    /// A config or scenario file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config or scenario file was read but its TOML did not decode.
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Convenience alias: a `Result` using [`ImpactError`] as the error type.
pub type Result<T> = std::result::Result<T, ImpactError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is finite and lies in `[min, max]`.
pub fn validate_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ImpactError::InvalidParameter {
            name,
            value,
            valid_range: format!("[{min}, {max}]"),
        })
    }
}

/// Returns an error unless `value` is finite and strictly positive.
pub fn validate_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ImpactError::InvalidParameter {
            name,
            value,
            valid_range: "(0, ∞)".to_string(),
        })
    }
}

/// Returns an error unless `value` is finite and not negative.
pub fn validate_non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ImpactError::InvalidParameter {
            name,
            value,
            valid_range: "[0, ∞)".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_accepts_inclusive_bounds() {
        assert!(validate_range("angle", 0.0, 0.0, 90.0).is_ok());
        assert!(validate_range("angle", 90.0, 0.0, 90.0).is_ok());
    }

    #[test]
    fn range_rejects_outside_and_nan() {
        assert!(validate_range("angle", 90.5, 0.0, 90.0).is_err());
        assert!(validate_range("angle", -0.1, 0.0, 90.0).is_err());
        assert!(validate_range("angle", f64::NAN, 0.0, 90.0).is_err());
    }

    #[test]
    fn invalid_parameter_message_names_the_field() {
        let err = validate_range("speed", 60.0, 5.0, 50.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("speed"), "message was: {msg}");
        assert!(msg.contains("[5, 50]"), "message was: {msg}");
    }

    #[test]
    fn positive_rejects_zero_and_infinity() {
        assert!(validate_positive("size_divisor", 0.0).is_err());
        assert!(validate_positive("size_divisor", f64::INFINITY).is_err());
        assert!(validate_positive("size_divisor", 1e-9).is_ok());
    }

    #[test]
    fn non_negative_accepts_zero() {
        assert!(validate_non_negative("fireball_scale", 0.0).is_ok());
        assert!(validate_non_negative("fireball_scale", -1.0).is_err());
    }
}
