//! Validated call volume input
//!
//! The baseline monthly interaction volume is the single driver variable of
//! the whole model. It arrives from an untrusted edge (a UI slider, a CLI
//! flag, a Python caller), so it is validated once at the boundary and then
//! carried as a [`CallVolume`] that the engine can trust.
//!
//! Volumes derived inside a projection (baseline adjusted for growth and
//! seasonality) are not re-validated; growth is allowed to push them past
//! the input maximum.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest accepted baseline volume (calls per month)
pub const MIN_CALL_VOLUME: u32 = 100;

/// Largest accepted baseline volume (calls per month)
pub const MAX_CALL_VOLUME: u32 = 10_000;

/// Errors from baseline volume validation
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VolumeError {
    #[error("call volume must be a valid number")]
    NotANumber,

    #[error("minimum call volume is 100 calls per month")]
    BelowMinimum,

    #[error("maximum call volume is 10,000 calls per month")]
    AboveMaximum,
}

/// A baseline monthly call volume known to be in range
///
/// # Example
/// ```
/// use cost_projection_core_rs::{CallVolume, VolumeError};
///
/// let volume = CallVolume::new(1000).unwrap();
/// assert_eq!(volume.get(), 1000);
///
/// assert_eq!(CallVolume::new(99), Err(VolumeError::BelowMinimum));
/// assert_eq!(CallVolume::new(10_001), Err(VolumeError::AboveMaximum));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallVolume(u32);

impl CallVolume {
    /// Validate a whole-number volume against the accepted range
    pub fn new(calls_per_month: u32) -> Result<Self, VolumeError> {
        if calls_per_month < MIN_CALL_VOLUME {
            return Err(VolumeError::BelowMinimum);
        }
        if calls_per_month > MAX_CALL_VOLUME {
            return Err(VolumeError::AboveMaximum);
        }
        Ok(Self(calls_per_month))
    }

    /// Validate a volume arriving as a float (JSON and FFI boundaries)
    ///
    /// Non-finite values are rejected as not-a-number. Fractional values
    /// are rounded to the nearest whole interaction before the range check,
    /// so 999.6 passes as 1000.
    pub fn from_f64(calls_per_month: f64) -> Result<Self, VolumeError> {
        if !calls_per_month.is_finite() {
            return Err(VolumeError::NotANumber);
        }
        let rounded = calls_per_month.round();
        if rounded < MIN_CALL_VOLUME as f64 {
            return Err(VolumeError::BelowMinimum);
        }
        if rounded > MAX_CALL_VOLUME as f64 {
            return Err(VolumeError::AboveMaximum);
        }
        Ok(Self(rounded as u32))
    }

    /// Get the volume as calls per month
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CallVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
