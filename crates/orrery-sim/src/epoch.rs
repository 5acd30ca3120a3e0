//! J2000 epoch bookkeeping

use hifitime::{Duration, Epoch};
use orrery_core::constants::{DAYS_PER_CENTURY, SECONDS_PER_CENTURY};

use crate::error::{OrreryError, Result};

/// J2000.0 = 2000-01-01T12:00:00 UTC
pub fn j2000() -> Epoch {
    Epoch::from_gregorian_utc(2000, 1, 1, 12, 0, 0, 0)
}

/// Julian centuries elapsed since J2000 (negative before it)
pub fn centuries_since_epoch(now: Epoch) -> f64 {
    (now - j2000()).to_seconds() / SECONDS_PER_CENTURY
}

/// Inverse of [`centuries_since_epoch`]
pub fn epoch_from_centuries(centuries: f64) -> Epoch {
    j2000() + Duration::from_days(centuries * DAYS_PER_CENTURY)
}

/// Julian centuries since J2000 according to the system clock
pub fn current_centuries_since_epoch() -> Result<f64> {
    let now = Epoch::now().map_err(|e| OrreryError::Clock(e.to_string()))?;
    Ok(centuries_since_epoch(now))
}
