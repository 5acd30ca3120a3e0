/// Astronomical unit in meters
pub const AU: f64 = 1.495978707e11;

/// Astronomical unit in kilometers
pub const AU_KM: f64 = AU / 1000.0;

/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Days in a Julian year
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Seconds in a day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Seconds in a Julian century
pub const SECONDS_PER_CENTURY: f64 = DAYS_PER_CENTURY * SECONDS_PER_DAY;

/// Degrees in one revolution
pub const FULL_TURN_DEG: f64 = 360.0;
