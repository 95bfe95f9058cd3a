//! # Constants and type definitions for Starsky
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! aliases** used throughout the `starsky` library.
//!
//! ## Overview
//!
//! - Angle conversions (degrees ↔ radians ↔ arcseconds ↔ hours)
//! - Reference epochs (J2000.0, B1950.0) as MJD, JD and Julian centuries
//! - Astronomical constants: obliquity at J2000.0 (IAU 2006), astronomical unit (IAU 2012),
//!   speed of light
//! - Core type aliases used across the crate
//!
//! All values are compile-time constants; nothing here is configurable at runtime.

// -------------------------------------------------------------------------------------------------
// Angle conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Radians → degrees
pub const DEGRAD: f64 = 180.0 / std::f64::consts::PI;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

// -------------------------------------------------------------------------------------------------
// Reference epochs
// -------------------------------------------------------------------------------------------------

/// MJD of epoch J2000.0 (2000-01-01 12:00:00 TT)
pub const MJD_J2000: f64 = 51544.5;

/// JD of epoch J2000.0
pub const JD_J2000: f64 = 2451545.0;

/// Conversion offset between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Epoch J2000.0 in Julian centuries since J2000.0
pub const T_J2000: f64 = 0.0;

/// Epoch B1950.0 in Julian centuries since J2000.0
pub const T_B1950: f64 = -0.500002108;

/// Number of days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// -------------------------------------------------------------------------------------------------
// Astronomical constants
// -------------------------------------------------------------------------------------------------

/// Mean obliquity of the ecliptic at J2000.0, in arcseconds
pub const EPSILON_J2000: f64 = 84381.406;

/// Astronomical Unit in kilometers
pub const AU: f64 = 149_597_870.7;

/// Speed of light in km/s
pub const VLIGHT: f64 = 2.99792458e5;

/// Speed of light in astronomical units per day
pub const VLIGHT_AU: f64 = VLIGHT / AU * SECONDS_PER_DAY;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
/// Julian centuries elapsed since J2000.0
pub type JulianCentury = f64;
