//! # Calendar and sidereal time
//!
//! Civil calendar dates ↔ Modified Julian Date (MJD), Julian centuries since J2000.0, and
//! Greenwich Mean Sidereal Time.
//!
//! The calendar arithmetic switches from the Julian to the Gregorian calendar at the 1582
//! reform: 1582-10-04 (Julian) is followed by 1582-10-15 (Gregorian). Dates are UTC
//! (treated as UT for this engine).
//!
//! Wall-clock access and ISO date parsing go through [hifitime](https://docs.rs/hifitime).
use std::fmt;
use std::str::FromStr;

use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::angle::{from_dms, wrap_radians};
use crate::constants::{JulianCentury, Radian, DAYS_PER_CENTURY, JDTOMJD, MJD, MJD_J2000, RADEG};
use crate::starsky_errors::StarskyError;

/// Julian day number of the first day of the Gregorian calendar (1582-10-15).
const GREGORIAN_REFORM_JDN: i64 = 2299161;

/// Last Julian-calendar date, encoded as `10000 * year + 100 * month + day`.
const LAST_JULIAN_DATE: i64 = 15821004;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Modified Julian Date of a civil date and time.
///
/// Arguments
/// ---------
/// * `year`, `month` (1–12), `day`: civil date, proleptic Julian before 1582-10-15
/// * `hour`, `minute`, `second`: time of day (UT)
///
/// Return
/// ------
/// * days since 1858-11-17 00:00 UT; the fractional part encodes the time of day.
pub fn mjd(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: f64) -> MJD {
    let (mut year, mut month) = (year as i64, month as i64);
    let day = day as i64;

    // January and February count as months 13 and 14 of the previous year
    if month <= 2 {
        month += 12;
        year -= 1;
    }

    let b = if 10000 * year + 100 * month + day <= LAST_JULIAN_DATE {
        -2 + (year + 4716) / 4 - 1179
    } else {
        year / 400 - year / 100 + year / 4
    };

    let day_number = 365 * year - 679004 + b + (30.6001 * (month + 1) as f64) as i64 + day;

    day_number as f64 + from_dms(hour as f64, minute as f64, second) / 24.0
}

/// Civil date of an MJD, with the time of day as fractional hours.
///
/// Return
/// ------
/// * `(year, month, day, hours)`
pub fn from_mjd_hours(mjd: MJD) -> (i32, i32, i32, f64) {
    let a = (mjd + 2400001.0) as i64;

    let c = if a < GREGORIAN_REFORM_JDN {
        a + 1524
    } else {
        let b = ((a as f64 - 1867216.25) / 36524.25) as i64;
        a + b - b / 4 + 1525
    };

    let d = ((c as f64 - 122.1) / 365.25) as i64;
    let e = 365 * d + d / 4;
    let f = ((c - e) as f64 / 30.6001) as i64;

    let day = c - e - (30.6001 * f as f64) as i64;
    let month = f - 1 - 12 * (f / 14);
    let year = d - 4715 - (7 + month) / 10;

    let hours = 24.0 * (mjd - mjd.floor());

    (year as i32, month as i32, day as i32, hours)
}

/// Civil date and time of an MJD.
///
/// The time of day is rounded to the millisecond, carrying into the next day, so an instant
/// on an exact minute comes back with zero seconds.
pub fn from_mjd(mjd: MJD) -> CalendarDate {
    let mut day_number = mjd.floor();
    let mut millis = ((mjd - day_number) * MILLIS_PER_DAY as f64).round() as i64;
    if millis >= MILLIS_PER_DAY {
        day_number += 1.0;
        millis -= MILLIS_PER_DAY;
    }

    let (year, month, day, _) = from_mjd_hours(day_number);

    CalendarDate {
        year,
        month,
        day,
        hour: (millis / 3_600_000) as i32,
        minute: (millis / 60_000 % 60) as i32,
        second: (millis % 60_000) as f64 / 1000.0,
    }
}

/// Julian centuries elapsed since J2000.0 at the given MJD.
pub fn julian_centuries(mjd: MJD) -> JulianCentury {
    (mjd - MJD_J2000) / DAYS_PER_CENTURY
}

/// Transformation from modified julian date (MJD) to julian date (JD)
pub fn mjd_to_jd(mjd: MJD) -> f64 {
    mjd + JDTOMJD
}

/// Transformation from julian date (JD) to modified julian date (MJD)
pub fn jd_to_mjd(jd: f64) -> MJD {
    jd - JDTOMJD
}

/// Transformation from an ISO 8601 UTC date (`YYYY-MM-DDTHH:MM:SS`) to MJD.
pub fn date_to_mjd(date: &str) -> Result<MJD, StarskyError> {
    Ok(Epoch::from_str(date)?.to_mjd_utc_days())
}

/// Greenwich Mean Sidereal Time, in radians in [0, 2π).
///
/// Evaluates the sidereal time polynomial of Meeus (*Astronomical Algorithms*, ch. 12):
///
/// ```text
/// θ₀ = 280.46061837° + 360.98564736629°·d + 0.000387933°·T² − T³/38710000°
/// ```
///
/// with `d` days and `T` Julian centuries since J2000.0. Each time-dependent term is
/// reduced with an IEEE remainder (round-to-nearest quotient) **before** the sum, then the
/// sum is reduced once more. The per-term reduction keeps the linear term small for large
/// day counts.
///
/// # Arguments
/// * `mjd` - Modified Julian Date (UT)
pub fn gmst(mjd: MJD) -> Radian {
    let d = mjd - MJD_J2000;
    let t = d / DAYS_PER_CENTURY;

    let theta0 = 280.46061837 + libm::remainder(360.98564736629 * d, 360.0)
        + libm::remainder(0.000387933 * t * t, 360.0)
        - libm::remainder(t * t * t / 38710000.0, 360.0);

    wrap_radians(libm::remainder(theta0, 360.0) * RADEG)
}

/// A civil date and time (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: f64,
}

fn is_leap_year(year: i32) -> bool {
    if year <= 1582 {
        year % 4 == 0
    } else {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

impl CalendarDate {
    /// Build a validated civil date.
    ///
    /// The ten days dropped by the Gregorian reform (1582-10-05 to 1582-10-14) are rejected.
    /// Seconds up to 61 are accepted for leap seconds.
    pub fn new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: f64,
    ) -> Result<Self, StarskyError> {
        let in_reform_gap = year == 1582 && month == 10 && (5..=14).contains(&day);
        if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) || in_reform_gap
        {
            return Err(StarskyError::InvalidCalendarDate { year, month, day });
        }

        if !(0..24).contains(&hour) || !(0..60).contains(&minute) || !(0.0..61.0).contains(&second)
        {
            return Err(StarskyError::InvalidTimeOfDay {
                hour,
                minute,
                second,
            });
        }

        Ok(CalendarDate {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Current UTC date from the system clock.
    pub fn now() -> Result<Self, StarskyError> {
        let epoch = Epoch::now()?;
        Ok(from_mjd(epoch.to_mjd_utc_days()))
    }

    pub fn from_mjd(mjd: MJD) -> Self {
        from_mjd(mjd)
    }

    pub fn mjd(&self) -> MJD {
        mjd(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
