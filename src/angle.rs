//! # Sexagesimal angles
//!
//! Conversions between decimal degrees and degree/minute/second (or hour/minute/second)
//! triples, human-readable formatting, and parsing of the whitespace-separated sexagesimal
//! strings found in star catalogues and observation files.
//!
//! ## Sign convention
//!
//! A sexagesimal triple carries **one** sign for the whole angle. It is attached to the first
//! non-zero component, in the order degrees, minutes, seconds:
//!
//! ```text
//! -59″            →  ( 0,   0, -59.0)
//! -0° 59′ 00″     →  ( 0, -59,   0.0)
//! -12° 30′ 15.5″  →  (-12, 30,  15.5)
//! ```
//!
//! Because a zero degree field cannot hold a sign as an integer, [`from_dms`] takes `f64`
//! components and inspects the **sign bit** (`-0.0` counts as negative). A plain `< 0.0`
//! comparison would lose the sign of `"-00 30 14.2"`.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{ArcSec, Degree, Radian, DPI};
use crate::starsky_errors::StarskyError;

/// Degree (or hour), minute, second decomposition of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: i32,
    pub minutes: i32,
    pub seconds: f64,
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{}'{:.6}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Combine degree, minute and second magnitudes into decimal degrees.
///
/// The result is negative when any of the three components has its sign bit set, so
/// `from_dms(45.0, -60.0, 12.5)` is `-46.00347…` and `from_dms(-0.0, 30.0, 14.2)` is
/// `-0.50394…`.
pub fn from_dms(d: f64, m: f64, s: f64) -> Degree {
    let negative = d.is_sign_negative() || m.is_sign_negative() || s.is_sign_negative();
    let magnitude = d.abs() + m.abs() / 60.0 + s.abs() / 3600.0;
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Decompose decimal degrees into a [`Dms`] triple.
///
/// The sign goes to the first non-zero component; `-0.0` yields seconds of `-0.0`.
pub fn dms(angle: Degree) -> Dms {
    let mut x = angle.abs();
    let mut degrees = x as i32;

    x -= degrees as f64;
    x *= 60.0;
    let mut minutes = x as i32;

    x -= minutes as f64;
    x *= 60.0;
    let mut seconds = x;

    if angle.is_sign_negative() {
        if degrees != 0 {
            degrees = -degrees;
        } else if minutes != 0 {
            minutes = -minutes;
        } else {
            seconds = -seconds;
        }
    }

    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// Reduce an angle in radians to [0, 2π).
///
/// A tiny negative input would round to exactly 2π after adding a full turn; it maps to 0.
pub fn wrap_radians(angle: Radian) -> Radian {
    let wrapped = angle.rem_euclid(DPI);
    if wrapped >= DPI {
        0.0
    } else {
        wrapped
    }
}

/// Format decimal degrees as `D°M'S"`.
pub fn format_dms(angle: Degree) -> String {
    dms(angle).to_string()
}

/// Format decimal degrees as hours, `HhMmSs` (15° per hour).
pub fn format_hms(angle: Degree) -> String {
    let hms = dms(angle / 15.0);
    format!("{}h{}m{:.6}s", hms.degrees, hms.minutes, hms.seconds)
}

/// Estimate the accuracy of a numeric string based on its decimal precision.
///
/// Arguments
/// ---------------
/// * `field`: the last sexagesimal component as written (e.g., `"56.78"`)
/// * `factor`: scale applied to one unit of the last digit (e.g., `1.0 / 3600.0` for seconds → degrees)
fn compute_accuracy(field: &str, factor: f64) -> f64 {
    let field = field.trim();
    match field.find('.') {
        Some(dot_pos) => {
            let digits_after_dot = field.len() - dot_pos - 1;
            10f64.powi(-(digits_after_dot as i32)) * factor
        }
        None => factor,
    }
}

fn split_sexagesimal(input: &str) -> Result<[&str; 3], StarskyError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(StarskyError::InvalidSexagesimal(input.to_string())),
    }
}

fn parse_field(field: &str, input: &str) -> Result<f64, StarskyError> {
    field
        .parse::<f64>()
        .map_err(|_| StarskyError::InvalidSexagesimal(input.to_string()))
}

/// Parse a right ascension string `HH MM SS.SS` to degrees.
///
/// Returns
/// -------
/// * `(right ascension [deg], accuracy [deg])`, the accuracy being one unit of the last
///   written digit of the seconds field.
pub fn parse_hms_to_deg(ra: &str) -> Result<(Degree, Degree), StarskyError> {
    let [h, m, s] = split_sexagesimal(ra)?;
    let hours = from_dms(parse_field(h, ra)?, parse_field(m, ra)?, parse_field(s, ra)?);
    Ok((hours * 15.0, compute_accuracy(s, 15.0 / 3600.0)))
}

/// Parse a declination string `±DD MM SS.SS` to degrees.
///
/// The sign of the degree field applies to the whole angle, including `-00`.
///
/// Returns
/// -------
/// * `(declination [deg], accuracy [deg])`
pub fn parse_dms_to_deg(dec: &str) -> Result<(Degree, Degree), StarskyError> {
    let [d, m, s] = split_sexagesimal(dec)?;
    let degrees = from_dms(parse_field(d, dec)?, parse_field(m, dec)?, parse_field(s, dec)?);
    Ok((degrees, compute_accuracy(s, 1.0 / 3600.0)))
}

/// Accuracy of a parsed angle expressed in arcseconds.
pub fn accuracy_arcsec(accuracy: Degree) -> ArcSec {
    accuracy * 3600.0
}
