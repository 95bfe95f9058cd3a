//! # Solar ephemeris
//!
//! Low-precision geocentric position of the Sun from a short analytical series: mean anomaly,
//! equation of the centre and a fixed orbital eccentricity. The accuracy is about 1′ in
//! longitude and 1e-4 AU in distance for a few centuries around J2000.0.
use crate::constants::{JulianCentury, DPI};
use crate::linalg::{from_polar, Polar, Vec3};
use crate::ref_system::{rotpn, RefSystem};

fn frac(x: f64) -> f64 {
    x - x.floor()
}

/// Geocentric position of the Sun, in AU, referred to the mean ecliptic and equinox of date.
///
/// Arguments
/// ---------
/// * `t`: epoch in Julian centuries since J2000.0
///
/// Return
/// ------
/// * Cartesian position in the `Eclm(t)` frame. The latitude of the Sun is taken as zero.
pub fn sun_pos(t: JulianCentury) -> Vec3 {
    let m = DPI * frac(0.993133 + 99.997361 * t);
    let l = DPI
        * frac(
            0.7859453
                + m / DPI
                + (6893.0 * m.sin() + 72.0 * (2.0 * m).sin() + 6191.2 * t) / 1296.0e3,
        );
    let r = 1.000140 - 0.016708 * m.cos() - 0.000140 * (2.0 * m).cos();

    from_polar(&Polar::new(l, 0.0, r))
}

/// Geocentric position of the Sun at epoch `t`, expressed in `frame`.
pub fn sun_in(t: JulianCentury, frame: &RefSystem) -> Vec3 {
    rotpn(&RefSystem::Eclm(t), frame) * sun_pos(t)
}
