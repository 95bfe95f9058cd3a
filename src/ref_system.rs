use serde::{Deserialize, Serialize};

use crate::angle::wrap_radians;
use crate::constants::{ArcSec, JulianCentury, Radian, EPSILON_J2000, RADEG, RADSEC};
use crate::linalg::{rotate_x, Mat3};
use crate::precession::prec_matrix_equ;

/// Celestial reference frames handled by [`rotpn`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RefSystem {
    // Equatorial mean, based on the mean equator and mean equinox of the epoch
    // (corrected for precession, not for nutation)
    Equm(JulianCentury),
    // Ecliptic mean, based on the mean ecliptic and mean equinox of the epoch
    Eclm(JulianCentury),
}

impl RefSystem {
    /// Epoch of the frame, in Julian centuries since J2000.0.
    pub fn epoch(&self) -> JulianCentury {
        match *self {
            RefSystem::Equm(t) => t,
            RefSystem::Eclm(t) => t,
        }
    }

    /// Compare only the variant (Equm/Eclm) and ignore the epoch value.
    pub fn variant_eq(&self, other: &RefSystem) -> bool {
        matches!(
            (self, other),
            (RefSystem::Equm(_), RefSystem::Equm(_)) | (RefSystem::Eclm(_), RefSystem::Eclm(_))
        )
    }
}

/// Compute the rotation matrix between two celestial reference frames and epochs.
///
/// The rotation is assembled step by step, always passing through the mean equatorial
/// frame when the epochs differ:
/// - leave an ecliptic frame with [`mean_ecl2equ_matrix`],
/// - precess the equator with [`prec_matrix_equ`],
/// - enter the target ecliptic with [`mean_equ2ecl_matrix`].
///
/// Arguments
/// ---------
/// * `ref_sys1`: source frame
/// * `ref_sys2`: target frame
///
/// Return
/// ------
/// * the orthogonal matrix `rot` such that `x₂ = rot · x₁`, where `x₁` is a vector in the
///   source frame and `x₂` the same vector expressed in the target frame.
///
/// Remarks
/// -------
/// * `rotpn(b, a)` is the transpose of `rotpn(a, b)` up to the precession polynomial accuracy.
/// * At most three steps are composed. Epochs are not validated: a NaN epoch yields a NaN
///   matrix.
pub fn rotpn(ref_sys1: &RefSystem, ref_sys2: &RefSystem) -> Mat3 {
    let mut rsys = *ref_sys1;
    let mut rot = Mat3::identity();

    // leave the ecliptic, precess, enter the ecliptic, stop
    for _ in 0..4 {
        if rsys.epoch() != ref_sys2.epoch() {
            match rsys {
                RefSystem::Eclm(t) => {
                    log::trace!("rotpn: Eclm({t}) -> Equm({t})");
                    rot = mean_ecl2equ_matrix(t) * rot;
                    rsys = RefSystem::Equm(t);
                }
                RefSystem::Equm(t) => {
                    let target = ref_sys2.epoch();
                    log::trace!("rotpn: Equm({t}) -> Equm({target})");
                    rot = prec_matrix_equ(t, target) * rot;
                    rsys = RefSystem::Equm(target);
                }
            }
        } else {
            if rsys.variant_eq(ref_sys2) {
                return rot;
            }

            match rsys {
                RefSystem::Equm(t) => {
                    log::trace!("rotpn: Equm({t}) -> Eclm({t})");
                    rot = mean_equ2ecl_matrix(t) * rot;
                    rsys = RefSystem::Eclm(t);
                }
                RefSystem::Eclm(t) => {
                    log::trace!("rotpn: Eclm({t}) -> Equm({t})");
                    rot = mean_ecl2equ_matrix(t) * rot;
                    rsys = RefSystem::Equm(t);
                }
            }
        }
    }

    // only reached with non-finite epochs
    rot
}

/// Compute the mean obliquity of the ecliptic at a given epoch (IAU 2006 model).
///
/// Arguments
/// ---------
/// * `t`: epoch in Julian centuries since J2000.0
///
/// Returns
/// --------
/// * Mean obliquity of the ecliptic in radians.
///
/// Formula
/// -------
/// ```text
/// ε(T) = 84381.406″ − 46.836769″·T − 0.0001831″·T² + 0.00200340″·T³
///        − 0.000000576″·T⁴ − 0.0000000434″·T⁵
/// ```
///
/// evaluated with Horner's method. At `T = 0` the secular correction vanishes and the result
/// is exactly [`EPSILON_J2000`] converted to radians.
pub fn ecliptic_obliquity(t: JulianCentury) -> Radian {
    (EPSILON_J2000 + obliquity_drift(t)) * RADSEC
}

/// Secular part of the obliquity series, in arcseconds.
fn obliquity_drift(t: JulianCentury) -> ArcSec {
    (-46.836769 + (-0.0001831 + (0.00200340 + (-0.000000576 - 0.0000000434 * t) * t) * t) * t) * t
}

/// Rotation from mean equatorial to mean ecliptic coordinates of epoch `t`, by the
/// obliquity [`ecliptic_obliquity`].
pub fn mean_equ2ecl_matrix(t: JulianCentury) -> Mat3 {
    rotate_x(ecliptic_obliquity(t))
}

/// Rotation from mean ecliptic to mean equatorial coordinates of epoch `t`.
///
/// Always the transpose of [`mean_equ2ecl_matrix`], so both directions are exact inverses.
pub fn mean_ecl2equ_matrix(t: JulianCentury) -> Mat3 {
    mean_equ2ecl_matrix(t).transpose()
}

/// Equatorial to ecliptic rotation of the `coco` regression tables.
///
/// The rotation angle is the obliquity series evaluated with the J2000 constant read as
/// degrees and the drift as `″/3600`, then scaled twice by π/180:
///
/// ```text
/// angle(T) = (84381.406 + drift(T)/3600) · (π/180)²    ≈ 25.704 rad ≡ 32.733° at J2000
/// ```
///
/// The reference vectors of the B1950 → J2000 → ecliptic chain are built with this matrix.
/// Frame chaining ([`rotpn`]) and the Sun use [`mean_equ2ecl_matrix`].
pub fn equ2ecl_matrix(t: JulianCentury) -> Mat3 {
    rotate_x((EPSILON_J2000 + obliquity_drift(t) / 3600.0) * RADEG * RADEG)
}

/// Inverse of [`equ2ecl_matrix`], its transpose.
pub fn ecl2equ_matrix(t: JulianCentury) -> Mat3 {
    equ2ecl_matrix(t).transpose()
}

/// Convert equatorial coordinates to horizontal coordinates.
///
/// Arguments
/// ---------
/// * `dec`: declination [rad]
/// * `tau`: hour angle [rad], positive westward
/// * `lat`: geographic latitude of the observer [rad]
///
/// Return
/// ------
/// * `(altitude, azimuth)` in radians, the azimuth measured from north through east in
///   [0, 2π).
///
/// At the poles of either system the azimuth is whatever `atan2` returns; no error is raised.
pub fn equ2hor(dec: Radian, tau: Radian, lat: Radian) -> (Radian, Radian) {
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_dec, cos_dec) = dec.sin_cos();
    let (sin_tau, cos_tau) = tau.sin_cos();

    let alt = (sin_lat * sin_dec + cos_lat * cos_dec * cos_tau).asin();
    let az = (-sin_tau).atan2(cos_lat * dec.tan() - sin_lat * cos_tau);

    (alt, wrap_radians(az))
}

/// Convert horizontal coordinates to equatorial coordinates.
///
/// Inverse of [`equ2hor`], with the same north-based azimuth.
///
/// Return
/// ------
/// * `(declination, hour angle)` in radians, the hour angle in [0, 2π).
pub fn hor2equ(alt: Radian, az: Radian, lat: Radian) -> (Radian, Radian) {
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_alt, cos_alt) = alt.sin_cos();
    let (sin_az, cos_az) = az.sin_cos();

    let dec = (sin_lat * sin_alt + cos_lat * cos_alt * cos_az).asin();
    let tau = (-sin_az).atan2(cos_lat * alt.tan() - sin_lat * cos_az);

    (dec, wrap_radians(tau))
}
