//! # Precession between epochs
//!
//! Rotation matrices carrying mean equatorial or mean ecliptic coordinates from the equinox
//! of epoch `T0` to the equinox of epoch `T1` (IAU 1976, Lieske et al.).
//!
//! Both epochs are Julian centuries since J2000.0. The angles are cubic polynomials in the
//! starting epoch `T0` and the interval `dT = T1 − T0`, so the matrices are valid between any
//! two epochs, not only from or to J2000.0. The polynomials lose accuracy a few centuries
//! away from J2000.0; epochs are not validated.
//!
//! The returned matrices act on column vectors: `x₁ = P · x₀`.
use crate::constants::{JulianCentury, Radian, RADEG, RADSEC};
use crate::linalg::{rotate_y, rotate_z, Mat3};

/// Precession matrix for mean equatorial coordinates, from equinox `t0` to equinox `t1`.
///
/// Arguments
/// ---------
/// * `t0`: starting epoch, Julian centuries since J2000.0
/// * `t1`: target epoch, Julian centuries since J2000.0
///
/// Return
/// ------
/// * `Rz(−z) · Ry(θ) · Rz(−ζ)`, with the equatorial precession angles ζ, z, θ.
///
/// `t0 == t1` gives the identity matrix exactly: every angle carries a factor `dT`.
pub fn prec_matrix_equ(t0: JulianCentury, t1: JulianCentury) -> Mat3 {
    let dt = t1 - t0;

    let zeta = ((2306.2181 + (1.39656 - 0.000139 * t0) * t0)
        + ((0.30188 - 0.000344 * t0) + 0.017998 * dt) * dt)
        * dt
        * RADSEC;
    let z = zeta + ((0.79280 + 0.000411 * t0) + 0.000205 * dt) * dt * dt * RADSEC;
    let theta = ((2004.3109 - (0.85330 + 0.000217 * t0) * t0)
        - ((0.42665 + 0.000217 * t0) + 0.041833 * dt) * dt)
        * dt
        * RADSEC;

    rotate_z(-z) * rotate_y(theta) * rotate_z(-zeta)
}

/// Precession matrix for mean ecliptic coordinates, from equinox `t0` to equinox `t1`.
///
/// Return
/// ------
/// * `Rz(−(Π + p_A)) · Rx(π) · Rz(Π)`, where `Π` is the longitude of the ascending node of
///   the ecliptic of `t1` on the ecliptic of `t0`, `π` the angle between both ecliptics and
///   `p_A` the general precession in longitude.
///
/// `Rz(−Π) · Rx(π) · Rz(Π)` is built directly as the rotation by `π` about the node line, so
/// `t0 == t1` gives the identity matrix exactly even though `Π` does not vanish with `dT`.
pub fn prec_matrix_ecl(t0: JulianCentury, t1: JulianCentury) -> Mat3 {
    let dt = t1 - t0;

    let big_pi = 174.876383889 * RADEG
        + (((3289.4789 + 0.60622 * t0) * t0)
            + ((-869.8089 - 0.50491 * t0) + 0.03536 * dt) * dt)
            * RADSEC;
    let pi = ((47.0029 - (0.06603 - 0.000598 * t0) * t0)
        + ((-0.03302 + 0.000598 * t0) + 0.000060 * dt) * dt)
        * dt
        * RADSEC;
    let p_a = ((5029.0966 + (2.22226 - 0.000042 * t0) * t0)
        + ((1.11113 - 0.000042 * t0) - 0.000006 * dt) * dt)
        * dt
        * RADSEC;

    rotate_z(-p_a) * node_rotation(big_pi, pi)
}

/// Passive rotation by `angle` about the unit axis `(cos node, sin node, 0)`.
fn node_rotation(node: Radian, angle: Radian) -> Mat3 {
    let (sn, cn) = node.sin_cos();
    let (s, c) = angle.sin_cos();
    // 1 − cos(angle), exact zero at angle = 0
    let v = 2.0 * (0.5 * angle).sin().powi(2);

    Mat3::new(
        1.0 - v * sn * sn, v * cn * sn, -s * sn, //
        v * cn * sn, 1.0 - v * cn * cn, s * cn, //
        s * sn, -s * cn, c,
    )
}
