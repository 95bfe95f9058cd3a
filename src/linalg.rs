//! # Linear algebra substrate
//!
//! Fixed-size vectors and matrices come from [`nalgebra`]; this module only adds what the
//! astronomy code needs on top of them:
//!
//! - the elementary axis rotations [`rotate_x`], [`rotate_y`], [`rotate_z`],
//! - the row-vector product [`vec_mat`],
//! - the explicit Cartesian ↔ polar conversions [`to_polar`] / [`from_polar`].
//!
//! ## Rotation convention
//!
//! The axis rotations rotate the **coordinate frame**, not the vector: applying
//! `rotate_z(α)` to a vector returns the coordinates of the same vector in a frame turned
//! by `+α` about the Z axis. This is the convention of every precession and obliquity
//! formulary used in this crate, so that e.g. `rotate_x(ε)` maps equatorial to ecliptic
//! coordinates.
//!
//! All rotation matrices returned here are orthogonal: their transpose is their inverse.
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::Radian;

/// Cartesian 3-vector. No frame tag is carried: the caller tracks the frame.
pub type Vec3 = Vector3<f64>;

/// 3×3 real matrix.
pub type Mat3 = Matrix3<f64>;

/// Frame rotation about the X axis by `angle` radians.
pub fn rotate_x(angle: Radian) -> Mat3 {
    let (s, c) = angle.sin_cos();
    Mat3::new(
        1.0, 0.0, 0.0, //
        0.0, c, s, //
        0.0, -s, c,
    )
}

/// Frame rotation about the Y axis by `angle` radians.
pub fn rotate_y(angle: Radian) -> Mat3 {
    let (s, c) = angle.sin_cos();
    Mat3::new(
        c, 0.0, -s, //
        0.0, 1.0, 0.0, //
        s, 0.0, c,
    )
}

/// Frame rotation about the Z axis by `angle` radians.
pub fn rotate_z(angle: Radian) -> Mat3 {
    let (s, c) = angle.sin_cos();
    Mat3::new(
        c, s, 0.0, //
        -s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Row-vector times matrix, `vᵀ · M`, returned as a column vector.
pub fn vec_mat(v: &Vec3, m: &Mat3) -> Vec3 {
    m.tr_mul(v)
}

/// Spherical coordinates of a Cartesian vector.
///
/// * `phi`: azimuthal angle in the XY plane, measured from +X towards +Y, in (−π, π]
/// * `theta`: polar angle above the XY plane, in [−π/2, π/2]
/// * `r`: radius, in whatever unit the Cartesian vector used
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub phi: Radian,
    pub theta: Radian,
    pub r: f64,
}

impl Polar {
    pub fn new(phi: Radian, theta: Radian, r: f64) -> Self {
        Polar { phi, theta, r }
    }

    /// Direction only (radius 1).
    pub fn unit(phi: Radian, theta: Radian) -> Self {
        Polar { phi, theta, r: 1.0 }
    }
}

/// Convert a polar triple to a Cartesian vector.
pub fn from_polar(polar: &Polar) -> Vec3 {
    let (theta_s, theta_c) = polar.theta.sin_cos();
    let (phi_s, phi_c) = polar.phi.sin_cos();
    Vec3::new(
        polar.r * theta_c * phi_c,
        polar.r * theta_c * phi_s,
        polar.r * theta_s,
    )
}

/// Convert a Cartesian vector to a polar triple.
///
/// On the Z axis `phi` is 0, and at the origin both angles are 0.
pub fn to_polar(v: &Vec3) -> Polar {
    let xy = v.x * v.x + v.y * v.y;
    let r = (xy + v.z * v.z).sqrt();
    let phi = if v.x == 0.0 && v.y == 0.0 {
        0.0
    } else {
        v.y.atan2(v.x)
    };
    let rho = xy.sqrt();
    let theta = if v.z == 0.0 && rho == 0.0 {
        0.0
    } else {
        v.z.atan2(rho)
    };
    Polar { phi, theta, r }
}
