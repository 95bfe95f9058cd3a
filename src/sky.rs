//! # Sky as seen by an observer
//!
//! Glue between the catalogue reader, the astronomy core and the renderer:
//!
//! * catalogue stars arrive as J2000 right ascension / declination in decimal degrees plus an
//!   apparent magnitude ([`CatalogueStar`]),
//! * they are precessed to the equinox of date, placed on the local horizon of an
//!   [`Observer`] using the local sidereal time,
//! * and leave as unit vectors in the renderer's axes with their magnitude ([`StarVertex`]).
//!
//! ## Renderer axes
//!
//! ```text
//! x = sin(az)·cos(alt)    towards east
//! y = sin(alt)            towards the zenith
//! z = cos(az)·cos(alt)    towards north
//! ```
//!
//! Refraction, parallax and proper motion are not modelled.
use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::angle::wrap_radians;
use crate::constants::{Degree, Radian, MJD, RADEG};
use crate::linalg::{from_polar, to_polar, Mat3, Polar, Vec3};
use crate::precession::prec_matrix_equ;
use crate::ref_system::{equ2hor, RefSystem};
use crate::starsky_errors::StarskyError;
use crate::sun::sun_in;
use crate::time::{gmst, julian_centuries};

/// Geographic position of the observer, in radians, longitude positive east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    pub latitude: Radian,
    pub longitude: Radian,
}

impl Observer {
    /// Create an observer.
    ///
    /// Arguments
    /// ---------
    /// * `latitude`: geographic latitude [rad], in [−π/2, π/2]
    /// * `longitude`: geographic longitude [rad], positive east
    ///
    /// Return
    /// ------
    /// * `StarskyError::InvalidLatitude` when the latitude is out of range or not finite.
    pub fn new(latitude: Radian, longitude: Radian) -> Result<Self, StarskyError> {
        if !(-FRAC_PI_2..=FRAC_PI_2).contains(&latitude) {
            return Err(StarskyError::InvalidLatitude(latitude));
        }
        Ok(Observer {
            latitude,
            longitude,
        })
    }

    /// Same as [`Observer::new`] with angles in degrees.
    pub fn from_degrees(latitude: Degree, longitude: Degree) -> Result<Self, StarskyError> {
        Observer::new(latitude * RADEG, longitude * RADEG)
    }

    /// Local mean sidereal time at `mjd` for this observer.
    pub fn local_sidereal_time(&self, mjd: MJD) -> Radian {
        local_sidereal_time(mjd, self.longitude)
    }
}

/// One catalogue record: J2000 equatorial position in degrees and apparent magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogueStar {
    pub ra: Degree,
    pub dec: Degree,
    pub magnitude: f64,
}

/// Vertex handed to the renderer: 3 floats of position, 1 float of magnitude.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StarVertex {
    pub position: [f32; 3],
    pub magnitude: f32,
}

impl StarVertex {
    pub fn new(position: &Vec3, magnitude: f64) -> Self {
        StarVertex {
            position: [position.x as f32, position.y as f32, position.z as f32],
            magnitude: magnitude as f32,
        }
    }
}

/// Local mean sidereal time, `GMST + longitude`, in [0, 2π).
pub fn local_sidereal_time(mjd: MJD, longitude: Radian) -> Radian {
    wrap_radians(gmst(mjd) + longitude)
}

/// Hour angle `τ = LST − α`, in [0, 2π), positive westward.
pub fn hour_angle(lst: Radian, ra: Radian) -> Radian {
    wrap_radians(lst - ra)
}

/// Unit vector of a horizontal direction in the renderer's axes.
pub fn horizontal_to_cartesian(alt: Radian, az: Radian) -> Vec3 {
    let (sin_alt, cos_alt) = alt.sin_cos();
    let (sin_az, cos_az) = az.sin_cos();
    Vec3::new(sin_az * cos_alt, sin_alt, cos_az * cos_alt)
}

/// Horizontal coordinates of a star, without precession.
///
/// The star position is taken as already referred to the equinox of date.
///
/// Return
/// ------
/// * `(altitude, azimuth)` in radians
pub fn star_to_horizontal(
    star: &CatalogueStar,
    lst: Radian,
    observer: &Observer,
) -> (Radian, Radian) {
    let tau = hour_angle(lst, star.ra * RADEG);
    equ2hor(star.dec * RADEG, tau, observer.latitude)
}

fn precessed_horizontal(
    star: &CatalogueStar,
    precession: &Mat3,
    lst: Radian,
    observer: &Observer,
) -> (Radian, Radian) {
    let j2000 = from_polar(&Polar::unit(star.ra * RADEG, star.dec * RADEG));
    let of_date = to_polar(&(precession * j2000));
    equ2hor(of_date.theta, hour_angle(lst, of_date.phi), observer.latitude)
}

/// Convert a batch of catalogue stars to renderer vertices at `mjd`.
///
/// Every star is precessed from J2000 to the equinox of date with one shared matrix, then
/// converted to horizontal coordinates for `observer`. Stars below the horizon are kept: the
/// renderer decides what to draw.
pub fn vertexize(stars: &[CatalogueStar], mjd: MJD, observer: &Observer) -> Vec<StarVertex> {
    let precession = prec_matrix_equ(0.0, julian_centuries(mjd));
    let lst = observer.local_sidereal_time(mjd);

    log::debug!("vertexize {} stars at MJD {mjd} (LST {lst:.6} rad)", stars.len());

    stars
        .iter()
        .map(|star| {
            let (alt, az) = precessed_horizontal(star, &precession, lst, observer);
            StarVertex::new(&horizontal_to_cartesian(alt, az), star.magnitude)
        })
        .collect()
}

/// Horizontal coordinates of the Sun at `mjd` for `observer`.
///
/// Return
/// ------
/// * `(altitude, azimuth)` in radians
pub fn sun_horizontal(mjd: MJD, observer: &Observer) -> (Radian, Radian) {
    let t = julian_centuries(mjd);
    let sun = to_polar(&sun_in(t, &RefSystem::Equm(t)));
    let tau = hour_angle(observer.local_sidereal_time(mjd), sun.phi);
    equ2hor(sun.theta, tau, observer.latitude)
}

#[cfg(test)]
mod sky_test {
    use super::*;
    use crate::constants::{DPI, MJD_J2000};
    use crate::time::mjd;
    use approx::assert_relative_eq;

    fn paris() -> Observer {
        Observer::from_degrees(48.8566, 2.3522).unwrap()
    }

    #[test]
    fn test_observer_validation() {
        assert!(Observer::new(FRAC_PI_2, 0.0).is_ok());
        assert_eq!(
            Observer::new(1.6, 0.0),
            Err(StarskyError::InvalidLatitude(1.6))
        );
        assert!(Observer::from_degrees(-91.0, 10.0).is_err());
        assert!(Observer::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_local_sidereal_time() {
        let mjd = 60000.25;
        assert_eq!(local_sidereal_time(mjd, 0.0), gmst(mjd));

        let lst = local_sidereal_time(mjd, 90.0 * RADEG);
        assert_relative_eq!(
            lst,
            wrap_radians(gmst(mjd) + 90.0 * RADEG),
            epsilon = 1e-15
        );
        assert!((0.0..DPI).contains(&local_sidereal_time(mjd, -3.0)));
    }

    #[test]
    fn test_hour_angle() {
        assert_eq!(hour_angle(1.0, 1.0), 0.0);
        assert_relative_eq!(hour_angle(0.5, 1.0), DPI - 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_horizontal_to_cartesian() {
        assert_relative_eq!(
            horizontal_to_cartesian(FRAC_PI_2, 0.3),
            Vec3::new(0.0, 1.0, 0.0),
            epsilon = 1e-15
        );
        assert_relative_eq!(
            horizontal_to_cartesian(0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            epsilon = 1e-15
        );
        assert_relative_eq!(
            horizontal_to_cartesian(0.0, FRAC_PI_2),
            Vec3::new(1.0, 0.0, 0.0),
            epsilon = 1e-15
        );
        assert_relative_eq!(horizontal_to_cartesian(0.4, 2.0).norm(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_star_on_meridian() {
        let observer = paris();
        let lst = observer.local_sidereal_time(MJD_J2000);
        let star = CatalogueStar {
            ra: lst / RADEG,
            dec: 20.0,
            magnitude: 1.5,
        };

        let (alt, az) = star_to_horizontal(&star, lst, &observer);
        assert_relative_eq!(alt, (90.0 - 48.8566 + 20.0) * RADEG, epsilon = 1e-12);
        assert_relative_eq!(az, std::f64::consts::PI, epsilon = 1e-9);
    }

    #[test]
    fn test_vertexize() {
        let observer = paris();
        let lst = observer.local_sidereal_time(MJD_J2000);
        let stars = [
            CatalogueStar {
                ra: 0.0,
                dec: 90.0,
                magnitude: 2.0,
            },
            CatalogueStar {
                ra: lst / RADEG,
                dec: 20.0,
                magnitude: -1.46,
            },
            CatalogueStar {
                ra: 101.287,
                dec: -16.716,
                magnitude: 0.5,
            },
        ];

        let vertices = vertexize(&stars, MJD_J2000, &observer);
        assert_eq!(vertices.len(), 3);

        // no precession at J2000: the pole sits at the observer's latitude, due north
        let pole = vertices[0];
        assert_relative_eq!(
            pole.position[1] as f64,
            observer.latitude.sin(),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            pole.position[2] as f64,
            observer.latitude.cos(),
            epsilon = 1e-6
        );
        assert_eq!(pole.magnitude, 2.0);

        // culminating star, due south
        let alt = (90.0 - 48.8566 + 20.0) * RADEG;
        let south = vertices[1];
        assert_relative_eq!(south.position[0] as f64, 0.0, epsilon = 1e-6);
        assert_relative_eq!(south.position[1] as f64, alt.sin(), epsilon = 1e-6);
        assert_relative_eq!(south.position[2] as f64, -alt.cos(), epsilon = 1e-6);
        assert_eq!(south.magnitude, -1.46f32);

        for v in &vertices {
            let [x, y, z] = v.position;
            assert_relative_eq!(x * x + y * y + z * z, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_vertexize_precesses_catalogue() {
        // fifty years after J2000 the J2000 pole lies ~0.278° from the pole of date
        let observer = paris();
        let date = MJD_J2000 + 50.0 * 365.25;
        let stars = [CatalogueStar {
            ra: 0.0,
            dec: 90.0,
            magnitude: 2.0,
        }];
        let vertex = vertexize(&stars, date, &observer)[0];

        let [x, y, z] = vertex.position.map(|c| c as f64);
        let pole_of_date = Vec3::new(0.0, observer.latitude.sin(), observer.latitude.cos());
        let separation = Vec3::new(x, y, z).angle(&pole_of_date) / RADEG;
        assert_relative_eq!(separation, 0.278, epsilon = 0.03);
    }

    #[test]
    fn test_sun_horizontal() {
        let greenwich = Observer::from_degrees(48.0, 0.0).unwrap();

        // June solstice, local noon
        let (alt, az) = sun_horizontal(mjd(2024, 6, 20, 12, 0, 0.0), &greenwich);
        assert_relative_eq!(alt / RADEG, 65.433, epsilon = 0.05);
        assert_relative_eq!(az / RADEG, 179.04, epsilon = 0.1);

        // local midnight, below the horizon
        let (alt, _) = sun_horizontal(mjd(2024, 6, 20, 0, 0, 0.0), &greenwich);
        assert_relative_eq!(alt / RADEG, -18.566, epsilon = 0.05);

        // southern summer at Cape Town
        let cape_town = Observer::from_degrees(-33.9, 18.4).unwrap();
        let (alt, az) = sun_horizontal(mjd(2024, 12, 21, 12, 0, 0.0), &cape_town);
        assert_relative_eq!(alt / RADEG, 70.506, epsilon = 0.05);
        assert_relative_eq!(az / RADEG, 297.54, epsilon = 0.1);
    }
}
