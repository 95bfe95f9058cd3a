use approx::assert_relative_eq;
use hifitime::{Epoch, TimeScale};

use starsky::time::{date_to_mjd, from_mjd, gmst, mjd, CalendarDate};

#[test]
fn test_mjd_agrees_with_hifitime() {
    let dates = [
        (1975, 3, 1, 0, 0, 0),
        (1969, 7, 20, 20, 17, 40),
        (2000, 1, 1, 12, 0, 0),
        (2016, 12, 31, 23, 59, 59),
        (2024, 2, 29, 6, 30, 15),
        (2050, 10, 18, 18, 45, 0),
    ];

    for (y, mo, d, h, mi, s) in dates {
        let epoch = Epoch::from_gregorian(
            y,
            mo as u8,
            d as u8,
            h as u8,
            mi as u8,
            s as u8,
            0,
            TimeScale::UTC,
        );
        assert_relative_eq!(
            mjd(y, mo, d, h, mi, s as f64),
            epoch.to_mjd_utc_days(),
            epsilon = 1e-8
        );
    }
}

#[test]
fn test_iso_date() {
    assert_eq!(date_to_mjd("2021-01-01T00:00:00").unwrap(), 59215.0);

    let date = from_mjd(date_to_mjd("2024-03-15T13:45:30").unwrap());
    let expected = CalendarDate::new(2024, 3, 15, 13, 45, 30.0).unwrap();
    assert_eq!(
        (date.year, date.month, date.day, date.hour, date.minute),
        (2024, 3, 15, 13, 45)
    );
    assert_relative_eq!(date.second, expected.second, epsilon = 1e-3);
}

#[test]
fn test_gmst_sidereal_day() {
    // one sidereal day later the sidereal time is back where it started
    let start = mjd(2024, 3, 15, 0, 0, 0.0);
    let sidereal_day = 0.997269566;
    let delta = gmst(start + sidereal_day) - gmst(start);
    assert_relative_eq!(delta, 0.0, epsilon = 1e-7);
}
