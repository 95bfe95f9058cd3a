use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarskyError {
    #[error("Invalid sexagesimal string: {0}")]
    InvalidSexagesimal(String),

    #[error("Invalid calendar date: {year}-{month}-{day}")]
    InvalidCalendarDate { year: i32, month: i32, day: i32 },

    #[error("Invalid time of day: {hour}:{minute}:{second}")]
    InvalidTimeOfDay { hour: i32, minute: i32, second: f64 },

    #[error("Invalid geographic latitude (rad): {0}")]
    InvalidLatitude(f64),

    #[error("Time conversion error: {0}")]
    Time(#[from] hifitime::HifitimeError),

    #[error("Unable to set up the logger: {0}")]
    LoggerSetup(String),
}

impl PartialEq for StarskyError {
    fn eq(&self, other: &Self) -> bool {
        use StarskyError::*;
        match (self, other) {
            (InvalidSexagesimal(a), InvalidSexagesimal(b)) => a == b,
            (
                InvalidCalendarDate {
                    year: y1,
                    month: m1,
                    day: d1,
                },
                InvalidCalendarDate {
                    year: y2,
                    month: m2,
                    day: d2,
                },
            ) => y1 == y2 && m1 == m2 && d1 == d2,
            (
                InvalidTimeOfDay {
                    hour: h1,
                    minute: m1,
                    second: s1,
                },
                InvalidTimeOfDay {
                    hour: h2,
                    minute: m2,
                    second: s2,
                },
            ) => h1 == h2 && m1 == m2 && s1 == s2,
            (InvalidLatitude(a), InvalidLatitude(b)) => a == b,

            // hifitime errors are compared by variant only
            (Time(_), Time(_)) => true,

            (LoggerSetup(a), LoggerSetup(b)) => a == b,

            _ => false,
        }
    }
}
