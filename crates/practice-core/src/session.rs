use std::fmt;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::error::PracticeError;

/// Shortest session that can be logged, in minutes.
pub const MIN_DURATION_MINUTES: i64 = 1;
/// Longest session that can be logged, in minutes (one full day).
pub const MAX_DURATION_MINUTES: i64 = 1440;

/// Date format used in the session log.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single practice session: the day it happened and how long it lasted.
///
/// Sessions are validated on construction and immutable afterwards, so any
/// `Session` value in hand always has a duration in `1..=1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Session {
    date: NaiveDate,
    duration_minutes: u32,
}

impl Session {
    /// Create a session, rejecting durations outside `1..=1440` minutes.
    pub fn new(date: NaiveDate, duration_minutes: i64) -> Result<Self, PracticeError> {
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&duration_minutes) {
            return Err(PracticeError::InvalidDuration(duration_minutes));
        }
        Ok(Self {
            date,
            // In range, so always fits.
            duration_minutes: duration_minutes as u32,
        })
    }

    /// Create a session dated today in the local timezone.
    pub fn today(duration_minutes: i64) -> Result<Self, PracticeError> {
        Self::new(Local::now().date_naive(), duration_minutes)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Encode as a session log line (`YYYY-MM-DD,<minutes>`), without newline.
    pub fn to_line(&self) -> String {
        format!(
            "{},{}",
            self.date.format(DATE_FORMAT),
            self.duration_minutes
        )
    }

    /// Decode a session log line.
    ///
    /// Expects exactly two comma-separated fields. Surrounding whitespace on
    /// each field is tolerated.
    pub fn parse_line(line: &str) -> Result<Self, PracticeError> {
        let mut fields = line.split(',');
        let (Some(date), Some(duration), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(PracticeError::malformed(
                line,
                "expected exactly two fields `<date>,<minutes>`",
            ));
        };

        let date = date.trim();
        if date.is_empty() {
            return Err(PracticeError::malformed(line, "missing date"));
        }
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|e| PracticeError::malformed(line, format!("invalid date `{date}`: {e}")))?;

        let duration = duration.trim();
        let duration: i64 = duration.parse().map_err(|e| {
            PracticeError::malformed(line, format!("invalid duration `{duration}`: {e}"))
        })?;

        Self::new(date, duration).map_err(|e| PracticeError::malformed(line, e.to_string()))
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Session{{date={}, duration={}}}",
            self.date.format(DATE_FORMAT),
            self.duration_minutes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_full_duration_range() {
        for minutes in MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES {
            let session = Session::new(date(2024, 1, 1), minutes).unwrap();
            assert_eq!(i64::from(session.duration_minutes()), minutes);
        }
    }

    #[test]
    fn rejects_out_of_range_durations() {
        for minutes in [i64::MIN, -1, 0, 1441, 10_000, i64::MAX] {
            let err = Session::new(date(2024, 1, 1), minutes).unwrap_err();
            assert!(
                matches!(err, PracticeError::InvalidDuration(m) if m == minutes),
                "unexpected error for {minutes}: {err:?}"
            );
        }
    }

    #[test]
    fn display_matches_log_format() {
        let session = Session::new(date(2024, 3, 9), 45).unwrap();
        assert_eq!(session.to_string(), "Session{date=2024-03-09, duration=45}");
    }

    #[test]
    fn line_encoding_is_date_comma_minutes() {
        let session = Session::new(date(2023, 12, 31), 1440).unwrap();
        assert_eq!(session.to_line(), "2023-12-31,1440");
        assert_eq!(Session::parse_line(&session.to_line()).unwrap(), session);
    }

    #[test]
    fn parse_tolerates_whitespace_around_fields() {
        let session = Session::parse_line(" 2024-02-29 , 30 ").unwrap();
        assert_eq!(session.date(), date(2024, 2, 29));
        assert_eq!(session.duration_minutes(), 30);
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        for line in [
            "not-a-date,60",
            "2024-01-01",
            "2024-01-01,abc",
            "2024-01-01,60,extra",
            ",60",
            "2024-02-30,60",
            "2024-01-01,0",
            "2024-01-01,1441",
        ] {
            let err = Session::parse_line(line).unwrap_err();
            match err {
                PracticeError::MalformedLine { line: l, .. } => assert_eq!(l, line),
                other => panic!("unexpected error for {line:?}: {other:?}"),
            }
        }
    }
}
