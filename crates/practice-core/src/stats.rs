use std::fmt;

use serde::Serialize;

use crate::session::Session;

const MINUTES_PER_HOUR: u64 = 60;

/// Accumulated practice time, split into whole hours and leftover minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PracticeTotal {
    pub total_minutes: u64,
    pub hours: u64,
    pub minutes: u64,
}

impl PracticeTotal {
    pub fn from_minutes(total_minutes: u64) -> Self {
        Self {
            total_minutes,
            hours: total_minutes / MINUTES_PER_HOUR,
            minutes: total_minutes % MINUTES_PER_HOUR,
        }
    }
}

impl fmt::Display for PracticeTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours and {} minutes", self.hours, self.minutes)
    }
}

/// Sum session durations in minutes.
pub fn total_minutes<'a>(sessions: impl IntoIterator<Item = &'a Session>) -> u64 {
    sessions
        .into_iter()
        .map(|s| u64::from(s.duration_minutes()))
        .sum()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn splits_into_hours_and_minutes() {
        let total = PracticeTotal::from_minutes(135);
        assert_eq!(total.hours, 2);
        assert_eq!(total.minutes, 15);
        assert_eq!(total.to_string(), "2 hours and 15 minutes");
    }

    #[test]
    fn zero_minutes() {
        assert_eq!(PracticeTotal::from_minutes(0).to_string(), "0 hours and 0 minutes");
    }

    #[test]
    fn sums_durations() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let sessions: Vec<Session> = [45, 60, 30]
            .into_iter()
            .map(|m| Session::new(day, m).unwrap())
            .collect();
        assert_eq!(total_minutes(&sessions), 135);
        assert_eq!(total_minutes(std::iter::empty()), 0);
    }
}
