//! DayClock - Where calendar days begin and end
//!
//! Instants are stored in UTC. Day bucketing and time-slot derivation read the
//! calendar date and hour at a fixed UTC offset, so "today" and "morning" mean
//! the same thing to the server and to the clients it was configured for.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike, Utc};

use crate::domain::errors::DomainError;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayClock {
    offset: FixedOffset,
}

impl DayClock {
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }

    /// Build a clock from an offset in minutes east of UTC (e.g. `540` for JST)
    pub fn from_offset_minutes(minutes: i32) -> Result<Self, DomainError> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(|offset| Self { offset })
            .ok_or_else(|| DomainError::validation(format!("Invalid UTC offset: {} minutes", minutes)))
    }

    pub fn offset_minutes(&self) -> i32 {
        self.offset.local_minus_utc() / 60
    }

    pub fn local(&self, instant: &DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.offset)
    }

    /// Calendar date of an instant at this offset
    pub fn date_of(&self, instant: &DateTime<Utc>) -> NaiveDate {
        self.local(instant).date_naive()
    }

    /// Hour (0-23) of an instant at this offset
    pub fn hour_of(&self, instant: &DateTime<Utc>) -> u32 {
        self.local(instant).hour()
    }

    pub fn today(&self) -> NaiveDate {
        self.date_of(&Utc::now())
    }

    /// Parse a start date-time.
    ///
    /// Accepts RFC 3339 (`2025-03-01T08:00:00Z`, `...+09:00`) and the naive
    /// `YYYY-MM-DDTHH:MM[:SS]` form sent by datetime inputs, which is read as
    /// local time at this clock's offset.
    pub fn parse_instant(&self, input: &str) -> Result<DateTime<Utc>, DomainError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DomainError::validation("Date and time are required"));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(dt.with_timezone(&Utc));
        }

        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
            .and_then(|naive| self.offset.from_local_datetime(&naive).single())
            .map(|local| local.with_timezone(&Utc))
            .ok_or_else(|| DomainError::validation(format!("Invalid date format: {}", input)))
    }
}

impl Default for DayClock {
    fn default() -> Self {
        Self::utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_shifts_calendar_day() {
        let clock = DayClock::from_offset_minutes(9 * 60).unwrap();
        let instant = Utc.with_ymd_and_hms(2025, 3, 1, 20, 0, 0).unwrap();

        assert_eq!(clock.date_of(&instant), NaiveDate::from_ymd_opt(2025, 3, 2).unwrap());
        assert_eq!(clock.hour_of(&instant), 5);
        assert_eq!(clock.offset_minutes(), 540);
    }

    #[test]
    fn test_rejects_out_of_range_offset() {
        assert!(DayClock::from_offset_minutes(24 * 60).is_err());
        assert!(DayClock::from_offset_minutes(-330).is_ok());
    }

    #[test]
    fn test_parse_instant_formats() {
        let clock = DayClock::from_offset_minutes(60).unwrap();
        let expected = Utc.with_ymd_and_hms(2025, 3, 1, 7, 30, 0).unwrap();

        assert_eq!(clock.parse_instant("2025-03-01T07:30:00Z").unwrap(), expected);
        assert_eq!(clock.parse_instant("2025-03-01T08:30:00+01:00").unwrap(), expected);
        assert_eq!(clock.parse_instant("2025-03-01T08:30").unwrap(), expected);
    }

    #[test]
    fn test_parse_instant_rejects_garbage() {
        let clock = DayClock::utc();
        assert!(matches!(
            clock.parse_instant("tomorrow-ish"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(clock.parse_instant("  "), Err(DomainError::Validation(_))));
    }
}
