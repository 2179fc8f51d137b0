//! Partial Calendar Values
//!
//! The API sends dates at varying precision: a bare year, a year and month,
//! a full date, or a UTC instant. `SafeCalendar` keeps exactly the parts that
//! were sent and nothing more. A calendar with no parts set is the
//! [`SafeCalendar::UNSET`] sentinel, which stands for "unknown" and is distinct
//! from a field that was absent from the payload.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

/// A calendar value with independently set year, month, day and time parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SafeCalendar {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    time: Option<NaiveTime>,
}

impl SafeCalendar {
    /// The "unknown date" sentinel. Never interpret it as the epoch.
    pub const UNSET: SafeCalendar = SafeCalendar {
        year: None,
        month: None,
        day: None,
        time: None,
    };

    /// A calendar with only the year set
    pub fn from_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Self::UNSET
        }
    }

    /// A calendar with year and month (1-12) set
    pub fn from_year_month(year: i32, month: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self {
            year: Some(year),
            month: Some(month),
            ..Self::UNSET
        })
    }

    /// A calendar with the full date set
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: Some(date.year()),
            month: Some(date.month()),
            day: Some(date.day()),
            time: None,
        }
    }

    /// A calendar holding a UTC instant, truncated to whole seconds
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        let naive = instant.naive_utc();
        let time = naive.time().with_nanosecond(0).unwrap_or(naive.time());
        Self {
            time: Some(time),
            ..Self::from_date(naive.date())
        }
    }

    /// Any combination of year, month and day, as found in birth dates.
    ///
    /// Returns `None` when a part is out of range or the full date does not exist.
    pub fn from_parts(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Option<Self> {
        if month.is_some_and(|m| !(1..=12).contains(&m)) || day.is_some_and(|d| !(1..=31).contains(&d)) {
            return None;
        }
        if let (Some(y), Some(m), Some(d)) = (year, month, day) {
            NaiveDate::from_ymd_opt(y, m, d)?;
        }
        Some(Self {
            year,
            month,
            day,
            time: None,
        })
    }

    /// True for the "unknown date" sentinel
    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Month of the year, 1-based
    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    /// The calendar date, if year, month and day are all set
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year?, self.month?, self.day?)
    }

    /// The UTC instant, if the calendar is filled down to the second
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        let naive = NaiveDateTime::new(self.date()?, self.time?);
        Some(naive.and_utc())
    }

    /// Wire form at the precision that was set.
    ///
    /// `None` for the sentinel and for calendars without a year.
    pub fn to_wire_string(&self) -> Option<String> {
        let year = self.year?;
        let mut output = format!("{:04}", year);
        if let Some(month) = self.month {
            output.push_str(&format!("-{:02}", month));
            if let Some(day) = self.day {
                output.push_str(&format!("-{:02}", day));
                if let Some(time) = self.time {
                    output.push_str(&format!(
                        "T{:02}:{:02}:{:02}Z",
                        time.hour(),
                        time.minute(),
                        time.second()
                    ));
                }
            }
        }
        Some(output)
    }
}

impl fmt::Display for SafeCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_wire_string() {
            Some(wire) => f.write_str(&wire),
            None if self.is_unset() => f.write_str("unset"),
            None => write!(
                f,
                "--{}-{}",
                self.month.map_or("??".to_string(), |m| format!("{:02}", m)),
                self.day.map_or("??".to_string(), |d| format!("{:02}", d))
            ),
        }
    }
}
