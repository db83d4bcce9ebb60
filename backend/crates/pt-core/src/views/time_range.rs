use crate::{CoreError, CoreResult, YearMonth};

use std::panic::Location;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Window shown by the timeline views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// The current calendar month
    Month,
    /// One month back to two months ahead
    #[default]
    Quarter,
    /// The current calendar year
    Year,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    /// Inclusive `(start, end)` of the window around `today`.
    ///
    /// Month arithmetic clamps to the last day of shorter months.
    pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Self::Month => {
                let month = YearMonth::of(today);
                (
                    month.first_day().unwrap_or(today),
                    month.last_day().unwrap_or(today),
                )
            }
            Self::Quarter => (
                today.checked_sub_months(Months::new(1)).unwrap_or(today),
                today.checked_add_months(Months::new(2)).unwrap_or(today),
            ),
            Self::Year => (
                NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
                NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today),
            ),
        }
    }
}

impl FromStr for TimeRange {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            _ => Err(CoreError::InvalidTimeRange {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
