use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

/// A calendar month, ordered chronologically and rendered as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn last_day(self) -> Option<NaiveDate> {
        self.next().first_day()?.pred_opt()
    }

    pub fn days_in_month(self) -> u32 {
        self.last_day().map(|day| day.day()).unwrap_or(0)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Months touched by `[start, end]`, both ends included. Empty if misordered.
pub fn months_in_range(start: NaiveDate, end: NaiveDate) -> Vec<YearMonth> {
    let last = YearMonth::of(end);
    let mut months = Vec::new();
    let mut current = YearMonth::of(start);
    while current <= last {
        months.push(current);
        current = current.next();
    }
    months
}
