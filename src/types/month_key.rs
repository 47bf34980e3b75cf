use crate::types::errors::MonthKeyError;
use chrono::{Datelike, Month, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A calendar month used as the grouping key for spend totals.
///
/// Ordering is chronological: year first, then month.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct MonthKey {
    year: i32,
    month: u32
}

impl MonthKey {
    /// Creates a key, returning `None` if `month` is not within `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Capitalised month name followed by the year, e.g. `January 2026`.
    pub fn long_name(&self) -> String {
        let name = u8::try_from(self.month).ok()
            .and_then(|month| Month::try_from(month).ok())
            .map(|month| month.name())
            .unwrap_or("Unknown");

        format!("{} {}", name, self.year)
    }
}

impl From<&NaiveDateTime> for MonthKey {
    fn from(timestamp: &NaiveDateTime) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month()
        }
    }
}

impl Display for MonthKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        let Some((year, month)) = value.split_once('-') else {
            return Err(MonthKeyError::InvalidFormat(format!("Expected YYYY-MM, got '{value}'")));
        };

        if year.len() != 4 || month.len() != 2 {
            return Err(MonthKeyError::InvalidFormat(format!("Expected YYYY-MM, got '{value}'")));
        }

        let year: i32 = year.parse()?;
        let month: u32 = month.parse()?;

        MonthKey::new(year, month).ok_or(MonthKeyError::MonthOutOfRange(month))
    }
}

impl Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
