use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month, PrimitiveDateTime, Time};

use crate::ValidationError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[day]/[month]/[year]");

/// Calendar date without time-of-day, written as `DD/MM/YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChartDate(Date);

impl ChartDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub fn from_calendar_date(year: i32, month: u8, day: u8) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidDate {
            value: format!("{day:02}/{month:02}/{year:04}"),
        };
        let month = Month::try_from(month).map_err(|_| invalid())?;
        Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(|_| invalid())
    }

    pub const fn from_date(date: Date) -> Self {
        Self(date)
    }

    pub const fn into_inner(self) -> Date {
        self.0
    }

    /// The date at 00:00:00, the instant the chart plots it at.
    pub const fn midnight(self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.0, Time::MIDNIGHT)
    }

    pub fn format(self) -> String {
        format!(
            "{:02}/{:02}/{:04}",
            self.0.day(),
            u8::from(self.0.month()),
            self.0.year()
        )
    }
}

impl Display for ChartDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for ChartDate {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl From<Date> for ChartDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl Serialize for ChartDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for ChartDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

/// Inclusive calendar interval selected on the range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: ChartDate,
    end: ChartDate,
}

impl DateRange {
    pub fn new(start: ChartDate, end: ChartDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvertedRange {
                start: start.format(),
                end: end.format(),
            });
        }

        Ok(Self { start, end })
    }

    /// Caller guarantees `start <= end`.
    pub(crate) const fn from_ordered(start: ChartDate, end: ChartDate) -> Self {
        Self { start, end }
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        Self::new(ChartDate::parse(start)?, ChartDate::parse(end)?)
    }

    pub const fn start(&self) -> ChartDate {
        self.start
    }

    pub const fn end(&self) -> ChartDate {
        self.end
    }

    pub fn contains(&self, date: ChartDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Bounds {
            start: ChartDate,
            end: ChartDate,
        }

        let bounds = Bounds::deserialize(deserializer)?;
        Self::new(bounds.start, bounds.end).map_err(D::Error::custom)
    }
}
