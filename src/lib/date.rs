//! Month-precise time management
//!
//! A `YearMonth` is `YYYY-MM`: no days, no weekdays. It knows its successor
//! (with wrapping into the next year) and the quarter it belongs to, which
//! is all the projection needs to walk a range one month at a time.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::fmt;

/// Twelve months in the year, identified by their 3-letter abbreviations
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, PartialOrd, Ord, Hash)]
pub enum Month {
    Jan = 0,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// Month from its calendar number (`1` is January)
    pub fn from_number(n: usize) -> Option<Self> {
        if n == 0 {
            None
        } else {
            Self::from_usize(n - 1)
        }
    }

    /// Calendar number of the month (`1` is January)
    pub fn number(self) -> usize {
        self as usize + 1
    }

    /// Month directly succeeding the current one with wrapping
    pub fn next(self) -> Self {
        Self::from_isize((self as isize + 1) % 12).unwrap()
    }

    /// Quarter ordinal in `1..=4`
    pub fn quarter(self) -> u8 {
        (self as u8) / 3 + 1
    }
}

/// A date with month-precision
///
/// Supports years in the range 1000..=9999.
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: u16,
    month: Month,
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month.number())
    }
}

/// Quarter of a year, printed as its table key (`2024Q1`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quarter {
    year: u16,
    ordinal: u8,
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Q{}", self.year, self.ordinal)
    }
}

impl Quarter {
    /// Validate year-ordinal into quarter
    pub fn from(year: u16, ordinal: u8) -> Option<Self> {
        if (1..=4).contains(&ordinal) {
            Some(Self { year, ordinal })
        } else {
            None
        }
    }
}

/// Ways in which a month taken from user input can be wrong
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateError {
    /// year is outside of 1000..=9999
    UnsupportedYear(usize),
    /// month outside of 1..=12
    InvalidMonth(usize),
}

impl YearMonth {
    /// Validate year-month into date
    pub fn from(year: usize, month: usize) -> Result<Self, DateError> {
        if !(1000..=9999).contains(&year) {
            return Err(DateError::UnsupportedYear(year));
        }
        match Month::from_number(month) {
            Some(month) => Ok(Self { year: year as u16, month }),
            None => Err(DateError::InvalidMonth(month)),
        }
    }

    /// `self.year` accessor
    pub fn year(&self) -> u16 {
        self.year
    }

    /// `self.month` accessor
    pub fn month(&self) -> Month {
        self.month
    }

    /// Quarter containing this month
    pub fn quarter(self) -> Quarter {
        Quarter {
            year: self.year,
            ordinal: self.month.quarter(),
        }
    }

    /// Following month, December wraps to January of the next year
    pub fn next(self) -> Self {
        if self.month == Month::Dec {
            Self { year: self.year + 1, month: Month::Jan }
        } else {
            Self { month: self.month.next(), ..self }
        }
    }
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DateError::*;
        match self {
            UnsupportedYear(y) => write!(f, "{} is outside of the supported range for years", y),
            InvalidMonth(m) => write!(f, "{} is not a valid month", m),
        }
    }
}

impl DateError {
    /// What message to show to help fix the date error
    pub fn fix_hint(&self) -> String {
        use DateError::*;
        match self {
            UnsupportedYear(_) => "year should be between 1000 and 9999 inclusive".to_string(),
            InvalidMonth(m) => format!("{} is not in the range 01 ..= 12", m),
        }
    }
}
