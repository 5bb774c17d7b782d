use std::fmt;

use crate::lib::date::YearMonth;

/// Inclusive range of months, guaranteed nonempty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    start: YearMonth,
    end: YearMonth,
}

/// Ways in which a pair of months can fail to make a period
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// start is strictly after end
    Reversed(YearMonth, YearMonth),
}

impl Period {
    /// Validate that `start <= end`
    pub fn new(start: YearMonth, end: YearMonth) -> Result<Self, RangeError> {
        if start > end {
            Err(RangeError::Reversed(start, end))
        } else {
            Ok(Self { start, end })
        }
    }

    pub fn start(&self) -> YearMonth {
        self.start
    }

    pub fn end(&self) -> YearMonth {
        self.end
    }

    /// All months of the period in chronological order
    pub fn months(&self) -> Months {
        Months {
            next: Some(self.start),
            end: self.end,
        }
    }
}

/// Iterator over the months of a `Period`
pub struct Months {
    next: Option<YearMonth>,
    end: YearMonth,
}

impl Iterator for Months {
    type Item = YearMonth;

    fn next(&mut self) -> Option<YearMonth> {
        let curr = self.next?;
        self.next = if curr < self.end { Some(curr.next()) } else { None };
        Some(curr)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}..{}", self.start, self.end)
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::Reversed(s, e) => write!(f, "{} comes after {}", s, e),
        }
    }
}

impl RangeError {
    /// What message to show to help fix the range error
    pub fn fix_hint(&self) -> String {
        match self {
            RangeError::Reversed(s, e) => format!("did you mean {}..{} ?", e, s),
        }
    }
}
