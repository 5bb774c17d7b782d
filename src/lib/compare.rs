//! Purchasing power of a commodity at both ends of a period
//!
//! The growth of one PLN over the period is used to project known end prices
//! back to the start date: `start = end / growth`.

use std::fmt;

use crate::lib::{
    date::YearMonth,
    entry::{Amount, PriceRange},
    period::RangeError,
    project::Projector,
};

/// Prices of a commodity at the start and end of a period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub start: PriceRange,
    pub end: PriceRange,
    /// what one PLN at the start of the period is worth at its end
    pub value_change: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompareError {
    Range(RangeError),
    /// one PLN rounds to nothing at the end of the period
    Vanished,
}

impl From<RangeError> for CompareError {
    fn from(e: RangeError) -> Self {
        CompareError::Range(e)
    }
}

/// Prices at `start` equivalent to the prices `end_prices` observed at `end`
pub fn compare(
    projector: &Projector,
    end_prices: PriceRange,
    start: YearMonth,
    end: YearMonth,
) -> Result<Comparison, CompareError> {
    let Amount(value_change) = projector.project(Amount(1.0), start, end)?;
    if value_change == 0.0 {
        return Err(CompareError::Vanished);
    }
    Ok(Comparison {
        start: PriceRange {
            min: end_prices.min / value_change,
            max: end_prices.max / value_change,
        },
        end: end_prices,
        value_change,
    })
}

impl Comparison {
    /// Grams of the commodity that the money once spent on one kilogram
    /// at the highest price buys today
    pub fn grams_affordable(&self) -> f64 {
        self.value_change / self.end.max * 1000.0
    }

    /// How much more expensive (in percent) the highest price has become
    pub fn percent_more_expensive(&self) -> f64 {
        (self.end.max / self.start.max - 1.0) * 100.0
    }
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareError::Range(e) => write!(f, "{}", e),
            CompareError::Vanished => write!(f, "1 PLN is worth nothing at the end of the period"),
        }
    }
}
