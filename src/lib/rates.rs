//! Immutable rate tables consulted by the projector
//!
//! Both tables answer lookups with an `Option`: a missing year, month or
//! quarter is not an error, it just means that adjustment is not applied.

use std::collections::BTreeMap;

use crate::lib::date::{Quarter, YearMonth};

/// Annual-equivalent inflation rates (percent), one per month, January first
///
/// A year may carry fewer than 12 months of data, the remaining
/// months are absent.
#[derive(Debug, Clone, Default)]
pub struct InflationTable {
    years: BTreeMap<u16, Vec<f64>>,
}

impl InflationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the data of a year
    ///
    /// Only the first 12 rates are kept.
    pub fn with_year(mut self, year: u16, rates: &[f64]) -> Self {
        self.years.insert(year, rates.iter().copied().take(12).collect());
        self
    }

    /// Annual rate in effect during `date`, if known
    pub fn rate(&self, date: YearMonth) -> Option<f64> {
        self.years
            .get(&date.year())
            .and_then(|rates| rates.get(date.month() as usize))
            .copied()
    }

    /// Consumer price index figures published by GUS for 2021 ..= 2024
    pub fn poland() -> Self {
        Self::new()
            .with_year(2021, &[2.6, 2.4, 3.2, 4.3, 4.7, 4.4, 5.0, 5.5, 5.9, 6.8, 7.8, 8.6])
            .with_year(2022, &[9.4, 8.5, 11.0, 12.4, 13.9, 15.5, 15.6, 16.1, 17.2, 17.9, 17.5, 16.6])
            .with_year(2023, &[16.6, 18.4, 16.1, 14.7, 13.0, 11.5, 10.8, 10.1, 8.2, 6.6, 6.6, 6.2])
            .with_year(2024, &[3.7, 2.8, 2.0, 2.4, 2.5, 2.6, 4.2, 4.3, 4.9, 5.0, 4.6, 4.6])
    }
}

/// Quarterly producer price growth multipliers (`1.042` is +4.2% over the quarter)
#[derive(Debug, Clone, Default)]
pub struct PpiTable {
    quarters: BTreeMap<Quarter, f64>,
}

impl PpiTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the multiplier of a quarter
    pub fn with_quarter(mut self, quarter: Quarter, multiplier: f64) -> Self {
        self.quarters.insert(quarter, multiplier);
        self
    }

    /// Multiplier of `quarter`, if known
    pub fn multiplier(&self, quarter: Quarter) -> Option<f64> {
        self.quarters.get(&quarter).copied()
    }

    /// GUS report of 2024-12-04, Q4 extrapolated from the Q3 trend
    pub fn poland() -> Self {
        [(1, 1.042), (2, 1.007), (3, 1.007), (4, 1.007)]
            .iter()
            .filter_map(|&(q, m)| Quarter::from(2024, q).map(|q| (q, m)))
            .fold(Self::new(), |table, (q, m)| table.with_quarter(q, m))
    }
}
