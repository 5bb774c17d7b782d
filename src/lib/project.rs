//! Compounding of monthly inflation and quarterly PPI onto an amount
//!
//! Each month of the period contributes up to two factors:
//! - `(1 + r/100)^(1/12)` where `r` is the annual rate in effect that month,
//! - `q^(1/3)` where `q` is the PPI multiplier of the quarter containing it.
//!
//! Either factor is skipped when the tables have no data for that month.

use tracing::{debug, trace};

use crate::lib::{
    date::YearMonth,
    entry::Amount,
    period::{Period, RangeError},
    rates::{InflationTable, PpiTable},
};

/// Projects amounts forward through time using a pair of rate tables
#[derive(Debug, Clone, Copy)]
pub struct Projector<'t> {
    inflation: &'t InflationTable,
    ppi: &'t PpiTable,
}

/// One month of a projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub date: YearMonth,
    /// annual inflation rate applied, in percent
    pub rate: Option<f64>,
    /// quarterly PPI multiplier applied
    pub ppi: Option<f64>,
    /// running value after this month, unrounded
    pub value: f64,
}

impl<'t> Projector<'t> {
    pub fn new(inflation: &'t InflationTable, ppi: &'t PpiTable) -> Self {
        Self { inflation, ppi }
    }

    /// Value of `amount` taken at `start` once it has gone through
    /// every month up to `end` inclusive, rounded to the cent
    pub fn project(&self, amount: Amount, start: YearMonth, end: YearMonth) -> Result<Amount, RangeError> {
        let period = Period::new(start, end)?;
        let value = self.trajectory(amount, period).last().map_or(amount.0, |s| s.value);
        debug!(%period, amount = amount.0, value, "projection done");
        Ok(Amount(value).round_cents())
    }

    /// Month-by-month trace of the projection of `amount` over `period`
    pub fn trajectory(&self, amount: Amount, period: Period) -> Vec<Step> {
        let mut value = amount.0;
        period
            .months()
            .map(|date| {
                let rate = self.inflation.rate(date);
                match rate {
                    Some(r) => {
                        value *= monthly_factor(r);
                        debug!(%date, rate = r, value, "applied inflation");
                    }
                    None => trace!(%date, "no inflation data"),
                }
                let quarter = date.quarter();
                let ppi = self.ppi.multiplier(quarter);
                match ppi {
                    Some(q) => {
                        value *= q.powf(1.0 / 3.0);
                        debug!(%date, %quarter, multiplier = q, value, "applied ppi");
                    }
                    None => trace!(%date, %quarter, "no ppi data"),
                }
                Step { date, rate, ppi, value }
            })
            .collect()
    }

    /// Whether any month of `period` has inflation or PPI data
    pub fn has_data(&self, period: Period) -> bool {
        period
            .months()
            .any(|d| self.inflation.rate(d).is_some() || self.ppi.multiplier(d.quarter()).is_some())
    }
}

/// Effective monthly growth of an annual rate given in percent
fn monthly_factor(rate: f64) -> f64 {
    (1.0 + rate / 100.0).powf(1.0 / 12.0)
}

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! ym {
        ( $y:tt - $m:tt ) => {
            YearMonth::from($y, $m).unwrap()
        };
    }

    macro_rules! close {
        ( $a:expr, $b:expr ) => {{
            let (a, b): (f64, f64) = ($a, $b);
            assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
        }};
    }

    fn tables() -> (InflationTable, PpiTable) {
        (InflationTable::poland(), PpiTable::poland())
    }

    #[test]
    fn golden_65_pln() {
        let (i, p) = tables();
        let v = Projector::new(&i, &p).project(Amount(65.0), ym!(2023 - 1), ym!(2024 - 12));
        assert_eq!(v, Ok(Amount(79.91)));
    }

    #[test]
    fn golden_unit() {
        let (i, p) = tables();
        let proj = Projector::new(&i, &p);
        assert_eq!(proj.project(Amount(1.0), ym!(2023 - 1), ym!(2024 - 12)), Ok(Amount(1.23)));
        assert_eq!(proj.project(Amount(1000.0), ym!(2021 - 1), ym!(2024 - 12)), Ok(Amount(1476.05)));
        assert_eq!(proj.project(Amount(100.0), ym!(2024 - 1), ym!(2024 - 3)), Ok(Amount(104.93)));
    }

    #[test]
    fn single_month_inflation_only() {
        let (i, p) = tables();
        let v = Projector::new(&i, &p).project(Amount(100.0), ym!(2023 - 6), ym!(2023 - 6));
        let expected = Amount(100.0 * (1.0f64 + 11.5 / 100.0).powf(1.0 / 12.0)).round_cents();
        assert_eq!(v, Ok(expected));
        assert_eq!(expected, Amount(100.91));
    }

    #[test]
    fn zero_amount() {
        let (i, p) = tables();
        let proj = Projector::new(&i, &p);
        assert_eq!(proj.project(Amount(0.0), ym!(2021 - 1), ym!(2024 - 12)), Ok(Amount(0.0)));
        assert_eq!(proj.project(Amount(0.0), ym!(2024 - 7), ym!(2024 - 7)), Ok(Amount(0.0)));
    }

    #[test]
    fn reversed_range() {
        let (i, p) = tables();
        let v = Projector::new(&i, &p).project(Amount(65.0), ym!(2024 - 12), ym!(2023 - 1));
        assert_eq!(v, Err(RangeError::Reversed(ym!(2024 - 12), ym!(2023 - 1))));
    }

    #[test]
    fn missing_data_is_skipped() {
        let (i, p) = tables();
        let proj = Projector::new(&i, &p);
        // neither table knows 2025
        assert_eq!(proj.project(Amount(100.0), ym!(2025 - 1), ym!(2025 - 6)), Ok(Amount(100.0)));
        assert_eq!(proj.project(Amount(2.675), ym!(2025 - 1), ym!(2025 - 1)), Ok(Amount(2.67)));
        assert_eq!(proj.project(Amount(1.115), ym!(2025 - 1), ym!(2025 - 12)), Ok(Amount(1.11)));
        // only the first month has data
        assert_eq!(proj.project(Amount(100.0), ym!(2024 - 12), ym!(2025 - 3)), Ok(Amount(100.61)));
        let none = InflationTable::new();
        let empty = PpiTable::new();
        let bare = Projector::new(&none, &empty);
        let period = Period::new(ym!(2023 - 1), ym!(2023 - 12)).unwrap();
        assert!(!bare.has_data(period));
        assert!(proj.has_data(period));
    }

    #[test]
    fn monotonic_in_end() {
        let (i, p) = tables();
        let proj = Projector::new(&i, &p);
        let start = ym!(2021 - 1);
        let mut end = start;
        let mut prev = proj.project(Amount(1000.0), start, end).unwrap();
        for _ in 0..60 {
            end = end.next();
            let curr = proj.project(Amount(1000.0), start, end).unwrap();
            assert!(curr.0 >= prev.0, "{} decreased to {} at {}", prev, curr, end);
            prev = curr;
        }
    }

    #[test]
    fn repeatable() {
        let (i, p) = tables();
        let proj = Projector::new(&i, &p);
        let a = proj.project(Amount(65.0), ym!(2023 - 1), ym!(2024 - 12));
        let b = proj.project(Amount(65.0), ym!(2023 - 1), ym!(2024 - 12));
        assert_eq!(a, b);
    }

    #[test]
    fn trajectory_steps() {
        let (i, p) = tables();
        let proj = Projector::new(&i, &p);
        let period = Period::new(ym!(2023 - 12), ym!(2024 - 1)).unwrap();
        let steps = proj.trajectory(Amount(100.0), period);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].rate, Some(6.2));
        assert_eq!(steps[0].ppi, None);
        close!(steps[0].value, 100.0 * monthly_factor(6.2));
        assert_eq!(steps[1].rate, Some(3.7));
        assert_eq!(steps[1].ppi, Some(1.042));
        close!(steps[1].value, steps[0].value * monthly_factor(3.7) * 1.042f64.powf(1.0 / 3.0));
    }

    #[test]
    fn ppi_over_a_quarter() {
        let none = InflationTable::new();
        let p = PpiTable::poland();
        let proj = Projector::new(&none, &p);
        let period = Period::new(ym!(2024 - 1), ym!(2024 - 3)).unwrap();
        let steps = proj.trajectory(Amount(1.0), period);
        close!(steps[2].value, 1.042);
    }
}
