use std::fmt;

use crate::lib::{compare::Comparison, entry::Amount, period::Period};

/// Fixed sequence of sentences describing one run
pub struct Report {
    pub amount: Amount,
    pub value: Amount,
    pub period: Period,
    pub rice: Comparison,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.period.start();
        let end = self.period.end();
        let rice = &self.rice;
        writeln!(f, "{} PLN from {} is worth {} PLN in {}", self.amount, start, self.value, end)?;

        writeln!(f)?;
        writeln!(f, "Purchasing power (rice):")?;
        writeln!(f, "In {} 1 kg of rice cost {} PLN", start, rice.start)?;
        writeln!(f, "In {} 1 kg of rice costs {} PLN", end, rice.end)?;

        writeln!(f)?;
        writeln!(f, "In other words:")?;
        writeln!(f, "If in {} you bought 1 kg of rice for {:.2} PLN (the most expensive),", start, rice.start.max)?;
        writeln!(f, "today the same sum (after inflation) buys only {:.0} grams of rice", rice.grams_affordable())?;

        writeln!(f)?;
        writeln!(f, "Or the other way around:")?;
        writeln!(f, "To buy 1 kg of the same rice in {},", end)?;
        writeln!(f, "you have to pay {:.1}% more than in {}", rice.percent_more_expensive(), start)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lib::{
        compare::compare,
        date::YearMonth,
        entry::PriceRange,
        project::Projector,
        rates::{InflationTable, PpiTable},
    };

    #[test]
    fn default_run() {
        let (i, p) = (InflationTable::poland(), PpiTable::poland());
        let proj = Projector::new(&i, &p);
        let start = YearMonth::from(2023, 1).unwrap();
        let end = YearMonth::from(2024, 12).unwrap();
        let rice = compare(&proj, PriceRange { min: 3.68, max: 10.11 }, start, end).unwrap();
        let report = Report {
            amount: Amount(65.0),
            value: proj.project(Amount(65.0), start, end).unwrap(),
            period: Period::new(start, end).unwrap(),
            rice,
        };
        let shown = report.to_string();
        let lines = shown.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "65.00 PLN from 2023-01 is worth 79.91 PLN in 2024-12");
        assert_eq!(lines[3], "In 2023-01 1 kg of rice cost 2.99 - 8.22 PLN");
        assert_eq!(lines[4], "In 2024-12 1 kg of rice costs 3.68 - 10.11 PLN");
        assert_eq!(lines[7], "If in 2023-01 you bought 1 kg of rice for 8.22 PLN (the most expensive),");
        assert_eq!(lines[8], "today the same sum (after inflation) buys only 122 grams of rice");
        assert_eq!(lines[12], "you have to pay 23.0% more than in 2023-01");
    }
}
