pub mod error;
pub mod parse;

use crate::lib::{
    entry::{Amount, PriceRange},
    period::Period,
};

/// Everything one run needs besides the rate tables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub amount: Amount,
    pub period: Period,
    pub prices: PriceRange,
    pub monthly: bool,
}

/// Validate the command-line arguments
///
/// All problems are registered in `errs`, `None` is returned
/// if any of them is fatal.
pub fn read_settings(matches: &clap::ArgMatches, errs: &mut error::Record) -> Option<Settings> {
    // every argument has a default value
    let arg = |name: &str| matches.value_of(name).unwrap_or("");
    let amount = parse::amount(errs, "--amount", arg("amount"));
    let start = parse::year_month(errs, "--start", arg("start"));
    let end = parse::year_month(errs, "--end", arg("end"));
    let prices = parse::prices(
        errs,
        ("--min-price", arg("min-price")),
        ("--max-price", arg("max-price")),
    );
    let period = parse::period(errs, start?, end?);
    if errs.is_fatal() {
        return None;
    }
    Some(Settings {
        amount: amount?,
        period: period?,
        prices: prices?,
        monthly: matches.is_present("monthly"),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cli::args;

    fn read(argv: &[&str]) -> (Option<Settings>, error::Record) {
        let matches = args::app()
            .get_matches_from_safe(std::iter::once("deflator").chain(argv.iter().copied()))
            .unwrap();
        let mut errs = error::Record::new();
        (read_settings(&matches, &mut errs), errs)
    }

    #[test]
    fn defaults() {
        let (settings, errs) = read(&[]);
        assert!(!errs.is_fatal());
        let s = settings.unwrap();
        assert_eq!(s.amount, Amount(65.0));
        assert_eq!(s.period.to_string(), "2023-01..2024-12");
        assert_eq!(s.prices, PriceRange { min: 3.68, max: 10.11 });
        assert!(!s.monthly);
    }

    #[test]
    fn overrides() {
        let (settings, _) = read(&["-a", "100", "-s", "2024-01", "-e", "2024-03", "--monthly"]);
        let s = settings.unwrap();
        assert_eq!(s.amount, Amount(100.0));
        assert_eq!(s.period.to_string(), "2024-01..2024-03");
        assert!(s.monthly);
    }

    #[test]
    fn all_errors_reported() {
        let (settings, errs) = read(&["-a", "-5", "-s", "2023-13", "-e", "2024/01"]);
        assert!(settings.is_none());
        assert_eq!(errs.count_errors(), 3);
    }

    #[test]
    fn reversed() {
        let (settings, errs) = read(&["-s", "2024-12", "-e", "2023-01"]);
        assert!(settings.is_none());
        assert_eq!(errs.count_errors(), 1);
    }
}
