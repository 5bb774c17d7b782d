//! Conversion of command-line text into validated values
//!
//! Every failure is registered in the error record instead of aborting
//! on the first one, so that a single run reports all bad arguments.

use pest::Parser;
use pest_derive::Parser;

use crate::lib::{
    date::YearMonth,
    entry::{Amount, PriceRange},
    period::{Period, RangeError},
};
use crate::load::error::{Error, Loc, Record};

#[derive(Parser)]
#[grammar = "load/grammar.pest"]
struct MonthParser;

/// Parse a `YYYY-MM` argument
///
/// Also returns the location of the month in `text` to report
/// errors that involve several arguments.
pub fn year_month<'i>(errs: &mut Record, arg: &'i str, text: &'i str) -> Option<(YearMonth, Loc<'i>)> {
    let pair = match MonthParser::parse(Rule::date, text) {
        // date -> year_month is guaranteed by the grammar
        Ok(mut pairs) => pairs.next().unwrap().into_inner().next().unwrap(),
        Err(e) => {
            Error::new("Invalid date format")
                .with_error(e.with_path(arg))
                .with_hint("months are written YYYY-MM, e.g. 2023-01")
                .register(errs);
            return None;
        }
    };
    let loc = (arg, pair.as_span());
    let mut inner = pair.into_inner();
    // fixed-width digit strings always fit
    let year = inner.next().unwrap().as_str().parse::<usize>().unwrap();
    let month = inner.next().unwrap().as_str().parse::<usize>().unwrap();
    match YearMonth::from(year, month) {
        Ok(date) => Some((date, loc)),
        Err(e) => {
            Error::new("Invalid date format")
                .with_span(&loc, e.to_string())
                .with_hint(e.fix_hint())
                .register(errs);
            None
        }
    }
}

/// Check that two parsed months form a period
pub fn period(errs: &mut Record, start: (YearMonth, Loc), end: (YearMonth, Loc)) -> Option<Period> {
    match Period::new(start.0, end.0) {
        Ok(p) => Some(p),
        Err(e @ RangeError::Reversed(..)) => {
            Error::new("Invalid range")
                .with_span(&start.1, "period starts here")
                .with_span(&end.1, "but ends here")
                .with_text(e.to_string())
                .with_hint(e.fix_hint())
                .register(errs);
            None
        }
    }
}

/// Largest sum of money accepted on the command line
///
/// Far enough from `f64::MAX` that compounding never overflows.
pub const MAX_AMOUNT: f64 = 1e15;

/// Parse a nonnegative sum of money
pub fn amount(errs: &mut Record, arg: &str, text: &str) -> Option<Amount> {
    match text.trim().parse::<f64>() {
        Ok(v) if v > MAX_AMOUNT => {
            Error::new("Invalid amount")
                .with_text(format!("{} is too large, got '{}'", arg, text))
                .with_hint(format!("amounts are limited to {:.0}", MAX_AMOUNT))
                .register(errs);
            None
        }
        Ok(v) if v.is_finite() && v >= 0.0 => Some(Amount(v)),
        Ok(_) => {
            Error::new("Invalid amount")
                .with_text(format!("{} must be a finite nonnegative amount, got '{}'", arg, text))
                .register(errs);
            None
        }
        Err(_) => {
            Error::new("Invalid amount")
                .with_text(format!("'{}' given for {} is not a number", text, arg))
                .with_hint("write amounts as XXX.XX")
                .register(errs);
            None
        }
    }
}

/// Parse the lowest and highest price of a commodity
pub fn prices(errs: &mut Record, min: (&str, &str), max: (&str, &str)) -> Option<PriceRange> {
    let lo = amount(errs, min.0, min.1);
    let hi = amount(errs, max.0, max.1);
    let (Amount(min), Amount(max)) = (lo?, hi?);
    if min > max {
        Error::new("Invalid price range")
            .with_text(format!("lowest price {:.2} is above highest price {:.2}", min, max))
            .with_hint("swap the two prices")
            .register(errs);
        return None;
    }
    Some(PriceRange { min, max })
}
