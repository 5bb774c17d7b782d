mod cli;
mod lib;
mod load;

use cli::{args, report::Report, table::Table};
use lib::{
    compare::compare,
    project::Projector,
    rates::{InflationTable, PpiTable},
};
use load::error::{Error, Record};

fn main() {
    let matches = args::app().get_matches();
    args::init_logging(matches.occurrences_of("verbose"));

    let mut errs = Record::new();
    let settings = load::read_settings(&matches, &mut errs);
    let inflation = InflationTable::poland();
    let ppi = PpiTable::poland();
    let projector = Projector::new(&inflation, &ppi);

    let report = settings.and_then(|s| {
        tracing::info!(period = %s.period, amount = s.amount.0, "projecting");
        if !projector.has_data(s.period) {
            Error::new("No rate data")
                .nonfatal()
                .with_text(format!("neither table has data for {}", s.period))
                .with_hint("the value will stay unchanged")
                .register(&mut errs);
        }
        let (start, end) = (s.period.start(), s.period.end());
        let outcome = projector
            .project(s.amount, start, end)
            .map_err(lib::compare::CompareError::from)
            .and_then(|value| Ok((value, compare(&projector, s.prices, start, end)?)));
        match outcome {
            Ok((value, rice)) => Some((s, Report { amount: s.amount, value, period: s.period, rice })),
            Err(e) => {
                Error::new("Projection failed").with_text(e).register(&mut errs);
                None
            }
        }
    });

    print!("{}", errs);
    match report {
        Some((s, report)) => {
            if s.monthly {
                let steps = projector.trajectory(s.amount, s.period);
                println!("{}", Table::from(&steps).with_title(format!("Monthly projection {}", s.period)));
            }
            print!("{}", report);
        }
        None => std::process::exit(1),
    }
}
