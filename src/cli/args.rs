use clap::{crate_version, App, Arg};
use tracing_subscriber::EnvFilter;

/// Command-line interface, defaults reproduce the rice comparison
/// of January 2023 against December 2024
pub fn app() -> App<'static, 'static> {
    App::new("deflator")
        .version(crate_version!())
        .about("Projects the value of PLN through monthly inflation and quarterly PPI")
        .arg(
            Arg::with_name("amount")
                .short("a")
                .long("amount")
                .value_name("PLN")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("65")
                .help("Sum of money to project"),
        )
        .arg(
            Arg::with_name("start")
                .short("s")
                .long("start")
                .value_name("YYYY-MM")
                .takes_value(true)
                .default_value("2023-01")
                .help("First month of the period"),
        )
        .arg(
            Arg::with_name("end")
                .short("e")
                .long("end")
                .value_name("YYYY-MM")
                .takes_value(true)
                .default_value("2024-12")
                .help("Last month of the period (inclusive)"),
        )
        .arg(
            Arg::with_name("min-price")
                .long("min-price")
                .value_name("PLN")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("3.68")
                .help("Lowest price of 1 kg of rice at the end of the period"),
        )
        .arg(
            Arg::with_name("max-price")
                .long("max-price")
                .value_name("PLN")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("10.11")
                .help("Highest price of 1 kg of rice at the end of the period"),
        )
        .arg(
            Arg::with_name("monthly")
                .short("m")
                .long("monthly")
                .help("Print the month-by-month projection table"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Log more details on stderr (repeat for more)"),
        )
}

/// Install the stderr logger
///
/// `RUST_LOG` takes precedence over the verbosity given on the command line.
pub fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
