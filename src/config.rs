use clap::{App, AppSettings, Arg, ArgMatches};
use lazy_static::lazy_static;
use tracing::debug;

use crate::error::ParseError;
use crate::heap::Order;
use crate::utility::{parse_values, random_values};

lazy_static! {
    /// Inputs of the heap sort table, run when no values are given.
    pub static ref SAMPLE_CASES: Vec<Vec<i64>> = vec![
        vec![],
        vec![1],
        vec![1, 2, 3, 4],
        vec![4, 3, 2, 1, 0],
        vec![3, 1, 4, 1, 5, 9, 2, 6, 5],
    ];
    /// Input of the max heap walkthrough.
    pub static ref WALKTHROUGH_INPUT: Vec<i64> = vec![2, 9, 7, 6, 5, 8];
}

/// Value inserted during the walkthrough.
pub const WALKTHROUGH_INSERT: i64 = 10;

/// Where the values to sort come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// The built in sample table and walkthrough.
    Demo,
    /// Values given on the command line.
    Values(Vec<i64>),
    /// Randomly generated values.
    Random { count: usize, seed: Option<u64> },
}

impl InputSource {
    /// Materializes the input, or `None` for the demo.
    pub fn values(&self) -> Option<Vec<i64>> {
        match self {
            InputSource::Demo => None,
            InputSource::Values(values) => Some(values.clone()),
            InputSource::Random { count, seed } => Some(random_values(*count, *seed)),
        }
    }
}

/// Resolved settings of one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub order: Order,
    pub source: InputSource,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            order: Order::Min,
            source: InputSource::Demo,
            verbose: false,
        }
    }
}

/// Errors while resolving the command line.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Rejected by the argument parser, including `--help` and `--version`.
    #[error(transparent)]
    Cli(#[from] clap::Error),
    #[error("unknown order {0:?}, expected \"max\" or \"min\"")]
    UnknownOrder(String),
    #[error("invalid {name}: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error(transparent)]
    Values(#[from] ParseError),
}

pub fn app() -> App<'static, 'static> {
    App::new("heapsort")
        .about("Sorts integers with a binary heap")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name("values")
                .help("values to sort, e.g. \"{3,1,4}\" or 3 1 4")
                .multiple(true),
        )
        .arg(
            Arg::with_name("order")
                .long("order")
                .takes_value(true)
                .value_name("max|min")
                .default_value("min"),
        )
        .arg(
            Arg::with_name("random")
                .long("random")
                .takes_value(true)
                .value_name("N")
                .conflicts_with("values"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .requires("random"),
        )
        .arg(Arg::with_name("verbose").short("v").long("verbose"))
}

pub fn parse_order(name: &str) -> Result<Order, ConfigError> {
    match name.to_ascii_lowercase().as_str() {
        "max" => Ok(Order::Max),
        "min" => Ok(Order::Min),
        _ => Err(ConfigError::UnknownOrder(name.to_string())),
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Config, ConfigError> {
        let order = parse_order(matches.value_of("order").unwrap_or("min"))?;
        let source = if let Some(count) = matches.value_of("random") {
            let seed = match matches.value_of("seed") {
                Some(seed) => Some(parse_number("seed", seed)?),
                None => None,
            };
            InputSource::Random {
                count: parse_number("random", count)?,
                seed,
            }
        } else if let Some(values) = matches.values_of("values") {
            let joined = values.collect::<Vec<_>>().join(" ");
            InputSource::Values(parse_values(&joined)?)
        } else {
            InputSource::Demo
        };
        let config = Config {
            order,
            source,
            verbose: matches.is_present("verbose"),
        };
        debug!(?config, "resolved config");
        Ok(config)
    }

    pub fn from_args<I, S>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<std::ffi::OsString> + Clone,
    {
        let matches = app().get_matches_from_safe(args)?;
        Config::from_matches(&matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_demo() {
        let config = Config::from_args(vec!["heapsort"]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_values_and_order() {
        let config = Config::from_args(vec!["heapsort", "--order", "max", "{3,1,4}"]).unwrap();
        assert_eq!(config.order, Order::Max);
        assert_eq!(config.source, InputSource::Values(vec![3, 1, 4]));
    }

    #[test]
    fn joins_separate_values() {
        let config = Config::from_args(vec!["heapsort", "3", "-1", "4"]).unwrap();
        assert_eq!(config.source.values(), Some(vec![3, -1, 4]));
    }

    #[test]
    fn reads_random() {
        let args = vec!["heapsort", "--random", "5", "--seed", "42", "-v"];
        let config = Config::from_args(args).unwrap();
        assert_eq!(
            config.source,
            InputSource::Random {
                count: 5,
                seed: Some(42)
            }
        );
        assert!(config.verbose);
        assert_eq!(config.source.values().map(|v| v.len()), Some(5));
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = Config::from_args(vec!["heapsort", "--random", "many"]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { name: "random", .. }));
        let err = Config::from_args(vec!["heapsort", "1", "two"]).unwrap_err();
        assert!(matches!(err, ConfigError::Values(ParseError::InvalidNumber { .. })));
    }

    #[test]
    fn order_names() {
        assert!(matches!(parse_order("MAX"), Ok(Order::Max)));
        assert!(matches!(parse_order("Min"), Ok(Order::Min)));
        assert!(matches!(
            parse_order("mid"),
            Err(ConfigError::UnknownOrder(name)) if name == "mid"
        ));
    }

    #[test]
    fn unknown_order_is_an_error() {
        let err = Config::from_args(vec!["heapsort", "--order", "mid"]).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownOrder(ref name) if name == "mid"));
        let config = Config::from_args(vec!["heapsort", "--order", "MAX", "1"]).unwrap();
        assert_eq!(config.order, Order::Max);
    }

    #[test]
    fn parser_errors_are_returned() {
        let err = Config::from_args(vec!["heapsort", "--seed", "1"]).unwrap_err();
        assert!(matches!(err, ConfigError::Cli(_)));
        let err = Config::from_args(vec!["heapsort", "--no-such-flag"]).unwrap_err();
        assert!(matches!(err, ConfigError::Cli(_)));
        let err = Config::from_args(vec!["heapsort", "--random", "3", "4"]).unwrap_err();
        assert!(matches!(err, ConfigError::Cli(_)));
    }
}
