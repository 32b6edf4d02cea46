use anyhow::Context;
use heaplib::config::{Config, ConfigError, SAMPLE_CASES, WALKTHROUGH_INPUT, WALKTHROUGH_INSERT};
use heaplib::demo::{sort_cases, sort_table, walkthrough};
use heaplib::display::braced;
use heaplib::heap::{heap_sort, Order};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        // usage errors, --help and --version print themselves and exit
        Err(ConfigError::Cli(err)) => err.exit(),
        Err(err) => return Err(err.into()),
    };
    init_logging(config.verbose);
    run_main(&config)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_main(config: &Config) -> anyhow::Result<()> {
    match config.source.values() {
        Some(values) => {
            info!(count = values.len(), order = %config.order, "sorting input");
            let sorted = heap_sort(&values, config.order);
            println!("Unsorted: {}", braced(&values));
            println!("Sorted:   {}", braced(&sorted));
        }
        None => run_demo(config.order)?,
    }
    Ok(())
}

fn run_demo(order: Order) -> anyhow::Result<()> {
    println!("Welcome to the HeapSort.\n");
    let samples: &[Vec<i64>] = &SAMPLE_CASES;
    let cases = sort_cases(samples, order);
    print!("{}", sort_table(&cases));
    println!();
    let input: &[i64] = &WALKTHROUGH_INPUT;
    let walk = walkthrough(input, Order::Max, WALKTHROUGH_INSERT)
        .context("walkthrough input is empty")?;
    print!("{}", walk);
    println!("\nGoodbye!");
    Ok(())
}
