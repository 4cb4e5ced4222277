use std::path::PathBuf;

use clap::Parser;
use decodebench::{BenchConfig, Measurement, Strategy, DEFAULT_COUNT, DEFAULT_DOCUMENT};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "decodebench",
    version,
    about = "Times repeated decodes of a JSON record document with each decoding strategy"
)]
struct Cli {
    #[arg(default_value = DEFAULT_DOCUMENT, help = "The JSON document to decode")]
    document: PathBuf,
    #[arg(
        long,
        default_value_t = DEFAULT_COUNT,
        help = "Repetition count; the document is decoded count + 1 times"
    )]
    count: u32,
    #[arg(
        long = "strategy",
        help = "Strategy to run, repeatable: dynamic-wrapper|generic-object|wrapper-dictionary (default: all)"
    )]
    strategies: Vec<Strategy>,
    #[arg(long, help = "Print start and finish timestamps instead of elapsed seconds")]
    start_finish: bool,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let measurement = if cli.start_finish {
        Measurement::StartFinish
    } else {
        Measurement::Elapsed
    };
    let config = BenchConfig::new(cli.document)
        .with_count(cli.count)
        .with_measurement(measurement);

    if cli.strategies.is_empty() {
        let _ = decodebench::run_all(&config);
    } else {
        let _ = decodebench::run_strategies(&cli.strategies, &config);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
