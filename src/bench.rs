use std::hint::black_box;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::config::{BenchConfig, Measurement};
use crate::loader::load_document;
use crate::strategy::{Prepared, Strategy};

/// The outcome of timing one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The strategy that was timed.
    pub strategy: Strategy,
    /// How many times the whole document was decoded.
    pub iterations: u64,
    /// How many records were constructed across all iterations.
    pub records: u64,
    /// Wall-clock time from the start of the first decode to the end of the
    /// last.
    pub elapsed: Duration,
    /// When the first decode started.
    pub started: OffsetDateTime,
    /// When the last decode finished.
    pub finished: OffsetDateTime,
}

impl Report {
    /// Writes this report to `out` in the requested style.
    pub fn write<W: Write>(&self, out: &mut W, measurement: Measurement) -> io::Result<()> {
        let name = self.strategy.name();
        match measurement {
            Measurement::Elapsed => {
                writeln!(out, "{name} spent time: {}", self.elapsed.as_secs_f64())
            }
            Measurement::StartFinish => {
                writeln!(out, "{name} start: {}", timestamp(self.started))?;
                writeln!(out, "{name} finish: {}", timestamp(self.finished))
            }
        }
    }
}

fn timestamp(at: OffsetDateTime) -> String {
    // Formatting a UTC timestamp as RFC 3339 only fails for years outside
    // 0..=9999.
    at.format(&Rfc3339)
        .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

/// Loads the configured document and times `config.iterations()` full decodes
/// with `strategy`.
///
/// Returns `None` without timing anything if the document cannot be read or
/// `strategy` rejects it. Both cases are logged.
#[must_use]
pub fn run(strategy: Strategy, config: &BenchConfig) -> Option<Report> {
    let json = load_document(&config.document)?;
    run_with_document(strategy, &json, config)
}

/// Times `config.iterations()` full decodes of an already loaded `json`
/// document with `strategy`. `config.document` is only used for logging.
///
/// Returns `None` without timing anything if `strategy` rejects the document.
#[must_use]
pub fn run_with_document(
    strategy: Strategy,
    json: &[u8],
    config: &BenchConfig,
) -> Option<Report> {
    let prepared = match strategy.prepare(json) {
        Ok(prepared) => prepared,
        Err(err) => {
            tracing::error!(strategy = strategy.name(), "skipping: {err}");
            return None;
        }
    };

    tracing::debug!(
        strategy = strategy.name(),
        document = %config.document.display(),
        iterations = config.iterations(),
        "starting benchmark"
    );
    Some(time_decodes(&prepared, config.iterations()))
}

fn time_decodes(prepared: &Prepared<'_>, iterations: u64) -> Report {
    let mut records = 0_u64;
    let started = OffsetDateTime::now_utc();
    let start = Instant::now();
    for _ in 0..iterations {
        prepared.for_each_record(|record| {
            // Counted inside the timed loop so reports can state how many
            // records were built.
            records += 1;
            black_box(record);
        });
    }
    let elapsed = start.elapsed();
    let finished = OffsetDateTime::now_utc();

    Report {
        strategy: prepared.strategy(),
        iterations,
        records,
        elapsed,
        started,
        finished,
    }
}

fn print(report: &Report, measurement: Measurement) {
    if let Err(err) = report.write(&mut io::stdout().lock(), measurement) {
        tracing::error!("error writing report: {err}");
    }
}

/// Runs `strategy` and prints its report to stdout.
#[must_use]
pub fn run_and_print(strategy: Strategy, config: &BenchConfig) -> Option<Report> {
    let report = run(strategy, config)?;
    print(&report, config.measurement);
    Some(report)
}

/// Runs and prints each of `strategies` in order, reading the document once.
/// Strategies that reject the document are skipped. If the document cannot be
/// read, nothing runs.
#[must_use]
pub fn run_strategies(strategies: &[Strategy], config: &BenchConfig) -> Vec<Report> {
    let Some(json) = load_document(&config.document) else {
        return Vec::new();
    };

    strategies
        .iter()
        .filter_map(|&strategy| {
            let report = run_with_document(strategy, &json, config)?;
            print(&report, config.measurement);
            Some(report)
        })
        .collect()
}

/// Runs and prints every strategy in [`Strategy::ALL`] order. Strategies that
/// fail are skipped.
#[must_use]
pub fn run_all(config: &BenchConfig) -> Vec<Report> {
    run_strategies(&Strategy::ALL, config)
}
