use std::path::PathBuf;

use crate::loader::DEFAULT_DOCUMENT;

/// The number of repetitions requested when none is configured.
pub const DEFAULT_COUNT: u32 = 100_000;

/// How a finished run is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Measurement {
    /// A single `<name> spent time: <seconds>` line.
    #[default]
    Elapsed,
    /// A `<name> start: <timestamp>` line followed by a
    /// `<name> finish: <timestamp>` line.
    StartFinish,
}

/// Settings for a benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// The document to decode.
    pub document: PathBuf,
    /// The requested repetition count. The loop runs `count + 1` times; see
    /// [`BenchConfig::iterations`].
    pub count: u32,
    /// How results are written.
    pub measurement: Measurement,
}

impl BenchConfig {
    /// Returns a configuration reading `document` with the default count and
    /// measurement.
    #[must_use]
    pub fn new(document: impl Into<PathBuf>) -> Self {
        Self {
            document: document.into(),
            ..Self::default()
        }
    }

    /// Sets the repetition count and returns self.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Sets the measurement style and returns self.
    #[must_use]
    pub fn with_measurement(mut self, measurement: Measurement) -> Self {
        self.measurement = measurement;
        self
    }

    /// Returns the number of times the document is decoded, which is one
    /// more than [`count`](Self::count): the range is inclusive.
    #[must_use]
    pub fn iterations(&self) -> u64 {
        u64::from(self.count) + 1
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            document: PathBuf::from(DEFAULT_DOCUMENT),
            count: DEFAULT_COUNT,
            measurement: Measurement::default(),
        }
    }
}

#[test]
fn iterations_are_inclusive() {
    assert_eq!(BenchConfig::default().iterations(), 100_001);
    assert_eq!(BenchConfig::default().with_count(0).iterations(), 1);
    assert_eq!(
        BenchConfig::default().with_count(u32::MAX).iterations(),
        u64::from(u32::MAX) + 1
    );
}
