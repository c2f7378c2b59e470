//! Configuration management for harness runs

use crate::algorithm::Algorithm;
use crate::error::{HarnessError, HarnessResult};

/// Search target used when none is configured
pub const DEFAULT_TARGET: i64 = 4;

/// What to do with an empty line in the input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLinePolicy {
    /// Skip blank lines and keep reading
    #[default]
    Skip,
    /// Stop reading at the first blank line (legacy input files)
    Stop,
}

/// What to do with a line holding a token that is not an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Abort the whole load with a parse error
    #[default]
    Strict,
    /// Keep an empty slot for the line; the harness scores it as a failed test
    Lenient,
}

/// How much diagnostic output goes to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    /// Per-test harness events
    Debug,
    /// Step-by-step algorithm traces
    Trace,
}

impl Verbosity {
    /// Map a count of `-v` flags onto a level
    pub fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Verbosity::Normal,
            1 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    /// Default `tracing` filter directive for this level
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        }
    }
}

/// Unit used when reporting elapsed times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    #[default]
    Micros,
    Millis,
}

impl TimeUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Micros => "us",
            TimeUnit::Millis => "ms",
        }
    }

    /// Units per second
    pub fn per_second(self) -> f64 {
        match self {
            TimeUnit::Micros => 1_000_000.0,
            TimeUnit::Millis => 1_000.0,
        }
    }
}

/// Main configuration structure for a harness run
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Input file holding one work item per line
    pub input_file: Option<String>,
    /// Algorithms to run, one suite each, in order
    pub algorithms: Vec<Algorithm>,
    /// Target value for search algorithms
    pub target: Option<i64>,
    pub blank_lines: BlankLinePolicy,
    pub parse_policy: ParsePolicy,
    pub verbosity: Verbosity,
    /// Unit for report timings
    pub time_unit: TimeUnit,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            input_file: None,
            algorithms: Algorithm::ALL.to_vec(),
            target: Some(DEFAULT_TARGET),
            blank_lines: BlankLinePolicy::default(),
            parse_policy: ParsePolicy::default(),
            verbosity: Verbosity::default(),
            time_unit: TimeUnit::default(),
        }
    }
}

impl HarnessConfig {
    pub fn with_input_file(mut self, file: Option<String>) -> Self {
        self.input_file = file;
        self
    }

    /// Replace the algorithm selection
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> HarnessResult<()> {
        if self.algorithms.is_empty() {
            return Err(HarnessError::invalid_arguments(
                "at least one algorithm must be selected",
            ));
        }

        if self.target.is_none() {
            if let Some(search) = self.algorithms.iter().find(|a| a.is_search()) {
                return Err(HarnessError::missing_target(search.name()));
            }
        }

        Ok(())
    }
}

/// Builder pattern for creating configurations
pub struct HarnessConfigBuilder {
    config: HarnessConfig,
    explicit_algorithms: bool,
}

impl HarnessConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: HarnessConfig::default(),
            explicit_algorithms: false,
        }
    }

    pub fn input_file(mut self, file: impl Into<String>) -> Self {
        self.config.input_file = Some(file.into());
        self
    }

    /// Add an algorithm; the first call replaces the default selection
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        if !self.explicit_algorithms {
            self.config.algorithms.clear();
            self.explicit_algorithms = true;
        }
        if !self.config.algorithms.contains(&algorithm) {
            self.config.algorithms.push(algorithm);
        }
        self
    }

    pub fn target(mut self, target: i64) -> Self {
        self.config.target = Some(target);
        self
    }

    pub fn no_target(mut self) -> Self {
        self.config.target = None;
        self
    }

    /// Stop reading input at the first blank line
    pub fn stop_at_blank(mut self) -> Self {
        self.config.blank_lines = BlankLinePolicy::Stop;
        self
    }

    pub fn lenient(mut self) -> Self {
        self.config.parse_policy = ParsePolicy::Lenient;
        self
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.config.verbosity = verbosity;
        self
    }

    pub fn time_unit(mut self, unit: TimeUnit) -> Self {
        self.config.time_unit = unit;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> HarnessResult<HarnessConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for HarnessConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
