//! Configuration for the density engine.

use kde_common::{KdeError, KdeResult};
use serde::{Deserialize, Serialize};

/// Default number of row workers per density computation.
pub const DEFAULT_THREADS: usize = 4;

/// Configuration for thread usage of the density engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Row workers per density computation.
    pub threads: usize,

    /// Cap on intervals computed concurrently. 0 means hardware concurrency.
    pub max_interval_workers: usize,

    /// Run on the calling thread when a worker pool cannot be created.
    pub sequential_fallback: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS,
            max_interval_workers: 0,
            sequential_fallback: true,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("KDE_THREADS") {
            if let Ok(threads) = val.parse() {
                config.threads = threads;
            }
        }

        if let Ok(val) = std::env::var("KDE_INTERVAL_WORKERS") {
            if let Ok(workers) = val.parse() {
                config.max_interval_workers = workers;
            }
        }

        if let Ok(val) = std::env::var("KDE_SEQUENTIAL_FALLBACK") {
            config.sequential_fallback = val.to_lowercase() == "true" || val == "1";
        }

        config
    }

    /// Use a fixed number of row workers.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> KdeResult<()> {
        if self.threads == 0 {
            return Err(KdeError::invalid_parameter("threads", "must be > 0"));
        }

        Ok(())
    }

    /// Number of workers to use for `intervals` independent computations.
    pub fn interval_workers(&self, intervals: usize) -> usize {
        let hardware = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        let cap = if self.max_interval_workers == 0 {
            hardware
        } else {
            self.max_interval_workers.min(hardware)
        };

        cap.min(intervals).max(1)
    }
}
