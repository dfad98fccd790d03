/// Point count above which the distance and cost sweeps are split across workers
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Tuning knobs for [triangulate_with](crate::triangulate_with).
///
/// None of these change the result; they only decide how the work is scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Worker count of a dedicated pool, or `None` to run on rayon's global pool
    pub threads: Option<usize>,
    /// Polygons with more points than this are filled in parallel
    pub parallel_threshold: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threads: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default options overridden by the `CONVEX_TRIANGULATE_*` environment variables
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Some(threads) = env::threads() {
            options.threads = Some(threads);
        }
        if let Some(threshold) = env::parallel_threshold() {
            options.parallel_threshold = threshold;
        }
        options
    }

    /// Run on a dedicated pool of `threads` workers; `0` lets rayon pick
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    pub(crate) fn is_parallel(&self, points: usize) -> bool {
        points > self.parallel_threshold
    }
}

const ROOT_PREFIX: &str = "CONVEX_TRIANGULATE";

mod env {
    use std::{env, str::FromStr};

    fn parse<T: FromStr>(key: &str) -> Option<T> {
        let key = format!("{}_{}", super::ROOT_PREFIX, key);

        match env::var(&key) {
            Ok(value) => match value.trim().parse() {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    log::warn!("Ignoring {}={:?}: not a valid number", key, value);
                    None
                }
            },
            Err(_) => None,
        }
    }

    pub(super) fn threads() -> Option<usize> {
        parse("THREADS")
    }

    pub(super) fn parallel_threshold() -> Option<usize> {
        parse("PARALLEL_THRESHOLD")
    }
}
