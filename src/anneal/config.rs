//! Run parameters for the multi-start annealing search.

use crate::error::{Error, Result};

/// Configuration for [`AnnealRunner`](super::AnnealRunner).
///
/// # Examples
///
/// ```
/// use tsp_anneal::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_starts(4)
///     .with_cooling(2.0)
///     .with_stagnation_limit(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Number of independent starts (workers).
    pub starts: usize,

    /// Cooling constant `C` in the acceptance probability `(n + 1)^(C * delta)`.
    ///
    /// Larger values make worse candidates harder to accept as iterations grow.
    pub cooling: f64,

    /// Consecutive rejected candidates after which a worker stops.
    pub stagnation_limit: usize,

    /// Master seed. Each worker derives its own stream from it.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Size of a dedicated worker pool. `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            starts: 10,
            cooling: 1.0,
            stagnation_limit: 100,
            seed: None,
            threads: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_starts(mut self, n: usize) -> Self {
        self.starts = n;
        self
    }

    pub fn with_cooling(mut self, c: f64) -> Self {
        self.cooling = c;
        self
    }

    pub fn with_stagnation_limit(mut self, m: usize) -> Self {
        self.stagnation_limit = m;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.cooling.is_finite() {
            return Err(Error::invalid_config(format!(
                "cooling must be finite, got {}",
                self.cooling
            )));
        }
        if self.threads == Some(0) {
            return Err(Error::invalid_config("threads must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert_eq!(config.starts, 10);
        assert!((config.cooling - 1.0).abs() < 1e-12);
        assert_eq!(config.stagnation_limit, 100);
        assert!(config.seed.is_none());
        assert!(config.threads.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
        assert!(AnnealConfig::default().with_starts(0).validate().is_ok());
        assert!(AnnealConfig::default().with_cooling(-1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_non_finite_cooling() {
        let config = AnnealConfig::default().with_cooling(f64::NAN);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        let config = AnnealConfig::default().with_cooling(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_threads() {
        let config = AnnealConfig::default().with_threads(0);
        assert!(config.validate().is_err());
    }
}
