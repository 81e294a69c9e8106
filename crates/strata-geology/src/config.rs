//! Execution settings for a derivation pass.

use strata_core::ConfigError;

/// How the per-face and per-cell scatters are executed.
///
/// Output is bit-identical under every strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParallelStrategy {
    /// Always on the calling thread.
    Sequential,
    /// Always on the rayon global pool.
    Parallel,
    /// Parallel once the element count reaches
    /// [`GeologyConfig::min_parallel_size`].
    #[default]
    Auto,
}

/// Settings for [`DerivedGeology`](crate::DerivedGeology).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeologyConfig {
    /// Execution strategy.
    pub strategy: ParallelStrategy,
    /// Element count at which [`ParallelStrategy::Auto`] goes parallel.
    /// Must be at least 1.
    pub min_parallel_size: usize,
}

impl Default for GeologyConfig {
    fn default() -> Self {
        Self {
            strategy: ParallelStrategy::Auto,
            min_parallel_size: 4096,
        }
    }
}

impl GeologyConfig {
    /// Always sequential.
    pub fn sequential() -> Self {
        Self {
            strategy: ParallelStrategy::Sequential,
            ..Self::default()
        }
    }

    /// Always parallel.
    pub fn parallel() -> Self {
        Self {
            strategy: ParallelStrategy::Parallel,
            ..Self::default()
        }
    }

    /// Check the settings.
    ///
    /// Returns `Err(ConfigError::InvalidParallelConfig)` if
    /// `min_parallel_size` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_parallel_size == 0 {
            return Err(ConfigError::InvalidParallelConfig {
                reason: "min_parallel_size must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Whether a scatter over `len` elements runs in parallel.
    pub fn runs_parallel(&self, len: usize) -> bool {
        match self.strategy {
            ParallelStrategy::Sequential => false,
            ParallelStrategy::Parallel => true,
            ParallelStrategy::Auto => len >= self.min_parallel_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = GeologyConfig::default();
        assert_eq!(cfg.strategy, ParallelStrategy::Auto);
        assert_eq!(cfg.min_parallel_size, 4096);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn auto_threshold() {
        let cfg = GeologyConfig {
            min_parallel_size: 10,
            ..GeologyConfig::default()
        };
        assert!(!cfg.runs_parallel(9));
        assert!(cfg.runs_parallel(10));
        assert!(GeologyConfig::parallel().runs_parallel(1));
        assert!(!GeologyConfig::sequential().runs_parallel(1_000_000));
    }

    #[test]
    fn zero_threshold_rejected() {
        let cfg = GeologyConfig {
            min_parallel_size: 0,
            ..GeologyConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidParallelConfig { .. })
        ));
    }
}
