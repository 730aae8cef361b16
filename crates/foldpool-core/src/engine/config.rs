use std::num::NonZeroUsize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Parameters of one sequence-design run.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Number of sequences to generate per structure.
    pub sequence_count: usize,
    /// Sampling softness passed to the design model.
    pub temperature: f64,
    /// Determinism knob passed to the design model.
    pub seed: u64,
}

#[derive(Default)]
pub struct DesignConfigBuilder {
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    sequence_count: Option<usize>,
    temperature: Option<f64>,
    seed: Option<u64>,
}

impl DesignConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_dir = Some(path.into());
        self
    }
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }
    pub fn sequence_count(mut self, count: usize) -> Self {
        self.sequence_count = Some(count);
        self
    }
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<DesignConfig, ConfigError> {
        let sequence_count = self
            .sequence_count
            .ok_or(ConfigError::MissingParameter("sequence_count"))?;
        if sequence_count == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "sequence_count",
                reason: "must be at least 1".to_string(),
            });
        }

        let temperature = self
            .temperature
            .ok_or(ConfigError::MissingParameter("temperature"))?;
        if !temperature.is_finite() || temperature <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "temperature",
                reason: format!("must be a finite positive number, got {temperature}"),
            });
        }

        Ok(DesignConfig {
            input_dir: self
                .input_dir
                .ok_or(ConfigError::MissingParameter("input_dir"))?,
            output_dir: self
                .output_dir
                .ok_or(ConfigError::MissingParameter("output_dir"))?,
            sequence_count,
            temperature,
            seed: self.seed.ok_or(ConfigError::MissingParameter("seed"))?,
        })
    }
}

/// Parameters of one structure-prediction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Number of sequence records grouped into one unit of work.
    pub batch_size: NonZeroUsize,
    /// Length gate: records longer than this are skipped without a model
    /// call.
    pub max_length: usize,
}

#[derive(Default)]
pub struct PredictConfigBuilder {
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    batch_size: Option<usize>,
    max_length: Option<usize>,
}

impl PredictConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_dir = Some(path.into());
        self
    }
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = Some(size);
        self
    }
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    pub fn build(self) -> Result<PredictConfig, ConfigError> {
        let batch_size = self
            .batch_size
            .ok_or(ConfigError::MissingParameter("batch_size"))?;
        let batch_size = NonZeroUsize::new(batch_size).ok_or(ConfigError::InvalidParameter {
            name: "batch_size",
            reason: "must be at least 1".to_string(),
        })?;

        let max_length = self
            .max_length
            .ok_or(ConfigError::MissingParameter("max_length"))?;
        if max_length == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_length",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(PredictConfig {
            input_dir: self
                .input_dir
                .ok_or(ConfigError::MissingParameter("input_dir"))?,
            output_dir: self
                .output_dir
                .ok_or(ConfigError::MissingParameter("output_dir"))?,
            batch_size,
            max_length,
        })
    }
}

/// Sizing of the shared execution pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Upper bound on concurrently running units.
    pub workers: usize,
    /// Number of exclusive accelerator slots available to units that demand
    /// one.
    pub accelerators: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn design_builder() -> DesignConfigBuilder {
        DesignConfigBuilder::new()
            .input_dir("/in")
            .output_dir("/out")
            .sequence_count(10)
            .temperature(0.1)
            .seed(42)
    }

    #[test]
    fn design_builder_with_all_parameters_builds() {
        let config = design_builder().build().unwrap();
        assert_eq!(config.sequence_count, 10);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn design_builder_reports_the_missing_parameter() {
        let result = DesignConfigBuilder::new()
            .input_dir("/in")
            .output_dir("/out")
            .temperature(0.1)
            .seed(42)
            .build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingParameter("sequence_count")
        );
    }

    #[test]
    fn design_builder_rejects_zero_sequence_count() {
        let result = design_builder().sequence_count(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "sequence_count",
                ..
            })
        ));
    }

    #[test]
    fn design_builder_rejects_non_positive_temperature() {
        let result = design_builder().temperature(0.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "temperature",
                ..
            })
        ));
    }

    #[test]
    fn predict_builder_rejects_zero_batch_size() {
        let result = PredictConfigBuilder::new()
            .input_dir("/in")
            .output_dir("/out")
            .batch_size(0)
            .max_length(500)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "batch_size",
                ..
            })
        ));
    }

    #[test]
    fn predict_builder_with_all_parameters_builds() {
        let config = PredictConfigBuilder::new()
            .input_dir("/in")
            .output_dir("/out")
            .batch_size(4)
            .max_length(500)
            .build()
            .unwrap();
        assert_eq!(config.batch_size.get(), 4);
        assert_eq!(config.max_length, 500);
    }
}
