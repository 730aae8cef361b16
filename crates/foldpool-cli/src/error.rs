use foldpool::core::inference::InferenceError;
use foldpool::engine::config::ConfigError;
use foldpool::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Model backend check failed: {0}")]
    Backend(#[from] InferenceError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to create output directory '{path}': {source}", path = path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
