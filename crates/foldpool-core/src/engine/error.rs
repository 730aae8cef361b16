use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::io::fasta::FastaError;
use crate::engine::pool::PoolError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to scan input directory '{path}': {source}", path = path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse sequence file '{path}': {source}", path = path.display())]
    SequenceFile {
        path: PathBuf,
        #[source]
        source: FastaError,
    },

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error("Failed to write run summary '{path}': {source}", path = path.display())]
    Summary {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
