//! Collaborator seams for the external inference models.
//!
//! The engine treats both models as black boxes behind these traits: given
//! one typed payload they either return a result or fail with an
//! [`InferenceError`]. The shipped production backends ([`command`]) shell
//! out to configured external programs; tests substitute in-process mocks.
//!
//! Backend availability is a startup precondition. Nothing in this module
//! installs, downloads, or lazily imports anything at call time.

pub mod command;

use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model backend '{program}' is not available: {reason}")]
    Unavailable { program: String, reason: String },

    #[error("Model invocation failed: {0}")]
    Invocation(String),

    #[error("Model produced unusable output: {0}")]
    MalformedOutput(String),

    #[error("I/O error while talking to the model backend: {0}")]
    Io(#[from] io::Error),
}

/// Parameters of one sequence-design call.
#[derive(Debug, Clone, Copy)]
pub struct DesignRequest<'a> {
    pub structure: &'a Path,
    pub sequence_count: usize,
    pub temperature: f64,
    pub seed: u64,
}

/// Generates candidate sequences for one input structure.
///
/// Implementations are expected to be deterministic for a given seed, and to
/// be callable concurrently from multiple worker threads.
pub trait SequenceDesigner: Send + Sync {
    fn design(&self, request: &DesignRequest<'_>) -> Result<Vec<String>, InferenceError>;
}

/// Predicts a structure from one sequence, returning the structure-file body.
///
/// There is no native batching: the engine calls [`fold`](Self::fold) once
/// per sequence even when sequences are grouped into one unit of work.
pub trait StructureFolder: Send + Sync {
    /// Called once per unit of work before any `fold` call. Backends load or
    /// verify their model here; a failure aborts the whole unit. The default
    /// does nothing.
    fn warm_up(&self) -> Result<(), InferenceError> {
        Ok(())
    }

    fn fold(&self, id: &str, sequence: &str) -> Result<String, InferenceError>;
}
