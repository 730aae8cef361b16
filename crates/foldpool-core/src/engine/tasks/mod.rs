//! Worker-unit bodies.
//!
//! A unit is the fault-isolation boundary of the system: whatever goes wrong
//! while invoking a model backend or writing an output file is converted
//! into outcome records here and never propagates to the caller, so one
//! item's failure cannot take down its siblings or the run.

pub mod design;
pub mod predict;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::inference::InferenceError;

/// Internal unit errors. These never escape a unit: the public entry points
/// convert them into failed outcome records.
#[derive(Debug, Error)]
enum TaskError {
    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error("Failed to write output file '{path}': {source}", path = path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
