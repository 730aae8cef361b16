use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::models::summary::RunSummary;
use crate::engine::error::EngineError;

/// Well-known summary file name for sequence-design runs.
pub const DESIGN_SUMMARY_FILE: &str = "design_summary.json";
/// Well-known summary file name for structure-prediction runs.
pub const PREDICTION_SUMMARY_FILE: &str = "prediction_summary.json";

/// Serializes `summary` as pretty-printed JSON to `dir/file_name` and
/// returns the written path. Writing the summary is the terminal step of a
/// run; it must succeed even for an empty result set.
pub fn write_summary(
    dir: &Path,
    file_name: &str,
    summary: &RunSummary,
) -> Result<PathBuf, EngineError> {
    let path = dir.join(file_name);
    let summary_error = |source: serde_json::Error| EngineError::Summary {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(|e| summary_error(serde_json::Error::io(e)))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summary).map_err(summary_error)?;
    writer.flush().map_err(|e| summary_error(serde_json::Error::io(e)))?;

    info!(path = %path.display(), "Run summary written.");
    Ok(path)
}
