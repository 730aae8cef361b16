use std::fs;
use std::path::PathBuf;

use tracing::{instrument, warn};

use super::TaskError;
use crate::core::inference::StructureFolder;
use crate::core::models::item::SequenceItem;
use crate::core::models::outcome::{BatchOutcome, OutcomeRecord};
use crate::engine::config::PredictConfig;

/// Runs one structure-prediction unit over a batch of sequence records.
///
/// The folder backend warms up once per unit; a warm-up failure kills the
/// whole unit and surfaces as the single aborted marker instead of per-item
/// records. Per item, the length gate runs before any model call, and one
/// item's failure never aborts the remainder of the batch. Records come back
/// in batch order.
#[instrument(skip_all, fields(batch_len = batch.len()))]
pub fn run(
    batch: &[SequenceItem],
    config: &PredictConfig,
    folder: &dyn StructureFolder,
) -> BatchOutcome {
    if let Err(e) = folder.warm_up() {
        warn!(error = %e, "Prediction unit failed during setup; aborting the whole batch.");
        return BatchOutcome::Aborted {
            item_ids: batch.iter().map(|item| item.id.clone()).collect(),
            error: e.to_string(),
        };
    }

    let mut records = Vec::with_capacity(batch.len());
    for item in batch {
        if item.sequence.len() > config.max_length {
            records.push(OutcomeRecord::skipped(
                item.id.clone(),
                format!(
                    "sequence length {} exceeds the limit of {}",
                    item.sequence.len(),
                    config.max_length
                ),
            ));
            continue;
        }

        let record = match fold_one(item, config, folder) {
            Ok(output_path) => {
                OutcomeRecord::prediction_success(item.id.clone(), output_path, item.sequence.len())
            }
            Err(e) => OutcomeRecord::failed(item.id.clone(), e.to_string()),
        };
        records.push(record);
    }
    BatchOutcome::Completed(records)
}

fn fold_one(
    item: &SequenceItem,
    config: &PredictConfig,
    folder: &dyn StructureFolder,
) -> Result<PathBuf, TaskError> {
    let body = folder.fold(&item.id, &item.sequence)?;
    let output_path = config.output_dir.join(format!("{}.pdb", item.id));
    fs::write(&output_path, body).map_err(|source| TaskError::Write {
        path: output_path.clone(),
        source,
    })?;
    Ok(output_path)
}
