use tracing::warn;

use crate::core::models::outcome::{BatchOutcome, OutcomeRecord, UnitOutput};
use crate::engine::pool::{Handle, PoolError};
use crate::engine::progress::{Progress, ProgressReporter};

/// Awaits every handle, in submission order, and returns one record per work
/// item.
///
/// This is the only blocking point of a run: it waits on the full set of
/// outstanding handles, with no timeout and no early consumption, so a stuck
/// unit stalls the whole run. An earlier unit's failure never short-circuits
/// the wait for its siblings.
///
/// Batch-shaped outputs are flattened preserving batch order and
/// within-batch order. A batch that died during setup arrives as its single
/// aborted marker; its absorbed items are expanded here into individual
/// failed records so every discovered item still reaches a terminal state in
/// the summary.
pub async fn collect(
    handles: Vec<Handle>,
    reporter: &ProgressReporter<'_>,
) -> Result<Vec<OutcomeRecord>, PoolError> {
    let mut records = Vec::new();
    for handle in handles {
        match handle.wait().await? {
            UnitOutput::Single(record) => records.push(record),
            UnitOutput::Batch(BatchOutcome::Completed(batch_records)) => {
                records.extend(batch_records);
            }
            UnitOutput::Batch(BatchOutcome::Aborted { item_ids, error }) => {
                warn!(
                    items = item_ids.len(),
                    error = %error,
                    "A whole batch died during setup; recording each of its items as failed."
                );
                records.extend(item_ids.into_iter().map(|id| {
                    OutcomeRecord::failed(id, format!("batch aborted during setup: {error}"))
                }));
            }
        }
        reporter.report(Progress::TaskIncrement);
    }
    Ok(records)
}
