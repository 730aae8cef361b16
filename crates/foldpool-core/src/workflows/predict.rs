use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::core::inference::StructureFolder;
use crate::core::io::{fasta, scan};
use crate::core::models::item::SequenceItem;
use crate::core::models::outcome::UnitOutput;
use crate::core::models::summary::RunSummary;
use crate::engine::config::PredictConfig;
use crate::engine::error::EngineError;
use crate::engine::pool::{ResourceDemand, WorkerPool};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::{batch, reduce, report, tasks};

/// Sequence-collection file extension recognized by the prediction source.
const SEQUENCE_EXTENSION: &str = "fasta";

/// Runs one structure-prediction pipeline: every sequence record under the
/// input directory is loaded, partitioned into batches, and dispatched as
/// accelerator-exclusive units. The run closes with a written summary
/// whether or not any unit succeeded.
#[instrument(skip_all, name = "predict_workflow")]
pub async fn run(
    config: &PredictConfig,
    folder: Arc<dyn StructureFolder>,
    pool: &WorkerPool,
    reporter: &ProgressReporter<'_>,
) -> Result<RunSummary, EngineError> {
    reporter.report(Progress::PhaseStart { name: "Discovery" });
    let items = load_sequences(&config.input_dir)?;
    info!(sequences = items.len(), "Loaded input sequence records.");
    reporter.report(Progress::PhaseFinish);

    if items.is_empty() {
        warn!("No input sequences found; writing an empty run summary.");
        let summary = RunSummary::new(Vec::new(), 0);
        report::write_summary(
            &config.output_dir,
            report::PREDICTION_SUMMARY_FILE,
            &summary,
        )?;
        return Ok(summary);
    }

    let total = items.len();
    let batches = batch::partition(items, config.batch_size);
    info!(
        batches = batches.len(),
        batch_size = config.batch_size.get(),
        "Partitioned sequences into prediction batches."
    );

    reporter.report(Progress::TaskStart {
        total: batches.len() as u64,
    });

    let mut handles = Vec::with_capacity(batches.len());
    for items in batches {
        let config = config.clone();
        let folder = Arc::clone(&folder);
        handles.push(pool.submit(ResourceDemand::ExclusiveAccelerator, move || {
            UnitOutput::Batch(tasks::predict::run(&items, &config, folder.as_ref()))
        })?);
    }

    let records = reduce::collect(handles, reporter).await?;
    reporter.report(Progress::TaskFinish);

    let summary = RunSummary::new(records, total);
    report::write_summary(
        &config.output_dir,
        report::PREDICTION_SUMMARY_FILE,
        &summary,
    )?;
    info!(
        total = summary.total_items,
        succeeded = summary.succeeded,
        failed = summary.failed,
        skipped = summary.skipped,
        "Structure-prediction run complete."
    );
    Ok(summary)
}

/// Loads every sequence record from every sequence-collection file under
/// `input_dir`, in sorted file order, keeping within-file record order.
///
/// Duplicate ids are allowed and both proceed; since outputs are named after
/// the id, the later one overwrites the earlier one's file, so the collision
/// is logged here.
fn load_sequences(input_dir: &Path) -> Result<Vec<SequenceItem>, EngineError> {
    let files =
        scan::find_files(input_dir, SEQUENCE_EXTENSION).map_err(|source| EngineError::Discovery {
            path: input_dir.to_path_buf(),
            source,
        })?;

    let mut items = Vec::new();
    let mut seen = HashSet::new();
    for file in files {
        let records =
            fasta::read_records_from_path(&file).map_err(|source| EngineError::SequenceFile {
                path: file.clone(),
                source,
            })?;
        for record in records {
            if !seen.insert(record.id.clone()) {
                warn!(
                    id = %record.id,
                    file = %file.display(),
                    "Duplicate sequence id; its prediction will overwrite the earlier one's output."
                );
            }
            items.push(SequenceItem::new(record.id, record.sequence));
        }
    }
    Ok(items)
}
