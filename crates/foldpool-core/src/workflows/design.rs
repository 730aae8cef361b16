use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::core::inference::SequenceDesigner;
use crate::core::io::scan;
use crate::core::models::item::StructureItem;
use crate::core::models::outcome::UnitOutput;
use crate::core::models::summary::RunSummary;
use crate::engine::config::DesignConfig;
use crate::engine::error::EngineError;
use crate::engine::pool::{ResourceDemand, WorkerPool};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::{reduce, report, tasks};

/// Structure file extension recognized by the design source.
const STRUCTURE_EXTENSION: &str = "pdb";

/// Runs one sequence-design pipeline: every structure under the input
/// directory becomes one independent unit of work, and the run closes with
/// a written summary whether or not any unit succeeded.
#[instrument(skip_all, name = "design_workflow")]
pub async fn run(
    config: &DesignConfig,
    designer: Arc<dyn SequenceDesigner>,
    pool: &WorkerPool,
    reporter: &ProgressReporter<'_>,
) -> Result<RunSummary, EngineError> {
    reporter.report(Progress::PhaseStart { name: "Discovery" });
    let items: Vec<StructureItem> = scan::find_files(&config.input_dir, STRUCTURE_EXTENSION)
        .map_err(|source| EngineError::Discovery {
            path: config.input_dir.clone(),
            source,
        })?
        .into_iter()
        .map(StructureItem::new)
        .collect();
    info!(structures = items.len(), "Discovered input structures.");
    reporter.report(Progress::PhaseFinish);

    if items.is_empty() {
        warn!("No input structures found; writing an empty run summary.");
        let summary = RunSummary::new(Vec::new(), 0);
        report::write_summary(&config.output_dir, report::DESIGN_SUMMARY_FILE, &summary)?;
        return Ok(summary);
    }

    let total = items.len();
    reporter.report(Progress::TaskStart {
        total: total as u64,
    });

    let mut handles = Vec::with_capacity(total);
    for item in items {
        let config = config.clone();
        let designer = Arc::clone(&designer);
        handles.push(pool.submit(ResourceDemand::Shared, move || {
            UnitOutput::Single(tasks::design::run(&item, &config, designer.as_ref()))
        })?);
    }

    let records = reduce::collect(handles, reporter).await?;
    reporter.report(Progress::TaskFinish);

    let summary = RunSummary::new(records, total);
    report::write_summary(&config.output_dir, report::DESIGN_SUMMARY_FILE, &summary)?;
    info!(
        total = summary.total_items,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Sequence-design run complete."
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::inference::{DesignRequest, InferenceError};
    use crate::core::models::outcome::Outcome;
    use crate::engine::config::{DesignConfigBuilder, PoolConfig};
    use std::fs;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Reads the structure file like a real backend would, so unreadable or
    /// corrupt inputs fail with a genuine read error.
    struct ReadingDesigner {
        calls: AtomicUsize,
    }

    impl ReadingDesigner {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl SequenceDesigner for ReadingDesigner {
        fn design(&self, request: &DesignRequest<'_>) -> Result<Vec<String>, InferenceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let body = fs::read_to_string(request.structure)
                .map_err(|e| InferenceError::Invocation(format!("read error: {e}")))?;
            if !body.starts_with("ATOM") {
                return Err(InferenceError::Invocation(
                    "read error: not a structure file".to_string(),
                ));
            }
            Ok(vec!["MKVL".to_string(); request.sequence_count])
        }
    }

    fn config(input_dir: &Path, output_dir: &Path) -> DesignConfig {
        DesignConfigBuilder::new()
            .input_dir(input_dir)
            .output_dir(output_dir)
            .sequence_count(10)
            .temperature(0.1)
            .seed(42)
            .build()
            .unwrap()
    }

    fn pool() -> WorkerPool {
        WorkerPool::new(PoolConfig {
            workers: 4,
            accelerators: 0,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn empty_input_writes_an_all_zero_summary_without_model_calls() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let designer = Arc::new(ReadingDesigner::new());

        let summary = run(
            &config(input.path(), output.path()),
            Arc::clone(&designer) as Arc<dyn SequenceDesigner>,
            &pool(),
            &ProgressReporter::default(),
        )
        .await
        .unwrap();

        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.succeeded + summary.failed + summary.skipped, 0);
        assert_eq!(designer.calls.load(Ordering::SeqCst), 0);
        assert!(output.path().join(report::DESIGN_SUMMARY_FILE).exists());
    }

    #[tokio::test]
    async fn one_corrupt_structure_fails_alone_among_three() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("good_1.pdb"), "ATOM ...\n").unwrap();
        fs::write(input.path().join("good_2.pdb"), "ATOM ...\n").unwrap();
        fs::write(input.path().join("corrupt.pdb"), "garbage\n").unwrap();

        let summary = run(
            &config(input.path(), output.path()),
            Arc::new(ReadingDesigner::new()),
            &pool(),
            &ProgressReporter::default(),
        )
        .await
        .unwrap();

        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 0);

        assert!(output.path().join("good_1.fasta").exists());
        assert!(output.path().join("good_2.fasta").exists());
        assert!(!output.path().join("corrupt.fasta").exists());

        let failed = summary
            .results
            .iter()
            .find(|r| r.id == "corrupt")
            .expect("the corrupt structure must still have a record");
        let Outcome::Failed { error } = &failed.outcome else {
            panic!("expected a failed record");
        };
        assert!(error.contains("read error"));
    }

    #[tokio::test]
    async fn summary_counts_always_partition_the_total() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        for i in 0..5 {
            let body = if i % 2 == 0 { "ATOM ...\n" } else { "junk\n" };
            fs::write(input.path().join(format!("s{i}.pdb")), body).unwrap();
        }

        let summary = run(
            &config(input.path(), output.path()),
            Arc::new(ReadingDesigner::new()),
            &pool(),
            &ProgressReporter::default(),
        )
        .await
        .unwrap();

        assert_eq!(summary.total_items, 5);
        assert_eq!(
            summary.succeeded + summary.failed + summary.skipped,
            summary.total_items
        );
    }

    #[tokio::test]
    async fn missing_input_directory_aborts_the_run() {
        let output = tempfile::tempdir().unwrap();
        let missing = output.path().join("does-not-exist");

        let result = run(
            &config(&missing, output.path()),
            Arc::new(ReadingDesigner::new()),
            &pool(),
            &ProgressReporter::default(),
        )
        .await;

        assert!(matches!(result, Err(EngineError::Discovery { .. })));
    }
}
