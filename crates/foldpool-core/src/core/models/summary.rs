use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::outcome::{Outcome, OutcomeRecord};

/// The aggregate report closing out one run.
///
/// Counts are derived from the records by exhaustive match, so
/// `succeeded + failed + skipped == total_items` holds for every summary
/// this type can construct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub timestamp: DateTime<Utc>,
    pub total_items: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
    pub results: Vec<OutcomeRecord>,
}

impl RunSummary {
    /// Builds the summary from the collected records.
    ///
    /// `discovered` is the number of work items the source produced at run
    /// start. It must equal the number of collected records; a mismatch
    /// means a unit lost or duplicated a record and is logged as a defect
    /// rather than silently absorbed into the counts.
    pub fn new(results: Vec<OutcomeRecord>, discovered: usize) -> Self {
        if results.len() != discovered {
            warn!(
                discovered,
                collected = results.len(),
                "Collected record count does not match the number of discovered items."
            );
        }

        let mut succeeded = 0;
        let mut failed = 0;
        let mut skipped = 0;
        for record in &results {
            match &record.outcome {
                Outcome::Success { .. } => succeeded += 1,
                Outcome::Failed { .. } => failed += 1,
                Outcome::Skipped { .. } => skipped += 1,
            }
        }

        Self {
            timestamp: Utc::now(),
            total_items: results.len(),
            succeeded,
            failed,
            skipped,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn counts_partition_the_records() {
        let records = vec![
            OutcomeRecord::design_success("a", PathBuf::from("/out/a.fasta"), 5),
            OutcomeRecord::failed("b", "boom"),
            OutcomeRecord::skipped("c", "too long"),
            OutcomeRecord::design_success("d", PathBuf::from("/out/d.fasta"), 5),
        ];

        let summary = RunSummary::new(records, 4);

        assert_eq!(summary.total_items, 4);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(
            summary.succeeded + summary.failed + summary.skipped,
            summary.total_items
        );
    }

    #[test]
    fn empty_run_produces_all_zero_counts() {
        let summary = RunSummary::new(Vec::new(), 0);

        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.succeeded, 0);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.skipped, 0);
        assert!(summary.results.is_empty());
    }

    #[test]
    fn summary_serializes_with_ordered_results() {
        let records = vec![
            OutcomeRecord::prediction_success("s1", PathBuf::from("/out/s1.pdb"), 10),
            OutcomeRecord::prediction_success("s2", PathBuf::from("/out/s2.pdb"), 20),
        ];
        let summary = RunSummary::new(records, 2);

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["total_items"], 2);
        assert_eq!(value["results"][0]["id"], "s1");
        assert_eq!(value["results"][1]["id"], "s2");
    }
}
