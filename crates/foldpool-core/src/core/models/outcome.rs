use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What a successful unit produced, by pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuccessDetail {
    Design { sequences_generated: usize },
    Prediction { length: usize },
}

/// Terminal outcome of one work item.
///
/// The closed set of variants makes outcome handling exhaustive at compile
/// time: a new outcome kind cannot be added without every counting and
/// reporting site being revisited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Success {
        output_path: PathBuf,
        #[serde(flatten)]
        detail: SuccessDetail,
    },
    Failed {
        error: String,
    },
    Skipped {
        reason: String,
    },
}

/// One work item's terminal record, produced exactly once per item whether
/// the item was dispatched individually or as part of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub id: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl OutcomeRecord {
    pub fn design_success(
        id: impl Into<String>,
        output_path: PathBuf,
        sequences_generated: usize,
    ) -> Self {
        Self {
            id: id.into(),
            outcome: Outcome::Success {
                output_path,
                detail: SuccessDetail::Design {
                    sequences_generated,
                },
            },
        }
    }

    pub fn prediction_success(id: impl Into<String>, output_path: PathBuf, length: usize) -> Self {
        Self {
            id: id.into(),
            outcome: Outcome::Success {
                output_path,
                detail: SuccessDetail::Prediction { length },
            },
        }
    }

    pub fn failed(id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            outcome: Outcome::Failed {
                error: error.into(),
            },
        }
    }

    pub fn skipped(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            outcome: Outcome::Skipped {
                reason: reason.into(),
            },
        }
    }
}

/// Result of one batch-shaped unit.
///
/// `Aborted` is the catastrophic case: the unit died during setup, before any
/// per-item record could be produced. It carries the identities of every item
/// the batch absorbed so the reducer can still account for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// One record per item, in batch order.
    Completed(Vec<OutcomeRecord>),
    /// The whole unit died before processing any item.
    Aborted { item_ids: Vec<String>, error: String },
}

/// What one execution-pool handle resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitOutput {
    /// A design unit: one item in, one record out.
    Single(OutcomeRecord),
    /// A prediction unit: one batch in, per-item records (or the abort
    /// marker) out.
    Batch(BatchOutcome),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_records_serialize_with_a_status_tag() {
        let record =
            OutcomeRecord::design_success("target_1", PathBuf::from("/out/target_1.fasta"), 10);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["id"], "target_1");
        assert_eq!(value["status"], "success");
        assert_eq!(value["sequences_generated"], 10);
        assert_eq!(value["output_path"], "/out/target_1.fasta");
    }

    #[test]
    fn failed_and_skipped_records_carry_their_reasons() {
        let failed = OutcomeRecord::failed("a", "model exploded");
        let skipped = OutcomeRecord::skipped("b", "sequence length 1200 exceeds the limit of 1000");

        let failed_value = serde_json::to_value(&failed).unwrap();
        assert_eq!(failed_value["status"], "failed");
        assert_eq!(failed_value["error"], "model exploded");

        let skipped_value = serde_json::to_value(&skipped).unwrap();
        assert_eq!(skipped_value["status"], "skipped");
        assert_eq!(
            skipped_value["reason"],
            "sequence length 1200 exceeds the limit of 1000"
        );
    }

    #[test]
    fn prediction_success_deserializes_back_to_the_same_record() {
        let record =
            OutcomeRecord::prediction_success("seq_9", PathBuf::from("/out/seq_9.pdb"), 123);
        let json = serde_json::to_string(&record).unwrap();
        let parsed: OutcomeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
