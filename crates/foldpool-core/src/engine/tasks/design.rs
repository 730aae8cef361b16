use std::path::PathBuf;

use tracing::{debug, instrument};

use super::TaskError;
use crate::core::inference::{DesignRequest, SequenceDesigner};
use crate::core::io::fasta::{self, FastaRecord};
use crate::core::models::item::StructureItem;
use crate::core::models::outcome::OutcomeRecord;
use crate::engine::config::DesignConfig;

/// Runs one sequence-design unit: a single structure in, a single record
/// out.
///
/// On success the generated sequences are written as a FASTA file named
/// after the structure's stem. On any error the unit reports a failed record
/// carrying the error's description, with the item identity intact.
#[instrument(skip_all, fields(structure = %item.id()))]
pub fn run(
    item: &StructureItem,
    config: &DesignConfig,
    designer: &dyn SequenceDesigner,
) -> OutcomeRecord {
    let id = item.id();
    match design_one(item, config, designer) {
        Ok((output_path, generated)) => {
            debug!(generated, "Design unit finished.");
            OutcomeRecord::design_success(id, output_path, generated)
        }
        Err(e) => OutcomeRecord::failed(id, e.to_string()),
    }
}

fn design_one(
    item: &StructureItem,
    config: &DesignConfig,
    designer: &dyn SequenceDesigner,
) -> Result<(PathBuf, usize), TaskError> {
    let request = DesignRequest {
        structure: item.path(),
        sequence_count: config.sequence_count,
        temperature: config.temperature,
        seed: config.seed,
    };
    let sequences = designer.design(&request)?;

    let records: Vec<FastaRecord> = sequences
        .into_iter()
        .enumerate()
        .map(|(i, sequence)| FastaRecord {
            id: format!("design_{}", i + 1),
            sequence,
        })
        .collect();

    let output_path = config.output_dir.join(format!("{}.fasta", item.id()));
    fasta::write_records_to_path(&output_path, &records).map_err(|source| TaskError::Write {
        path: output_path.clone(),
        source,
    })?;

    Ok((output_path, records.len()))
}
