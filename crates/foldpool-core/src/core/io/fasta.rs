use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// One record of a FASTA sequence-collection file.
///
/// The id is the first whitespace-delimited token of the header line;
/// anything after it (descriptions, scores) is dropped. Sequence bodies may
/// span multiple lines and are concatenated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub sequence: String,
}

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Record header on line {line} has no identifier")]
    MissingId { line: usize },
    #[error("Sequence data on line {line} appears before any record header")]
    OrphanSequence { line: usize },
}

pub fn read_records(reader: &mut impl BufRead) -> Result<Vec<FastaRecord>, FastaError> {
    let mut records: Vec<FastaRecord> = Vec::new();

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('>') {
            let id = header
                .split_whitespace()
                .next()
                .ok_or(FastaError::MissingId { line: line_num })?;
            records.push(FastaRecord {
                id: id.to_string(),
                sequence: String::new(),
            });
        } else {
            let current = records
                .last_mut()
                .ok_or(FastaError::OrphanSequence { line: line_num })?;
            current.sequence.push_str(trimmed);
        }
    }

    Ok(records)
}

pub fn read_records_from_path(path: &Path) -> Result<Vec<FastaRecord>, FastaError> {
    let mut reader = BufReader::new(File::open(path)?);
    read_records(&mut reader)
}

pub fn write_records(writer: &mut impl Write, records: &[FastaRecord]) -> io::Result<()> {
    for record in records {
        writeln!(writer, ">{}", record.id)?;
        writeln!(writer, "{}", record.sequence)?;
    }
    Ok(())
}

pub fn write_records_to_path(path: &Path, records: &[FastaRecord]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_records(&mut writer, records)?;
    writer.flush()
}
