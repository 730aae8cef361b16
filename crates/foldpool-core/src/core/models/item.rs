use std::path::{Path, PathBuf};

/// A single structure file queued for sequence design.
///
/// Identity is the file stem of the structure path; it labels the item's
/// outcome in the run summary and derives the name of the generated
/// sequence file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureItem {
    path: PathBuf,
}

impl StructureItem {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The item's identity: the structure file's stem, falling back to the
    /// full file name and then the whole path. Never empty for a path that
    /// names a file.
    pub fn id(&self) -> String {
        self.path
            .file_stem()
            .or_else(|| self.path.file_name())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// A single sequence record queued for structure prediction.
///
/// Identity is the record id taken from the source file header. Uniqueness
/// is not enforced: duplicate ids both proceed independently, and the later
/// one's output file overwrites the earlier one's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceItem {
    pub id: String,
    pub sequence: String,
}

impl SequenceItem {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure_item_id_is_the_file_stem() {
        let item = StructureItem::new("/data/input/designs/target_7a.pdb");
        assert_eq!(item.id(), "target_7a");
    }

    #[test]
    fn structure_item_id_falls_back_to_file_name() {
        let item = StructureItem::new("/data/input/.pdb");
        assert!(!item.id().is_empty());
    }

    #[test]
    fn sequence_item_keeps_id_and_sequence() {
        let item = SequenceItem::new("seq_1", "MKVLAT");
        assert_eq!(item.id, "seq_1");
        assert_eq!(item.sequence, "MKVLAT");
    }
}
