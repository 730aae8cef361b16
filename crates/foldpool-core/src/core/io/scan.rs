use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Recursively collects every file under `root` whose extension matches
/// `extension` (ASCII case-insensitive), returned in sorted path order so a
/// run always discovers the same inputs in the same order.
///
/// A missing or unreadable `root` is an error; a root that simply contains
/// no matching files yields an empty, valid result.
pub fn find_files(root: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    visit(root, extension, &mut found)?;
    found.sort();
    Ok(found)
}

fn visit(dir: &Path, extension: &str, found: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            visit(&path, extension, found)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        {
            found.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_matching_files_recursively_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.pdb"), "").unwrap();
        fs::write(dir.path().join("nested").join("a.pdb"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let found = find_files(dir.path(), "pdb").unwrap();

        assert_eq!(found.len(), 2);
        assert!(found[0].ends_with("b.pdb"));
        assert!(found[1].ends_with("nested/a.pdb"));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("upper.PDB"), "").unwrap();

        let found = find_files(dir.path(), "pdb").unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn empty_directory_yields_an_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let found = find_files(dir.path(), "pdb").unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn missing_root_propagates_the_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(find_files(&missing, "pdb").is_err());
    }
}
