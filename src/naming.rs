//! A module for computing the next free matrix file name.
//!
//! Generated files live in a flat `matrices/` directory and are named
//! `matrix1.txt`, `matrix2.txt`, and so on. A new file takes the
//! smallest index whose name is not already present in the directory,
//! so the index of a deleted file is reused before the sequence grows.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The directory all generated matrix files are written to. The
/// generator never creates it; it has to exist before a file can be
/// written.
pub const MATRIX_DIR: &str = "matrices";

/// The file name carrying the given sequence index.
pub fn file_name(index: usize) -> String {
    format!("matrix{}.txt", index)
}

/// The smallest index >= 1 whose file name is absent from `taken`.
/// This fills gaps: with `matrix1.txt` and `matrix3.txt` taken the
/// answer is 2, not 4.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use matgen::naming::next_free_index;
///
/// let mut taken = HashSet::new();
/// taken.insert(String::from("matrix1.txt"));
/// taken.insert(String::from("matrix3.txt"));
///
/// assert_eq!(2, next_free_index(&taken));
/// ```
pub fn next_free_index(taken: &HashSet<String>) -> usize {
    let mut index = 1;
    while taken.contains(&file_name(index)) {
        index += 1;
    }
    index
}

/// Lists `dir` (non-recursively, every entry whatever its type) and
/// returns the path of the next free matrix file inside it. Entries
/// that don't match the naming pattern simply never collide with a
/// candidate name.
pub fn next_free_path(dir: &Path) -> io::Result<PathBuf> {
    let mut taken = HashSet::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        taken.insert(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(dir.join(file_name(next_free_index(&taken))))
}
