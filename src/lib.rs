//! `matgen` generates plain-text files containing square matrices of
//! random integers, and reads such files back.
//!
//! # Matrix files
//!
//! A matrix file is plain text, one line per matrix row. The values in a
//! row are signed base-10 integers joined by a single ASCII space, and
//! every line is terminated by `\n`. There is no header and no escaping.
//! A matrix of order zero is a file with no lines at all.
//!
//! Generated values are drawn uniformly from the inclusive range
//! [[`VALUE_MIN`](matrix::VALUE_MIN), [`VALUE_MAX`](matrix::VALUE_MAX)].
//!
//! # File naming
//!
//! Generated files live in a flat `matrices/` directory and are named
//! `matrix1.txt`, `matrix2.txt`, and so on. The name for a new file uses
//! the smallest index whose name is not already taken, so after deleting
//! `matrix2.txt` the next generated file fills that gap instead of
//! extending the sequence. See [`naming`] for the exact rules.
//!
//! # Binaries
//!
//! The default `matgen` binary interactively generates one file: it asks
//! for the matrix order on stdin and reports the file it created. The
//! `inspect` binary reads a file back and prints its order and value
//! range.

pub mod matrix;
pub mod naming;
pub mod parsers;
pub mod reader;
