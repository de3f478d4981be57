//! A module for reading matrix files back into memory.

use std::io::prelude::*;

use crate::matrix::Matrix;
use crate::parsers::parse_row;

/// Reads a whole matrix file from `reader` into a [`Matrix`]. Every
/// line must parse as a row of signed integers; the first malformed
/// line makes the whole file unreadable and returns `None`. A reader
/// with no lines at all yields a matrix of order zero.
///
/// The rows are taken exactly as written, so a ragged file comes back
/// as a ragged matrix; it is up to the caller to check
/// [`is_square`](Matrix::is_square).
pub fn read_matrix<T>(reader: T) -> Option<Matrix>
where
    T: BufRead,
{
    let mut rows = Vec::new();
    for line in reader.lines() {
        rows.push(parse_row(line.unwrap().as_bytes())?);
    }
    Some(Matrix::from_rows(rows))
}
