//! This module defines the `Matrix` type: a row-major grid of signed
//! integers with random generation and plain-text serialization.

extern crate rand;

use rand::{thread_rng, Rng};

use std::io::{self, Write};

/// The smallest value a generated cell may hold.
pub const VALUE_MIN: i64 = -50;
/// The largest value a generated cell may hold.
pub const VALUE_MAX: i64 = 50;

/// A row-major grid of signed integers. Generated matrices are always
/// square and within [`VALUE_MIN`, `VALUE_MAX`]; a matrix read back from
/// disk may be neither, which is what [`is_square`](Matrix::is_square)
/// and [`value_range`](Matrix::value_range) are for.
#[derive(PartialEq, Debug, Clone)]
pub struct Matrix {
    rows: Vec<Vec<i64>>,
}

impl Matrix {
    /// Generates a square matrix of order `size`, every cell drawn
    /// independently and uniformly from `[VALUE_MIN, VALUE_MAX]`. An
    /// order of zero yields a matrix with no rows at all.
    pub fn random(size: usize) -> Self {
        let mut rng = thread_rng();
        let mut rows = Vec::with_capacity(size);
        for _ in 0..size {
            let mut row = Vec::with_capacity(size);
            for _ in 0..size {
                // gen_range excludes the upper bound
                row.push(rng.gen_range(VALUE_MIN, VALUE_MAX + 1));
            }
            rows.push(row);
        }
        Matrix { rows }
    }

    /// Wraps already-parsed rows. The rows are taken as-is and may be
    /// ragged.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Self {
        Matrix { rows }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// `true` when every row is exactly as long as the matrix is tall.
    /// A matrix with no rows counts as square.
    pub fn is_square(&self) -> bool {
        self.rows.iter().all(|row| row.len() == self.rows.len())
    }

    /// The smallest and largest cell values, or `None` for a matrix
    /// with no cells.
    pub fn value_range(&self) -> Option<(i64, i64)> {
        let mut values = self.rows.iter().flatten();
        let first = *values.next()?;
        Some(values.fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
    }

    /// Writes the matrix as plain text: one line per row, values joined
    /// by a single space, every line terminated by a newline.
    ///
    /// # Examples
    /// ```
    /// use matgen::matrix::Matrix;
    ///
    /// let matrix = Matrix::from_rows(vec![vec![1, -2], vec![30, 4]]);
    /// let mut out = Vec::new();
    /// matrix.write_to(&mut out).unwrap();
    ///
    /// assert_eq!(b"1 -2\n30 4\n".to_vec(), out);
    /// ```
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for row in &self.rows {
            let line = row
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<String>>()
                .join(" ");
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}
