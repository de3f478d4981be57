//! Interactively generates one random square matrix file. Asks for the
//! matrix order on stdin and writes it to the first free
//! `matrices/matrix<N>.txt`, reusing the index of any deleted file
//! before extending the sequence. Can be run with `cargo run`.

use matgen::matrix::Matrix;
use matgen::naming;

use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::path::Path;

fn main() {
    println!("Generation of a matrix file");

    // pick the file name before prompting, the directory has to exist
    let path = naming::next_free_path(Path::new(naming::MATRIX_DIR)).unwrap();

    print!("Size of the matrix : ");
    io::stdout().flush().unwrap();
    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();
    let size = input.trim().parse::<i64>().unwrap();

    // a non-positive order writes a file with no rows rather than failing
    let matrix = Matrix::random(if size > 0 { size as usize } else { 0 });

    let mut f = File::create(&path).unwrap();
    matrix.write_to(&mut f).unwrap();

    println!("The file {} was created", path.display());
}
