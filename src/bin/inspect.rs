//! Reads a generated matrix file back and reports its order and value
//! range. Can be run with `cargo run --bin inspect -- matrices/matrix1.txt`

use matgen::reader::read_matrix;

use std::env;
use std::fs::File;
use std::io::BufReader;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: inspect <file>");
        return;
    }

    let f = File::open(&args[1]).unwrap();
    let matrix = match read_matrix(BufReader::new(f)) {
        Some(m) => m,
        None => {
            println!("Error: {} is not a matrix file", args[1]);
            return;
        }
    };

    if !matrix.is_square() {
        println!("Error: {} is not square", args[1]);
        return;
    }

    match matrix.value_range() {
        Some((lo, hi)) => println!(
            "{}: square matrix of order {}, values in [{}, {}]",
            args[1],
            matrix.n_rows(),
            lo,
            hi
        ),
        None => println!("{}: square matrix of order 0", args[1]),
    }
}
