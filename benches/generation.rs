use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matgen::matrix::Matrix;
use matgen::parsers;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("generating an order 32 matrix", |b| {
        b.iter(|| Matrix::random(black_box(32)))
    });

    c.bench_function("serializing an order 32 matrix", |b| {
        let matrix = Matrix::random(32);
        b.iter(|| {
            let mut out = Vec::new();
            matrix.write_to(&mut out).unwrap();
            out
        })
    });

    c.bench_function("parsing a 32 value row", |b| {
        let matrix = Matrix::random(32);
        let mut out = Vec::new();
        matrix.write_to(&mut out).unwrap();
        let line: Vec<u8> = out
            .split(|&byte| byte == b'\n')
            .next()
            .unwrap()
            .to_vec();
        b.iter(|| parsers::parse_row(black_box(&line)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
