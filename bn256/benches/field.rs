//! BN254 arithmetic benchmarks.

use bn256::{FieldElement, Lattice};
use criterion::{criterion_group, criterion_main, Criterion};
use hex_literal::hex;
use num_bigint::BigInt;

fn test_element_x() -> FieldElement {
    FieldElement::from_bytes(&hex!(
        "1aa9e0b2cdeaa2545d833a96e0563b5d4f4db11a18f387d3d22dcace2f9b05f3"
    ))
    .unwrap()
    .mont_encode()
}

fn test_element_y() -> FieldElement {
    FieldElement::from_bytes(&hex!(
        "27b12c72d8b1fd2d05571d2f1a7d048ccd9b0ecbee5d69ee6901a7ee0f6a765f"
    ))
    .unwrap()
    .mont_encode()
}

fn test_scalar() -> BigInt {
    BigInt::parse_bytes(
        b"14134093708575913556329047143221672394403447378637972533209073786785296720357",
        10,
    )
    .unwrap()
}

fn bench_field_element(c: &mut Criterion) {
    let mut group = c.benchmark_group("field element operations");

    let x = test_element_x();
    let y = test_element_y();

    group.bench_function("add", |b| b.iter(|| x + y));
    group.bench_function("sub", |b| b.iter(|| x - y));
    group.bench_function("mul", |b| b.iter(|| x * y));
    group.bench_function("square", |b| b.iter(|| x.square()));
    group.bench_function("invert", |b| b.iter(|| x.invert()));
    group.bench_function("mont_encode", |b| b.iter(|| x.mont_encode()));
    group.bench_function("mont_decode", |b| b.iter(|| x.mont_decode()));

    group.finish();
}

fn bench_lattice(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice operations");

    let curve = Lattice::curve_lattice();
    let target = Lattice::target_lattice();
    let k = test_scalar();

    group.bench_function("curve decompose", |b| b.iter(|| curve.decompose(&k)));
    group.bench_function("target decompose", |b| b.iter(|| target.decompose(&k)));
    group.bench_function("target multi", |b| b.iter(|| target.multi(&k)));

    group.finish();
}

criterion_group!(benches, bench_field_element, bench_lattice);
criterion_main!(benches);
