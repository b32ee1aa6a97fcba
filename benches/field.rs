// -*- mode: rust; -*-
//
// This file is part of fp25519.
// See LICENSE for licensing information.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fp25519::FieldElement;

fn field_benchmarks(c: &mut Criterion) {
    let a = FieldElement::from_limbs([
        1621387689972360,
        922524701973052,
        1829966140650555,
        809465266247700,
        1951017923057161,
    ]);
    let b = FieldElement::from_limbs([
        1690142389023224,
        1604293222359650,
        2195352116801794,
        1951017923057161,
        336831545554675,
    ]);

    c.bench_function("fieldelement mul", |bench| {
        bench.iter(|| black_box(&a) * black_box(&b))
    });

    c.bench_function("fieldelement add + reduce", |bench| {
        bench.iter(|| (black_box(&a) + black_box(&b)).reduce())
    });

    c.bench_function("fieldelement reduce", |bench| {
        bench.iter(|| black_box(&a).reduce())
    });

    c.bench_function("fieldelement canonical", |bench| {
        bench.iter(|| black_box(&a).canonical())
    });
}

criterion_group!(field, field_benchmarks);
criterion_main!(field);
