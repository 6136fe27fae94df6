//! Benchmarks for brand export
//!
//! Tests performance of natural sorting and rendering the export document.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use detector_icons::metadata::{build_document, render, BrandList, BuiltinProvider};

/// Generate `n` brands with mixed case and embedded numbers.
fn synthetic_brands(n: usize) -> BrandList {
    (0..n)
        .map(|i| {
            let name = match i % 3 {
                0 => format!("Brand{}", n - i),
                1 => format!("brand {} Mobile", i),
                _ => format!("ZTE Blade A{}", i % 97),
            };
            (format!("{:04X}", i), name)
        })
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("brand_sort");
    for size in [100, 1_000, 10_000] {
        let brands = synthetic_brands(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &brands, |b, brands| {
            b.iter(|| black_box(brands.clone().into_sorted()))
        });
    }
    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let provider = BuiltinProvider::new();
    c.bench_function("export_builtin", |b| {
        b.iter(|| {
            let document = build_document(black_box(&provider)).unwrap();
            black_box(render(&document, false).unwrap())
        })
    });
}

criterion_group!(benches, bench_sort, bench_export);
criterion_main!(benches);
