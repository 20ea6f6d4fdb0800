#[path = "../tests/common.rs"]
mod common;

use criterion::{criterion_group, criterion_main, Criterion};
use tone_generator::PaletteGenerator;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    let generator = PaletteGenerator::new();
    let inputs = common::hue_sweep(1);

    group.bench_function("single_palette", |b| {
        b.iter(|| generator.generate_palette("#0ea5e9").unwrap())
    });

    group.bench_with_input("360_hues", &inputs, |b, inputs| {
        b.iter(|| {
            for input in inputs {
                generator.generate_palette(input).unwrap();
            }
        })
    });

    group.bench_with_input("360_hues_parallel", &inputs, |b, inputs| {
        b.iter(|| generator.generate_palettes(inputs))
    });

    group.bench_function("adjust_palette", |b| {
        let palette = generator.generate_palette("#22c55e").unwrap();

        b.iter(|| generator.adjust_palette(&palette, 12.0, -4.0, 3.0).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
