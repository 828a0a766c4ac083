//! Criterion micro-benchmarks for rule emission and JSON output.

use antgen::program_json;
use antgen_bench::reference_profile;
use antgen_compile::{CompileOptions, ProgramCompiler};
use antgen_tour::{solve, TwoOptStrategy};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Benchmark: compile the solved reference tour, then serialize it.
fn bench_compile_and_serialize(c: &mut Criterion) {
    let grid = reference_profile(42).unwrap();
    let start = grid.start().unwrap();
    let end = grid.end().unwrap().point;
    let report = solve(
        grid.dirty_points(),
        start,
        end,
        grid.spec(),
        TwoOptStrategy::RawDistance,
    );
    let compiler = ProgramCompiler::new(&grid, CompileOptions::default());

    c.bench_function("compile_reference_tour", |b| {
        b.iter(|| {
            let out = compiler.compile(&report.tour).unwrap();
            black_box(out.summary.next_state);
        });
    });

    let program = compiler.compile(&report.tour).unwrap().program;
    c.bench_function("program_json_reference", |b| {
        b.iter(|| black_box(program_json(&program).unwrap().len()));
    });
}

criterion_group!(benches, bench_compile_and_serialize);
criterion_main!(benches);
