//! Criterion micro-benchmarks for push growth and sort.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dynvec::prelude::*;
use dynvec_bench::{ascending, descending, int_vec, scrambled};

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for &n in &[100usize, 10_000] {
        group.bench_function(format!("append_{n}"), |b| {
            b.iter(|| {
                let mut v: TypedVec<i32> = TypedVec::new(0).unwrap();
                for x in 0..n as i32 {
                    v.push(black_box(x)).unwrap();
                }
                black_box(v.len())
            });
        });
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    let n = 4096;
    let inputs = [
        ("scrambled", scrambled(n, 42)),
        ("ascending", ascending(n)),
        ("descending", descending(n)),
    ];
    for (name, values) in &inputs {
        let v = int_vec(values);
        group.bench_function(*name, |b| {
            b.iter(|| black_box(v.sorted_by(|a, b| a.cmp(&b)).unwrap().len()));
        });
    }
    group.finish();
}

fn bench_insert_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift");
    let n = 4096;
    group.bench_function("insert_front", |b| {
        b.iter(|| {
            let mut v: TypedVec<i32> = TypedVec::new(n).unwrap();
            for x in 0..256 {
                v.insert(black_box(x), 0).unwrap();
            }
            black_box(v.len())
        });
    });
    group.bench_function("remove_front", |b| {
        let template = int_vec(&ascending(256));
        b.iter(|| {
            let mut v = template.subvec(0, template.len()).unwrap();
            while !v.is_empty() {
                black_box(v.remove(0).unwrap());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_push, bench_sort, bench_insert_remove);
criterion_main!(benches);
