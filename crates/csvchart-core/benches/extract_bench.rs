use csvchart_core::{extract_numbers, extract_pairs, extract_strings, Table};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_csv(n: usize) -> Vec<u8> {
    let mut s = String::from("date,sleep_score,steps\n");
    for i in 0..n {
        // every 17th score is junk, every 29th row is short
        if i % 29 == 0 {
            s.push_str(&format!("day-{i}\n"));
        } else if i % 17 == 0 {
            s.push_str(&format!("day-{i},N/A,{}\n", 5000 + i % 4000));
        } else {
            s.push_str(&format!("day-{i},{},{}\n", 60 + i % 40, 5000 + i % 4000));
        }
    }
    s.into_bytes()
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    for &n in &[10_000usize, 100_000usize] {
        let bytes = gen_csv(n);
        group.bench_with_input(BenchmarkId::new("parse", n), &bytes, |b, bytes| {
            b.iter(|| black_box(Table::from_bytes(bytes).unwrap()));
        });
        let table = Table::from_bytes(&bytes).unwrap();
        group.bench_with_input(BenchmarkId::new("strings", n), &table, |b, t| {
            b.iter(|| black_box(extract_strings(t, "date").unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("numbers", n), &table, |b, t| {
            b.iter(|| black_box(extract_numbers(t, "sleep_score").unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("pairs", n), &table, |b, t| {
            b.iter(|| black_box(extract_pairs(t, "date", "sleep_score").unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
