//! Transcoding performance benchmarks.
//!
//! Measures end-to-end throughput per rendering mode and column count.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use csvvw::{RowReader, TranscodeConfig, transcode};

/// Generate synthetic CSV data with a trailing integer label column.
fn generate_csv_data(rows: usize, cols: usize) -> String {
    let mut data = String::new();

    for i in 0..cols {
        data.push_str(&format!("column_{},", i + 1));
    }
    data.push_str("label\n");

    for row in 0..rows {
        for col in 0..cols {
            match col % 3 {
                0 => data.push_str(&format!("cat_{}", row % 10)),
                1 => data.push_str(&format!("{}", row * 7 % 1000)),
                2 => data.push_str(&format!("{:.2}", row as f64 * 1.5)),
                _ => unreachable!(),
            }
            data.push(',');
        }
        data.push_str(if row % 2 == 0 { "0\n" } else { "1\n" });
    }

    data
}

fn run(data: &str, config: TranscodeConfig) -> usize {
    let reader = RowReader::from_reader(data.as_bytes(), b',').unwrap();
    let mut sink = Vec::with_capacity(data.len() * 2);
    transcode(reader, &mut sink, config).unwrap();
    sink.len()
}

/// Benchmark each rendering mode on the same input.
fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcode_modes");
    let data = generate_csv_data(10_000, 10);
    group.throughput(Throughput::Bytes(data.len() as u64));

    let modes = [
        ("inline", TranscodeConfig::new()),
        ("bow", TranscodeConfig::new().with_bow(true)),
        ("namespace_names", TranscodeConfig::new().with_namespace_names(true)),
    ];

    for (name, config) in modes {
        let config = config.with_label("label");
        group.bench_with_input(BenchmarkId::new("mode", name), &data, |b, data| {
            b.iter(|| black_box(run(data, config.clone())))
        });
    }

    group.finish();
}

/// Benchmark transcoding with varying row counts.
fn bench_row_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcode_rows");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_csv_data(*rows, 10);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter(|| black_box(run(data, TranscodeConfig::new().with_label("label"))))
        });
    }

    group.finish();
}

/// Benchmark transcoding with varying column counts.
fn bench_column_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcode_columns");

    for cols in [5, 10, 20, 50].iter() {
        let data = generate_csv_data(1_000, *cols);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("cols", cols), &data, |b, data| {
            let config = TranscodeConfig::new()
                .with_label("label")
                .with_namespace("column_1", "cat")
                .with_ignore("column_2");
            b.iter(|| black_box(run(data, config.clone())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_modes, bench_row_scaling, bench_column_scaling);
criterion_main!(benches);
