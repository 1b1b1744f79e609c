use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ltsv::parse_str;

fn access_log_line(i: u32) -> String {
    format!(
        "host:192.168.0.{}\tident:-\tuser:frank\ttime:[10/Oct/2000:13:55:36 -0700]\t\
         req:GET /item/{} HTTP/1.0\tstatus:200\tsize:2326\t\
         referer:http://www.example.com/start.html\tua:Mozilla/4.08 [en] (Win98; I ;Nav)",
        i % 256,
        i
    )
}

fn benchmark_parse_single_line(c: &mut Criterion) {
    let line = access_log_line(0);

    c.bench_function("parse_single_line", |b| {
        b.iter(|| parse_str(black_box(&line)))
    });
}

fn benchmark_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for size in [10, 100, 1000, 5000].iter() {
        let text = (0..*size)
            .map(access_log_line)
            .collect::<Vec<_>>()
            .join("\n");

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_wide_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_wide_record");

    for fields in [5, 20, 80].iter() {
        let line = (0..*fields)
            .map(|i| format!("field_{i}:value-{i}"))
            .collect::<Vec<_>>()
            .join("\t");

        group.bench_with_input(BenchmarkId::from_parameter(fields), &line, |b, line| {
            b.iter(|| parse_str(black_box(line)))
        });
    }
    group.finish();
}

fn benchmark_lookup(c: &mut Criterion) {
    let text = (0..1000).map(access_log_line).collect::<Vec<_>>().join("\n");
    let document = parse_str(&text).unwrap();

    c.bench_function("lookup_by_label", |b| {
        b.iter(|| {
            let record = document.get(black_box(500)).unwrap();
            record.get(black_box("status"))
        })
    });

    c.bench_function("lookup_by_index", |b| {
        b.iter(|| {
            let record = document.get(black_box(500)).unwrap();
            record.value_at(black_box(5))
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_single_line,
    benchmark_parse_document,
    benchmark_wide_records,
    benchmark_lookup
);
criterion_main!(benches);
