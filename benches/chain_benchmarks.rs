use criterion::{Criterion, criterion_group, criterion_main};
use log_relay::domain::{LogRecord, Severity};
use log_relay::sink::{ConsoleFormat, ConsoleSink, LogSink};
use std::hint::black_box;
use std::sync::Arc;

fn bench_single_node_emit(c: &mut Criterion) {
    let sink = ConsoleSink::with_writer(Box::new(std::io::sink()));
    let record = LogRecord::new(Severity::Info, "benchmark message").with_tag("Bench");

    c.bench_function("single_node_emit", |b| {
        b.iter(|| sink.emit(black_box(&record)));
    });
}

fn bench_four_node_chain_emit(c: &mut Criterion) {
    let mut head = ConsoleSink::with_writer(Box::new(std::io::sink()));
    for _ in 0..3 {
        head = ConsoleSink::with_writer(Box::new(std::io::sink())).with_next(Arc::new(head));
    }
    let record = LogRecord::new(Severity::Info, "benchmark message").with_tag("Bench");

    c.bench_function("four_node_chain_emit", |b| {
        b.iter(|| head.emit(black_box(&record)));
    });
}

fn bench_json_emit(c: &mut Criterion) {
    let sink = ConsoleSink::with_writer(Box::new(std::io::sink())).format(ConsoleFormat::Json);
    let record = LogRecord::new(Severity::Info, "benchmark message").with_tag("Bench");

    c.bench_function("json_emit", |b| {
        b.iter(|| sink.emit(black_box(&record)));
    });
}

criterion_group!(
    benches,
    bench_single_node_emit,
    bench_four_node_chain_emit,
    bench_json_emit
);
criterion_main!(benches);
