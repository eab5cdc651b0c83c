//! Benchmarks for the turn parser in react-protocol/src/parser.rs
//!
//! Performance-critical paths:
//! - `parse`: final-answer scan and regex-based action extraction
//! - Malformed turns, which scan the whole input without matching

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use react_protocol::parse;

fn bench_parse_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("turn_parsing/forms");

    let test_inputs = [
        ("final_answer", "Thought: done\nFinal Answer: 4"),
        (
            "action",
            "Thought: I should search\nAction: Search\n\nAction Input: 2+2",
        ),
        ("quoted_action", "Action: Search\nAction Input: \"rust lang\""),
        ("malformed", "I am not sure what to do next."),
    ];

    for (name, input) in &test_inputs {
        group.bench_with_input(BenchmarkId::from_parameter(*name), *input, |b, i| {
            b.iter(|| parse(black_box(i)));
        });
    }

    group.finish();
}

fn bench_parse_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("turn_parsing/throughput");

    // Long reasoning before the markers, as models tend to produce
    let sizes = [100usize, 1000, 10000];

    for size in sizes {
        let input = format!(
            "Thought: {}\nAction: Search\nAction Input: {}",
            "x".repeat(size),
            "y".repeat(size / 10)
        );

        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}_bytes")),
            &input,
            |b, i| b.iter(|| parse(black_box(i))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse_forms, bench_parse_throughput);
criterion_main!(benches);
