//! Benchmarks for prompt rendering in react-protocol/src/prompt.rs
//!
//! Performance-critical paths:
//! - `PromptComposer::render` with growing transcripts
//! - Memoized toolset strings on repeated renders

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use react_protocol::{ActionStep, PromptComposer, Tool, Toolset, Transcript};

fn toolset(count: usize) -> Toolset {
    (0..count)
        .map(|i| Tool::new(format!("tool_{i}"), format!("does thing number {i}")))
        .collect()
}

fn transcript(steps: usize) -> Transcript {
    (0..steps)
        .map(|i| {
            ActionStep::from_request(
                format!(" step {i}\nAction: tool_0\nAction Input: {i}"),
                "tool_0",
                i.to_string(),
                format!("observation {i}"),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

fn bench_render_transcript(c: &mut Criterion) {
    let mut group = c.benchmark_group("prompt_rendering/transcript");

    let composer = PromptComposer::new();
    let tools = toolset(5);

    for steps in [0usize, 5, 25] {
        let transcript = transcript(steps);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{steps}_steps")),
            &transcript,
            |b, t| b.iter(|| composer.render(black_box(&tools), black_box(t), "question")),
        );
    }

    group.finish();
}

fn bench_render_toolset(c: &mut Criterion) {
    let mut group = c.benchmark_group("prompt_rendering/toolset");

    let composer = PromptComposer::new();
    let empty = Transcript::new();

    for count in [1usize, 10, 50] {
        let tools = toolset(count);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{count}_tools")),
            &tools,
            |b, t| b.iter(|| composer.render(black_box(t), &empty, "question")),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_render_transcript, bench_render_toolset);
criterion_main!(benches);
