//! Benchmarks for the swept lowpass.

use std::hint::black_box;

use arcade_synth::dsp::{filter::Lowpass, ramp::ExpCurve};
use arcade_synth::graph::{filter::FilterNode, GraphNode, RenderCtx};
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        // Generate a test signal (sawtooth-like ramp)
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        // Fixed cutoff: the per-sample coefficient cost alone
        let mut filter = Lowpass::new();
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("lowpass", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in buffer.iter_mut().zip(input.iter()) {
                    *out = filter.next_sample(x, black_box(1_000.0), SAMPLE_RATE);
                }
            })
        });

        // Pluck sweep, curve evaluated per sample
        let mut node = FilterNode::lowpass(ExpCurve::sweep(200.0, 1000.0, 0.05, 200.0, 0.2));
        let ctx = RenderCtx::new(SAMPLE_RATE, 0.02);
        group.bench_with_input(BenchmarkId::new("sweep", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                node.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    group.finish();
}
