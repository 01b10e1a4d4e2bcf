//! Benchmarks for the decay envelope.

use std::hint::black_box;

use arcade_synth::dsp::envelope::Envelope;
use arcade_synth::graph::RenderCtx;
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let env = Envelope::decay(0.8, 0.2);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Inside the decay: one exp per sample
        let decaying = RenderCtx::new(48_000.0, 0.05);
        group.bench_with_input(BenchmarkId::new("decay", size), &size, |b, _| {
            b.iter(|| {
                env.render(black_box(&mut buffer), black_box(&decaying));
            })
        });

        // Past the decay: holding the floor
        let floor = RenderCtx::new(48_000.0, 0.25);
        group.bench_with_input(BenchmarkId::new("floor", size), &size, |b, _| {
            b.iter(|| {
                env.render(black_box(&mut buffer), black_box(&floor));
            })
        });
    }

    group.finish();
}
