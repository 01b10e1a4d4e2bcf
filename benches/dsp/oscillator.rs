//! Benchmarks for oscillator waveform generation.

use std::hint::black_box;

use arcade_synth::dsp::oscillator::{OscillatorBlock, Waveform};
use arcade_synth::graph::{oscillator::OscNode, GraphNode, RenderCtx};
use arcade_synth::dsp::ramp::ExpCurve;
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for waveform in [Waveform::Sine, Waveform::Sawtooth, Waveform::Square, Waveform::Triangle] {
            let mut osc = OscillatorBlock::new(waveform);
            let name = format!("{waveform:?}").to_lowercase();
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for sample in buffer.iter_mut() {
                        *sample = osc.next_sample(black_box(440.0), SAMPLE_RATE);
                    }
                })
            });
        }

        // Pitch glide: curve evaluated per sample (damage sweep)
        let mut glide = OscNode::new(Waveform::Sawtooth, ExpCurve::ramp(150.0, 40.0, 0.2));
        let ctx = RenderCtx::new(SAMPLE_RATE, 0.0);
        group.bench_with_input(BenchmarkId::new("glide", size), &size, |b, _| {
            b.iter(|| {
                glide.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    group.finish();
}
