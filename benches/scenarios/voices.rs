//! Benchmarks for complete voices, realized from catalog descriptors.

use std::hint::black_box;

use arcade_synth::synth::{catalog::pluck, Bus, Effect, Voice, VoiceSpec};
use criterion::{BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

fn realize(spec: &VoiceSpec, rng: &mut StdRng) -> Voice {
    spec.realize(Bus::Sfx, 0.0, SAMPLE_RATE, rng)
        .expect("catalog voices are valid")
}

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");
    let mut rng = StdRng::seed_from_u64(0);

    for &size in BLOCK_SIZES {
        let mut scratch = vec![0.0f32; size];
        let mut out = vec![0.0f32; size];

        // Bass pluck: sawtooth through the swept lowpass
        let mut voice = realize(&pluck(55.0), &mut rng);
        group.bench_with_input(BenchmarkId::new("pluck", size), &size, |b, _| {
            b.iter(|| {
                voice.render(&mut scratch, black_box(&mut out), 0.01, SAMPLE_RATE);
            })
        });

        // First voice of each effect
        for effect in Effect::ALL {
            let mut voice = realize(&effect.spec().immediate[0], &mut rng);
            group.bench_with_input(BenchmarkId::new(effect.name(), size), &size, |b, _| {
                b.iter(|| {
                    voice.render(&mut scratch, black_box(&mut out), 0.01, SAMPLE_RATE);
                })
            });
        }
    }

    group.finish();
}
