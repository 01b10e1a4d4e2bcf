//! Benchmarks for the three-bus mixer.

use arcade_synth::{
    synth::{catalog::pluck, Bus, Effect, Mixer},
    EngineConfig,
};
use criterion::{BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use arcade_synth::io::OutputDevice;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

/// Mixer loaded with one pluck plus every effect's voices, all sounding.
fn busy_mixer(rng: &mut StdRng) -> Mixer {
    let (mixer, mut handle) = Mixer::new(&EngineConfig::default(), SAMPLE_RATE);

    let bass = pluck(55.0).realize(Bus::Music, 0.0, SAMPLE_RATE, rng);
    if let Ok(voice) = bass {
        let _ = handle.submit(voice);
    }
    for effect in Effect::ALL {
        for spec in effect.spec().immediate {
            if let Ok(voice) = spec.realize(Bus::Sfx, 0.0, SAMPLE_RATE, rng) {
                let _ = handle.submit(voice);
            }
        }
    }
    mixer
}

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/mix");
    let mut rng = StdRng::seed_from_u64(0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Empty mixer: the fixed cost of summing three buses
        let (mut idle, _handle) = Mixer::new(&EngineConfig::default(), SAMPLE_RATE);
        group.bench_with_input(BenchmarkId::new("idle", size), &size, |b, _| {
            b.iter(|| idle.render(&mut buffer))
        });

        // Busiest moment: music plus every effect, first block after the trigger
        group.bench_with_input(BenchmarkId::new("busy", size), &size, |b, _| {
            b.iter_batched(
                || busy_mixer(&mut rng),
                |mut mixer| mixer.render(&mut buffer),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}
