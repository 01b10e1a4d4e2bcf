use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Waveforms
=========

  Sine      pure tone, no harmonics (clicks, sword ring)
  Sawtooth  every harmonic at 1/n, bright and buzzy (bass pluck, damage)
  Square    odd harmonics at 1/n, hollow (victory arpeggio, error buzz)
  Triangle  odd harmonics at 1/n², soft

The oscillator keeps a phase in [0, 1) and advances it by f / sample_rate
every sample, so the frequency can change per sample (glides) without
discontinuities in the waveform.

Sawtooth and square jump instantly at their edges, which aliases badly at
high pitches. PolyBLEP subtracts a small polynomial step around each jump to
band-limit it.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Sawtooth,
    Square,
    Triangle,
}

pub struct OscillatorBlock {
    waveform: Waveform,
    phase: f32,
}

impl OscillatorBlock {
    pub fn new(waveform: Waveform) -> Self {
        Self { waveform, phase: 0.0 }
    }

    /// Produce one sample at `frequency` and advance the phase.
    #[inline]
    pub fn next_sample(&mut self, frequency: f32, sample_rate: f32) -> f32 {
        let inc = (frequency / sample_rate).clamp(0.0, 0.5);
        let phase = self.phase;

        let sample = match self.waveform {
            Waveform::Sine => (TAU * phase).sin(),
            Waveform::Sawtooth => (2.0 * phase - 1.0) - poly_blep(phase, inc),
            Waveform::Square => {
                let naive = if phase < 0.5 { 1.0 } else { -1.0 };
                naive + poly_blep(phase, inc) - poly_blep((phase + 0.5) % 1.0, inc)
            }
            Waveform::Triangle => {
                if phase < 0.5 {
                    4.0 * phase - 1.0
                } else {
                    3.0 - 4.0 * phase
                }
            }
        };

        self.phase += inc;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        sample
    }
}

/// Polynomial band-limited step correction around a discontinuity.
///
/// `t` is the phase in [0, 1), `dt` the phase increment per sample.
#[inline]
fn poly_blep(t: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        0.0
    } else if t < dt {
        let t = t / dt;
        2.0 * t - t * t - 1.0
    } else if t > 1.0 - dt {
        let t = (t - 1.0) / dt;
        t * t + 2.0 * t + 1.0
    } else {
        0.0
    }
}
