use std::f32::consts::PI;

/*
State-Variable Lowpass
======================

The bass pluck runs a sawtooth through a lowpass whose cutoff sweeps
200 -> 1000 -> 200 Hz within 0.2 s. That opens the tone for a bright
"pluck" transient and closes it again as the note dies.

The filter is the TPT (topology-preserving transform) state-variable form:
two trapezoidal integrators with a damping term. It stays stable while the
cutoff moves every sample, which a naive biquad with recomputed coefficients
does not guarantee.

    g = tan(pi * fc / fs)
    h = 1 / (1 + g * (g + k))

    v3 = x - ic2
    v1 = h * (ic1 + g * v3)      bandpass
    v2 = ic2 + g * v1            lowpass

    ic1 = 2 * v1 - ic1
    ic2 = 2 * v2 - ic2

k = 1/Q. We use Q = 1/sqrt(2): flat passband, no resonant peak.
*/

const DAMPING: f32 = std::f32::consts::SQRT_2;

pub struct Lowpass {
    ic1eq: f32, // First integrator's memory
    ic2eq: f32, // Second integrator's memory
}

impl Lowpass {
    pub fn new() -> Self {
        Self {
            ic1eq: 0.0,
            ic2eq: 0.0,
        }
    }

    #[inline]
    fn coefficient(cutoff_hz: f32, sample_rate: f32) -> f32 {
        // Keep the cutoff below Nyquist, where tan() blows up
        let ceiling = (sample_rate * 0.49).max(10.0);
        let cutoff = cutoff_hz.clamp(10.0, ceiling);
        (PI * cutoff / sample_rate).tan()
    }

    /// Filter one sample with the cutoff in effect for that sample.
    #[inline]
    pub fn next_sample(&mut self, sample: f32, cutoff_hz: f32, sample_rate: f32) -> f32 {
        let g = Self::coefficient(cutoff_hz, sample_rate);
        let h = 1.0 / (1.0 + g * (g + DAMPING));

        let v3 = sample - self.ic2eq;
        let v1 = h * (self.ic1eq + g * v3);
        let v2 = self.ic2eq + g * v1;

        self.ic1eq = 2.0 * v1 - self.ic1eq;
        self.ic2eq = 2.0 * v2 - self.ic2eq;

        v2
    }
}

impl Default for Lowpass {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::oscillator::{OscillatorBlock, Waveform};

    const SAMPLE_RATE: f32 = 48_000.0;

    fn peak_after_transient(buffer: &[f32]) -> f32 {
        let skip = buffer.len().min(256);
        buffer[skip..].iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }

    fn filtered_sine(frequency: f32, cutoff: f32) -> Vec<f32> {
        let mut osc = OscillatorBlock::new(Waveform::Sine);
        let mut filter = Lowpass::new();
        (0..1_024)
            .map(|_| {
                let s = osc.next_sample(frequency, SAMPLE_RATE);
                filter.next_sample(s, cutoff, SAMPLE_RATE)
            })
            .collect()
    }

    #[test]
    fn passes_dc() {
        let mut filter = Lowpass::new();
        let mut last = 0.0;
        for _ in 0..512 {
            last = filter.next_sample(1.0, 500.0, SAMPLE_RATE);
        }
        assert!(last > 0.99, "dc should pass, got {last}");
    }

    #[test]
    fn survives_sample_rates_below_the_cutoff_floor() {
        let mut filter = Lowpass::new();
        for _ in 0..64 {
            let out = filter.next_sample(1.0, 500.0, 8.0);
            assert!(out.is_finite());
        }
    }

    #[test]
    fn attenuates_above_cutoff() {
        let peak = peak_after_transient(&filtered_sine(5_000.0, 500.0));
        assert!(peak < 0.05, "expected strong attenuation, got peak {peak}");
    }

    #[test]
    fn open_cutoff_passes_more_than_closed() {
        let closed = peak_after_transient(&filtered_sine(1_000.0, 200.0));
        let open = peak_after_transient(&filtered_sine(1_000.0, 5_000.0));
        assert!(
            open > closed * 2.0,
            "open cutoff should pass more signal: open={open}, closed={closed}"
        );
    }
}
