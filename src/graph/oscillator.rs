use crate::{
    dsp::{
        oscillator::{OscillatorBlock, Waveform},
        ramp::ExpCurve,
    },
    graph::node::{GraphNode, RenderCtx},
};

/*
Tone Source
===========

An oscillator whose pitch follows a curve over the voice's lifetime:

  OscNode::new(Waveform::Sine, ExpCurve::constant(1500.0))
      // click: steady 1.5 kHz

  OscNode::new(Waveform::Sine, ExpCurve::ramp(1200.0, 2000.0, 0.1))
      // sword ring: rising sweep, then holds 2 kHz

  OscNode::new(Waveform::Sawtooth, ExpCurve::ramp(150.0, 40.0, 0.2))
      // damage: falling punch

The frequency is evaluated per sample, so glides are smooth.
*/

pub struct OscNode {
    osc: OscillatorBlock,
    pitch: ExpCurve,
}

impl OscNode {
    pub fn new(waveform: Waveform, pitch: ExpCurve) -> Self {
        Self {
            osc: OscillatorBlock::new(waveform),
            pitch,
        }
    }

    pub fn sine(frequency: f32) -> Self {
        Self::new(Waveform::Sine, ExpCurve::constant(frequency))
    }

    pub fn sawtooth(frequency: f32) -> Self {
        Self::new(Waveform::Sawtooth, ExpCurve::constant(frequency))
    }
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        for (i, sample) in out.iter_mut().enumerate() {
            let frequency = self.pitch.value_at(ctx.sample_time(i) as f32);
            *sample = self.osc.next_sample(frequency, ctx.sample_rate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    fn zero_crossings(buffer: &[f32]) -> usize {
        buffer
            .windows(2)
            .filter(|w| w[0] <= 0.0 && w[1] > 0.0)
            .count()
    }

    #[test]
    fn valid_sine() {
        let sample_rate = 48_000.0;
        let ctx = RenderCtx::new(sample_rate, 0.0);
        let mut node = OscNode::sine(440.0);

        let mut buffer = vec![0.0f32; 128];
        node.render_block(&mut buffer, &ctx);

        let n = 12;
        let expected = (TAU * 440.0 * n as f32 / sample_rate).sin();
        assert!((buffer[n] - expected).abs() < 1e-4);
    }

    #[test]
    fn falling_glide_slows_down() {
        let sample_rate = 48_000.0;
        let mut node = OscNode::new(Waveform::Sine, ExpCurve::ramp(150.0, 40.0, 0.2));

        let mut early = vec![0.0f32; 4_800];
        node.render_block(&mut early, &RenderCtx::new(sample_rate, 0.0));
        let mut late = vec![0.0f32; 4_800];
        node.render_block(&mut late, &RenderCtx::new(sample_rate, 0.1));

        assert!(
            zero_crossings(&early) > zero_crossings(&late),
            "pitch should fall over the glide"
        );
    }
}
