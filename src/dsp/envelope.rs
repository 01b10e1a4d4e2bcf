use crate::{dsp::ramp::ExpCurve, graph::node::RenderCtx, SILENCE_FLOOR};

/*
Decay Envelope
==============

Every voice in the game is percussive: it starts at full level and dies
away. There is no attack, sustain or release stage, just one exponential
fall from `peak` to the silence floor:

  Level
   peak ┐╲
        │ ╲
        │  ╲_
        │    ‾‾──__
  0.01  ┤          ‾‾‾‾‾‾‾‾‾‾‾‾
        └─────────┬───────┬──→ t
                decay    stop

The envelope reaches the floor at `decay` seconds and holds it until the
voice stops. Voices stop at or after `decay`, so the last sample a voice
produces is already at the floor and cutting it off does not click.

The envelope is stateless: the level is a pure function of voice-local
time, read from `RenderCtx::time`.
*/

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    peak: f32,
    decay: f32,
}

impl Envelope {
    pub const fn decay(peak: f32, decay: f32) -> Self {
        Self { peak, decay }
    }

    /// Seconds from start until the floor is reached.
    pub fn decay_time(&self) -> f32 {
        self.decay
    }

    fn curve(&self) -> ExpCurve {
        ExpCurve::ramp(self.peak, SILENCE_FLOOR, self.decay)
    }

    pub fn is_valid(&self) -> bool {
        self.decay.is_finite() && self.decay > 0.0 && self.curve().is_valid()
    }

    /// Level at `t` seconds after the voice started.
    pub fn level_at(&self, t: f32) -> f32 {
        self.curve().value_at(t)
    }

    /// Render a block of envelope levels.
    pub fn render(&self, buffer: &mut [f32], ctx: &RenderCtx) {
        let curve = self.curve();
        for (i, sample) in buffer.iter_mut().enumerate() {
            *sample = curve.value_at(ctx.sample_time(i) as f32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 1_000.0;

    #[test]
    fn starts_at_peak() {
        let env = Envelope::decay(0.8, 0.2);
        assert!((env.level_at(0.0) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn reaches_floor_at_decay_time() {
        let env = Envelope::decay(0.8, 0.2);
        assert!(env.level_at(0.2) <= SILENCE_FLOOR);
        assert!(env.level_at(0.5) <= SILENCE_FLOOR);
    }

    #[test]
    fn falls_monotonically() {
        let env = Envelope::decay(0.4, 0.3);
        let ctx = RenderCtx::new(SAMPLE_RATE, 0.0);
        let mut buffer = vec![0.0f32; 300];
        env.render(&mut buffer, &ctx);

        assert!(buffer.windows(2).all(|w| w[1] <= w[0]));
        assert!(buffer[299] < 0.011);
    }

    #[test]
    fn render_honours_block_offset() {
        let env = Envelope::decay(0.8, 0.2);
        let ctx = RenderCtx::new(SAMPLE_RATE, 0.1);
        let mut buffer = vec![0.0f32; 4];
        env.render(&mut buffer, &ctx);
        assert!((buffer[0] - env.level_at(0.1)).abs() < 1e-6);
    }

    #[test]
    fn zero_decay_is_invalid() {
        assert!(!Envelope::decay(0.5, 0.0).is_valid());
        assert!(!Envelope::decay(0.0, 0.2).is_valid());
        assert!(Envelope::decay(0.1, 0.05).is_valid());
    }
}
