use std::fmt;

use rand::Rng;

use crate::{
    dsp::{envelope::Envelope, noise::NoiseBuffer, oscillator::Waveform, ramp::ExpCurve},
    error::{AudioError, Result},
    graph::{
        envelope::EnvNode, extensions::NodeExt, filter::FilterNode, noise::NoiseNode,
        oscillator::OscNode, GraphNode, RenderCtx,
    },
    synth::bus::Bus,
};

/*
Voices
======

A voice is one short-lived sound: a source, an optional lowpass, and a decay
envelope, bound to a bus with a start and a stop time fixed when it is
created. Nobody holds a handle to it. The mixer renders it from `start` and
drops it once `stop` has passed.

Every sound the engine makes is described by a `VoiceSpec`, plain data that
can live in a `static` table, and turned into a `Voice` by one routine,
`VoiceSpec::realize`:

  VoiceSpec ──realize(bus, at, sample_rate, rng)──→ Voice
                                                     │
       source ─→ [lowpass sweep] ─→ × envelope ──────┘
*/

/// What generates the raw signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source {
    /// Oscillator following a pitch curve
    Tone { waveform: Waveform, pitch: ExpCurve },
    /// Uniform white noise, one fresh buffer per realization
    Noise,
}

/// Declarative description of one voice.
///
/// `offset` delays the start relative to the moment of realization;
/// `duration` runs from the (delayed) start to the stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceSpec {
    pub source: Source,
    pub filter: Option<ExpCurve>,
    pub envelope: Envelope,
    pub offset: f32,
    pub duration: f32,
}

impl VoiceSpec {
    pub const fn tone(waveform: Waveform, pitch: ExpCurve, envelope: Envelope, duration: f32) -> Self {
        Self {
            source: Source::Tone { waveform, pitch },
            filter: None,
            envelope,
            offset: 0.0,
            duration,
        }
    }

    pub const fn noise(envelope: Envelope, duration: f32) -> Self {
        Self {
            source: Source::Noise,
            filter: None,
            envelope,
            offset: 0.0,
            duration,
        }
    }

    /// Route the source through a lowpass with this cutoff curve.
    pub const fn with_lowpass(mut self, cutoff: ExpCurve) -> Self {
        self.filter = Some(cutoff);
        self
    }

    pub const fn delayed(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Starting pitch of a tone voice.
    pub fn frequency(&self) -> Option<f32> {
        match self.source {
            Source::Tone { pitch, .. } => Some(pitch.start_value()),
            Source::Noise => None,
        }
    }

    pub fn waveform(&self) -> Option<Waveform> {
        match self.source {
            Source::Tone { waveform, .. } => Some(waveform),
            Source::Noise => None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(AudioError::InvalidVoice("duration must be positive"));
        }
        if !(self.offset.is_finite() && self.offset >= 0.0) {
            return Err(AudioError::InvalidVoice("offset must not be negative"));
        }
        if !self.envelope.is_valid() {
            return Err(AudioError::InvalidVoice("envelope needs a positive peak and decay"));
        }
        if self.envelope.decay_time() > self.duration {
            return Err(AudioError::InvalidVoice("voice stops before its envelope decays"));
        }
        if let Source::Tone { pitch, .. } = self.source {
            if !pitch.is_valid() {
                return Err(AudioError::InvalidVoice("pitch must be finite and positive"));
            }
        }
        if let Some(cutoff) = self.filter {
            if !cutoff.is_valid() {
                return Err(AudioError::InvalidVoice("cutoff must be finite and positive"));
            }
        }
        Ok(())
    }

    /// Build the voice graph, starting `offset` seconds after `at`.
    pub fn realize<R: Rng>(&self, bus: Bus, at: f64, sample_rate: f32, rng: &mut R) -> Result<Voice> {
        self.validate()?;
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(AudioError::InvalidVoice("sample rate must be positive"));
        }

        let source: Box<dyn GraphNode> = match self.source {
            Source::Tone { waveform, pitch } => Box::new(OscNode::new(waveform, pitch)),
            Source::Noise => {
                let len = (self.duration * sample_rate).round() as usize;
                if len == 0 {
                    return Err(AudioError::InvalidVoice("noise burst shorter than one sample"));
                }
                Box::new(NoiseNode::new(NoiseBuffer::generate(len, rng)))
            }
        };

        let shaped: Box<dyn GraphNode> = match self.filter {
            Some(cutoff) => Box::new(source.through(FilterNode::lowpass(cutoff))),
            None => source,
        };

        let start = at + self.offset as f64;
        Ok(Voice {
            bus,
            start,
            stop: start + self.duration as f64,
            spec: *self,
            graph: Box::new(shaped.amplify(EnvNode::new(self.envelope))),
        })
    }
}

/// A realized, playing (or about to play) voice.
pub struct Voice {
    bus: Bus,
    start: f64,
    stop: f64,
    spec: VoiceSpec,
    graph: Box<dyn GraphNode>,
}

impl Voice {
    pub fn bus(&self) -> Bus {
        self.bus
    }

    /// Absolute start time on the audio clock.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Absolute stop time on the audio clock.
    pub fn stop(&self) -> f64 {
        self.stop
    }

    pub fn spec(&self) -> &VoiceSpec {
        &self.spec
    }

    /// Envelope level at absolute time `at`.
    pub fn envelope_at(&self, at: f64) -> f32 {
        self.spec.envelope.level_at((at - self.start).max(0.0) as f32)
    }

    /// True once the voice can no longer produce samples at or after `at`.
    pub fn is_finished(&self, at: f64) -> bool {
        at >= self.stop
    }

    /// Add this voice's samples for the block starting at `block_start`
    /// into `out`. `scratch` must be at least as long as `out`.
    pub fn render(&mut self, scratch: &mut [f32], out: &mut [f32], block_start: f64, sample_rate: f32) {
        let rate = sample_rate as f64;
        let frames = out.len();
        let block_end = block_start + frames as f64 / rate;
        if block_end <= self.start || block_start >= self.stop {
            return;
        }

        // Sample-accurate edges: first sample at or after start, last before stop
        let first = ((self.start - block_start) * rate).ceil().max(0.0) as usize;
        let last = (((self.stop - block_start) * rate).ceil().max(0.0) as usize).min(frames);
        if first >= last {
            return;
        }

        let ctx = RenderCtx::new(sample_rate, block_start + first as f64 / rate - self.start);
        let voice_samples = &mut scratch[..last - first];
        self.graph.render_block(voice_samples, &ctx);

        for (o, s) in out[first..last].iter_mut().zip(voice_samples.iter()) {
            *o += *s;
        }
    }
}

impl fmt::Debug for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Voice")
            .field("bus", &self.bus)
            .field("start", &self.start)
            .field("stop", &self.stop)
            .field("spec", &self.spec)
            .finish()
    }
}
