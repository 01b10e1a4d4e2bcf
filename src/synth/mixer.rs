use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};

use rtrb::{Consumer, Producer, RingBuffer};

use crate::{
    engine::{clock::StreamClock, config::EngineConfig},
    io::output::MixerHandle,
    synth::{
        bus::{Bus, BusLevels},
        voice::Voice,
    },
    MAX_BLOCK_SIZE,
};

/// Render side of the engine: owns every live voice and sums the three buses.
///
/// Lives in the audio callback. Voices arrive through a ring buffer from the
/// paired [`MixerHandle`]; the frame counter it advances is the audio clock.
/// Finished and rejected voices go back through a second ring so their
/// memory is freed on the handle's thread, never during `render`.
pub struct Mixer {
    voices: Vec<Voice>,
    max_voices: usize,
    rx: Consumer<Voice>,
    retired: Producer<Voice>,
    buses: [Vec<f32>; 3],
    scratch: Vec<f32>,
    levels: BusLevels,
    sample_rate: f32,
    frames: Arc<AtomicU64>,
    suspended: Arc<AtomicBool>,
    dropped: u64,
    tap: Option<Producer<f32>>,
}

impl Mixer {
    pub fn new(config: &EngineConfig, sample_rate: f32) -> (Self, MixerHandle) {
        let queue_capacity = config.queue_capacity.max(1);
        let (tx, rx) = RingBuffer::new(queue_capacity);
        // Room for every voice that can be queued or playing at once, plus the
        // one a submit pushes right after reclaiming
        let (retired, reclaimed) = RingBuffer::new(queue_capacity + config.max_voices + 1);
        let suspended = Arc::new(AtomicBool::new(false));
        let frames = Arc::new(AtomicU64::new(0));

        let mixer = Self {
            voices: Vec::with_capacity(config.max_voices),
            max_voices: config.max_voices,
            rx,
            retired,
            buses: std::array::from_fn(|_| vec![0.0; MAX_BLOCK_SIZE]),
            scratch: vec![0.0; MAX_BLOCK_SIZE],
            levels: config.levels,
            sample_rate,
            frames,
            suspended: suspended.clone(),
            dropped: 0,
            tap: None,
        };
        let handle = MixerHandle::new(tx, reclaimed, suspended, sample_rate);
        (mixer, handle)
    }

    /// Copy every mixed sample into `tap` as well (for meters and scopes).
    /// Samples that do not fit are discarded.
    pub fn with_tap(mut self, tap: Producer<f32>) -> Self {
        self.tap = Some(tap);
        self
    }

    /// Clock that reads this mixer's rendered frame count.
    pub fn clock(&self) -> StreamClock {
        StreamClock::new(self.frames.clone(), self.sample_rate)
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Voices rejected because the pool was full.
    pub fn dropped_voices(&self) -> u64 {
        self.dropped
    }

    /// Render mono output. Silence, without advancing the clock, while suspended.
    pub fn render(&mut self, out: &mut [f32]) {
        if self.suspended.load(Ordering::Acquire) {
            out.fill(0.0);
            return;
        }
        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            self.render_block(chunk);
        }
    }

    /// Render into an interleaved device buffer, copying the mono mix to
    /// every channel.
    pub fn render_interleaved(&mut self, data: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        let mut block = [0.0f32; MAX_BLOCK_SIZE];

        for frames in data.chunks_mut(MAX_BLOCK_SIZE * channels) {
            let len = frames.len() / channels;
            self.render(&mut block[..len]);
            for (frame, &s) in frames.chunks_mut(channels).zip(block.iter()) {
                frame.fill(s);
            }
        }
    }

    fn accept_voices(&mut self) {
        while let Ok(voice) = self.rx.pop() {
            if self.voices.len() < self.max_voices {
                self.voices.push(voice);
            } else {
                self.dropped += 1;
                retire(&mut self.retired, voice);
            }
        }
    }

    fn render_block(&mut self, out: &mut [f32]) {
        self.accept_voices();

        let len = out.len();
        let rate = self.sample_rate as f64;
        let block_start = self.frames.load(Ordering::Acquire) as f64 / rate;
        let block_end = block_start + len as f64 / rate;

        for bus in &mut self.buses {
            bus[..len].fill(0.0);
        }
        for voice in &mut self.voices {
            let bus = &mut self.buses[voice.bus().index()][..len];
            voice.render(&mut self.scratch[..len], bus, block_start, self.sample_rate);
        }

        let gains = Bus::ALL.map(|bus| self.levels.gain_to_output(bus));
        let [master, music, sfx] = &self.buses;
        for (i, o) in out.iter_mut().enumerate() {
            *o = gains[0] * master[i] + gains[1] * music[i] + gains[2] * sfx[i];
        }

        if let Some(tap) = &mut self.tap {
            for &s in out.iter() {
                if tap.push(s).is_err() {
                    break;
                }
            }
        }

        self.frames.fetch_add(len as u64, Ordering::Release);

        // Compact the live voices to the front, keeping their order
        let mut live = 0;
        for i in 0..self.voices.len() {
            if !self.voices[i].is_finished(block_end) {
                self.voices.swap(live, i);
                live += 1;
            }
        }
        for voice in self.voices.drain(live..) {
            retire(&mut self.retired, voice);
        }
    }
}

/// Hand a voice back to the engine side to be freed there.
fn retire(retired: &mut Producer<Voice>, voice: Voice) {
    // Only full if the handle never reclaims; the voice is freed here then
    let _ = retired.push(voice);
}
