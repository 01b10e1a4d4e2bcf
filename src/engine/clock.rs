use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Monotonic audio-domain time in seconds.
///
/// Every scheduled start and stop is expressed on this clock, never on wall
/// time.
pub trait Clock: Send {
    fn now(&self) -> f64;
}

/// Reads the frame count the mixer advances as it renders.
#[derive(Debug, Clone)]
pub struct StreamClock {
    frames: Arc<AtomicU64>,
    sample_rate: f64,
}

impl StreamClock {
    pub fn new(frames: Arc<AtomicU64>, sample_rate: f32) -> Self {
        Self {
            frames,
            sample_rate: sample_rate as f64,
        }
    }
}

impl Clock for StreamClock {
    fn now(&self) -> f64 {
        self.frames.load(Ordering::Acquire) as f64 / self.sample_rate
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    bits: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, seconds: f64) {
        self.bits.store(seconds.to_bits(), Ordering::Release);
    }

    pub fn advance(&self, seconds: f64) {
        self.set(self.now() + seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }
}

impl<C: Clock + Sync> Clock for Arc<C> {
    fn now(&self) -> f64 {
        (**self).now()
    }
}
