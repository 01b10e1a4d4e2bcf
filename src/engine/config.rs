#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::synth::bus::BusLevels;

/// Engine settings, fixed at construction.
///
/// ```ignore
/// let config = EngineConfig::default().tempo(140.0).noise_seed(7);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Backline tempo in beats per minute
    pub tempo: f64,
    /// Seconds between scheduling passes
    pub poll_interval: f64,
    /// How far ahead of the clock notes are committed, in seconds. Also the
    /// delay before the first note after starting.
    pub schedule_ahead: f64,
    /// A pass this far behind the schedule skips missed steps instead of
    /// committing them all at once
    pub stall_threshold: f64,
    pub levels: BusLevels,
    /// Most voices the mixer renders at once
    pub max_voices: usize,
    /// Capacity of the engine to mixer voice queue
    pub queue_capacity: usize,
    /// Seed for noise bursts. `None` seeds from the OS.
    pub noise_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tempo: 130.0,
            poll_interval: 0.025,
            schedule_ahead: 0.1,
            stall_threshold: 0.5,
            levels: BusLevels::default(),
            max_voices: 64,
            queue_capacity: 256,
            noise_seed: None,
        }
    }
}

impl EngineConfig {
    pub fn tempo(mut self, bpm: f64) -> Self {
        self.tempo = bpm;
        self
    }

    pub fn poll_interval(mut self, seconds: f64) -> Self {
        self.poll_interval = seconds;
        self
    }

    pub fn schedule_ahead(mut self, seconds: f64) -> Self {
        self.schedule_ahead = seconds;
        self
    }

    pub fn stall_threshold(mut self, seconds: f64) -> Self {
        self.stall_threshold = seconds;
        self
    }

    pub fn levels(mut self, levels: BusLevels) -> Self {
        self.levels = levels;
        self
    }

    pub fn max_voices(mut self, max_voices: usize) -> Self {
        self.max_voices = max_voices;
        self
    }

    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn noise_seed(mut self, seed: u64) -> Self {
        self.noise_seed = Some(seed);
        self
    }
}
