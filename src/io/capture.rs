use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use parking_lot::Mutex;

use crate::{
    error::{AudioError, Result},
    io::output::OutputDevice,
    synth::{bus::Bus, voice::Voice, voice::VoiceSpec},
};

/// What a [`CaptureDevice`] saw of one submitted voice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapturedVoice {
    pub bus: Bus,
    pub start: f64,
    pub stop: f64,
    pub spec: VoiceSpec,
}

impl CapturedVoice {
    pub fn frequency(&self) -> Option<f32> {
        self.spec.frequency()
    }
}

impl From<&Voice> for CapturedVoice {
    fn from(voice: &Voice) -> Self {
        Self {
            bus: voice.bus(),
            start: voice.start(),
            stop: voice.stop(),
            spec: *voice.spec(),
        }
    }
}

/// Device that records voices instead of playing them.
///
/// Clones share one log, so a host can hand one clone to the engine and
/// inspect another.
#[derive(Debug, Clone)]
pub struct CaptureDevice {
    voices: Arc<Mutex<Vec<CapturedVoice>>>,
    suspended: Arc<AtomicBool>,
    rejecting: Arc<AtomicBool>,
    sample_rate: f32,
}

impl CaptureDevice {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            voices: Arc::new(Mutex::new(Vec::new())),
            suspended: Arc::new(AtomicBool::new(false)),
            rejecting: Arc::new(AtomicBool::new(false)),
            sample_rate,
        }
    }

    /// Start in the suspended state, as browsers and some hosts do until
    /// the first user gesture.
    pub fn suspended(self) -> Self {
        self.suspended.store(true, Ordering::Release);
        self
    }

    /// Make every submission fail as if the queue were full.
    pub fn reject_submissions(&self, reject: bool) {
        self.rejecting.store(reject, Ordering::Release);
    }

    pub fn voices(&self) -> Vec<CapturedVoice> {
        self.voices.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.voices.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return and forget everything captured so far.
    pub fn take(&self) -> Vec<CapturedVoice> {
        std::mem::take(&mut *self.voices.lock())
    }
}

impl OutputDevice for CaptureDevice {
    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn submit(&mut self, voice: Voice) -> Result<()> {
        if self.rejecting.load(Ordering::Acquire) {
            return Err(AudioError::QueueFull);
        }
        self.voices.lock().push(CapturedVoice::from(&voice));
        Ok(())
    }

    fn is_suspended(&self) -> bool {
        self.suspended.load(Ordering::Acquire)
    }

    fn suspend(&mut self) -> Result<()> {
        self.suspended.store(true, Ordering::Release);
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        self.suspended.store(false, Ordering::Release);
        Ok(())
    }
}
