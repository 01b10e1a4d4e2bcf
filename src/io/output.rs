use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use rtrb::{Consumer, Producer};

use crate::{
    engine::{clock::Clock, config::EngineConfig},
    error::{AudioError, Result},
    synth::voice::Voice,
};

/// Where realized voices go.
///
/// A device plays each submitted voice from its start time to its stop time
/// on the engine's clock. Suspending pauses playback and the clock together.
pub trait OutputDevice {
    fn sample_rate(&self) -> f32;

    fn submit(&mut self, voice: Voice) -> Result<()>;

    fn is_suspended(&self) -> bool;

    fn suspend(&mut self) -> Result<()>;

    fn resume(&mut self) -> Result<()>;

    /// Free voices the device has finished with. Returns how many.
    fn reclaim(&mut self) -> usize {
        0
    }
}

/// A clock and the device it measures, opened together.
pub struct OpenedOutput {
    pub clock: Box<dyn Clock>,
    pub device: Box<dyn OutputDevice>,
}

/// Something that can open the platform's audio output.
pub trait AudioHost {
    fn open(self, config: &EngineConfig) -> Result<OpenedOutput>;
}

/// Engine side of a [`Mixer`](crate::synth::mixer::Mixer): pushes voices
/// into its queue, frees the ones it hands back and flips its suspended flag.
pub struct MixerHandle {
    tx: Producer<Voice>,
    reclaimed: Consumer<Voice>,
    suspended: Arc<AtomicBool>,
    sample_rate: f32,
}

impl MixerHandle {
    pub(crate) fn new(
        tx: Producer<Voice>,
        reclaimed: Consumer<Voice>,
        suspended: Arc<AtomicBool>,
        sample_rate: f32,
    ) -> Self {
        Self {
            tx,
            reclaimed,
            suspended,
            sample_rate,
        }
    }
}

impl OutputDevice for MixerHandle {
    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn submit(&mut self, voice: Voice) -> Result<()> {
        // Keeps the mixer's return ring from filling up
        self.reclaim();
        self.tx.push(voice).map_err(|_| AudioError::QueueFull)
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

    fn reclaim(&mut self) -> usize {
        let mut freed = 0;
        while self.reclaimed.pop().is_ok() {
            freed += 1;
        }
        freed
    }
}
