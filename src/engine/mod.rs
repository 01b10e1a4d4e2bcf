//! The engine the game talks to.
//!
//! [`AudioEngine`] owns the lifecycle (enabled, music playing), the lookahead
//! sequencer and the path from effect descriptors to the output device. All
//! of its methods are fire-and-forget: failures below this layer are logged
//! and swallowed, and an engine whose output never opened ignores every call.

pub mod clock;
pub mod config;
pub mod cue;

use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, warn};

pub use clock::{Clock, ManualClock, StreamClock};
pub use config::EngineConfig;
pub use cue::GameCue;

use crate::{
    io::output::{AudioHost, OpenedOutput, OutputDevice},
    sequencing::{backline::ScheduledNote, lookahead::Lookahead},
    synth::{
        bus::Bus,
        catalog::{pluck, Effect},
        voice::VoiceSpec,
    },
};

struct Backend {
    clock: Box<dyn Clock>,
    device: Box<dyn OutputDevice>,
}

impl Backend {
    /// Realize `spec` at `at` and hand it to the device.
    fn commit(&mut self, rng: &mut StdRng, spec: &VoiceSpec, bus: Bus, at: f64) {
        let voice = match spec.realize(bus, at, self.device.sample_rate(), rng) {
            Ok(voice) => voice,
            Err(err) => {
                debug!(%err, bus = bus.name(), "voice skipped");
                return;
            }
        };
        if let Err(err) = self.device.submit(voice) {
            warn!(%err, bus = bus.name(), "voice dropped");
        }
    }
}

/// A phrase waiting for its start time to come inside the lookahead window.
#[derive(Debug, Clone, Copy)]
struct PendingPhrase {
    effect: Effect,
    due: f64,
    voices: &'static [VoiceSpec],
}

pub struct AudioEngine {
    config: EngineConfig,
    backend: Option<Backend>,
    enabled: bool,
    sequencer: Lookahead,
    pending: Vec<PendingPhrase>,
    notes: Vec<ScheduledNote>,
    rng: StdRng,
}

impl AudioEngine {
    /// Engine over an already opened clock and device. Starts enabled, with
    /// the music stopped.
    pub fn new(
        config: EngineConfig,
        clock: impl Clock + 'static,
        device: impl OutputDevice + 'static,
    ) -> Self {
        let backend = Backend {
            clock: Box::new(clock),
            device: Box::new(device),
        };
        Self::build(config, Some(backend))
    }

    /// Engine with no output. Every call is a no-op.
    pub fn inert(config: EngineConfig) -> Self {
        Self::build(config, None)
    }

    /// Open the host's output. If that fails the engine is inert for the
    /// rest of its life and the failure is logged once, here.
    pub fn open<H: AudioHost>(config: EngineConfig, host: H) -> Self {
        match host.open(&config) {
            Ok(OpenedOutput { clock, device }) => Self::build(config, Some(Backend { clock, device })),
            Err(err) => {
                warn!(%err, "audio output unavailable, continuing without sound");
                Self::build(config, None)
            }
        }
    }

    fn build(config: EngineConfig, backend: Option<Backend>) -> Self {
        let rng = match config.noise_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            sequencer: Lookahead::new(&config),
            config,
            backend,
            enabled: true,
            pending: Vec::new(),
            notes: Vec::with_capacity(8),
            rng,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// True when no output device could be opened.
    pub fn is_inert(&self) -> bool {
        self.backend.is_none()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_music_playing(&self) -> bool {
        self.sequencer.is_running()
    }

    /// Next backline step to be committed, in `[0, 16)`.
    pub fn current_step(&self) -> usize {
        self.sequencer.current_step()
    }

    /// Start time of the next backline step, while the music is playing.
    pub fn next_note_time(&self) -> Option<f64> {
        self.sequencer.next_note_time()
    }

    /// How often the host should call [`tick`](Self::tick).
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs_f64(self.sequencer.poll_interval())
    }

    /// Current audio clock time, `None` when inert.
    pub fn now(&self) -> Option<f64> {
        self.backend.as_ref().map(|b| b.clock.now())
    }

    /// Deferred phrases not yet committed.
    pub fn pending_phrases(&self) -> usize {
        self.pending.len()
    }

    /// Turn sound on or off.
    ///
    /// Enabling resumes a suspended device, then starts the music. Disabling
    /// stops the music; voices already playing are left to finish.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        debug!(enabled, "sound toggled");

        if enabled {
            if backend.device.is_suspended() {
                if let Err(err) = backend.device.resume() {
                    warn!(%err, "failed to resume audio output");
                }
            }
            self.start_music();
        } else {
            self.stop_music();
        }
    }

    /// Start the backline from step 0. No-op if disabled or already playing.
    pub fn start_music(&mut self) {
        if !self.enabled {
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };

        let now = backend.clock.now();
        let mut notes = std::mem::take(&mut self.notes);
        if self.sequencer.start(now, &mut notes) {
            for note in notes.drain(..) {
                backend.commit(&mut self.rng, &pluck(note.frequency), Bus::Music, note.time);
            }
        }
        self.notes = notes;
    }

    /// Stop scheduling new notes. Notes already committed play out.
    pub fn stop_music(&mut self) {
        if self.backend.is_none() {
            return;
        }
        self.sequencer.stop();
    }

    /// Trigger a catalog effect on the sfx bus.
    pub fn play(&mut self, effect: Effect) {
        if !self.enabled {
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };

        let now = backend.clock.now();
        let spec = effect.spec();
        debug!(effect = effect.name(), voices = spec.voice_count(), "effect triggered");
        for voice in spec.immediate {
            backend.commit(&mut self.rng, voice, Bus::Sfx, now);
        }
        if let Some(deferred) = spec.deferred {
            self.pending.push(PendingPhrase {
                effect,
                due: now + deferred.after as f64,
                voices: deferred.voices,
            });
        }
    }

    pub fn play_click(&mut self) {
        self.play(Effect::Click);
    }

    pub fn play_sword_attack(&mut self) {
        self.play(Effect::SwordAttack);
    }

    pub fn play_damage(&mut self) {
        self.play(Effect::Damage);
    }

    pub fn play_error(&mut self) {
        self.play(Effect::Error);
    }

    pub fn play_victory_jingle(&mut self) {
        self.play(Effect::VictoryJingle);
    }

    /// React to a gameplay event.
    pub fn cue(&mut self, cue: GameCue) {
        match cue {
            GameCue::GameStarted => {
                self.start_music();
                self.play_click();
            }
            GameCue::CorrectAnswer => self.play_sword_attack(),
            GameCue::WrongAnswer => {
                self.play_damage();
                self.play_error();
            }
            GameCue::TimeRanOut => self.play_error(),
            GameCue::LevelComplete => self.play_victory_jingle(),
            GameCue::NextLevel | GameCue::MenuClick => self.play_click(),
            GameCue::GameOver => self.stop_music(),
        }
    }

    /// Advance scheduled work: free voices the device is done with, commit
    /// deferred phrases whose start is inside the lookahead window, then run
    /// a sequencer pass if its poll is due.
    ///
    /// Call about every [`poll_interval`](Self::poll_interval).
    pub fn tick(&mut self) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        backend.device.reclaim();
        let now = backend.clock.now();
        let horizon = now + self.config.schedule_ahead;

        let enabled = self.enabled;
        let rng = &mut self.rng;
        self.pending.retain(|phrase| {
            if phrase.due > horizon {
                return true;
            }
            if enabled {
                let at = phrase.due.max(now);
                for voice in phrase.voices {
                    backend.commit(rng, voice, Bus::Sfx, at);
                }
            } else {
                debug!(effect = phrase.effect.name(), "deferred phrase dropped while disabled");
            }
            false
        });

        let mut notes = std::mem::take(&mut self.notes);
        if self.sequencer.tick(now, &mut notes) {
            for note in notes.drain(..) {
                backend.commit(&mut self.rng, &pluck(note.frequency), Bus::Music, note.time);
            }
        }
        self.notes = notes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::capture::CaptureDevice;

    fn engine() -> (AudioEngine, ManualClock, CaptureDevice) {
        let clock = ManualClock::new();
        let device = CaptureDevice::new(48_000.0);
        let engine = AudioEngine::new(
            EngineConfig::default().noise_seed(1),
            clock.clone(),
            device.clone(),
        );
        (engine, clock, device)
    }

    #[test]
    fn starts_enabled_and_silent() {
        let (engine, _, device) = engine();
        assert!(engine.is_enabled());
        assert!(!engine.is_music_playing());
        assert!(!engine.is_inert());
        assert!(device.is_empty());
    }

    #[test]
    fn deferred_phrase_waits_for_the_window() {
        let (mut engine, clock, device) = engine();
        engine.play_victory_jingle();
        assert_eq!(engine.pending_phrases(), 1);

        // due 0.3, window 0.1
        clock.set(0.15);
        engine.tick();
        assert_eq!(engine.pending_phrases(), 1);

        clock.set(0.25);
        engine.tick();
        assert_eq!(engine.pending_phrases(), 0);

        let chord: Vec<_> = device.voices().into_iter().skip(4).collect();
        assert_eq!(chord.len(), 2);
        assert!(chord.iter().all(|v| (v.start - 0.3).abs() < 1e-6));
    }

    #[test]
    fn late_deferred_phrase_starts_now() {
        let (mut engine, clock, device) = engine();
        engine.play_victory_jingle();
        clock.set(1.0);
        engine.tick();
        let chord: Vec<_> = device.voices().into_iter().skip(4).collect();
        assert!(chord.iter().all(|v| v.start == 1.0));
    }

    #[test]
    fn inert_engine_still_tracks_the_toggle() {
        let mut engine = AudioEngine::inert(EngineConfig::default());
        engine.set_enabled(false);
        assert!(!engine.is_enabled());
        engine.set_enabled(true);
        assert!(engine.is_enabled());
        assert!(!engine.is_music_playing());
    }

    #[test]
    fn poll_interval_comes_from_config() {
        let (engine, _, _) = engine();
        assert_eq!(engine.poll_interval(), Duration::from_millis(25));
    }
}
