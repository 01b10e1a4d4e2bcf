//! Procedural audio for an arcade quiz game.
//!
//! Every sound is synthesized: a three-bus mixer, a lookahead sequencer that
//! loops one bass pattern, and a fixed catalog of one-shot effects. The game
//! layer only talks to [`AudioEngine`].

pub mod dsp; // Oscillators, noise, filter, exponential ramps
pub mod engine; // Lifecycle, clocks, configuration
pub mod error;
pub mod graph; // Composable render nodes
pub mod io; // Output devices and hosts
pub mod sequencing; // Backline pattern and lookahead scheduler
pub mod synth; // Buses, voices, catalog, mixer

pub use engine::{cue::GameCue, AudioEngine, EngineConfig};
pub use error::{AudioError, Result};
pub use synth::{bus::Bus, catalog::Effect};

pub const MAX_BLOCK_SIZE: usize = 2048;

/// Level every envelope decays to. Exponential ramps never reach zero.
pub const SILENCE_FLOOR: f32 = 0.01;

pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
