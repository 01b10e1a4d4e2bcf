//! Voices and where they go.
//!
//! `catalog` describes every sound as data, `voice` turns a description into
//! a renderable graph, and `mixer` sums live voices through the `bus` tree.

pub mod bus;
pub mod catalog;
pub mod mixer;
pub mod voice;

pub use bus::{Bus, BusLevels};
pub use catalog::{Effect, EffectSpec};
pub use mixer::Mixer;
pub use voice::{Voice, VoiceSpec};
