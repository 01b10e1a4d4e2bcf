//! Real-world scenario benchmarks.
//!
//! These model what the game actually plays: single catalog voices, and the
//! mixer under the busiest moment (music plus every effect at once).

mod mix;
mod voices;

pub use mix::bench_mix;
pub use voices::bench_voices;
