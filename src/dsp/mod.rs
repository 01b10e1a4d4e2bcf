//! Low-level DSP primitives used by the graph nodes.
//!
//! Everything here works per sample and is allocation-free once built, so the
//! pieces can live inside voices rendered on the audio thread. Curves are
//! evaluated from voice-local time rather than stepped state, which keeps a
//! voice's shape fully determined at the moment it is created.

/// Exponential decay envelope.
pub mod envelope;
/// Topology-preserving state-variable lowpass.
pub mod filter;
/// White-noise buffers.
pub mod noise;
/// Phase-accumulator oscillators.
pub mod oscillator;
/// Piecewise exponential ramps (pitch glides, cutoff sweeps).
pub mod ramp;

pub use envelope::Envelope;
pub use oscillator::Waveform;
pub use ramp::ExpCurve;
