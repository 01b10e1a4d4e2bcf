//! The one bass pattern the game plays.

/// Steps in one loop of the pattern (one bar of sixteenths).
pub const STEPS: usize = 16;

/// Bass frequency per step in Hz. `0.0` is a rest.
///
/// A1 pulse with octave jumps, a flat-seventh pickup on step 6 and a
/// descending D2, C2 turnaround.
pub const BACKLINE: [f32; STEPS] = [
    55.0, 0.0, 55.0, 110.0, //
    55.0, 0.0, 82.0, 0.0, //
    55.0, 0.0, 55.0, 110.0, //
    55.0, 0.0, 73.0, 65.0,
];

/// Frequency at `step`, wrapping past the end of the pattern.
pub fn frequency_at(step: usize) -> f32 {
    BACKLINE[step % STEPS]
}

pub fn is_rest(step: usize) -> bool {
    frequency_at(step) == 0.0
}

/// A note committed by the sequencer, realized immediately as a pluck voice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledNote {
    pub step: usize,
    pub frequency: f32,
    /// Absolute start time on the audio clock
    pub time: f64,
}
