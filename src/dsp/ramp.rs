use crate::MIN_TIME;

/*
Exponential Ramps
=================

Pitch glides, filter sweeps and gain decays all move between positive values
along exponential segments. Between two points (t0, v0) and (t1, v1):

    v(t) = v0 * (v1 / v0) ^ ((t - t0) / (t1 - t0))

Before the first point the curve holds v0; after the last point it holds the
final value. Equal ratios take equal time, so a sweep of 200 -> 1000 Hz
spends as long on each octave, which is how the ear hears pitch and
loudness.

Exponential segments cannot cross or touch zero, so every value must be
strictly positive. Gain decays therefore aim at a small floor (0.01) instead
of silence.

  Cutoff
   1000 ┤    ╱╲
        │   ╱   ╲_
        │  ╱      ‾‾╲__
    200 ┤─╯            ‾‾──────
        └──┬──────────┬──────→ t
          0.05       0.2
*/

/// Maximum number of breakpoints in one curve.
pub const MAX_POINTS: usize = 3;

/// Piecewise exponential curve over voice-local time (seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpCurve {
    points: [(f32, f32); MAX_POINTS],
    len: usize,
}

impl ExpCurve {
    /// A value that never moves.
    pub const fn constant(value: f32) -> Self {
        Self {
            points: [(0.0, value); MAX_POINTS],
            len: 1,
        }
    }

    /// `from` at time zero, reaching `to` at `time` and holding it.
    pub const fn ramp(from: f32, to: f32, time: f32) -> Self {
        Self {
            points: [(0.0, from), (time, to), (time, to)],
            len: 2,
        }
    }

    /// Out to `peak` at `peak_time`, then back to `to` at `end_time`.
    pub const fn sweep(from: f32, peak: f32, peak_time: f32, to: f32, end_time: f32) -> Self {
        Self {
            points: [(0.0, from), (peak_time, peak), (end_time, to)],
            len: 3,
        }
    }

    pub fn start_value(&self) -> f32 {
        self.points[0].1
    }

    pub fn end_value(&self) -> f32 {
        self.points[self.len - 1].1
    }

    /// Values must be finite and positive, times must not run backwards.
    pub fn is_valid(&self) -> bool {
        let points = &self.points[..self.len];
        points
            .iter()
            .all(|&(t, v)| t.is_finite() && t >= 0.0 && v.is_finite() && v > 0.0)
            && points.windows(2).all(|pair| pair[1].0 >= pair[0].0)
    }

    /// Evaluate the curve at `t` seconds after its origin.
    pub fn value_at(&self, t: f32) -> f32 {
        let points = &self.points[..self.len];
        let (first_time, first_value) = points[0];
        if t <= first_time {
            return first_value;
        }

        for pair in points.windows(2) {
            let (t0, v0) = pair[0];
            let (t1, v1) = pair[1];
            if t < t1 {
                let span = (t1 - t0).max(MIN_TIME);
                let progress = (t - t0) / span;
                return v0 * (v1 / v0).powf(progress);
            }
        }

        // Past the last breakpoint: hold exactly, so floors are hit exactly
        self.end_value()
    }
}
