//! Lookahead scheduler for the backline
//!
//! The host's timer is coarse and jittery; the audio clock is not. Each pass
//! commits every note whose start falls inside the next `window` seconds,
//! stamped with its exact time on the audio clock, so timer jitter never
//! reaches the rhythm:
//!
//! ```text
//!  now                 now + window
//!   │◄──── committed ────►│
//!   ├───┬───┬───┬───┬───┬─┼─┬───┬───
//!   0   1   2   3   4   5 │ 6   7      steps, one sixteenth apart
//!                         └ next pass picks up from here
//! ```
//!
//! Passes run on [`Lookahead::tick`], at most once per poll interval.

use tracing::debug;

use crate::{
    engine::config::EngineConfig,
    sequencing::backline::{frequency_at, is_rest, ScheduledNote, STEPS},
};

/// The armed poll: when the next scheduling pass is allowed to run.
///
/// `id` changes every time the sequencer starts, so a handle taken before a
/// stop never matches one taken after the restart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollHandle {
    id: u64,
    due: f64,
}

impl PollHandle {
    /// Clock time at or after which the next pass runs.
    pub fn due(&self) -> f64 {
        self.due
    }
}

#[derive(Debug, Clone, Copy)]
struct Running {
    current_step: usize,
    next_note_time: f64,
    poll: PollHandle,
}

/// Stopped/running state machine over the backline pattern.
#[derive(Debug, Clone)]
pub struct Lookahead {
    step_duration: f64,
    window: f64,
    poll_interval: f64,
    stall_threshold: f64,
    starts: u64,
    running: Option<Running>,
}

impl Lookahead {
    pub fn new(config: &EngineConfig) -> Self {
        let tempo = config.tempo.max(1.0);
        Self {
            // One sixteenth note
            step_duration: 60.0 / tempo / 4.0,
            window: config.schedule_ahead.max(0.0),
            poll_interval: config.poll_interval.max(0.001),
            stall_threshold: config.stall_threshold.max(0.0),
            starts: 0,
            running: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn step_duration(&self) -> f64 {
        self.step_duration
    }

    pub fn poll_interval(&self) -> f64 {
        self.poll_interval
    }

    pub fn poll_handle(&self) -> Option<PollHandle> {
        self.running.map(|r| r.poll)
    }

    /// Next step to commit, in `[0, 16)`. Zero while stopped.
    pub fn current_step(&self) -> usize {
        self.running.map_or(0, |r| r.current_step)
    }

    pub fn next_note_time(&self) -> Option<f64> {
        self.running.map(|r| r.next_note_time)
    }

    /// Start from step 0, first note one window after `now`, and run the
    /// first pass right away. Returns `false` (and does nothing) if already
    /// running.
    pub fn start(&mut self, now: f64, out: &mut Vec<ScheduledNote>) -> bool {
        if self.running.is_some() {
            return false;
        }

        self.starts += 1;
        self.running = Some(Running {
            current_step: 0,
            next_note_time: now + self.window,
            poll: PollHandle {
                id: self.starts,
                due: now,
            },
        });
        debug!(now, step_duration = self.step_duration, "sequencer started");

        self.tick(now, out);
        true
    }

    /// Disarm the poll. Notes already committed are left to play out.
    /// Returns `false` if already stopped.
    pub fn stop(&mut self) -> bool {
        match self.running.take() {
            Some(running) => {
                debug!(step = running.current_step, "sequencer stopped");
                true
            }
            None => false,
        }
    }

    /// Run a scheduling pass if the poll is due, appending committed notes
    /// to `out`. Returns whether a pass ran.
    pub fn tick(&mut self, now: f64, out: &mut Vec<ScheduledNote>) -> bool {
        let step = self.step_duration;
        let horizon = now + self.window;
        let stall_threshold = self.stall_threshold;
        let poll_interval = self.poll_interval;

        let Some(running) = self.running.as_mut() else {
            return false;
        };
        if now < running.poll.due {
            return false;
        }

        let late = now - running.next_note_time;
        if late > stall_threshold {
            let skipped = (late / step).ceil() as usize;
            running.current_step = (running.current_step + skipped) % STEPS;
            running.next_note_time += skipped as f64 * step;
            debug!(skipped, late, "clock jumped past the schedule, skipping missed steps");
        }

        while running.next_note_time < horizon {
            if !is_rest(running.current_step) {
                out.push(ScheduledNote {
                    step: running.current_step,
                    frequency: frequency_at(running.current_step),
                    time: running.next_note_time,
                });
            }
            running.current_step = (running.current_step + 1) % STEPS;
            running.next_note_time += step;
        }

        running.poll.due = now + poll_interval;
        true
    }
}
