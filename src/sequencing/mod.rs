//! Background music: one looping bass pattern and the scheduler that plays it.

pub mod backline;
pub mod lookahead;

pub use backline::{ScheduledNote, BACKLINE, STEPS};
pub use lookahead::{Lookahead, PollHandle};
