//! Sound board layout
//!
//! Transport bar on top, the backline step row, the output scope, and a
//! key legend.

mod steps;
mod transport;
mod waveform;

use arcade_synth::GameCue;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use steps::render_steps;
use transport::{render_transport, AudioStats};
use waveform::render_waveform;

use super::app::KEYMAP;

/// Engine state as of the last tick
#[derive(Debug, Clone, Copy)]
pub struct UiState {
    pub inert: bool,
    pub enabled: bool,
    pub music_playing: bool,
    pub current_step: usize,
    pub clock: f64,
    pub tempo: f64,
    pub pending_phrases: usize,
    pub last_cue: Option<GameCue>,
}

pub fn render(frame: &mut Frame, state: &UiState, audio_buffer: &[f32]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Transport bar
            Constraint::Length(4), // Steps
            Constraint::Min(6),    // Waveform
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    let stats = AudioStats::from_buffer(audio_buffer);
    render_transport(frame, chunks[0], state, &stats);
    render_steps(frame, chunks[1], state);
    render_waveform(frame, chunks[2], audio_buffer);

    let mut help = String::from(" [Space] Sound on/off");
    for (key, cue) in KEYMAP {
        help.push_str(&format!("  [{}] {}", key.to_ascii_uppercase(), cue.name()));
    }
    help.push_str("  [Q] Quit");
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}
