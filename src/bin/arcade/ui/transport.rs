//! Transport bar widget - shows sound state, tempo, clock, and audio stats

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::UiState;

/// Audio statistics for display
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    /// Compute audio stats from a buffer
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

pub fn render_transport(frame: &mut Frame, area: Rect, state: &UiState, stats: &AudioStats) {
    let block = Block::default().title(" arcade ").borders(Borders::ALL);

    let (sound, sound_color) = match (state.inert, state.enabled) {
        (true, _) => ("no audio device", Color::Red),
        (false, true) => ("sound on", Color::Green),
        (false, false) => ("sound off", Color::Yellow),
    };
    let music = if state.music_playing { "▶ music" } else { "⏸ music" };
    let cue = state.last_cue.map_or("-", |cue| cue.name());

    let line = Line::from(vec![
        Span::styled(format!(" {sound}  "), Style::default().fg(sound_color)),
        Span::styled(
            format!("{music}  "),
            Style::default().fg(if state.music_playing {
                Color::Green
            } else {
                Color::DarkGray
            }),
        ),
        Span::styled(
            format!("BPM: {:.0}  ", state.tempo),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("t={:.2}s  ", state.clock),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("last: {cue}  "), Style::default().fg(Color::White)),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}", stats.peak, stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
