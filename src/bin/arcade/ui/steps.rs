//! Backline step row with playhead

use arcade_synth::sequencing::{BACKLINE, STEPS};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::UiState;

pub fn render_steps(frame: &mut Frame, area: Rect, state: &UiState) {
    let block = Block::default().title(" Backline ").borders(Borders::ALL);

    // The sequencer's current step is the next one to commit; the one
    // sounding now is a step or two behind.
    let playhead = state
        .music_playing
        .then(|| (state.current_step + STEPS - 1) % STEPS);

    let mut cells = Vec::with_capacity(STEPS);
    let mut labels = Vec::with_capacity(STEPS);
    for (step, &frequency) in BACKLINE.iter().enumerate() {
        let cell = if frequency == 0.0 { " · " } else { " ▓ " };
        let style = if playhead == Some(step) {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else if frequency == 0.0 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        };
        cells.push(Span::styled(cell, style));

        let label = if frequency == 0.0 {
            "   ".to_string()
        } else {
            format!("{:>3.0}", frequency)
        };
        labels.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
    }

    let text = vec![Line::from(cells), Line::from(labels)];
    frame.render_widget(Paragraph::new(text).block(block), area);
}
