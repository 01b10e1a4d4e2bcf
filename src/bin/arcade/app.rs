//! Key handling and the tick loop

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use rtrb::Consumer;

use arcade_synth::{AudioEngine, GameCue};

use super::ui::{self, UiState};

/// Audio visualization buffer size
const VIS_BUFFER_SIZE: usize = 1024;

/// Keys and the gameplay events they stand in for
pub const KEYMAP: [(char, GameCue); 8] = [
    ('s', GameCue::GameStarted),
    ('c', GameCue::CorrectAnswer),
    ('w', GameCue::WrongAnswer),
    ('t', GameCue::TimeRanOut),
    ('l', GameCue::LevelComplete),
    ('n', GameCue::NextLevel),
    ('g', GameCue::GameOver),
    ('m', GameCue::MenuClick),
];

pub struct App {
    engine: AudioEngine,
    audio_rx: Consumer<f32>,
    audio_buffer: Vec<f32>,
    last_cue: Option<GameCue>,
    should_quit: bool,
}

impl App {
    pub fn new(engine: AudioEngine, audio_rx: Consumer<f32>) -> Self {
        Self {
            engine,
            audio_rx,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            last_cue: None,
            should_quit: false,
        }
    }

    /// Tick the engine, draw, and wait up to one poll interval for a key.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        let poll = self.engine.poll_interval();

        while !self.should_quit {
            self.engine.tick();
            self.poll_audio();

            let state = self.snapshot();
            terminal.draw(|frame| ui::render(frame, &state, &self.audio_buffer))?;

            if event::poll(poll)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn poll_audio(&mut self) {
        while let Ok(sample) = self.audio_rx.pop() {
            self.audio_buffer.push(sample);
        }
        if self.audio_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
            self.audio_buffer.drain(0..excess);
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => {
                let enabled = !self.engine.is_enabled();
                self.engine.set_enabled(enabled);
            }
            KeyCode::Enter => self.send(GameCue::MenuClick),
            KeyCode::Char(c) => {
                let c = c.to_ascii_lowercase();
                if let Some(&(_, cue)) = KEYMAP.iter().find(|(key, _)| *key == c) {
                    self.send(cue);
                }
            }
            _ => {}
        }
    }

    fn send(&mut self, cue: GameCue) {
        self.engine.cue(cue);
        self.last_cue = Some(cue);
    }

    fn snapshot(&self) -> UiState {
        UiState {
            inert: self.engine.is_inert(),
            enabled: self.engine.is_enabled(),
            music_playing: self.engine.is_music_playing(),
            current_step: self.engine.current_step(),
            clock: self.engine.now().unwrap_or(0.0),
            tempo: self.engine.config().tempo,
            pending_phrases: self.engine.pending_phrases(),
            last_cue: self.last_cue,
        }
    }
}
