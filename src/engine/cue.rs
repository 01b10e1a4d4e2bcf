/// Gameplay events that make a sound.
///
/// Hosts forward these to [`AudioEngine::cue`](crate::AudioEngine::cue)
/// instead of picking effects themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameCue {
    /// A new game begins: music starts
    GameStarted,
    CorrectAnswer,
    WrongAnswer,
    /// The answer timer expired
    TimeRanOut,
    LevelComplete,
    /// Continue from a completed level
    NextLevel,
    /// The run ended: music stops, effects already playing finish
    GameOver,
    /// Any menu button
    MenuClick,
}

impl GameCue {
    pub const ALL: [GameCue; 8] = [
        GameCue::GameStarted,
        GameCue::CorrectAnswer,
        GameCue::WrongAnswer,
        GameCue::TimeRanOut,
        GameCue::LevelComplete,
        GameCue::NextLevel,
        GameCue::GameOver,
        GameCue::MenuClick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GameCue::GameStarted => "game started",
            GameCue::CorrectAnswer => "correct answer",
            GameCue::WrongAnswer => "wrong answer",
            GameCue::TimeRanOut => "time ran out",
            GameCue::LevelComplete => "level complete",
            GameCue::NextLevel => "next level",
            GameCue::GameOver => "game over",
            GameCue::MenuClick => "menu click",
        }
    }
}
