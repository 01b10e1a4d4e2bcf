//! Error type shared by devices, hosts and voice realization.
//!
//! None of these reach the game layer: the engine logs and swallows them.

/// Errors raised below the trigger API
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    /// The host has no output device
    #[error("no audio output device available")]
    NoDevice,

    /// Stream creation, playback or pause failed
    #[error("audio stream error: {0}")]
    Stream(String),

    /// The device only offers sample formats the mixer cannot write
    #[error("unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// A voice descriptor cannot be realized
    #[error("invalid voice: {0}")]
    InvalidVoice(&'static str),

    /// The mixer queue has no room for another voice
    #[error("voice queue is full")]
    QueueFull,
}

/// Result type for audio operations
pub type Result<T> = std::result::Result<T, AudioError>;
