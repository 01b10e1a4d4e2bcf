//! arcade - terminal sound board for the quiz game's audio engine
//!
//! Run with: cargo run --features device
//!
//! The terminal belongs to the UI, so logs go to the file named by
//! `ARCADE_LOG` (filtered by `RUST_LOG`), or nowhere.

mod app;
mod ui;

use std::{ffi::OsString, fs::File, io, sync::Mutex};

use app::App;
use arcade_synth::{io::CpalHost, AudioEngine, EngineConfig};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

/// Samples kept for the scope and meters
const TAP_CAPACITY: usize = 8_192;

fn log_writer(path: Option<OsString>) -> io::Result<BoxMakeWriter> {
    Ok(match path {
        Some(path) => BoxMakeWriter::new(Mutex::new(File::create(path)?)),
        None => BoxMakeWriter::new(io::sink),
    })
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_ansi(false)
        .with_writer(log_writer(std::env::var_os("ARCADE_LOG"))?)
        .init();

    let (tap_tx, tap_rx) = rtrb::RingBuffer::new(TAP_CAPACITY);
    let engine = AudioEngine::open(EngineConfig::default(), CpalHost::new().with_tap(tap_tx));

    let mut terminal = ratatui::init();
    let result = App::new(engine, tap_rx).run(&mut terminal);
    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logs_land_in_the_named_file() {
        let path = std::env::temp_dir().join(format!("arcade-log-{}.txt", std::process::id()));
        let writer = log_writer(Some(path.clone().into_os_string())).unwrap();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(writer)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("audio stream error: device unplugged");
        });

        let logged = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(logged.contains("device unplugged"));
    }
}
