use std::path::PathBuf;

/// Errors raised outside the simulation core: terminal I/O, missing
/// glyphs, and log setup.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A sprite was drawn that was never loaded.
    #[error("sprite not loaded: {0}")]
    MissingSprite(&'static str),

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("logger already initialised: {0}")]
    Logger(#[from] log::SetLoggerError),
}
