use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Failures at the process boundary. Gameplay itself never errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("invalid game configuration: {0}")]
    Config(#[from] ConfigError),
}
