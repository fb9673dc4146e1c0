use std::fs::File;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::AppError;

/// Installs a file logger when `path` is given.
///
/// The terminal is in raw mode on the alternate screen while the game runs,
/// so nothing is ever logged to stdout or stderr.
pub fn init(path: Option<&Path>, verbose: bool) -> Result<(), AppError> {
    let Some(path) = path else {
        return Ok(());
    };

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, Config::default(), File::create(path)?)?;

    Ok(())
}
