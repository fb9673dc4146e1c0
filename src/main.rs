use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use grid_snake::clock::FrameClock;
use grid_snake::config::{GameConfig, THEME_CLASSIC};
use grid_snake::error::AppError;
use grid_snake::game::{GameState, GameStatus};
use grid_snake::input::{self, GameInput};
use grid_snake::logging;
use grid_snake::renderer;
use grid_snake::terminal_runtime::TerminalSession;
use log::{error, info};

/// Classic Snake: arrows/WASD to steer, q or Esc to quit.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Write a log file to this path.
    #[arg(long = "log", value_name = "FILE")]
    log: Option<PathBuf>,

    /// Include per-tick debug events in the log.
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match logging::init(cli.log.as_deref(), cli.verbose).and_then(|()| run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("grid-snake: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = GameConfig::default();
    let mut state = GameState::new(config)?;

    let mut session = TerminalSession::enter()?;
    let mut clock = FrameClock::new(config.tick_interval());
    info!(
        "starting {}x{} board, cell {}, {} ticks/s",
        config.bounds.width, config.bounds.height, config.cell_size, config.ticks_per_second
    );

    loop {
        for game_input in input::poll_inputs()? {
            match game_input {
                GameInput::Quit => {
                    info!("quit after {} ticks, score {}", state.tick_count, state.score);
                    return Ok(());
                }
                GameInput::Direction(direction) => state.set_pending_direction(direction),
            }
        }

        let status = state.advance();
        session.draw(|frame| renderer::render(frame, &state, &THEME_CLASSIC))?;

        if status == GameStatus::GameOver {
            if input::wait_for_quit(config.game_over_delay)? {
                info!("game over screen dismissed");
            }
            return Ok(());
        }

        clock.wait();
    }
}
