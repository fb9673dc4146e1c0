use std::time::Duration;

use ratatui::style::Color;
use thiserror::Error;

use crate::snake::Position;

/// Board width in distance units.
pub const DEFAULT_WIDTH: i32 = 600;

/// Board height in distance units.
pub const DEFAULT_HEIGHT: i32 = 400;

/// Grid quantum; every position and movement is a multiple of this.
pub const DEFAULT_CELL_SIZE: i32 = 10;

/// Target update rate of the game loop.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 15;

/// Score awarded per food eaten.
pub const DEFAULT_SCORE_INCREMENT: u32 = 10;

/// How long the final score stays on screen before the process exits.
pub const DEFAULT_GAME_OVER_DELAY: Duration = Duration::from_secs(2);

/// Upper half-block glyph; fg paints the upper cell, bg the lower one.
pub const GLYPH_HALF_UPPER: &str = "▀";

/// Board dimensions in distance units, fixed for the process lifetime.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    /// Number of grid columns for `cell_size`.
    #[must_use]
    pub fn columns(self, cell_size: i32) -> i32 {
        self.width / cell_size
    }

    /// Number of grid rows for `cell_size`.
    #[must_use]
    pub fn rows(self, cell_size: i32) -> i32 {
        self.height / cell_size
    }
}

/// Rejected game configuration.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be positive, got {0}")]
    CellSize(i32),
    #[error("bounds {width}x{height} are not a positive multiple of cell size {cell_size}")]
    Bounds {
        width: i32,
        height: i32,
        cell_size: i32,
    },
    #[error("tick rate must be at least one tick per second")]
    TickRate,
    #[error("starting snake does not fit on the board")]
    StartSnake,
}

/// Everything the game state machine needs to know about the board and rules.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub bounds: Bounds,
    pub cell_size: i32,
    pub ticks_per_second: u32,
    pub score_increment: u32,
    /// Head of the starting snake; the body trails to the left of it.
    pub start_head: Position,
    pub start_length: usize,
    pub game_over_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
            },
            cell_size: DEFAULT_CELL_SIZE,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            score_increment: DEFAULT_SCORE_INCREMENT,
            start_head: Position { x: 100, y: 50 },
            start_length: 3,
            game_over_delay: DEFAULT_GAME_OVER_DELAY,
        }
    }
}

impl GameConfig {
    /// Builds a validated configuration with the default rule constants.
    pub fn new(bounds: Bounds, cell_size: i32, ticks_per_second: u32) -> Result<Self, ConfigError> {
        let config = Self {
            bounds,
            cell_size,
            ticks_per_second,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that positions built from this configuration stay on the grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::CellSize(self.cell_size));
        }

        let Bounds { width, height } = self.bounds;
        if width < self.cell_size
            || height < self.cell_size
            || width % self.cell_size != 0
            || height % self.cell_size != 0
        {
            return Err(ConfigError::Bounds {
                width,
                height,
                cell_size: self.cell_size,
            });
        }

        if self.ticks_per_second == 0 {
            return Err(ConfigError::TickRate);
        }

        let on_board = |position: &Position| {
            position.is_on_grid(self.cell_size)
                && position.is_within_bounds(self.bounds, self.cell_size)
        };
        if self.start_length == 0 || !self.start_segments().iter().all(on_board) {
            return Err(ConfigError::StartSnake);
        }

        Ok(())
    }

    /// Starting snake, head first, extending one cell per segment to the left.
    #[must_use]
    pub fn start_segments(&self) -> Vec<Position> {
        (0..self.start_length)
            .map(|index| Position {
                x: self.start_head.x - self.cell_size * index as i32,
                y: self.start_head.y,
            })
            .collect()
    }

    /// Minimum time between two ticks.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}

/// Colors applied to every visual element.
#[derive(Debug)]
pub struct Theme {
    pub snake: Color,
    pub food: Color,
    pub field_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub game_over_text: Color,
}

/// Green snake, red food, white text on black.
pub const THEME_CLASSIC: Theme = Theme {
    snake: Color::Green,
    food: Color::Red,
    field_bg: Color::Black,
    border_fg: Color::White,
    hud_score: Color::White,
    game_over_text: Color::Red,
};
