use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{Bounds, ConfigError, GameConfig};
use crate::food::Food;
use crate::input::{direction_change_is_valid, Direction};
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    direction: Direction,
    pending_direction: Direction,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh session seeded from system entropy.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let snake = Snake::from_segments(config.start_segments()).ok_or(ConfigError::StartSnake)?;
        let food = Food::spawn(&mut rng, config.bounds, config.cell_size);

        Ok(Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            death_reason: None,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            config,
            rng,
        })
    }

    /// Queues a turn for the next tick unless it reverses the current heading.
    pub fn set_pending_direction(&mut self, requested: Direction) {
        if self.status != GameStatus::Running {
            return;
        }

        if direction_change_is_valid(self.direction, requested) {
            self.pending_direction = requested;
        }
    }

    /// Advances simulation by one tick and returns the resulting status.
    pub fn advance(&mut self) -> GameStatus {
        if self.status != GameStatus::Running {
            return self.status;
        }

        self.tick_count += 1;
        self.direction = self.pending_direction;

        let cell_size = self.config.cell_size;
        let head = self.snake.head().step(self.direction, cell_size);
        self.snake.push_head(head);

        if head.is_within_cell_of(self.food.position, cell_size) {
            self.score += self.config.score_increment;
            self.food.mark_eaten();
            debug!(
                "food eaten at ({}, {}), score {}, length {}",
                self.food.position.x,
                self.food.position.y,
                self.score,
                self.snake.len()
            );
        } else {
            self.snake.pop_tail();
        }

        if self.food.is_eaten() {
            self.food.respawn_if_eaten(&mut self.rng, self.config.bounds, cell_size);
            debug!(
                "food respawned at ({}, {})",
                self.food.position.x, self.food.position.y
            );
        }

        if let Some(reason) = self.collision() {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(reason);
            info!(
                "game over after {} ticks: {:?}, final score {}",
                self.tick_count, reason, self.score
            );
        }

        self.status
    }

    fn collision(&self) -> Option<DeathReason> {
        if !self
            .snake
            .head()
            .is_within_bounds(self.config.bounds, self.config.cell_size)
        {
            return Some(DeathReason::WallCollision);
        }

        if self.snake.head_overlaps_body() {
            return Some(DeathReason::SelfCollision);
        }

        None
    }

    /// Direction committed by the most recent tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction the next tick will commit.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.config.bounds
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replaces the snake and its heading, e.g. to stage a test scenario.
    pub fn set_snake(&mut self, snake: Snake, direction: Direction) {
        self.snake = snake;
        self.direction = direction;
        self.pending_direction = direction;
    }
}
