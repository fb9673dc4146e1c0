use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit offset in grid cells; y grows downwards.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Maps one key event to a game input, ignoring keys the game does not use.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(GameInput::Quit),
            _ => None,
        };
    }

    let direction = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Direction::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Direction::Down,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Direction::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Direction::Right,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return Some(GameInput::Quit),
        _ => return None,
    };

    Some(GameInput::Direction(direction))
}

/// Drains every pending terminal event without blocking.
pub fn poll_inputs() -> io::Result<Vec<GameInput>> {
    let mut inputs = Vec::new();

    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            inputs.extend(map_key_event(key));
        }
    }

    Ok(inputs)
}

/// Blocks for up to `timeout`, returning `true` as soon as a quit key arrives.
pub fn wait_for_quit(timeout: Duration) -> io::Result<bool> {
    let deadline = Instant::now() + timeout;

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() || !event::poll(remaining)? {
            return Ok(false);
        }

        if let Event::Key(key) = event::read()? {
            if map_key_event(key) == Some(GameInput::Quit) {
                return Ok(true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::{direction_change_is_valid, map_key_event, Direction, GameInput};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn opposite_offsets_cancel_out() {
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let (dx, dy) = direction.offset();
            let (ox, oy) = direction.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn direction_change_rejects_reverse() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Left, Direction::Right));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn arrow_and_letter_keys_map_to_directions() {
        assert_eq!(
            map_key_event(press(KeyCode::Up)),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key_event(press(KeyCode::Char('a'))),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(
            map_key_event(press(KeyCode::Char('j'))),
            Some(GameInput::Direction(Direction::Down))
        );
        assert_eq!(
            map_key_event(press(KeyCode::Right)),
            Some(GameInput::Direction(Direction::Right))
        );
    }

    #[test]
    fn quit_keys_include_ctrl_c() {
        assert_eq!(map_key_event(press(KeyCode::Esc)), Some(GameInput::Quit));
        assert_eq!(map_key_event(press(KeyCode::Char('q'))), Some(GameInput::Quit));
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameInput::Quit)
        );
    }

    #[test]
    fn unrelated_and_released_keys_are_ignored() {
        assert_eq!(map_key_event(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key_event(press(KeyCode::Enter)), None);
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)),
            None
        );

        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Up,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_key_event(release), None);
    }
}
