use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{Theme, GLYPH_HALF_UPPER};
use crate::game::{GameState, GameStatus};
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    let below_hud = render_hud(frame, area, state.score, theme);

    let cells = CellGrid::from_state(state, theme);
    let board_area = Rect {
        x: below_hud.x,
        y: below_hud.y,
        width: cells.columns.saturating_add(2),
        height: cells.terminal_rows().saturating_add(2),
    }
    .intersection(below_hud);

    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    paint_cells(frame, inner, &cells);

    if state.status == GameStatus::GameOver {
        render_game_over_menu(frame, board_area, state.score, state.death_reason, theme);
    }
}

/// One color per grid cell, row-major.
struct CellGrid {
    columns: u16,
    rows: u16,
    colors: Vec<Color>,
}

impl CellGrid {
    fn from_state(state: &GameState, theme: &Theme) -> Self {
        let config = state.config();
        let columns = grid_extent(config.bounds.columns(config.cell_size));
        let rows = grid_extent(config.bounds.rows(config.cell_size));
        let mut grid = Self {
            columns,
            rows,
            colors: vec![theme.field_bg; usize::from(columns) * usize::from(rows)],
        };

        for segment in state.snake.segments() {
            grid.paint(*segment, config.cell_size, theme.snake);
        }
        grid.paint(state.food.position, config.cell_size, theme.food);

        grid
    }

    /// Two grid rows share one terminal row.
    fn terminal_rows(&self) -> u16 {
        self.rows.div_ceil(2)
    }

    fn paint(&mut self, position: Position, cell_size: i32, color: Color) {
        if let Some(index) = self.index_of(position, cell_size) {
            self.colors[index] = color;
        }
    }

    fn index_of(&self, position: Position, cell_size: i32) -> Option<usize> {
        let column = u16::try_from(position.x.div_euclid(cell_size)).ok()?;
        let row = u16::try_from(position.y.div_euclid(cell_size)).ok()?;
        if column >= self.columns || row >= self.rows {
            return None;
        }

        Some(usize::from(row) * usize::from(self.columns) + usize::from(column))
    }

    fn color_at(&self, column: u16, row: u16) -> Option<Color> {
        if column >= self.columns || row >= self.rows {
            return None;
        }

        Some(self.colors[usize::from(row) * usize::from(self.columns) + usize::from(column)])
    }
}

fn grid_extent(cells: i32) -> u16 {
    u16::try_from(cells.max(0)).unwrap_or(u16::MAX)
}

/// Paints each terminal cell as an upper half-block: fg is the upper grid
/// row, bg the lower one. `inner` is already clipped to the frame.
fn paint_cells(frame: &mut Frame<'_>, inner: Rect, cells: &CellGrid) {
    let buffer = frame.buffer_mut();

    for dy in 0..inner.height {
        for dx in 0..inner.width {
            let Some(upper) = cells.color_at(dx, dy * 2) else {
                continue;
            };
            let lower = cells.color_at(dx, dy * 2 + 1).unwrap_or(Color::Reset);

            buffer.set_string(
                inner.x + dx,
                inner.y + dy,
                GLYPH_HALF_UPPER,
                Style::new().fg(upper).bg(lower),
            );
        }
    }
}
