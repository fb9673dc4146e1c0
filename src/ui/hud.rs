use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;

/// Renders the one-line score row and returns the area beneath it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) -> Rect {
    let [score_area, rest] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(score_line(score)).style(Style::default().fg(theme.hud_score)),
        score_area,
    );

    rest
}

fn score_line(score: u32) -> Line<'static> {
    Line::from(format!("Score : {score}"))
}
