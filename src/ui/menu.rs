use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::Theme;
use crate::game::DeathReason;

/// Draws the final score as a centered popup over the board.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(format!("Your Score is: {score}")).style(
            Style::default()
                .fg(theme.game_over_text)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(death_cause(death_reason)),
        Line::from(""),
        Line::from("[Q]/[Esc] Quit").style(Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn death_cause(reason: Option<DeathReason>) -> &'static str {
    match reason {
        Some(DeathReason::WallCollision) => "Cause: hit wall",
        Some(DeathReason::SelfCollision) => "Cause: hit yourself",
        None => "",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
