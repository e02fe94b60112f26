//! Terminal front end.

pub mod layout;
pub mod playfield;

use crate::assets::Assets;
use crate::core::{Game, GamePhase};
use layout::{info_block, render_status, split_screen};
use playfield::Playfield;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 22;

/// Draw one full frame.
pub fn draw(frame: &mut Frame, game: &Game, assets: &Assets) {
    let area = frame.size();
    let border = match game.phase() {
        GamePhase::GameOver => Color::Red,
        _ => Color::Cyan,
    };
    let config = game.config();
    let layout = split_screen(
        frame,
        area,
        border,
        (config.screen_width, config.screen_height),
        INFO_PANEL_WIDTH,
    );

    frame.render_widget(Playfield::new(game, assets), layout.playfield);
    render_status_line(frame, layout.status, game);
    render_info_panel(frame, layout.info, game);
}

fn render_status_line(frame: &mut Frame, area: Rect, game: &Game) {
    let (text, color) = match game.phase() {
        GamePhase::Menu => ("Press Space to start!".to_string(), Color::Yellow),
        GamePhase::Playing => (format!("Score: {}", game.score()), Color::Green),
        GamePhase::GameOver => (
            format!(
                "Crashed with {} - best {}. Press R to fly again",
                game.score(),
                game.best_score()
            ),
            Color::Red,
        ),
    };
    render_status(frame, area, &text, color);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &Game) {
    let inner = info_block(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                game.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", label),
            Span::styled(
                game.best_score().to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" State: ", label),
            Span::styled(game.phase().name(), Style::default().fg(Color::Cyan)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
