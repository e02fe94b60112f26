//! Screen layout: outer frame, playfield, status bar and info panel.

use crate::input::CONTROLS;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

/// Areas produced by [`split_screen`].
pub struct ScreenLayout {
    /// Playfield, sized to the world's aspect ratio and centered.
    pub playfield: Rect,
    /// Two-line status bar under the playfield column.
    pub status: Rect,
    /// Bordered info panel on the right.
    pub info: Rect,
}

/// Clear `area`, draw the titled border and carve out the screen regions.
///
/// ```text
/// ┌─ Flappy Bird ───────────────────┬─ Info ──────┐
/// │        [playfield]              │  [info]     │
/// │                                 │             │
/// │ [status - 2 lines]              │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn split_screen(
    frame: &mut Frame,
    area: Rect,
    border: Color,
    world: (f32, f32),
    info_width: u16,
) -> ScreenLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy Bird ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_width)])
        .split(inner);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(columns[0]);

    ScreenLayout {
        playfield: fit_aspect(rows[0], world.0, world.1),
        status: rows[1],
        info: columns[1],
    }
}

/// Largest rectangle inside `area` with the world's proportions, centered.
pub fn fit_aspect(area: Rect, world_width: f32, world_height: f32) -> Rect {
    if area.width == 0 || area.height == 0 || world_width <= 0.0 || world_height <= 0.0 {
        return area;
    }
    let ratio = world_width / world_height * CELL_ASPECT;

    let mut width = (area.height as f32 * ratio).round() as u16;
    let mut height = area.height;
    if width > area.width {
        width = area.width;
        height = ((area.width as f32 / ratio).round() as u16).clamp(1, area.height);
    }
    let width = width.max(1);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Status message on the first line, key hints on the second.
pub fn render_status(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    if area.height == 0 {
        return;
    }
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );
    if area.height < 2 {
        return;
    }

    let mut spans = Vec::new();
    for (i, (key, action)) in CONTROLS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Draw the info panel border and return its inside.
pub fn info_block(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
