//! Playfield widget: maps world coordinates onto terminal cells and draws
//! background, bird, pipes, score and the game-over banner, in that order.

use crate::assets::{Assets, Sprite};
use crate::core::{Game, GamePhase, Rect as WorldRect};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use std::ops::Range;

/// World y of the top of the score digits.
const SCORE_Y: f32 = 50.0;

pub struct Playfield<'a> {
    game: &'a Game,
    assets: &'a Assets,
}

impl<'a> Playfield<'a> {
    pub fn new(game: &'a Game, assets: &'a Assets) -> Self {
        Self { game, assets }
    }
}

/// World-to-cell scaling for one render.
struct Viewport {
    area: Rect,
    sx: f32,
    sy: f32,
}

impl Viewport {
    fn new(area: Rect, world_width: f32, world_height: f32) -> Self {
        Self {
            area,
            sx: area.width as f32 / world_width,
            sy: area.height as f32 / world_height,
        }
    }

    fn col(&self, x: f32) -> i32 {
        (x * self.sx).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        (y * self.sy).floor() as i32
    }

    /// Cells touched by a world rectangle, clipped to the area.
    fn cells(&self, rect: &WorldRect) -> Option<(Range<u16>, Range<u16>)> {
        let clip = |v: f32, max: u16| v.clamp(0.0, max as f32) as u16;
        let cols = clip((rect.x * self.sx).floor(), self.area.width)
            ..clip((rect.right() * self.sx).ceil(), self.area.width);
        let rows = clip((rect.y * self.sy).floor(), self.area.height)
            ..clip((rect.bottom() * self.sy).ceil(), self.area.height);
        if cols.is_empty() || rows.is_empty() {
            return None;
        }
        Some((cols, rows))
    }

    fn put(&self, buf: &mut Buffer, col: i32, row: i32, ch: char, style: Style) {
        if col < 0 || row < 0 || col >= self.area.width as i32 || row >= self.area.height as i32 {
            return;
        }
        buf.get_mut(self.area.x + col as u16, self.area.y + row as u16)
            .set_char(ch)
            .set_style(style);
    }

    /// Draw a sprite with its top-left at (col, row). Spaces are skipped.
    fn sprite(&self, buf: &mut Buffer, sprite: &Sprite, col: i32, row: i32, style: Style) {
        for (dy, line) in sprite.rows().iter().enumerate() {
            for (dx, ch) in line.chars().enumerate() {
                if ch != ' ' {
                    self.put(buf, col + dx as i32, row + dy as i32, ch, style);
                }
            }
        }
    }
}

impl Widget for Playfield<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let config = self.game.config();
        let view = Viewport::new(area, config.screen_width, config.screen_height);

        render_background(self.game, &view, buf);
        render_bird(self.game, self.assets, &view, buf);
        render_pipes(self.game, &view, buf);
        render_score(self.game.score(), self.assets, &view, buf);
        if self.game.phase() == GamePhase::GameOver {
            render_game_over(self.assets, &view, buf);
        }
    }
}

fn render_background(game: &Game, view: &Viewport, buf: &mut Buffer) {
    let background = game.background();
    let ground_row = view.row(background.ground_y()).max(0);
    let offset = view.col(background.scroll_offset());

    let grass = Style::default().fg(Color::Green);
    let dirt = Style::default().fg(Color::Yellow);

    for row in ground_row..view.area.height as i32 {
        for col in 0..view.area.width as i32 {
            if row == ground_row {
                view.put(buf, col, row, '▀', grass);
            } else {
                let ch = if ((col + offset) / 2) % 2 == 0 { '▒' } else { '░' };
                view.put(buf, col, row, ch, dirt);
            }
        }
    }
}

/// Small arrow showing the bird's pitch, if it is steep enough to matter.
pub fn tilt_glyph(angle: f32) -> Option<char> {
    if angle <= -20.0 {
        Some('↗')
    } else if angle >= 45.0 {
        Some('↘')
    } else {
        None
    }
}

fn render_bird(game: &Game, assets: &Assets, view: &Viewport, buf: &mut Buffer) {
    let Some(sprite) = assets.bird_frame(game.bird_manager().current_frame()) else {
        return;
    };
    let bird = game.bird();
    let col = view.col(bird.rect.x);
    let row = view.row(bird.rect.y);
    let style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    view.sprite(buf, sprite, col, row, style);

    if let Some(glyph) = tilt_glyph(bird.angle) {
        let mid = row + sprite.height() as i32 / 2;
        view.put(buf, col + sprite.width() as i32, mid, glyph, style);
    }
}

fn render_pipes(game: &Game, view: &Viewport, buf: &mut Buffer) {
    let manager = game.pipe_manager();
    let body = Style::default().fg(Color::Green);
    let cap = Style::default().fg(Color::LightGreen);

    for pipe in game.pipes() {
        let upper = view.cells(&manager.upper_rect(pipe));
        let lower = view.cells(&manager.lower_rect(pipe));

        if let Some((cols, rows)) = upper {
            let cap_row = rows.end - 1;
            for row in rows {
                let style = if row == cap_row { cap } else { body };
                for col in cols.clone() {
                    view.put(buf, col as i32, row as i32, '█', style);
                }
            }
        }
        if let Some((cols, rows)) = lower {
            let cap_row = rows.start;
            for row in rows {
                let style = if row == cap_row { cap } else { body };
                for col in cols.clone() {
                    view.put(buf, col as i32, row as i32, '█', style);
                }
            }
        }
    }
}

fn render_score(score: u32, assets: &Assets, view: &Viewport, buf: &mut Buffer) {
    let digits: Vec<u32> = score
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    // Fixed advance per digit so a missing glyph leaves a gap, not a shift.
    let advance = (0..10)
        .filter_map(|d| assets.digit(d))
        .map(|s| s.width())
        .max()
        .unwrap_or(3) as i32
        + 1;
    let total = advance * digits.len() as i32 - 1;
    let start = (view.area.width as i32 - total) / 2;
    let row = view.row(SCORE_Y);
    let style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    for (i, digit) in digits.iter().enumerate() {
        if let Some(sprite) = assets.digit(*digit) {
            view.sprite(buf, sprite, start + i as i32 * advance, row, style);
        }
    }
}

fn render_game_over(assets: &Assets, view: &Viewport, buf: &mut Buffer) {
    let Some(banner) = assets.game_over() else {
        return;
    };
    let col = (view.area.width as i32 - banner.width() as i32) / 2;
    let row = (view.area.height as i32 - banner.height() as i32) / 2;
    let style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
    view.sprite(buf, banner, col, row, style);
}
