//! Scrolling background and ground strip.

use crate::config::GameConfig;

#[derive(Debug, Clone)]
pub struct Background {
    scroll_offset: f32,
    scroll_speed: f32,
    wrap_width: f32,
    base_height: f32,
    ground_y: f32,
}

impl Background {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            scroll_offset: 0.0,
            scroll_speed: config.pipe_speed,
            wrap_width: config.screen_width,
            base_height: config.base_height,
            ground_y: config.ground_y(),
        }
    }

    /// Advance the ground scroll by one tick, in step with the pipes.
    pub fn update(&mut self) {
        self.scroll_offset = (self.scroll_offset + self.scroll_speed) % self.wrap_width;
    }

    /// Current scroll position in `[0, screen_width)`.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn base_height(&self) -> f32 {
        self.base_height
    }

    /// Y coordinate where the ground starts; the bird dies below it.
    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_advances_by_pipe_speed() {
        let config = GameConfig::default();
        let mut bg = Background::new(&config);
        bg.update();
        assert_eq!(bg.scroll_offset(), config.pipe_speed);
    }

    #[test]
    fn test_scroll_wraps_at_screen_width() {
        let config = GameConfig::default();
        let mut bg = Background::new(&config);
        for _ in 0..1000 {
            bg.update();
            assert!(bg.scroll_offset() >= 0.0);
            assert!(bg.scroll_offset() < config.screen_width);
        }
    }

    #[test]
    fn test_ground_line() {
        let config = GameConfig::default();
        let bg = Background::new(&config);
        assert_eq!(bg.base_height(), 112.0);
        assert_eq!(bg.ground_y(), 400.0);
    }
}
