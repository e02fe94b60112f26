//! Bird state, physics and wing animation.

use super::geometry::Rect;
use super::phase::GamePhase;
use crate::config::GameConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub rect: Rect,
    /// Vertical velocity in units per tick (positive = downward).
    pub velocity: f32,
    /// Displayed tilt in degrees, positive = nose down.
    pub angle: f32,
}

impl Bird {
    /// Bird at its starting spot, at rest.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rect: Rect::new(
                config.bird_start_x,
                config.bird_start_y(),
                config.bird_width,
                config.bird_height,
            ),
            velocity: 0.0,
            angle: 0.0,
        }
    }
}

/// Drives bird motion and tracks which wing frame to show.
#[derive(Debug, Clone)]
pub struct BirdManager {
    current_frame: usize,
    frame_timer: u32,
    hover_phase: f32,

    frame_count: usize,
    frame_delay_ms: u32,
    tick_ms: u32,
    gravity: f32,
    hover_center_y: f32,
    hover_amplitude: f32,
    hover_step: f32,
    rotation_factor: f32,
    min_angle: f32,
    max_angle: f32,
    rotation_smoothing: f32,
}

impl BirdManager {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            current_frame: 0,
            frame_timer: 0,
            hover_phase: 0.0,

            frame_count: config.animation_frames.max(1),
            frame_delay_ms: config.frame_delay_ms,
            tick_ms: u32::try_from(config.tick_ms).unwrap_or(u32::MAX),
            gravity: config.gravity,
            hover_center_y: config.bird_start_y(),
            hover_amplitude: config.hover_amplitude,
            hover_step: config.hover_step,
            rotation_factor: config.rotation_factor,
            min_angle: config.min_angle,
            max_angle: config.max_angle,
            rotation_smoothing: config.rotation_smoothing,
        }
    }

    /// Advance the bird by one tick under the motion policy for `phase`.
    ///
    /// In `GameOver` the bird is left untouched.
    pub fn update(&mut self, bird: &mut Bird, phase: GamePhase) {
        match phase {
            GamePhase::Menu => self.hover(bird),
            GamePhase::Playing => self.fall(bird),
            GamePhase::GameOver => return,
        }
        self.advance_animation();
    }

    /// Index of the wing frame to draw.
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Put animation and hover state back to their start values.
    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.frame_timer = 0;
        self.hover_phase = 0.0;
    }

    fn hover(&mut self, bird: &mut Bird) {
        self.hover_phase += self.hover_step;
        bird.rect.y = self.hover_center_y + self.hover_phase.sin() * self.hover_amplitude;
        bird.velocity = 0.0;
        bird.angle = 0.0;
    }

    fn fall(&mut self, bird: &mut Bird) {
        bird.velocity += self.gravity;
        bird.rect.y += bird.velocity;

        let target = (bird.velocity * self.rotation_factor).clamp(self.min_angle, self.max_angle);
        bird.angle += (target - bird.angle) * self.rotation_smoothing;
        // A smoothing factor above 1 overshoots the target.
        bird.angle = bird.angle.clamp(self.min_angle, self.max_angle);
    }

    fn advance_animation(&mut self) {
        self.frame_timer += self.tick_ms;
        if self.frame_timer >= self.frame_delay_ms {
            self.frame_timer = 0;
            self.current_frame = (self.current_frame + 1) % self.frame_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (GameConfig, Bird, BirdManager) {
        let config = GameConfig::default();
        let bird = Bird::new(&config);
        let manager = BirdManager::new(&config);
        (config, bird, manager)
    }

    #[test]
    fn test_new_bird_at_start() {
        let (_, bird, _) = setup();
        assert_eq!(bird.rect, Rect::new(100.0, 256.0, 34.0, 24.0));
        assert_eq!(bird.velocity, 0.0);
        assert_eq!(bird.angle, 0.0);
    }

    #[test]
    fn test_gravity_integration() {
        let (config, mut bird, mut manager) = setup();
        manager.update(&mut bird, GamePhase::Playing);
        assert_eq!(bird.velocity, config.gravity);
        assert_eq!(bird.rect.y, 256.0 + config.gravity);

        manager.update(&mut bird, GamePhase::Playing);
        assert_eq!(bird.velocity, 2.0 * config.gravity);
        assert_eq!(bird.rect.y, 256.0 + 3.0 * config.gravity);
    }

    #[test]
    fn test_angle_smoothed_toward_target() {
        let (_, mut bird, mut manager) = setup();
        bird.velocity = 9.5;
        manager.update(&mut bird, GamePhase::Playing);
        // velocity 10.0 -> target 25.0, one tenth of the way from 0
        assert!((bird.angle - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_angle_stays_clamped() {
        let (config, mut bird, mut manager) = setup();
        bird.velocity = 200.0;
        for _ in 0..500 {
            manager.update(&mut bird, GamePhase::Playing);
            assert!(bird.angle <= config.max_angle);
        }
        assert!((bird.angle - config.max_angle).abs() < 0.01);

        bird.velocity = -500.0;
        for _ in 0..500 {
            bird.velocity = -500.0;
            manager.update(&mut bird, GamePhase::Playing);
            assert!(bird.angle >= config.min_angle);
        }
        assert!((bird.angle - config.min_angle).abs() < 0.01);
    }

    #[test]
    fn test_menu_hover_stays_near_center() {
        let (config, mut bird, mut manager) = setup();
        bird.velocity = 5.0;
        bird.angle = 30.0;
        for _ in 0..200 {
            manager.update(&mut bird, GamePhase::Menu);
            assert_eq!(bird.velocity, 0.0);
            assert_eq!(bird.angle, 0.0);
            let offset = (bird.rect.y - config.bird_start_y()).abs();
            assert!(offset <= config.hover_amplitude + 1e-3);
        }
    }

    #[test]
    fn test_menu_hover_follows_sine() {
        let (config, mut bird, mut manager) = setup();
        manager.update(&mut bird, GamePhase::Menu);
        let expected = config.bird_start_y() + config.hover_step.sin() * config.hover_amplitude;
        assert!((bird.rect.y - expected).abs() < 1e-4);
    }

    #[test]
    fn test_game_over_freezes_bird() {
        let (_, mut bird, mut manager) = setup();
        bird.velocity = 3.0;
        let before = bird.clone();
        manager.update(&mut bird, GamePhase::GameOver);
        assert_eq!(bird, before);
        assert_eq!(manager.current_frame(), 0);
    }

    #[test]
    fn test_animation_cycles_every_100ms() {
        let (_, mut bird, mut manager) = setup();
        // 16ms ticks: the timer crosses 100ms on the 7th tick
        for _ in 0..6 {
            manager.update(&mut bird, GamePhase::Menu);
        }
        assert_eq!(manager.current_frame(), 0);
        manager.update(&mut bird, GamePhase::Menu);
        assert_eq!(manager.current_frame(), 1);

        for _ in 0..14 {
            manager.update(&mut bird, GamePhase::Menu);
        }
        assert_eq!(manager.current_frame(), 0);
    }

    #[test]
    fn test_reset() {
        let (_, mut bird, mut manager) = setup();
        for _ in 0..10 {
            manager.update(&mut bird, GamePhase::Playing);
        }
        manager.reset();
        assert_eq!(manager.current_frame(), 0);
    }
}
