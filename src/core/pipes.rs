//! Pipe obstacles: the recycled pool and the collision geometry.
//!
//! The pool never grows or shrinks after spawning. A pipe that scrolls off
//! the left edge is moved back to the right edge with a fresh height, which
//! gives an endless obstacle stream from a fixed amount of state.

use super::geometry::Rect;
use crate::config::GameConfig;
use rand::Rng;
use tracing::debug;

/// One upper/lower pipe pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge.
    pub x: f32,
    /// Bottom edge of the upper pipe; the gap starts here.
    pub height: f32,
    /// Set once the bird has cleared this pipe; cleared on recycle.
    pub passed: bool,
}

/// Collision and layout queries for a pipe pair. Holds only dimensions.
#[derive(Debug, Clone)]
pub struct PipeManager {
    width: f32,
    gap: f32,
    ground_y: f32,
}

impl PipeManager {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            width: config.pipe_width,
            gap: config.pipe_gap,
            ground_y: config.ground_y(),
        }
    }

    /// Upper pipe, from the top of the screen down to `pipe.height`.
    pub fn upper_rect(&self, pipe: &Pipe) -> Rect {
        Rect::new(pipe.x, 0.0, self.width, pipe.height)
    }

    /// Lower pipe, from the bottom of the gap down to the ground.
    pub fn lower_rect(&self, pipe: &Pipe) -> Rect {
        let top = pipe.height + self.gap;
        Rect::new(pipe.x, top, self.width, (self.ground_y - top).max(0.0))
    }

    /// True when `bird` overlaps either half of the pipe pair.
    pub fn check_collision(&self, bird: &Rect, pipe: &Pipe) -> bool {
        bird.intersects(&self.upper_rect(pipe)) || bird.intersects(&self.lower_rect(pipe))
    }

    /// True once the bird's x is past the pipe's right edge.
    pub fn is_cleared_by(&self, bird: &Rect, pipe: &Pipe) -> bool {
        bird.x > pipe.x + self.width
    }
}

/// Fixed-size ordered collection of pipes.
#[derive(Debug, Clone)]
pub struct PipePool {
    pipes: Vec<Pipe>,
    count: usize,
    spacing: f32,
    spawn_x: f32,
    width: f32,
    speed: f32,
    min_height: f32,
    max_height: f32,
}

impl PipePool {
    /// Create a pool and place its pipes.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let mut pool = Self {
            pipes: Vec::with_capacity(config.pipe_count),
            count: config.pipe_count,
            spacing: config.pipe_spacing,
            spawn_x: config.screen_width,
            width: config.pipe_width,
            speed: config.pipe_speed,
            min_height: config.min_pipe_height,
            max_height: config.max_pipe_height(),
        };
        pool.spawn(rng);
        pool
    }

    /// Replace every pipe with a fresh one at `spawn_x + i * spacing`.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) {
        self.pipes.clear();
        for i in 0..self.count {
            let height = self.random_height(rng);
            self.pipes.push(Pipe {
                x: self.spawn_x + i as f32 * self.spacing,
                height,
                passed: false,
            });
        }
    }

    /// Uniform integer height in `[min_height, max_height]`.
    pub fn random_height<R: Rng>(&self, rng: &mut R) -> f32 {
        let lo = self.min_height.ceil() as i32;
        let hi = self.max_height.floor() as i32;
        if hi <= lo {
            return self.min_height;
        }
        rng.gen_range(lo..=hi) as f32
    }

    /// Scroll pipe `index` left by one tick. A pipe whose right edge has
    /// left the screen is recycled; returns true when that happened.
    pub fn advance<R: Rng>(&mut self, index: usize, rng: &mut R) -> bool {
        self.pipes[index].x -= self.speed;
        if self.pipes[index].x + self.width >= 0.0 {
            return false;
        }

        let height = self.random_height(rng);
        let pipe = &mut self.pipes[index];
        pipe.x = self.spawn_x;
        pipe.height = height;
        pipe.passed = false;
        debug!(index, height, "pipe recycled");
        true
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn get(&self, index: usize) -> Option<&Pipe> {
        self.pipes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Pipe> {
        self.pipes.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn bird_at(x: f32, y: f32) -> Rect {
        Rect::new(x, y, 34.0, 24.0)
    }

    #[test]
    fn test_spawn_layout() {
        let config = GameConfig::default();
        let pool = PipePool::new(&config, &mut rng());

        assert_eq!(pool.len(), 3);
        for (i, pipe) in pool.pipes().iter().enumerate() {
            assert_eq!(pipe.x, 288.0 + i as f32 * 300.0);
            assert!(pipe.height >= 50.0 && pipe.height <= 150.0);
            assert_eq!(pipe.height.fract(), 0.0);
            assert!(!pipe.passed);
        }
    }

    #[test]
    fn test_advance_moves_left() {
        let config = GameConfig::default();
        let mut rng = rng();
        let mut pool = PipePool::new(&config, &mut rng);
        let before = pool.pipes()[0].x;

        assert!(!pool.advance(0, &mut rng));
        assert_eq!(pool.pipes()[0].x, before - config.pipe_speed);
    }

    #[test]
    fn test_recycle_after_leaving_screen() {
        let config = GameConfig::default();
        let mut rng = rng();
        let mut pool = PipePool::new(&config, &mut rng);
        {
            let pipe = pool.get_mut(1).unwrap();
            pipe.x = -config.pipe_width + 1.0;
            pipe.passed = true;
        }

        // right edge at -2: off screen
        assert!(pool.advance(1, &mut rng));
        let pipe = pool.get(1).unwrap();
        assert_eq!(pipe.x, config.screen_width);
        assert!(!pipe.passed);
        assert!(pipe.height >= 50.0 && pipe.height <= 150.0);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_pipe_at_exact_left_edge_not_recycled() {
        let config = GameConfig::default();
        let mut rng = rng();
        let mut pool = PipePool::new(&config, &mut rng);
        pool.get_mut(0).unwrap().x = -config.pipe_width + config.pipe_speed;

        assert!(!pool.advance(0, &mut rng));
        assert_eq!(pool.get(0).unwrap().x, -config.pipe_width);
    }

    #[test]
    fn test_respawn_replaces_all() {
        let config = GameConfig::default();
        let mut rng = rng();
        let mut pool = PipePool::new(&config, &mut rng);
        for _ in 0..50 {
            for i in 0..pool.len() {
                pool.advance(i, &mut rng);
            }
        }
        pool.spawn(&mut rng);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.pipes()[2].x, 888.0);
    }

    #[test]
    fn test_heights_cover_range() {
        let config = GameConfig::default();
        let mut rng = rng();
        let pool = PipePool::new(&config, &mut rng);
        let heights: Vec<f32> = (0..2000).map(|_| pool.random_height(&mut rng)).collect();
        assert!(heights.iter().all(|h| (50.0..=150.0).contains(h)));
        assert!(heights.contains(&50.0));
        assert!(heights.contains(&150.0));
    }

    #[test]
    fn test_collision_inside_gap() {
        let config = GameConfig::default();
        let manager = PipeManager::new(&config);
        let pipe = Pipe {
            x: 90.0,
            height: 100.0,
            passed: false,
        };
        // gap spans 100..250
        assert!(!manager.check_collision(&bird_at(100.0, 150.0), &pipe));
        assert!(!manager.check_collision(&bird_at(100.0, 100.0), &pipe));
        assert!(!manager.check_collision(&bird_at(100.0, 226.0), &pipe));
    }

    #[test]
    fn test_collision_with_upper_pipe() {
        let config = GameConfig::default();
        let manager = PipeManager::new(&config);
        let pipe = Pipe {
            x: 90.0,
            height: 100.0,
            passed: false,
        };
        assert!(manager.check_collision(&bird_at(100.0, 99.0), &pipe));
        assert!(manager.check_collision(&bird_at(100.0, 10.0), &pipe));
    }

    #[test]
    fn test_collision_with_lower_pipe() {
        let config = GameConfig::default();
        let manager = PipeManager::new(&config);
        let pipe = Pipe {
            x: 90.0,
            height: 100.0,
            passed: false,
        };
        assert!(manager.check_collision(&bird_at(100.0, 227.0), &pipe));
        assert!(manager.check_collision(&bird_at(100.0, 300.0), &pipe));
    }

    #[test]
    fn test_no_collision_outside_x_span() {
        let config = GameConfig::default();
        let manager = PipeManager::new(&config);
        let pipe = Pipe {
            x: 200.0,
            height: 100.0,
            passed: false,
        };
        // bird right edge 134 < 200
        assert!(!manager.check_collision(&bird_at(100.0, 10.0), &pipe));
        // bird left edge exactly at the pipe's right edge
        assert!(!manager.check_collision(&bird_at(252.0, 10.0), &pipe));
    }

    #[test]
    fn test_lower_rect_reaches_ground() {
        let config = GameConfig::default();
        let manager = PipeManager::new(&config);
        let pipe = Pipe {
            x: 0.0,
            height: 100.0,
            passed: false,
        };
        let lower = manager.lower_rect(&pipe);
        assert_eq!(lower.y, 250.0);
        assert_eq!(lower.bottom(), config.ground_y());
        assert_eq!(manager.upper_rect(&pipe).h, 100.0);
    }

    #[test]
    fn test_cleared_only_past_right_edge() {
        let config = GameConfig::default();
        let manager = PipeManager::new(&config);
        let pipe = Pipe {
            x: 48.0,
            height: 100.0,
            passed: false,
        };
        // right edge = 100
        assert!(!manager.is_cleared_by(&bird_at(100.0, 150.0), &pipe));
        assert!(manager.is_cleared_by(&bird_at(100.5, 150.0), &pipe));
    }
}
