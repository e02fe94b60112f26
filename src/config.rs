//! Game tuning configuration.
//!
//! Every physics and layout constant lives here and is handed to the core at
//! construction. The values are tuned for a fixed 16ms tick; the simulation
//! does no delta-time correction, so changing `tick_ms` changes game speed.

use crate::error::{FlappyError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Playfield
    pub screen_width: f32,
    pub screen_height: f32,
    /// Height of the ground strip at the bottom of the screen.
    pub base_height: f32,

    // Bird
    pub bird_start_x: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    /// Velocity added every tick while playing (positive = downward).
    pub gravity: f32,
    /// Velocity set (not added) by a flap. Negative = upward.
    pub jump_strength: f32,

    // Pipes
    pub pipe_count: usize,
    pub pipe_spacing: f32,
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    /// Lowest allowed gap height (top pipe length).
    pub min_pipe_height: f32,
    pub min_bottom_pipe_height: f32,
    /// Extra clearance kept above the bottom pipe when rolling a height.
    pub pipe_height_margin: f32,

    // Timing and animation
    pub tick_ms: u64,
    pub frame_delay_ms: u32,
    pub animation_frames: usize,

    // Menu hover
    pub hover_amplitude: f32,
    pub hover_step: f32,

    // Rotation
    pub rotation_factor: f32,
    pub min_angle: f32,
    pub max_angle: f32,
    pub rotation_smoothing: f32,

    // Front end
    pub assets_dir: PathBuf,
    pub sound_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 288.0,
            screen_height: 512.0,
            base_height: 112.0,

            bird_start_x: 100.0,
            bird_width: 34.0,
            bird_height: 24.0,
            gravity: 0.5,
            jump_strength: -8.0,

            pipe_count: 3,
            pipe_spacing: 300.0,
            pipe_width: 52.0,
            pipe_gap: 150.0,
            pipe_speed: 3.0,
            min_pipe_height: 50.0,
            min_bottom_pipe_height: 50.0,
            pipe_height_margin: 50.0,

            tick_ms: 16,
            frame_delay_ms: 100,
            animation_frames: 3,

            hover_amplitude: 10.0,
            hover_step: 0.1,

            rotation_factor: 2.5,
            min_angle: -45.0,
            max_angle: 90.0,
            rotation_smoothing: 0.1,

            assets_dir: PathBuf::from("assets"),
            sound_enabled: true,
        }
    }
}

impl GameConfig {
    /// Y coordinate of the ground line.
    pub fn ground_y(&self) -> f32 {
        self.screen_height - self.base_height
    }

    /// Largest gap height a pipe may roll.
    pub fn max_pipe_height(&self) -> f32 {
        self.screen_height
            - self.base_height
            - self.pipe_gap
            - self.min_bottom_pipe_height
            - self.pipe_height_margin
    }

    /// Vertical resting point of the bird at the start of a run.
    pub fn bird_start_y(&self) -> f32 {
        (self.screen_height / 2.0).floor()
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err(FlappyError::InvalidConfig(
                "screen dimensions must be positive".to_string(),
            ));
        }
        if self.base_height < 0.0 || self.base_height >= self.screen_height {
            return Err(FlappyError::InvalidConfig(format!(
                "base_height {} must be within the screen height {}",
                self.base_height, self.screen_height
            )));
        }
        if self.pipe_count == 0 {
            return Err(FlappyError::InvalidConfig(
                "pipe_count must be at least 1".to_string(),
            ));
        }
        if self.max_pipe_height() < self.min_pipe_height {
            return Err(FlappyError::InvalidConfig(format!(
                "pipe height range is empty: [{}, {}]",
                self.min_pipe_height,
                self.max_pipe_height()
            )));
        }
        if self.animation_frames == 0 {
            return Err(FlappyError::InvalidConfig(
                "animation_frames must be at least 1".to_string(),
            ));
        }
        if self.min_angle > self.max_angle {
            return Err(FlappyError::InvalidConfig(format!(
                "min_angle {} exceeds max_angle {}",
                self.min_angle, self.max_angle
            )));
        }
        if self.tick_ms == 0 {
            return Err(FlappyError::InvalidConfig(
                "tick_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Load and validate a config from a JSON file. Missing fields fall back
    /// to their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| FlappyError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&text).map_err(|source| FlappyError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config for this run: an explicit path wins, then the
    /// platform config file if present, then the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// Platform location of `config.json`, if a home directory can be found.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "flappy").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
