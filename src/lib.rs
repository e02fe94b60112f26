//! Flappy - terminal Flappy Bird.
//!
//! The simulation lives in [`core`] and is free of I/O. The binary wires it
//! to crossterm input, a ratatui renderer and a bell-based sound player.

pub mod assets;
pub mod audio;
pub mod build_info;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod ui;

pub use config::GameConfig;
pub use crate::core::{Game, GameAction, GameEvent, GamePhase};
pub use error::{FlappyError, Result};
