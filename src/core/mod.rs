//! Core game state and logic.
//!
//! Everything here is deterministic given an RNG and has no terminal, audio
//! or file dependencies. One call to [`Game::tick`] is one 16ms frame.

pub mod background;
pub mod bird;
pub mod events;
pub mod game;
pub mod geometry;
pub mod phase;
pub mod pipes;

pub use background::Background;
pub use bird::{Bird, BirdManager};
pub use events::{CrashCause, GameAction, GameEvent};
pub use game::Game;
pub use geometry::Rect;
pub use phase::GamePhase;
pub use pipes::{Pipe, PipeManager, PipePool};
