//! The game orchestrator: one call per input, one call per tick.

use super::background::Background;
use super::bird::{Bird, BirdManager};
use super::events::{CrashCause, GameAction, GameEvent};
use super::phase::GamePhase;
use super::pipes::{Pipe, PipeManager, PipePool};
use crate::config::GameConfig;
use rand::Rng;
use tracing::{debug, info};

/// Complete state of a session. Owns every entity; renderers and the audio
/// layer only ever borrow it.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    phase: GamePhase,
    bird: Bird,
    bird_manager: BirdManager,
    pipes: PipePool,
    pipe_manager: PipeManager,
    background: Background,
    score: u32,
    /// Highest score this session. Not persisted.
    best_score: u32,
    tick_count: u64,
}

impl Game {
    /// New session sitting in the menu.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let background = Background::new(&config);
        let pipes = PipePool::new(&config, rng);
        Self {
            phase: GamePhase::Menu,
            bird: Bird::new(&config),
            bird_manager: BirdManager::new(&config),
            pipes,
            pipe_manager: PipeManager::new(&config),
            background,
            score: 0,
            best_score: 0,
            tick_count: 0,
            config,
        }
    }

    /// Apply a player action. `Quit` is left to the caller.
    pub fn handle_action<R: Rng>(&mut self, action: GameAction, rng: &mut R) -> Vec<GameEvent> {
        match action {
            GameAction::Jump => self.jump(),
            GameAction::Restart => vec![self.restart(rng)],
            GameAction::Quit => Vec::new(),
        }
    }

    /// Flap. From the menu this also starts the run. Ignored after a crash.
    pub fn jump(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match self.phase {
            GamePhase::GameOver => return events,
            GamePhase::Menu => {
                if let Some(started) = self.start() {
                    events.push(started);
                }
            }
            GamePhase::Playing => {}
        }
        self.bird.velocity = self.config.jump_strength;
        events.push(GameEvent::Flapped);
        events
    }

    /// Leave the menu without flapping.
    pub fn start(&mut self) -> Option<GameEvent> {
        if self.phase != GamePhase::Menu {
            return None;
        }
        self.phase = GamePhase::Playing;
        self.bird.velocity = 0.0;
        info!("run started");
        Some(GameEvent::Started)
    }

    /// Begin a fresh run immediately. Accepted in every phase.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) -> GameEvent {
        info!(score = self.score, best = self.best_score, "restart");
        self.bird = Bird::new(&self.config);
        self.bird_manager.reset();
        self.pipes.spawn(rng);
        self.score = 0;
        self.tick_count = 0;
        self.phase = GamePhase::Playing;
        GameEvent::Restarted
    }

    /// Advance the simulation by one fixed tick.
    ///
    /// Order while playing: bird, then each pipe (advance and recycle,
    /// scoring, collision), then ground and ceiling. Once a crash is latched
    /// the remaining pipes still move but are no longer scored or tested, so
    /// a run reports exactly one crash.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match self.phase {
            GamePhase::GameOver => return events,
            GamePhase::Menu => {
                self.bird_manager.update(&mut self.bird, GamePhase::Menu);
                self.background.update();
                self.tick_count += 1;
                return events;
            }
            GamePhase::Playing => {}
        }

        self.bird_manager.update(&mut self.bird, GamePhase::Playing);
        self.background.update();
        self.tick_count += 1;

        for index in 0..self.pipes.len() {
            self.pipes.advance(index, rng);
            if self.phase != GamePhase::Playing {
                continue;
            }

            let (scored, hit) = match self.pipes.get_mut(index) {
                Some(pipe) => {
                    let scored =
                        !pipe.passed && self.pipe_manager.is_cleared_by(&self.bird.rect, pipe);
                    if scored {
                        pipe.passed = true;
                    }
                    (scored, self.pipe_manager.check_collision(&self.bird.rect, pipe))
                }
                None => (false, false),
            };

            if scored {
                self.score += 1;
                self.best_score = self.best_score.max(self.score);
                debug!(score = self.score, pipe = index, "pipe cleared");
                events.push(GameEvent::Scored(self.score));
            }
            if hit {
                self.crash(CrashCause::Pipe(index), &mut events);
            }
        }

        let ground_y = self.background.ground_y();
        if self.bird.rect.bottom() > ground_y {
            self.bird.rect.y = ground_y - self.bird.rect.h;
            self.bird.velocity = 0.0;
            if self.phase == GamePhase::Playing {
                self.crash(CrashCause::Ground, &mut events);
            }
        }
        if self.bird.rect.y < 0.0 && self.phase == GamePhase::Playing {
            self.crash(CrashCause::Ceiling, &mut events);
        }

        events
    }

    fn crash(&mut self, cause: CrashCause, events: &mut Vec<GameEvent>) {
        self.phase = GamePhase::GameOver;
        self.best_score = self.best_score.max(self.score);
        info!(?cause, score = self.score, ticks = self.tick_count, "game over");
        events.push(GameEvent::Crashed(cause));
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    /// Mutable bird access for scripted scenarios.
    pub fn bird_mut(&mut self) -> &mut Bird {
        &mut self.bird
    }

    pub fn bird_manager(&self) -> &BirdManager {
        &self.bird_manager
    }

    pub fn pipes(&self) -> &[Pipe] {
        self.pipes.pipes()
    }

    /// Mutable pipe access for scripted scenarios. The pool size is fixed.
    pub fn pipe_mut(&mut self, index: usize) -> Option<&mut Pipe> {
        self.pipes.get_mut(index)
    }

    pub fn pipe_manager(&self) -> &PipeManager {
        &self.pipe_manager
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
