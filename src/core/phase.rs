/// Top-level state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Title screen: the bird hovers and nothing can collide.
    #[default]
    Menu,
    Playing,
    /// Everything is frozen until a restart.
    GameOver,
}

impl GamePhase {
    pub fn name(self) -> &'static str {
        match self {
            GamePhase::Menu => "menu",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "game over",
        }
    }
}
