//! Inputs the game accepts and the events a tick reports back.

/// Player intents, independent of any key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Jump,
    Restart,
    Quit,
}

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    /// Index of the pipe in the pool.
    Pipe(usize),
    Ground,
    Ceiling,
}

/// Something that happened during an input or a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Menu left, run begins.
    Started,
    Flapped,
    /// A pipe was cleared; carries the new score.
    Scored(u32),
    Crashed(CrashCause),
    Restarted,
}
