//! Sound effect triggers.
//!
//! The game never waits on or inspects audio. Events from a tick are mapped
//! to effects and handed to whatever [`SoundPlayer`] the front end installed.

use crate::core::events::GameEvent;
use std::io::Write;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Wing,
    Point,
    Hit,
    Die,
}

impl SoundEffect {
    /// Effects to play for one game event, in order.
    pub fn for_event(event: &GameEvent) -> &'static [SoundEffect] {
        match event {
            GameEvent::Flapped => &[SoundEffect::Wing],
            GameEvent::Scored(_) => &[SoundEffect::Point],
            GameEvent::Crashed(_) => &[SoundEffect::Hit, SoundEffect::Die],
            GameEvent::Started | GameEvent::Restarted => &[],
        }
    }
}

pub trait SoundPlayer {
    fn play(&mut self, effect: SoundEffect);
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Muted;

impl SoundPlayer for Muted {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Rings the terminal bell for points and crashes. Wing flaps are too
/// frequent to be worth a bell.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SoundPlayer for TerminalBell<W> {
    fn play(&mut self, effect: SoundEffect) {
        if !matches!(effect, SoundEffect::Point | SoundEffect::Hit) {
            return;
        }
        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            trace!(?effect, error = %e, "bell failed");
        }
    }
}

/// Send every effect for `events` to `player`.
pub fn play_events(player: &mut dyn SoundPlayer, events: &[GameEvent]) {
    for event in events {
        for effect in SoundEffect::for_event(event) {
            player.play(*effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::CrashCause;

    #[derive(Default)]
    struct Recorder(Vec<SoundEffect>);

    impl SoundPlayer for Recorder {
        fn play(&mut self, effect: SoundEffect) {
            self.0.push(effect);
        }
    }

    #[test]
    fn test_crash_plays_hit_then_die() {
        let mut rec = Recorder::default();
        play_events(&mut rec, &[GameEvent::Crashed(CrashCause::Ground)]);
        assert_eq!(rec.0, vec![SoundEffect::Hit, SoundEffect::Die]);
    }

    #[test]
    fn test_event_sequence() {
        let mut rec = Recorder::default();
        play_events(
            &mut rec,
            &[
                GameEvent::Started,
                GameEvent::Flapped,
                GameEvent::Scored(1),
                GameEvent::Restarted,
            ],
        );
        assert_eq!(rec.0, vec![SoundEffect::Wing, SoundEffect::Point]);
    }

    #[test]
    fn test_bell_rings_for_point_and_hit_only() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.play(SoundEffect::Wing);
        bell.play(SoundEffect::Point);
        bell.play(SoundEffect::Hit);
        bell.play(SoundEffect::Die);
        assert_eq!(bell.into_inner(), b"\x07\x07".to_vec());
    }
}
