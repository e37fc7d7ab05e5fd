//! Playback stepper.
//!
//! `Idle -> Playing` captures a cursor; each tick moves it one unit forward
//! and hands it back for committing. A tick that would pass the domain
//! maximum returns to `Idle` without advancing.

use globe_model::TimeKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing {
        cursor: TimeKey,
        min: TimeKey,
        max: TimeKey,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Cursor moved to this key; commit it.
    Advanced(TimeKey),
    /// The next key would pass the maximum; playback stopped.
    Finished,
    /// Not playing.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackStepper {
    state: PlaybackState,
}

impl Default for PlaybackStepper {
    fn default() -> Self {
        Self {
            state: PlaybackState::Idle,
        }
    }
}

impl PlaybackStepper {
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { .. })
    }

    pub fn cursor(&self) -> Option<TimeKey> {
        match self.state {
            PlaybackState::Playing { cursor, .. } => Some(cursor),
            PlaybackState::Idle => None,
        }
    }

    /// Start from `start` (or `min` when unset), clamped into the domain.
    /// Does nothing and returns `false` when already playing.
    pub fn start(&mut self, start: Option<TimeKey>, (min, max): (TimeKey, TimeKey)) -> bool {
        if self.is_playing() {
            return false;
        }
        let cursor = start.unwrap_or(min).clamp_to(min, max);
        self.state = PlaybackState::Playing { cursor, min, max };
        tracing::debug!(%cursor, %min, %max, "playback started");
        true
    }

    /// Returns `false` when already idle.
    pub fn stop(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.state = PlaybackState::Idle;
        tracing::debug!("playback stopped");
        true
    }

    pub fn tick(&mut self) -> Tick {
        let PlaybackState::Playing { cursor, min, max } = self.state else {
            return Tick::Idle;
        };
        let next = cursor.next();
        if next > max {
            self.state = PlaybackState::Idle;
            tracing::debug!(%cursor, "playback reached the end");
            return Tick::Finished;
        }
        self.state = PlaybackState::Playing {
            cursor: next,
            min,
            max,
        };
        tracing::trace!(cursor = %next, "playback tick");
        Tick::Advanced(next)
    }

    /// Move the cursor while playing, e.g. after a manual commit.
    pub fn reseat(&mut self, key: TimeKey) {
        if let PlaybackState::Playing { cursor, min, max } = &mut self.state {
            *cursor = key.clamp_to(*min, *max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> (TimeKey, TimeKey) {
        (TimeKey::year(2000), TimeKey::year(2002))
    }

    #[test]
    fn runs_to_the_boundary_then_idles() {
        let mut stepper = PlaybackStepper::default();
        assert!(stepper.start(Some(TimeKey::year(2000)), bounds()));
        assert_eq!(stepper.tick(), Tick::Advanced(TimeKey::year(2001)));
        assert_eq!(stepper.tick(), Tick::Advanced(TimeKey::year(2002)));
        assert_eq!(stepper.tick(), Tick::Finished);
        assert!(!stepper.is_playing());
        assert_eq!(stepper.tick(), Tick::Idle);
    }

    #[test]
    fn start_while_playing_is_a_no_op() {
        let mut stepper = PlaybackStepper::default();
        assert!(stepper.start(Some(TimeKey::year(2001)), bounds()));
        assert!(!stepper.start(Some(TimeKey::year(2000)), bounds()));
        assert_eq!(stepper.cursor(), Some(TimeKey::year(2001)));
    }

    #[test]
    fn start_clamps_or_defaults_to_min() {
        let mut stepper = PlaybackStepper::default();
        stepper.start(None, bounds());
        assert_eq!(stepper.cursor(), Some(TimeKey::year(2000)));
        stepper.stop();
        stepper.start(Some(TimeKey::year(1990)), bounds());
        assert_eq!(stepper.cursor(), Some(TimeKey::year(2000)));
        stepper.stop();
        stepper.start(Some(TimeKey::year(2050)), bounds());
        assert_eq!(stepper.tick(), Tick::Finished);
    }

    #[test]
    fn reseat_only_applies_while_playing() {
        let mut stepper = PlaybackStepper::default();
        stepper.reseat(TimeKey::year(2001));
        assert_eq!(stepper.cursor(), None);
        stepper.start(None, bounds());
        stepper.reseat(TimeKey::year(2001));
        assert_eq!(stepper.tick(), Tick::Advanced(TimeKey::year(2002)));
    }
}
