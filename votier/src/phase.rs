use serde::{Deserialize, Serialize};
use votier_common::error::ElectionError;
use votier_common::types::Timestamp;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Stage {
    Created,
    VotingOpen,
    Ended,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PhaseState {
    pub voting_started: bool,
    pub voting_started_at: Option<Timestamp>,
    pub tie_breaker_active: bool,
    pub ended: bool,
}

/// Lifecycle of an election: `Created` -> `VotingOpen` -> `Ended`, with the
/// tie-breaker flag layered on top. The flag is never cleared once set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Phase {
    scheduled_end: Option<Timestamp>,
    state: PhaseState,
}

impl Phase {
    pub fn new(scheduled_end: Option<Timestamp>) -> Self {
        Phase {
            scheduled_end,
            state: PhaseState::default(),
        }
    }

    pub fn state(&self) -> &PhaseState {
        &self.state
    }

    pub fn scheduled_end(&self) -> Option<Timestamp> {
        self.scheduled_end
    }

    pub fn is_tie_breaker_active(&self) -> bool {
        self.state.tie_breaker_active
    }

    pub fn is_ended(&self) -> bool {
        self.state.ended
    }

    fn before_scheduled_end(&self, now: Timestamp) -> bool {
        match self.scheduled_end {
            Some(end) => now < end,
            None => true,
        }
    }

    /// Returns true once the election is ended, explicitly or because the
    /// scheduled end has passed at `now`.
    pub fn is_closed(&self, now: Timestamp) -> bool {
        self.state.ended || !self.before_scheduled_end(now)
    }

    pub fn is_voting_open(&self, now: Timestamp) -> bool {
        !self.state.ended && (self.state.voting_started || self.before_scheduled_end(now))
    }

    /// Whether a vote stamped with `now` is accepted. Unlike `is_voting_open`,
    /// an explicit start does not extend the window past the scheduled end.
    pub fn accepts_votes(&self, now: Timestamp) -> bool {
        self.is_voting_open(now) && !self.is_closed(now)
    }

    pub fn stage(&self, now: Timestamp) -> Stage {
        if self.is_closed(now) {
            Stage::Ended
        } else if self.is_voting_open(now) {
            Stage::VotingOpen
        } else {
            Stage::Created
        }
    }

    pub fn check_start_voting(&self, now: Timestamp) -> Result<(), ElectionError> {
        if self.state.voting_started || self.is_closed(now) {
            Err(ElectionError::AlreadyStarted)
        } else {
            Ok(())
        }
    }

    pub fn start_voting(&mut self, now: Timestamp) -> Result<(), ElectionError> {
        self.check_start_voting(now)?;
        self.state.voting_started = true;
        self.state.voting_started_at = Some(now);
        Ok(())
    }

    /// `tied` tells whether the leading candidates are currently tied.
    pub fn check_start_tie_breaker(&self, tied: bool) -> Result<(), ElectionError> {
        if self.state.tie_breaker_active {
            return Err(ElectionError::AlreadyActive);
        }
        if !tied {
            return Err(ElectionError::NoTieToBreak);
        }
        Ok(())
    }

    pub fn start_tie_breaker(&mut self, tied: bool) -> Result<(), ElectionError> {
        self.check_start_tie_breaker(tied)?;
        self.state.tie_breaker_active = true;
        Ok(())
    }

    /// Ends the election. Returns false if it had already ended.
    pub fn close(&mut self) -> bool {
        if self.state.ended {
            false
        } else {
            self.state.ended = true;
            true
        }
    }
}
