//! Timer state structure and transitions

use crate::countdown::Tick;

/// The two externally visible states of a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Counting,
    Expired,
}

impl ClockState {
    /// Create the initial counting state
    pub fn new() -> Self {
        ClockState::Counting
    }

    /// State implied by a single tick
    pub fn from_tick(tick: &Tick) -> Self {
        if tick.expired {
            ClockState::Expired
        } else {
            ClockState::Counting
        }
    }

    /// Fold a tick into the state. Returns true only on the transition
    /// into `Expired`; `Expired` never goes back to `Counting`.
    pub fn observe(&mut self, tick: &Tick) -> bool {
        match (*self, ClockState::from_tick(tick)) {
            (ClockState::Counting, ClockState::Expired) => {
                *self = ClockState::Expired;
                true
            }
            _ => false,
        }
    }

    /// Check if the countdown has finished
    pub fn is_expired(&self) -> bool {
        *self == ClockState::Expired
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new()
    }
}
