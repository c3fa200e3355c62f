use crate::{Error, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Whether an interaction has received its initial response yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcknowledgementState {
    Unacknowledged,
    Acknowledged,
}

/// Shared acknowledgement tag. Clones observe the same state, so an action built from an
/// interaction can mark it once executed.
#[derive(Debug, Clone)]
pub struct Acknowledgement {
    state: Arc<Mutex<AcknowledgementState>>,
}

impl Acknowledgement {
    pub fn new(state: AcknowledgementState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn state(&self) -> AcknowledgementState {
        *self.state.lock()
    }

    /// Moves to `Acknowledged`, failing if the interaction was already acknowledged.
    pub fn acknowledge(&self) -> Result<()> {
        let mut state = self.state.lock();
        match *state {
            AcknowledgementState::Acknowledged => Error::AlreadyAcknowledged.into(),
            AcknowledgementState::Unacknowledged => {
                *state = AcknowledgementState::Acknowledged;
                Ok(())
            }
        }
    }
}

impl Default for Acknowledgement {
    fn default() -> Self {
        Self::new(AcknowledgementState::Unacknowledged)
    }
}
