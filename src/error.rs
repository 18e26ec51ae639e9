//! Errors raised while running a machine against a record.

use crate::core::StateValue;
use std::fmt;
use thiserror::Error;

/// The step of a transition during which a host action was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionPhase {
    Guard,
    Enter,
    After,
    Exit,
}

impl ActionPhase {
    /// Whether actions of this phase run after the new state was persisted.
    ///
    /// A failure in such a phase leaves the new state in storage; nothing is
    /// rolled back.
    pub fn after_persist(self) -> bool {
        matches!(self, Self::After | Self::Exit)
    }
}

impl fmt::Display for ActionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guard => write!(f, "guard"),
            Self::Enter => write!(f, "enter"),
            Self::After => write!(f, "after"),
            Self::Exit => write!(f, "exit"),
        }
    }
}

/// Errors surfaced to the caller of a machine operation.
///
/// `E` is the host's error type. Host failures are wrapped, never swallowed,
/// and keep the original error as their source.
#[derive(Debug, Error)]
pub enum MachineError<E: std::error::Error + 'static> {
    #[error("'{state}' is not a registered state")]
    InvalidState { state: String },

    #[error("no event named '{event}' is defined")]
    UnknownEvent { event: String },

    #[error("state column '{column}' has not been set")]
    StateNotSet { column: String },

    #[error("{phase} action '{action}' failed: {source}")]
    Action {
        phase: ActionPhase,
        action: String,
        #[source]
        source: E,
    },

    #[error("failed to persist state '{state}': {source}")]
    Persist {
        state: StateValue,
        #[source]
        source: E,
    },

    #[error("record store failed: {0}")]
    Store(#[source] E),
}

impl<E: std::error::Error + 'static> MachineError<E> {
    pub(crate) fn invalid_state(state: impl Into<String>) -> Self {
        Self::InvalidState {
            state: state.into(),
        }
    }

    /// The underlying host error, if this failure came from the host.
    pub fn host_error(&self) -> Option<&E> {
        match self {
            Self::Action { source, .. } | Self::Persist { source, .. } => Some(source),
            Self::Store(source) => Some(source),
            _ => None,
        }
    }

    /// Consume the error and return the underlying host error, if any.
    pub fn into_host_error(self) -> Option<E> {
        match self {
            Self::Action { source, .. } | Self::Persist { source, .. } => Some(source),
            Self::Store(source) => Some(source),
            _ => None,
        }
    }
}
