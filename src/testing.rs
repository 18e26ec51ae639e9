//! Shared fixtures for unit tests.

use crate::core::{ActionOutput, Record, StateValue};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum TicketError {
    #[error("action {0} failed")]
    Action(String),

    #[error("storage unavailable")]
    Storage,
}

/// In-memory record that journals every action and write it sees.
#[derive(Debug, Default, Clone)]
pub(crate) struct Ticket {
    pub state: Option<String>,
    pub subject: String,
    pub column: Option<String>,
    pub journal: Vec<String>,
    pub writes: usize,
    pub can_close: bool,
    pub fail_action: Option<&'static str>,
    pub fail_persist: bool,
}

impl Ticket {
    pub fn in_state(state: &str) -> Self {
        Self {
            state: Some(state.to_string()),
            ..Self::default()
        }
    }
}

impl Record for Ticket {
    type Error = TicketError;

    fn read_state(&self, _column: &str) -> Option<&str> {
        self.state.as_deref()
    }

    fn assign_state(&mut self, column: &str, value: &StateValue) {
        self.column = Some(column.to_string());
        self.state = Some(value.to_string());
    }

    fn persist_state(&mut self, column: &str, value: &StateValue) -> Result<(), TicketError> {
        if self.fail_persist {
            return Err(TicketError::Storage);
        }
        self.writes += 1;
        self.journal.push(format!("persist:{value}"));
        self.assign_state(column, value);
        Ok(())
    }

    fn call_action(&mut self, name: &str) -> Result<ActionOutput, TicketError> {
        if self.fail_action == Some(name) {
            return Err(TicketError::Action(name.to_string()));
        }
        match name {
            "can_close" => Ok(ActionOutput::Verdict(self.can_close)),
            "always_true" => Ok(ActionOutput::Verdict(true)),
            "never" => Ok(ActionOutput::Verdict(false)),
            other => {
                self.journal.push(other.to_string());
                Ok(ActionOutput::Done)
            }
        }
    }
}
