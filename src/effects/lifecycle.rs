//! Record creation hooks.
//!
//! The host calls [`MachineDefinition::initialize`] before a record is first
//! written and [`MachineDefinition::run_initial_actions`] right after the
//! write succeeds. [`MachineDefinition::create`] wraps both around the host's
//! own insert.

use crate::core::{MachineDefinition, Record};
use crate::effects::transition::run_action;
use crate::error::{ActionPhase, MachineError};
use tracing::debug;

impl<R: Record> MachineDefinition<R> {
    /// Assign the initial state to a record that has not been created yet.
    pub fn initialize(&self, record: &mut R) {
        record.assign_state(&self.column, &self.initial);
    }

    /// Run the initial state's enter action, then its after actions.
    ///
    /// The initial state must be registered by now. Its exit action is never
    /// run here since there is no previous state.
    pub fn run_initial_actions(&self, record: &mut R) -> Result<(), MachineError<R::Error>> {
        let initial = self.state_or_err(self.initial.as_str())?;

        debug!(state = %self.initial, "running initial state actions");
        if let Some(enter) = initial.enter_action() {
            run_action(enter, ActionPhase::Enter, record)?;
        }
        for after in initial.after_actions() {
            run_action(after, ActionPhase::After, record)?;
        }
        Ok(())
    }

    /// Create a record: assign the initial state, let the host insert it,
    /// then run the initial state's actions.
    ///
    /// A failing insert is reported as [`MachineError::Persist`] and no
    /// action runs.
    pub fn create<F>(&self, record: &mut R, insert: F) -> Result<(), MachineError<R::Error>>
    where
        F: FnOnce(&mut R) -> Result<(), R::Error>,
    {
        self.initialize(record);
        insert(record).map_err(|source| MachineError::Persist {
            state: self.initial.clone(),
            source,
        })?;
        self.run_initial_actions(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{MachineBuilder, StateBuilder};
    use crate::testing::{Ticket, TicketError};

    fn definition() -> MachineDefinition<Ticket> {
        MachineBuilder::new()
            .initial("needs_attention")
            .column("state_machine")
            .state(
                StateBuilder::new("needs_attention")
                    .enter("needs_attention_enter")
                    .exit("needs_attention_exit")
                    .after("needs_attention_after"),
            )
            .state("read")
            .build()
            .unwrap()
    }

    #[test]
    fn initialize_assigns_initial_state_without_persisting() {
        let definition = definition();
        let mut ticket = Ticket::default();

        definition.initialize(&mut ticket);

        assert_eq!(ticket.state.as_deref(), Some("needs_attention"));
        assert_eq!(ticket.column.as_deref(), Some("state_machine"));
        assert_eq!(ticket.writes, 0);
        assert!(ticket.journal.is_empty());
    }

    #[test]
    fn create_runs_enter_then_after_once() {
        let definition = definition();
        let mut ticket = Ticket::default();

        definition
            .create(&mut ticket, |t| {
                t.journal.push("insert".to_string());
                Ok(())
            })
            .unwrap();

        assert_eq!(
            ticket.journal,
            vec!["insert", "needs_attention_enter", "needs_attention_after"]
        );
        assert!(definition.is_in_state(&ticket, "needs_attention").unwrap());
    }

    #[test]
    fn failed_insert_runs_no_actions() {
        let definition = definition();
        let mut ticket = Ticket::default();

        let err = definition
            .create(&mut ticket, |_| Err(TicketError::Storage))
            .unwrap_err();

        assert!(matches!(err, MachineError::Persist { .. }));
        assert!(ticket.journal.is_empty());
    }

    #[test]
    fn unregistered_initial_state_fails_at_creation() {
        let definition: MachineDefinition<Ticket> = MachineBuilder::new()
            .initial("nowhere")
            .state("read")
            .build()
            .unwrap();
        let mut ticket = Ticket::default();

        let err = definition.create(&mut ticket, |_| Ok(())).unwrap_err();

        assert!(matches!(err, MachineError::InvalidState { ref state } if state == "nowhere"));
    }
}
