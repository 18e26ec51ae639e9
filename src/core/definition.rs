//! The shared, read-only configuration of a machine.

use super::event::Event;
use super::record::Record;
use super::state::{State, StateRegistry};
use super::transition::Transition;
use super::value::StateValue;
use crate::builder::MachineBuilder;
use crate::error::MachineError;
use std::collections::HashMap;

/// Column used to store the state when none is configured.
pub const DEFAULT_STATE_COLUMN: &str = "state";

/// Machine configuration for one governed record type.
///
/// Built once through [`MachineBuilder`] (or [`MachineDefinition::from_json`])
/// and shared read-only by every record of that type.
#[derive(Debug)]
pub struct MachineDefinition<R: Record> {
    pub(crate) initial: StateValue,
    pub(crate) column: String,
    pub(crate) states: StateRegistry<R>,
    pub(crate) events: Vec<Event<R>>,
    pub(crate) event_index: HashMap<String, usize>,
}

impl<R: Record> MachineDefinition<R> {
    pub fn builder() -> MachineBuilder<R> {
        MachineBuilder::new()
    }

    pub fn initial_state(&self) -> &StateValue {
        &self.initial
    }

    pub fn state_column(&self) -> &str {
        &self.column
    }

    pub fn states(&self) -> &StateRegistry<R> {
        &self.states
    }

    /// Names of all declared states, in definition order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.names()
    }

    pub fn event(&self, name: &str) -> Option<&Event<R>> {
        self.event_index.get(name).map(|&position| &self.events[position])
    }

    pub fn events(&self) -> impl Iterator<Item = &Event<R>> {
        self.events.iter()
    }

    /// Read the record's current stored state value.
    pub fn current_state(&self, record: &R) -> Result<StateValue, MachineError<R::Error>> {
        record
            .read_state(&self.column)
            .map(StateValue::from)
            .ok_or_else(|| MachineError::StateNotSet {
                column: self.column.clone(),
            })
    }

    /// The registered state the record is currently in.
    pub fn current_state_descriptor(&self, record: &R) -> Result<&State<R>, MachineError<R::Error>> {
        let current = self.current_state(record)?;
        self.states
            .lookup(current.as_str())
            .ok_or_else(|| MachineError::invalid_state(current.into_string()))
    }

    /// Whether the record is in the state identified by `state` (a name or a
    /// stored value).
    pub fn is_in_state(&self, record: &R, state: &str) -> Result<bool, MachineError<R::Error>> {
        let target = self
            .states
            .resolve(state)
            .ok_or_else(|| MachineError::<R::Error>::invalid_state(state))?;
        Ok(self.current_state(record)? == *target.value())
    }

    /// Every transition of `event` leaving the record's current state, in
    /// definition order. Guards are not evaluated.
    pub fn candidate_transitions_for_event(
        &self,
        record: &R,
        event: &str,
    ) -> Result<Vec<&Transition<R>>, MachineError<R::Error>> {
        let event = self.event_or_err(event)?;
        let current = self.current_state(record)?;
        let candidates = event.candidates(current.as_str()).collect();
        Ok(candidates)
    }

    /// The target of the first transition of `event` leaving the current
    /// state. This is the potential next state: guards are not evaluated.
    pub fn next_state_for_event(
        &self,
        record: &R,
        event: &str,
    ) -> Result<Option<&StateValue>, MachineError<R::Error>> {
        let event = self.event_or_err(event)?;
        let current = self.current_state(record)?;
        let next = event
            .candidates(current.as_str())
            .next()
            .map(Transition::to_value);
        Ok(next)
    }

    pub(crate) fn event_or_err(&self, name: &str) -> Result<&Event<R>, MachineError<R::Error>> {
        self.event(name).ok_or_else(|| MachineError::UnknownEvent {
            event: name.to_string(),
        })
    }

    pub(crate) fn state_or_err(&self, value: &str) -> Result<&State<R>, MachineError<R::Error>> {
        self.states
            .lookup(value)
            .ok_or_else(|| MachineError::invalid_state(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{EventBuilder, StateBuilder, TransitionBuilder};
    use crate::testing::Ticket;

    fn definition() -> MachineDefinition<Ticket> {
        MachineBuilder::new()
            .initial("needs_attention")
            .state("needs_attention")
            .state("read")
            .state("closed")
            .state("awaiting_response")
            .event(
                EventBuilder::new("view")
                    .transition(TransitionBuilder::new().from("needs_attention").to("read"))
                    .unwrap(),
            )
            .event(
                EventBuilder::new("close")
                    .transition(
                        TransitionBuilder::new()
                            .from_any(["read", "awaiting_response"])
                            .to("closed")
                            .guard("can_close"),
                    )
                    .unwrap()
                    .transition(
                        TransitionBuilder::new()
                            .from_any(["read", "awaiting_response"])
                            .to("read")
                            .guard("always_true"),
                    )
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn exposes_configuration() {
        let definition = definition();

        assert_eq!(definition.initial_state(), "needs_attention");
        assert_eq!(definition.state_column(), DEFAULT_STATE_COLUMN);
        assert_eq!(
            definition.state_names().collect::<Vec<_>>(),
            vec!["needs_attention", "read", "closed", "awaiting_response"]
        );
        assert!(definition.event("view").is_some());
        assert!(definition.event("reply").is_none());
    }

    #[test]
    fn current_state_requires_column_to_be_set() {
        let definition = definition();
        let ticket = Ticket::default();

        assert!(matches!(
            definition.current_state(&ticket),
            Err(MachineError::StateNotSet { column }) if column == "state"
        ));
    }

    #[test]
    fn next_state_ignores_guards() {
        let definition = definition();
        let ticket = Ticket::in_state("read");

        let next = definition.next_state_for_event(&ticket, "close").unwrap();

        assert_eq!(next.map(StateValue::as_str), Some("closed"));
    }

    #[test]
    fn next_state_outlives_the_record() {
        let definition = definition();
        let (next, candidates) = {
            let ticket = Ticket::in_state("read");
            (
                definition.next_state_for_event(&ticket, "close").unwrap(),
                definition
                    .candidate_transitions_for_event(&ticket, "close")
                    .unwrap(),
            )
        };

        assert_eq!(next.map(StateValue::as_str), Some("closed"));
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn next_state_is_none_without_candidates() {
        let definition = definition();
        let ticket = Ticket::in_state("closed");

        assert_eq!(definition.next_state_for_event(&ticket, "view").unwrap(), None);
    }

    #[test]
    fn candidate_transitions_keep_definition_order() {
        let definition = definition();
        let ticket = Ticket::in_state("awaiting_response");

        let candidates = definition
            .candidate_transitions_for_event(&ticket, "close")
            .unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0], &Transition::new("awaiting_response", "closed"));
        assert_eq!(candidates[1], &Transition::new("awaiting_response", "read"));
    }

    #[test]
    fn unknown_event_is_reported() {
        let definition = definition();
        let ticket = Ticket::in_state("read");

        assert!(matches!(
            definition.next_state_for_event(&ticket, "explode"),
            Err(MachineError::UnknownEvent { event }) if event == "explode"
        ));
    }

    #[test]
    fn is_in_state_resolves_names_to_values() {
        let definition: MachineDefinition<Ticket> = MachineBuilder::new()
            .initial("NEEDS_ATTENTION")
            .state(StateBuilder::new("needs_attention").value("NEEDS_ATTENTION"))
            .state(StateBuilder::new("read").value("READ"))
            .build()
            .unwrap();
        let ticket = Ticket::in_state("NEEDS_ATTENTION");

        assert!(definition.is_in_state(&ticket, "needs_attention").unwrap());
        assert!(definition.is_in_state(&ticket, "NEEDS_ATTENTION").unwrap());
        assert!(!definition.is_in_state(&ticket, "read").unwrap());
        assert!(matches!(
            definition.is_in_state(&ticket, "dead"),
            Err(MachineError::InvalidState { .. })
        ));
        assert_eq!(
            definition.current_state_descriptor(&ticket).unwrap().name(),
            "needs_attention"
        );
    }
}
