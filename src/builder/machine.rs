//! Builder for constructing machine definitions.

use crate::builder::error::BuildError;
use crate::builder::event::EventBuilder;
use crate::builder::state::StateBuilder;
use crate::builder::validation::validate_references;
use crate::core::{Event, MachineDefinition, Record, StateRegistry, StateValue, DEFAULT_STATE_COLUMN};
use std::collections::HashMap;
use stillwater::validation::Validation;

/// Builder for constructing machine definitions with a fluent API.
///
/// # Example
///
/// ```rust
/// # use statewise::{ActionOutput, Record, StateValue};
/// use statewise::builder::{EventBuilder, MachineBuilder, StateBuilder, TransitionBuilder};
/// # #[derive(Debug)]
/// # struct Never;
/// # impl std::fmt::Display for Never {
/// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str("never") }
/// # }
/// # impl std::error::Error for Never {}
/// # #[derive(Default)]
/// # struct Order { state: Option<String> }
/// # impl Record for Order {
/// #     type Error = Never;
/// #     fn read_state(&self, _: &str) -> Option<&str> { self.state.as_deref() }
/// #     fn assign_state(&mut self, _: &str, v: &StateValue) { self.state = Some(v.to_string()) }
/// #     fn persist_state(&mut self, c: &str, v: &StateValue) -> Result<(), Never> { self.assign_state(c, v); Ok(()) }
/// #     fn call_action(&mut self, _: &str) -> Result<ActionOutput, Never> { Ok(ActionOutput::Done) }
/// # }
///
/// let definition = MachineBuilder::<Order>::new()
///     .initial("open")
///     .state("open")
///     .state(StateBuilder::new("closed").after("send_notice"))
///     .event(
///         EventBuilder::new("close_order")
///             .transition(TransitionBuilder::new().from("open").to("closed"))?,
///     )
///     .build()?;
///
/// assert_eq!(definition.state_column(), "state");
/// # Ok::<(), statewise::builder::BuildError>(())
/// ```
pub struct MachineBuilder<R: Record> {
    initial: Option<StateValue>,
    column: Option<String>,
    states: StateRegistry<R>,
    events: Vec<EventBuilder<R>>,
}

impl<R: Record> MachineBuilder<R> {
    pub fn new() -> Self {
        Self {
            initial: None,
            column: None,
            states: StateRegistry::new(),
            events: Vec::new(),
        }
    }

    /// Set the initial state value (required).
    pub fn initial(mut self, state: impl Into<StateValue>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Set the name of the state column. Defaults to `"state"`.
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Declare a state. Declaring the same value again replaces it.
    pub fn state(mut self, state: impl Into<StateBuilder<R>>) -> Self {
        self.states.register(state.into().build());
        self
    }

    /// Declare an event. Declaring the same name again replaces it.
    pub fn event(mut self, event: EventBuilder<R>) -> Self {
        self.events.push(event);
        self
    }

    /// Build the definition.
    /// Returns an error if no initial state was given or if any transition
    /// references an undeclared state.
    pub fn build(self) -> Result<MachineDefinition<R>, BuildError> {
        let initial = self.initial.ok_or(BuildError::NoInitialState)?;

        let mut events: Vec<Event<R>> = Vec::new();
        let mut event_index = HashMap::new();
        for event in self.events.into_iter().map(EventBuilder::build) {
            match event_index.get(event.name()) {
                Some(&position) => events[position] = event,
                None => {
                    event_index.insert(event.name().to_string(), events.len());
                    events.push(event);
                }
            }
        }

        if let Validation::Failure(violations) = validate_references(&self.states, &events) {
            return Err(BuildError::UndeclaredStates(
                violations.iter().cloned().collect(),
            ));
        }

        Ok(MachineDefinition {
            initial,
            column: self
                .column
                .unwrap_or_else(|| DEFAULT_STATE_COLUMN.to_string()),
            states: self.states,
            events,
            event_index,
        })
    }
}

impl<R: Record> Default for MachineBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
