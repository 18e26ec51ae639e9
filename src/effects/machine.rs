//! Per-record machine facade.

use crate::core::{MachineDefinition, Record, State, StateValue, Transition};
use crate::error::MachineError;

/// A machine definition bound to one record.
///
/// This is the handle callers use day to day: it reads the record's current
/// state, answers "what would this event do", and fires events by name.
///
/// # Example
///
/// ```rust
/// # use statewise::{ActionOutput, Record, StateValue};
/// use statewise::builder::{EventBuilder, MachineBuilder, TransitionBuilder};
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
///     .state("closed")
///     .event(
///         EventBuilder::new("close_order")
///             .transition(TransitionBuilder::new().from("open").to("closed"))
///             .unwrap(),
///     )
///     .build()
///     .unwrap();
///
/// let mut order = Order::default();
/// definition.create(&mut order, |_| Ok(())).unwrap();
///
/// let mut machine = definition.bind(&mut order);
/// assert!(machine.is_in_state("open").unwrap());
/// assert!(machine.fire("close_order").unwrap());
/// assert!(machine.is_in_state("closed").unwrap());
/// assert!(!machine.fire("close_order").unwrap());
/// ```
pub struct Machine<'d, 'r, R: Record> {
    definition: &'d MachineDefinition<R>,
    record: &'r mut R,
}

impl<'d, 'r, R: Record> Machine<'d, 'r, R> {
    pub fn new(definition: &'d MachineDefinition<R>, record: &'r mut R) -> Self {
        Self { definition, record }
    }

    pub fn definition(&self) -> &'d MachineDefinition<R> {
        self.definition
    }

    pub fn record(&self) -> &R {
        &*self.record
    }

    pub fn record_mut(&mut self) -> &mut R {
        &mut *self.record
    }

    /// The stored value of the record's current state.
    pub fn current_state(&self) -> Result<StateValue, MachineError<R::Error>> {
        self.definition.current_state(self.record)
    }

    /// The descriptor of the record's current state.
    pub fn current_state_descriptor(&self) -> Result<&'d State<R>, MachineError<R::Error>> {
        self.definition.current_state_descriptor(self.record)
    }

    pub fn is_in_state(&self, state: &str) -> Result<bool, MachineError<R::Error>> {
        self.definition.is_in_state(self.record, state)
    }

    pub fn next_state_for_event(
        &self,
        event: &str,
    ) -> Result<Option<&'d StateValue>, MachineError<R::Error>> {
        self.definition.next_state_for_event(self.record, event)
    }

    pub fn candidate_transitions_for_event(
        &self,
        event: &str,
    ) -> Result<Vec<&'d Transition<R>>, MachineError<R::Error>> {
        self.definition.candidate_transitions_for_event(self.record, event)
    }

    /// Fire `event`. `Ok(false)` means no transition applied.
    pub fn fire(&mut self, event: &str) -> Result<bool, MachineError<R::Error>> {
        self.definition.fire(self.record, event)
    }
}

impl<R: Record> MachineDefinition<R> {
    /// Bind this definition to a record.
    pub fn bind<'d, 'r>(&'d self, record: &'r mut R) -> Machine<'d, 'r, R> {
        Machine::new(self, record)
    }
}

/// A record type with a single, process-wide machine definition.
///
/// Implementors hand out their definition (typically held in a
/// `std::sync::OnceLock`) and get the machine operations as methods.
pub trait StateMachine: Record + Sized + 'static {
    fn machine_definition() -> &'static MachineDefinition<Self>;

    fn machine(&mut self) -> Machine<'static, '_, Self> {
        Machine::new(Self::machine_definition(), self)
    }

    fn current_state(&self) -> Result<StateValue, MachineError<Self::Error>> {
        Self::machine_definition().current_state(self)
    }

    fn is_in_state(&self, state: &str) -> Result<bool, MachineError<Self::Error>> {
        Self::machine_definition().is_in_state(self, state)
    }

    fn next_state_for_event(
        &self,
        event: &str,
    ) -> Result<Option<&'static StateValue>, MachineError<Self::Error>> {
        Self::machine_definition().next_state_for_event(self, event)
    }

    fn fire(&mut self, event: &str) -> Result<bool, MachineError<Self::Error>> {
        Self::machine_definition().fire(self, event)
    }

    /// Create this record through `insert`, running the initial state hooks.
    fn create_with<F>(&mut self, insert: F) -> Result<(), MachineError<Self::Error>>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        Self::machine_definition().create(self, insert)
    }
}
