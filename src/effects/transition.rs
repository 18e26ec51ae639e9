//! Performing transitions and firing events.
//!
//! A transition from `A` to `B` (with `A != B`) runs, in order:
//! the guard, `B`'s enter action, the state write, `B`'s after actions and
//! finally `A`'s exit action. When the record is already in `B` (a loopback)
//! only the guard and the write happen.
//!
//! Failures are not rolled back. If an after or exit action fails, the new
//! state has already been persisted and stays persisted; the error's
//! [`ActionPhase`] tells the caller which side of the write it happened on.

use crate::core::{ActionRef, Event, MachineDefinition, Record, Transition};
use crate::error::{ActionPhase, MachineError};
use tracing::{debug, trace};

pub(crate) fn run_action<R: Record>(
    action: &ActionRef<R>,
    phase: ActionPhase,
    record: &mut R,
) -> Result<(), MachineError<R::Error>> {
    action
        .invoke(record)
        .map(|_| ())
        .map_err(|source| MachineError::Action {
            phase,
            action: action.label().to_string(),
            source,
        })
}

impl<R: Record> Transition<R> {
    /// Perform this transition on `record`.
    ///
    /// Returns `Ok(false)` without touching the record when the guard
    /// rejects the transition.
    ///
    /// # Partial failures
    ///
    /// Nothing is rolled back. If an after or exit action fails, the new
    /// state has already been persisted and stays persisted. Check
    /// [`ActionPhase::after_persist`] on the returned
    /// [`MachineError::Action`] to tell which side of the write failed.
    pub fn perform(
        &self,
        definition: &MachineDefinition<R>,
        record: &mut R,
    ) -> Result<bool, MachineError<R::Error>> {
        let passes = self
            .guard_passes(record)
            .map_err(|source| MachineError::Action {
                phase: ActionPhase::Guard,
                action: self
                    .guard()
                    .map(|guard| guard.action().label().to_string())
                    .unwrap_or_default(),
                source,
            })?;
        if !passes {
            trace!(from = %self.from, to = %self.to, "guard rejected transition");
            return Ok(false);
        }

        let current = definition.current_state(record)?;
        let loopback = current == self.to;
        let target = definition.state_or_err(self.to.as_str())?;

        if !loopback {
            if let Some(enter) = target.enter_action() {
                run_action(enter, ActionPhase::Enter, record)?;
            }
        }

        record
            .persist_state(definition.state_column(), &self.to)
            .map_err(|source| MachineError::Persist {
                state: self.to.clone(),
                source,
            })?;

        if !loopback {
            for after in target.after_actions() {
                run_action(after, ActionPhase::After, record)?;
            }
            let exit = definition
                .states()
                .lookup(current.as_str())
                .and_then(|source| source.exit_action());
            if let Some(exit) = exit {
                run_action(exit, ActionPhase::Exit, record)?;
            }
        }

        debug!(from = %current, to = %self.to, loopback, "transition performed");
        Ok(true)
    }
}

impl<R: Record> Event<R> {
    /// Fire this event on `record`.
    ///
    /// Candidates leaving the current state are tried in definition order and
    /// the first one whose guard passes is performed. Returns `Ok(false)`,
    /// leaving the record untouched, when no candidate applies.
    ///
    /// # Partial failures
    ///
    /// Nothing is rolled back. If an after or exit action fails, the new
    /// state has already been persisted and stays persisted. Check
    /// [`ActionPhase::after_persist`] on the returned
    /// [`MachineError::Action`] to tell which side of the write failed.
    pub fn fire(
        &self,
        definition: &MachineDefinition<R>,
        record: &mut R,
    ) -> Result<bool, MachineError<R::Error>> {
        let current = definition.current_state(record)?;

        for transition in self.candidates(current.as_str()) {
            if transition.perform(definition, record)? {
                return Ok(true);
            }
        }

        debug!(event = %self.name(), state = %current, "no applicable transition");
        Ok(false)
    }
}

impl<R: Record> MachineDefinition<R> {
    /// Fire the event named `event` on `record`.
    ///
    /// An event with no applicable transition is not an error: it returns
    /// `Ok(false)`. An event name that was never defined is.
    ///
    /// # Partial failures
    ///
    /// Nothing is rolled back. If an after or exit action fails, the new
    /// state has already been persisted and stays persisted. Check
    /// [`ActionPhase::after_persist`] on the returned
    /// [`MachineError::Action`] to tell which side of the write failed.
    ///
    /// ```rust
    /// # use statewise::{ActionOutput, MachineError, Record, StateValue};
    /// # use statewise::builder::{EventBuilder, MachineBuilder, StateBuilder, TransitionBuilder};
    /// # #[derive(Debug)]
    /// # struct MailerDown;
    /// # impl std::fmt::Display for MailerDown {
    /// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str("mailer down") }
    /// # }
    /// # impl std::error::Error for MailerDown {}
    /// # #[derive(Default)]
    /// # struct Order { state: Option<String>, stored: Option<String> }
    /// # impl Record for Order {
    /// #     type Error = MailerDown;
    /// #     fn read_state(&self, _: &str) -> Option<&str> { self.state.as_deref() }
    /// #     fn assign_state(&mut self, _: &str, v: &StateValue) { self.state = Some(v.to_string()) }
    /// #     fn persist_state(&mut self, c: &str, v: &StateValue) -> Result<(), MailerDown> {
    /// #         self.assign_state(c, v);
    /// #         self.stored = Some(v.to_string());
    /// #         Ok(())
    /// #     }
    /// #     fn call_action(&mut self, _: &str) -> Result<ActionOutput, MailerDown> { Err(MailerDown) }
    /// # }
    /// let definition = MachineBuilder::<Order>::new()
    ///     .initial("open")
    ///     .state("open")
    ///     .state(StateBuilder::new("shipped").after("email_customer"))
    ///     .event(
    ///         EventBuilder::new("ship")
    ///             .transition(TransitionBuilder::new().from("open").to("shipped"))
    ///             .unwrap(),
    ///     )
    ///     .build()
    ///     .unwrap();
    /// let mut order = Order { state: Some("open".into()), ..Order::default() };
    ///
    /// match definition.fire(&mut order, "ship") {
    ///     Err(MachineError::Action { phase, .. }) => assert!(phase.after_persist()),
    ///     other => panic!("expected an action failure, got {other:?}"),
    /// }
    /// assert_eq!(order.stored.as_deref(), Some("shipped"));
    /// ```
    pub fn fire(&self, record: &mut R, event: &str) -> Result<bool, MachineError<R::Error>> {
        self.event_or_err(event)?.fire(self, record)
    }
}
