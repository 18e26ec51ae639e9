//! Guard predicates for controlling transitions.
//!
//! A guard is an action whose result decides whether a transition is
//! eligible. It is evaluated against the record right before the transition
//! would be performed.

use super::action::ActionRef;
use super::record::Record;
use std::fmt;

/// Predicate that must pass for a transition to be performed.
///
/// Transitions without a guard always pass.
///
/// # Example
///
/// ```rust
/// # use statewise::{ActionOutput, Guard, Record, StateValue};
/// # #[derive(Debug)]
/// # struct Never;
/// # impl std::fmt::Display for Never {
/// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str("never") }
/// # }
/// # impl std::error::Error for Never {}
/// # #[derive(Default)]
/// # struct Invoice { state: Option<String>, paid: bool }
/// # impl Record for Invoice {
/// #     type Error = Never;
/// #     fn read_state(&self, _: &str) -> Option<&str> { self.state.as_deref() }
/// #     fn assign_state(&mut self, _: &str, v: &StateValue) { self.state = Some(v.to_string()) }
/// #     fn persist_state(&mut self, c: &str, v: &StateValue) -> Result<(), Never> { self.assign_state(c, v); Ok(()) }
/// #     fn call_action(&mut self, _: &str) -> Result<ActionOutput, Never> { Ok(ActionOutput::Done) }
/// # }
/// let is_paid = Guard::new(|invoice: &Invoice| invoice.paid);
///
/// let mut invoice = Invoice::default();
/// assert!(!is_paid.check(&mut invoice).unwrap());
///
/// invoice.paid = true;
/// assert!(is_paid.check(&mut invoice).unwrap());
/// ```
pub struct Guard<R: Record> {
    action: ActionRef<R>,
}

impl<R: Record> Guard<R> {
    /// Create a guard from a pure predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        Self {
            action: ActionRef::predicate(predicate),
        }
    }

    /// Create a guard that calls a named method on the record.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            action: ActionRef::named(name),
        }
    }

    pub fn action(&self) -> &ActionRef<R> {
        &self.action
    }

    /// Evaluate the guard. Anything but an explicit `false` passes.
    pub fn check(&self, record: &mut R) -> Result<bool, R::Error> {
        self.action.invoke(record).map(|output| output.passes())
    }
}

impl<R: Record> From<ActionRef<R>> for Guard<R> {
    fn from(action: ActionRef<R>) -> Self {
        Self { action }
    }
}

impl<R: Record> From<&str> for Guard<R> {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl<R: Record> Clone for Guard<R> {
    fn clone(&self) -> Self {
        Self {
            action: self.action.clone(),
        }
    }
}

impl<R: Record> fmt::Debug for Guard<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Guard").field(&self.action).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActionOutput;
    use crate::testing::{Ticket, TicketError};

    #[test]
    fn predicate_guard_follows_record() {
        let guard = Guard::new(|t: &Ticket| t.can_close);
        let mut ticket = Ticket::default();

        assert!(!guard.check(&mut ticket).unwrap());
        ticket.can_close = true;
        assert!(guard.check(&mut ticket).unwrap());
    }

    #[test]
    fn named_guard_dispatches_to_host() {
        let mut ticket = Ticket::default();

        assert!(Guard::<Ticket>::named("always_true").check(&mut ticket).unwrap());
        assert!(!Guard::<Ticket>::named("never").check(&mut ticket).unwrap());
    }

    #[test]
    fn side_effect_only_action_counts_as_pass() {
        let guard: Guard<Ticket> =
            ActionRef::<Ticket>::inline(|_: &mut Ticket| Ok::<(), TicketError>(())).into();
        let mut ticket = Ticket::default();

        assert!(guard.check(&mut ticket).unwrap());
    }

    #[test]
    fn failing_guard_propagates_host_error() {
        let mut ticket = Ticket {
            fail_action: Some("can_close"),
            ..Ticket::default()
        };

        let result = Guard::<Ticket>::named("can_close").check(&mut ticket);

        assert_eq!(result, Err(TicketError::Action("can_close".into())));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|t: &Ticket| t.writes == 0);
        let mut ticket = Ticket::default();

        let first = guard.check(&mut ticket).unwrap();
        let second = guard.check(&mut ticket).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            guard.action().invoke(&mut ticket).unwrap(),
            ActionOutput::Verdict(true)
        );
    }
}
