//! Builder API for ergonomic machine construction.
//!
//! Everything is constructed through builders and sealed on `build()`:
//! states, events and their transitions are immutable afterwards.

pub mod error;
pub mod event;
pub mod machine;
pub mod macros;
pub mod state;
pub mod transition;
pub mod validation;

pub use error::BuildError;
pub use event::EventBuilder;
pub use machine::MachineBuilder;
pub use state::StateBuilder;
pub use transition::TransitionBuilder;
pub use validation::{DefinitionViolation, Endpoint};

use crate::core::{Guard, Metadata, Record, StateValue, Transition};

/// Create an unguarded transition.
///
/// # Example
///
/// ```
/// use statewise::builder::simple_transition;
/// # use statewise::{ActionOutput, Record, StateValue};
/// # #[derive(Debug)]
/// # struct Never;
/// # impl std::fmt::Display for Never {
/// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str("never") }
/// # }
/// # impl std::error::Error for Never {}
/// # struct Order { state: Option<String> }
/// # impl Record for Order {
/// #     type Error = Never;
/// #     fn read_state(&self, _: &str) -> Option<&str> { self.state.as_deref() }
/// #     fn assign_state(&mut self, _: &str, v: &StateValue) { self.state = Some(v.to_string()) }
/// #     fn persist_state(&mut self, c: &str, v: &StateValue) -> Result<(), Never> { self.assign_state(c, v); Ok(()) }
/// #     fn call_action(&mut self, _: &str) -> Result<ActionOutput, Never> { Ok(ActionOutput::Done) }
/// # }
///
/// let transition = simple_transition::<Order>("open", "closed");
/// assert_eq!(transition.to_value(), "closed");
/// ```
pub fn simple_transition<R: Record>(
    from: impl Into<StateValue>,
    to: impl Into<StateValue>,
) -> Transition<R> {
    Transition::new(from, to)
}

/// Create a transition with a guard.
pub fn guarded_transition<R: Record>(
    from: impl Into<StateValue>,
    to: impl Into<StateValue>,
    guard: impl Into<Guard<R>>,
) -> Transition<R> {
    Transition {
        from: from.into(),
        to: to.into(),
        guard: Some(guard.into()),
        metadata: Metadata::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Ticket;

    #[test]
    fn simple_transition_builds() {
        let transition = simple_transition::<Ticket>("needs_attention", "read");

        assert_eq!(transition.from_value(), "needs_attention");
        assert_eq!(transition.to_value(), "read");
        assert!(transition.guard().is_none());
    }

    #[test]
    fn guarded_transition_respects_guard() {
        let transition = guarded_transition::<Ticket>("read", "closed", Guard::new(|t: &Ticket| t.can_close));
        let mut ticket = Ticket::in_state("read");

        assert!(!transition.guard_passes(&mut ticket).unwrap());
        ticket.can_close = true;
        assert!(transition.guard_passes(&mut ticket).unwrap());
    }
}
