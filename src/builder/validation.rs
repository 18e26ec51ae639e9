//! Reference checks run when a definition is built.
//!
//! Every value a transition points at must be a declared state. All
//! violations are collected with stillwater's `Validation` so a broken
//! definition is reported in one pass instead of one error at a time.

use crate::core::{Event, Record, StateRegistry, StateValue};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Which end of a transition references the missing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    From,
    To,
}

/// A transition endpoint naming a state that was never declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionViolation {
    pub event: String,
    pub endpoint: Endpoint,
    pub value: StateValue,
}

impl fmt::Display for DefinitionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.endpoint {
            Endpoint::From => "from",
            Endpoint::To => "to",
        };
        write!(f, "event '{}' {} '{}'", self.event, side, self.value)
    }
}

fn check_endpoint<R: Record>(
    states: &StateRegistry<R>,
    event: &str,
    endpoint: Endpoint,
    value: &StateValue,
) -> Validation<(), NonEmptyVec<DefinitionViolation>> {
    if states.contains(value.as_str()) {
        Validation::success(())
    } else {
        Validation::fail(DefinitionViolation {
            event: event.to_string(),
            endpoint,
            value: value.clone(),
        })
    }
}

/// Check every transition endpoint of every event, accumulating all failures.
pub fn validate_references<R: Record>(
    states: &StateRegistry<R>,
    events: &[Event<R>],
) -> Validation<(), NonEmptyVec<DefinitionViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<DefinitionViolation>>> = Vec::new();

    for event in events {
        for transition in event.transitions() {
            checks.push(check_endpoint(
                states,
                event.name(),
                Endpoint::From,
                transition.from_value(),
            ));
            checks.push(check_endpoint(
                states,
                event.name(),
                Endpoint::To,
                transition.to_value(),
            ));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{EventBuilder, StateBuilder, TransitionBuilder};
    use crate::testing::Ticket;

    fn registry(names: &[&str]) -> StateRegistry<Ticket> {
        let mut registry = StateRegistry::new();
        for name in names {
            registry.register(StateBuilder::new(*name).build());
        }
        registry
    }

    #[test]
    fn declared_endpoints_pass() {
        let states = registry(&["needs_attention", "read"]);
        let events = vec![EventBuilder::new("view")
            .transition(TransitionBuilder::new().from("needs_attention").to("read"))
            .unwrap()
            .build()];

        assert!(validate_references(&states, &events).is_success());
    }

    #[test]
    fn accumulates_every_violation() {
        let states = registry(&["read"]);
        let events = vec![
            EventBuilder::new("view")
                .transition(TransitionBuilder::new().from("needs_attention").to("read"))
                .unwrap()
                .build(),
            EventBuilder::new("junk")
                .transition(TransitionBuilder::new().from("read").to("junk"))
                .unwrap()
                .build(),
        ];

        match validate_references(&states, &events) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.iter().any(|v| v.endpoint == Endpoint::From
                    && v.value == "needs_attention"));
                assert!(errors
                    .iter()
                    .any(|v| v.endpoint == Endpoint::To && v.event == "junk"));
            }
            Validation::Success(_) => panic!("Expected violations, got success"),
        }
    }

    #[test]
    fn events_without_transitions_are_valid() {
        let states = registry(&[]);
        let events = vec![EventBuilder::<Ticket>::new("noop").build()];

        assert!(validate_references(&states, &events).is_success());
    }

    #[test]
    fn violation_display_names_event_and_value() {
        let violation = DefinitionViolation {
            event: "junk".to_string(),
            endpoint: Endpoint::To,
            value: StateValue::new("junk"),
        };

        assert_eq!(violation.to_string(), "event 'junk' to 'junk'");
    }
}
