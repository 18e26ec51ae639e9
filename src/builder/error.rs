//! Build errors for machine definitions.

use crate::builder::validation::DefinitionViolation;
use thiserror::Error;

/// Errors that can occur when defining a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    NoInitialState,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("{} transition endpoint(s) reference undeclared states: {}", .0.len(), describe(.0))]
    UndeclaredStates(Vec<DefinitionViolation>),

    #[error("Invalid machine definition document: {0}")]
    Parse(#[from] serde_json::Error),
}

fn describe(violations: &[DefinitionViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
