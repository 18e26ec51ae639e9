//! The contract a host record type satisfies to be governed by a machine.
//!
//! The engine never touches storage directly. Everything it needs from the
//! host goes through [`Record`]: reading the state column, assigning it on an
//! unsaved record, persisting it durably, and dispatching named actions.

use super::value::StateValue;

/// Result of invoking an action against a record.
///
/// Guards are evaluated "boolean-ish": anything other than an explicit
/// `Verdict(false)` counts as passing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutput {
    /// The action ran for its side effects and produced no verdict.
    Done,
    /// The action produced a boolean verdict.
    Verdict(bool),
}

impl ActionOutput {
    pub fn passes(self) -> bool {
        !matches!(self, Self::Verdict(false))
    }
}

impl From<()> for ActionOutput {
    fn from(_: ()) -> Self {
        Self::Done
    }
}

impl From<bool> for ActionOutput {
    fn from(verdict: bool) -> Self {
        Self::Verdict(verdict)
    }
}

/// A persistent record whose state column is managed by a machine.
///
/// # Example
///
/// ```rust
/// use statewise::{ActionOutput, Record, StateValue};
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct OrderError(String);
///
/// impl fmt::Display for OrderError {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(&self.0)
///     }
/// }
///
/// impl std::error::Error for OrderError {}
///
/// #[derive(Default)]
/// struct Order {
///     state: Option<String>,
///     notified: bool,
/// }
///
/// impl Record for Order {
///     type Error = OrderError;
///
///     fn read_state(&self, _column: &str) -> Option<&str> {
///         self.state.as_deref()
///     }
///
///     fn assign_state(&mut self, _column: &str, value: &StateValue) {
///         self.state = Some(value.to_string());
///     }
///
///     fn persist_state(&mut self, column: &str, value: &StateValue) -> Result<(), OrderError> {
///         // a real host would write to its database here
///         self.assign_state(column, value);
///         Ok(())
///     }
///
///     fn call_action(&mut self, name: &str) -> Result<ActionOutput, OrderError> {
///         match name {
///             "notify" => {
///                 self.notified = true;
///                 Ok(ActionOutput::Done)
///             }
///             other => Err(OrderError(format!("no action named {other}"))),
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Failure raised by the host's storage or by one of its actions.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the raw value of the state column, if it has been set.
    fn read_state(&self, column: &str) -> Option<&str>;

    /// Set the state column in memory, without persisting it.
    ///
    /// Used on records that have not been created yet.
    fn assign_state(&mut self, column: &str, value: &StateValue);

    /// Durably write the state column.
    ///
    /// The write must be complete by the time this returns `Ok`.
    fn persist_state(&mut self, column: &str, value: &StateValue) -> Result<(), Self::Error>;

    /// Invoke the host method registered under `name`.
    fn call_action(&mut self, name: &str) -> Result<ActionOutput, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_false_verdict_fails() {
        assert!(ActionOutput::Done.passes());
        assert!(ActionOutput::Verdict(true).passes());
        assert!(!ActionOutput::Verdict(false).passes());
    }

    #[test]
    fn outputs_convert_from_unit_and_bool() {
        assert_eq!(ActionOutput::from(()), ActionOutput::Done);
        assert_eq!(ActionOutput::from(false), ActionOutput::Verdict(false));
    }
}
