//! Builder for state descriptors.

use crate::core::{ActionRef, Record, State, StateValue};

/// Builder for a single state.
///
/// The stored value defaults to the state's name.
pub struct StateBuilder<R: Record> {
    name: String,
    value: Option<StateValue>,
    enter: Option<ActionRef<R>>,
    exit: Option<ActionRef<R>>,
    after: Vec<ActionRef<R>>,
}

impl<R: Record> StateBuilder<R> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            enter: None,
            exit: None,
            after: Vec::new(),
        }
    }

    /// Override the value stored in the state column.
    pub fn value(mut self, value: impl Into<StateValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn enter(mut self, action: impl Into<ActionRef<R>>) -> Self {
        self.enter = Some(action.into());
        self
    }

    pub fn exit(mut self, action: impl Into<ActionRef<R>>) -> Self {
        self.exit = Some(action.into());
        self
    }

    /// Append an after action. Repeated calls keep their order.
    pub fn after(mut self, action: impl Into<ActionRef<R>>) -> Self {
        self.after.push(action.into());
        self
    }

    /// Append several after actions at once.
    pub fn after_all<I, A>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<ActionRef<R>>,
    {
        self.after.extend(actions.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> State<R> {
        let value = self
            .value
            .unwrap_or_else(|| StateValue::new(self.name.clone()));
        State {
            name: self.name,
            value,
            enter: self.enter,
            exit: self.exit,
            after: self.after,
        }
    }
}

impl<R: Record> From<&str> for StateBuilder<R> {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl<R: Record> From<String> for StateBuilder<R> {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Ticket;

    #[test]
    fn value_defaults_to_name() {
        let state: State<Ticket> = StateBuilder::new("needs_attention").build();

        assert_eq!(state.name(), "needs_attention");
        assert_eq!(state.value(), "needs_attention");
        assert!(state.enter_action().is_none());
        assert!(state.exit_action().is_none());
        assert!(state.after_actions().is_empty());
    }

    #[test]
    fn custom_value_is_kept() {
        let state: State<Ticket> = StateBuilder::new("read").value("READ").build();

        assert_eq!(state.name(), "read");
        assert_eq!(state.value(), "READ");
    }

    #[test]
    fn after_actions_keep_declared_order() {
        let state: State<Ticket> = StateBuilder::new("read")
            .enter("read_enter")
            .exit(ActionRef::effect(|t: &mut Ticket| t.journal.push("exit".into())))
            .after("read_after_first")
            .after_all(["read_after_second", "read_after_third"])
            .build();

        let labels: Vec<_> = state.after_actions().iter().map(ActionRef::label).collect();
        assert_eq!(
            labels,
            vec!["read_after_first", "read_after_second", "read_after_third"]
        );
        assert_eq!(state.enter_action().map(ActionRef::label), Some("read_enter"));
        assert_eq!(state.exit_action().map(ActionRef::label), Some("<inline>"));
    }
}
